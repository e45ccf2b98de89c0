//! People endpoint handlers
//!
//! Business logic for the two read endpoints: the full collection and a
//! single record looked up by id.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::dataset::Dataset;
use crate::http::response::{error_response, json_response};

/// `GET /arjun` — serialize the full ordered collection.
pub fn list_people(dataset: &Dataset) -> Result<Response<Full<Bytes>>, serde_json::Error> {
    json_response(StatusCode::OK, &dataset.all())
}

/// `GET /arjun/:id` — serialize a single record.
///
/// The id segment is parsed as an unsigned base-10 integer. A failed parse
/// (non-numeric or negative input) matches no record, so it takes the same
/// not-found path as a well-formed absent id.
pub fn get_person(
    dataset: &Dataset,
    id_param: &str,
) -> Result<Response<Full<Bytes>>, serde_json::Error> {
    let person = id_param
        .parse::<u64>()
        .ok()
        .and_then(|id| dataset.find_by_id(id));

    match person {
        Some(person) => json_response(StatusCode::OK, person),
        // Error message kept for compatibility with existing clients.
        None => Ok(error_response(StatusCode::NOT_FOUND, "Book not found")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_person_known_id() {
        let dataset = Dataset::seed();
        let response = get_person(&dataset, "1").unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "{\"id\":1,\"name\":\"Jiddu Krishnamurti\",\"quotes\":[\"The ability to observe \
             without evaluating is the highest form of intelligence.\",\"Truth is a pathless \
             land.\"]}"
        );
    }

    #[tokio::test]
    async fn test_get_person_every_seeded_id() {
        let dataset = Dataset::seed();
        for id in 1..=10u64 {
            let response = get_person(&dataset, &id.to_string()).unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let parsed: serde_json::Value =
                serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(parsed["id"], id);
        }
    }

    #[tokio::test]
    async fn test_get_person_absent_id() {
        let dataset = Dataset::seed();
        let response = get_person(&dataset, "999").unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, r#"{"error":"Book not found"}"#);
    }

    #[tokio::test]
    async fn test_get_person_non_numeric_id() {
        let dataset = Dataset::seed();
        let response = get_person(&dataset, "abc").unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, r#"{"error":"Book not found"}"#);
    }

    #[tokio::test]
    async fn test_get_person_negative_and_zero_ids() {
        let dataset = Dataset::seed();
        for id_param in ["-5", "0", "-1"] {
            let response = get_person(&dataset, id_param).unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {id_param}");
        }
    }

    #[tokio::test]
    async fn test_list_people_returns_all() {
        let dataset = Dataset::seed();
        let response = list_people(&dataset).unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let parsed: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        let people = parsed.as_array().unwrap();
        assert_eq!(people.len(), 10);
        assert_eq!(people[0]["id"], 1);
        for person in people {
            assert!(!person["name"].as_str().unwrap().is_empty());
            assert!(!person["quotes"].as_array().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let dataset = Dataset::seed();
        let first = body_string(list_people(&dataset).unwrap()).await;
        let second = body_string(list_people(&dataset).unwrap()).await;
        assert_eq!(first, second);

        let first = body_string(get_person(&dataset, "3").unwrap()).await;
        let second = body_string(get_person(&dataset, "3").unwrap()).await;
        assert_eq!(first, second);
    }
}
