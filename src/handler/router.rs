//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and the terminal error boundary.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::header::{HeaderValue, CONTENT_LENGTH};
use hyper::{Method, Request, Response, StatusCode};

use crate::config::{AppState, HttpConfig};
use crate::dataset::Dataset;
use crate::handler::people;
use crate::http::response::{build_405_response, build_options_response, error_response};
use crate::logger;

const COLLECTION_PATH: &str = "/arjun";

/// Main entry point for HTTP request handling.
///
/// Always produces a response: any error escaping a route handler is logged
/// here and converted into a generic 500. This boundary is the only recovery
/// mechanism in the service.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = format!("{:?}", req.version())
        .trim_start_matches("HTTP/")
        .to_string();
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");
    let is_head = method == Method::HEAD;

    let mut response = match dispatch(
        &method,
        &path,
        state.dataset(),
        state.config.http.enable_cors,
    ) {
        Ok(response) => response,
        Err(e) => {
            logger::log_error(&format!("Unhandled error for {method} {path}: {e}"));
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    };

    finish_response(&mut response, is_head, &state.config.http);

    if state.config.logging.access_log {
        let mut entry =
            logger::AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = http_version;
        entry.status = response.status().as_u16();
        entry.body_bytes = body_size(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a request to its handler.
///
/// GET and HEAD share routes; OPTIONS answers the CORS preflight; everything
/// else is refused with 405. Unmatched paths get a generic JSON 404.
fn dispatch(
    method: &Method,
    path: &str,
    dataset: &Dataset,
    enable_cors: bool,
) -> Result<Response<Full<Bytes>>, serde_json::Error> {
    match *method {
        Method::GET | Method::HEAD => {}
        Method::OPTIONS => return Ok(build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            return Ok(build_405_response());
        }
    }

    let path = normalize_path(path);
    if path == COLLECTION_PATH {
        return people::list_people(dataset);
    }
    if let Some(id_param) = path.strip_prefix("/arjun/") {
        if !id_param.is_empty() && !id_param.contains('/') {
            return people::get_person(dataset, id_param);
        }
    }

    Ok(error_response(StatusCode::NOT_FOUND, "Not Found"))
}

/// Trim trailing slashes so `/arjun/` matches the collection route, the way
/// express routes with strict matching disabled.
fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Apply the headers shared by every route, and strip the body for HEAD
/// requests while keeping the entity headers intact.
fn finish_response(response: &mut Response<Full<Bytes>>, is_head: bool, http_config: &HttpConfig) {
    if http_config.enable_cors {
        response
            .headers_mut()
            .insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    }
    if let Ok(server_name) = HeaderValue::from_str(&http_config.server_name) {
        response.headers_mut().insert("Server", server_name);
    }
    if is_head {
        let len = body_size(response);
        response
            .headers_mut()
            .insert(CONTENT_LENGTH, HeaderValue::from(len));
        *response.body_mut() = Full::new(Bytes::new());
    }
}

fn body_size(response: &Response<Full<Bytes>>) -> u64 {
    response.body().size_hint().exact().unwrap_or(0)
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
