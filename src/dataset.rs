//! Dataset holder
//!
//! The read-only in-memory collection of Person records serving all queries.
//! Populated once at startup from the literal seed below; there is no write
//! path and no external store.

use serde::Serialize;

/// A person with an ordered list of quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub quotes: Vec<String>,
}

/// Ordered, immutable collection of Person records.
///
/// The inner vector is private: callers only get shared references, so the
/// collection cannot be mutated through this type after construction.
pub struct Dataset {
    people: Vec<Person>,
}

impl Dataset {
    /// Build the dataset from the seed records.
    pub fn seed() -> Self {
        Self {
            people: seed_people(),
        }
    }

    /// The complete ordered sequence of records.
    pub fn all(&self) -> &[Person] {
        &self.people
    }

    /// Linear lookup by id. An absent id is a value, not an error.
    pub fn find_by_id(&self, id: u64) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }
}

fn person(id: u64, name: &str, quotes: &[&str]) -> Person {
    Person {
        id,
        name: name.to_string(),
        quotes: quotes.iter().map(ToString::to_string).collect(),
    }
}

fn seed_people() -> Vec<Person> {
    vec![
        person(
            1,
            "Jiddu Krishnamurti",
            &[
                "The ability to observe without evaluating is the highest form of intelligence.",
                "Truth is a pathless land.",
            ],
        ),
        person(
            2,
            "Osho",
            &[
                "Don’t be unnecessarily burdened by history. Go on cutting the dead branches.",
                "Experience life in all possible ways — good-bad, bitter-sweet, dark-light, summer-winter. Experience all the dualities.",
            ],
        ),
        person(
            3,
            "Sadhguru",
            &[
                "Do not look up to anything; do not look down on anything. Then you will see all there is to see.",
                "The sign of intelligence is that you are constantly wondering. Idiots are always dead sure about every damn thing they are doing in their life.",
            ],
        ),
        person(
            4,
            "Paramahansa Yogananda",
            &[
                "The happiness of ones own heart alone cannot satisfy the soul; one must embrace the joys of others.",
                "The season of failure is the best time for sowing the seeds of success.",
            ],
        ),
        person(
            5,
            "Ramana Maharshi",
            &[
                "Your own Self-Realization is the greatest service you can render the world.",
                "Silence is the true language of the soul; it speaks to us beyond words.",
            ],
        ),
        person(
            6,
            "Swami Vivekananda",
            &[
                "Arise, awake, and stop not until the goal is reached.",
                "In a conflict between the heart and the brain, follow your heart.",
            ],
        ),
        person(
            7,
            "Rabindranath Tagore",
            &[
                "Let your life lightly dance on the edges of Time like dew on the tip of a leaf.",
                "You cant cross the sea merely by standing and staring at the water.",
            ],
        ),
        person(
            8,
            "A. P. J. Abdul Kalam",
            &[
                "Dream, dream, dream. Dreams transform into thoughts, and thoughts result in action.",
                "Learning gives creativity, creativity leads to thinking, thinking provides knowledge, and knowledge makes you great.",
            ],
        ),
        person(
            9,
            "Sri Sri Ravi Shankar",
            &[
                "The moment you start giving, you start receiving.",
                "Meditation is not what you think; it’s beyond what you think.",
            ],
        ),
        person(
            10,
            "Sardar Vallabhbhai Patel",
            &[
                "Manpower without unity is not a strength unless it is harmonized and united properly, then it becomes a spiritual power.",
                "Every citizen of India must remember that he is an Indian and he has every right in this country but with certain duties.",
            ],
        ),
    ]
}
