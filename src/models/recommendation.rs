use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Field the service uses to explain an empty result
pub const MESSAGE_FIELD: &str = "data";

const TITLE_KEYS: &[&str] = &["BookName", "book_name", "Book-Title"];
const AUTHOR_KEYS: &[&str] = &["Author", "author", "Book-Author"];
const YEAR_KEYS: &[&str] = &["Year", "year_of_publication", "Year-Of-Publication"];
const PUBLISHER_KEYS: &[&str] = &["Publisher", "publisher"];
const ISBN_KEY: &str = "ISBN";

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_YEAR: &str = "Unknown Year";
pub const UNKNOWN_PUBLISHER: &str = "Unknown Publisher";

/// One recommended book as returned by the service.
///
/// The service does not commit to a schema: depending on which of its
/// algorithms produced the record, the same field may be spelled `BookName`,
/// `book_name` or `Book-Title`. Records are kept as raw JSON objects and
/// resolved at render time through [`RecommendationRecord::display`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RecommendationRecord(Map<String, Value>);

impl RecommendationRecord {
    /// Resolves the first candidate key holding a truthy value
    pub fn resolve(&self, candidates: &[&str]) -> Option<String> {
        candidates
            .iter()
            .find_map(|key| self.0.get(*key).and_then(truthy_text))
    }

    /// Normalized display fields, with placeholders for anything missing
    pub fn display(&self) -> BookDisplay {
        BookDisplay {
            title: self.resolve_or(TITLE_KEYS, UNKNOWN_TITLE),
            author: self.resolve_or(AUTHOR_KEYS, UNKNOWN_AUTHOR),
            year: self.resolve_or(YEAR_KEYS, UNKNOWN_YEAR),
            publisher: self.resolve_or(PUBLISHER_KEYS, UNKNOWN_PUBLISHER),
        }
    }

    /// Key used to tell cards apart: the record's ISBN, else its position
    pub fn render_key(&self, index: usize) -> String {
        self.resolve(&[ISBN_KEY])
            .unwrap_or_else(|| index.to_string())
    }

    fn resolve_or(&self, candidates: &[&str], placeholder: &str) -> String {
        self.resolve(candidates)
            .unwrap_or_else(|| placeholder.to_string())
    }
}

/// Display fields of a recommendation card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookDisplay {
    pub title: String,
    pub author: String,
    pub year: String,
    pub publisher: String,
}

/// Body shapes the recommendation service is known to answer with.
///
/// Variant order matters: serde tries them top to bottom, so an array of
/// objects is always a record list and an object is always a message carrier.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RecommendationResponse {
    Records(Vec<RecommendationRecord>),
    Message(Map<String, Value>),
    Unrecognized(Value),
}

impl RecommendationResponse {
    /// Explanation text carried by a message object, if it holds a truthy one
    pub fn message(&self) -> Option<String> {
        match self {
            RecommendationResponse::Message(fields) => {
                fields.get(MESSAGE_FIELD).and_then(truthy_text)
            }
            _ => None,
        }
    }
}

/// Renders a JSON value as display text, or `None` when it is falsy
/// (`null`, `false`, `0`, `""`).
pub fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(number_text(n)),
        other => Some(other.to_string()),
    }
}

/// Whole floats print without a fraction: `1988.0` shows as `1988`
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}
