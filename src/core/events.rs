use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// StatusEventType defines the kind of status line emitted by the catalog
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum StatusEventType {
    MarkedRead,
    Rated,
    NotFound,
    Imported,
    ImportFailed,
    MalformedLine,
}

// StatusEvent abstracts one human-readable status line and its context
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StatusEvent {
    pub event_id: String,
    pub kind: StatusEventType,
    pub key: Option<String>,
    pub message: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl StatusEvent {
    pub fn marked_read(title: &str) -> Self {
        Self::build(StatusEventType::MarkedRead, Some(title), format!("{} marked as read.", title))
    }

    pub fn rated(title: &str, rating: i32) -> Self {
        Self::build(StatusEventType::Rated, Some(title), format!("{} rated {}", title, rating))
    }

    pub fn not_found(key: &str) -> Self {
        Self::build(StatusEventType::NotFound, Some(key), "Book not found.".to_string())
    }

    pub fn imported(path: &str) -> Self {
        Self::build(StatusEventType::Imported, Some(path), "Books added from file.".to_string())
    }

    pub fn import_failed(path: &str) -> Self {
        Self::build(StatusEventType::ImportFailed, Some(path), "Error reading the file.".to_string())
    }

    pub fn malformed_line(path: &str, line_no: usize, aborted: bool) -> Self {
        let message = if aborted {
            format!("Malformed line {}, import stopped.", line_no)
        } else {
            format!("Skipped malformed line {}.", line_no)
        };
        Self::build(StatusEventType::MalformedLine, Some(path), message)
    }

    fn build(kind: StatusEventType, key: Option<&str>, message: String) -> StatusEvent {
        StatusEvent {
            event_id: Uuid::new_v4().to_string(),
            kind,
            key: key.map(str::to_string),
            message,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Display for StatusEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
