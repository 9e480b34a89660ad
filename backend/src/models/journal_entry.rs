use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub text: String,
    pub mood: Mood,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "journal_mood")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Excited,
    Stressed,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Neutral,
        Mood::Excited,
        Mood::Stressed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
            Mood::Excited => "Excited",
            Mood::Stressed => "Stressed",
        }
    }

    /// Comma-separated list of accepted mood names, in declaration order.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(Mood::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = EntryValidationError;

    /// Case-sensitive: `"happy"` is not a mood.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or(EntryValidationError::InvalidMood)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Both text and mood must be non-empty strings")]
    MissingFields,

    #[error("Invalid mood. Must be one of: {}", Mood::allowed_list())]
    InvalidMood,
}

/// The validated `{text, mood}` pair accepted by create and update.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewJournalEntry {
    #[validate(length(min = 1, message = "text must not be blank"))]
    pub text: String,
    pub mood: Mood,
}

impl NewJournalEntry {
    pub fn new(text: &str, mood: Mood) -> Result<Self, EntryValidationError> {
        let entry = Self {
            text: text.trim().to_string(),
            mood,
        };
        entry
            .validate()
            .map_err(|_| EntryValidationError::MissingFields)?;
        Ok(entry)
    }

    /// Validate a raw JSON request body. Field checks run before the mood lookup,
    /// so a body with blank text and a bogus mood reports the missing field.
    pub fn from_json(body: &Value) -> Result<Self, EntryValidationError> {
        let fields = body.as_object().ok_or(EntryValidationError::NotAnObject)?;

        let (Some(text), Some(mood)) = (
            non_blank_str(fields.get("text")),
            non_blank_str(fields.get("mood")),
        ) else {
            return Err(EntryValidationError::MissingFields);
        };

        Self::new(text, mood.parse()?)
    }
}

fn non_blank_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty() && !s.contains('\0'))
}
