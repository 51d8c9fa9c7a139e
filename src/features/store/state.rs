//! Persisted document schema
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Validate reminders and preferences after deserializing
//! - 1.0.0: Initial reminders + preferences document

use chrono::{NaiveDateTime, ParseError};
use serde::{Deserialize, Serialize};

use super::StoreError;

/// Timestamp format stored on every reminder
pub const REMINDER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const DEFAULT_CITY: &str = "İstanbul";
pub const DEFAULT_THEME: &str = "light";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub text: String,
    pub date: String,
}

impl Reminder {
    /// Create a reminder stamped with the given local time
    pub fn new(text: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            text: text.into(),
            date: created_at.format(REMINDER_DATE_FORMAT).to_string(),
        }
    }

    pub fn created_at(&self) -> Result<NaiveDateTime, ParseError> {
        NaiveDateTime::parse_from_str(&self.date, REMINDER_DATE_FORMAT)
    }
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub default_city: String,
    /// Carried through saves; nothing reads it
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_city: DEFAULT_CITY.to_string(),
            theme: default_theme(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub reminders: Vec<Reminder>,
    pub preferences: Preferences,
}

impl PersistedState {
    /// Check invariants that serde alone cannot express
    pub fn validate(&self) -> Result<(), StoreError> {
        for (index, reminder) in self.reminders.iter().enumerate() {
            if reminder.text.trim().is_empty() {
                return Err(StoreError::Invalid(format!("reminder {index} has empty text")));
            }
            if reminder.created_at().is_err() {
                return Err(StoreError::Invalid(format!(
                    "reminder {index} has malformed date '{}'",
                    reminder.date
                )));
            }
        }

        if self.preferences.default_city.trim().is_empty() {
            return Err(StoreError::Invalid("default_city is empty".to_string()));
        }

        Ok(())
    }
}
