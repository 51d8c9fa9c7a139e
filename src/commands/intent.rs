//! Keyword-rule utterance classification
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use serde::Serialize;

/// The single purpose assigned to an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Weather,
    Time,
    Date,
    AddReminder,
    ListReminders,
    SetDefaultCity,
    Conversation,
}

pub const ADD_REMINDER_MARKER: &str = "hatırlatıcı ekle";

/// Ordered rules; the first rule with a contained marker decides.
/// Anything unmatched is [`Intent::Conversation`].
pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (Intent::Weather, &["hava durumu"]),
    (Intent::Time, &["saat kaç", "saat"]),
    (Intent::Date, &["tarih", "günlerden ne"]),
    (Intent::AddReminder, &[ADD_REMINDER_MARKER]),
    (Intent::ListReminders, &["hatırlatıcılarım", "hatırlatıcılar"]),
    (Intent::SetDefaultCity, &["varsayılan şehir"]),
];

/// Classify an already lowercased and trimmed message
pub fn classify(input: &str) -> Intent {
    INTENT_RULES
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| input.contains(marker)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Conversation)
}
