//! # Features
//!
//! Domain features behind the chat endpoint.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0

pub mod conversation;
pub mod store;
pub mod weather;

pub use conversation::{Conversation, QuestionAnswerer};
pub use store::{
    DataStore, PersistedState, Preferences, Reminder, StoreError, REMINDER_DATE_FORMAT,
};
pub use weather::{get_weather, OpenWeatherClient, WeatherOutcome, WeatherProvider};

/// Feature name and module version, for the startup banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureInfo {
    pub name: &'static str,
    pub version: &'static str,
}

pub fn get_features() -> Vec<FeatureInfo> {
    vec![
        FeatureInfo {
            name: "Persistence Store",
            version: "1.1.0",
        },
        FeatureInfo {
            name: "Weather",
            version: "1.1.0",
        },
        FeatureInfo {
            name: "Conversation Fallback",
            version: "1.1.0",
        },
    ]
}

pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
