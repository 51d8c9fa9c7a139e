//! # Feature: Persistence Store
//!
//! Reminders and preferences kept in one JSON document on disk.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod state;
pub mod data_store;

use thiserror::Error;

pub use state::{
    PersistedState, Preferences, Reminder, DEFAULT_CITY, DEFAULT_THEME, REMINDER_DATE_FORMAT,
};
pub use data_store::DataStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse data file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid data file: {0}")]
    Invalid(String),
}
