//! # Core Module
//!
//! Configuration, wire payloads and the clock shared by every feature.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add injectable clock
//! - 1.0.0: Initial creation with config and response modules

pub mod config;
pub mod response;

use chrono::{Local, NaiveDateTime};

pub use config::{Config, ConfigError};
pub use response::{ChatRequest, ChatResponse, WeatherPayload};

/// Source of "now" in server local time
pub type Clock = fn() -> NaiveDateTime;

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
