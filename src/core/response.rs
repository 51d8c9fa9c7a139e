//! Wire payloads for the chat endpoint
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Weather temperature and icon become nullable on provider failure
//! - 1.0.0: Initial request/response shapes

use serde::{Deserialize, Serialize};

use crate::features::store::Reminder;

/// Incoming `POST /chat` body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    /// Lowercased, trimmed form of the message used for classification
    pub fn normalized(&self) -> String {
        self.message.to_lowercase().trim().to_string()
    }
}

/// Structured weather block attached to weather replies
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeatherPayload {
    pub city: String,
    pub temperature: Option<String>,
    pub icon: Option<String>,
}

/// Outgoing chat reply, rebuilt for every request
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub reminders: Vec<Reminder>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weather: Option<WeatherPayload>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<String>,
}

impl ChatResponse {
    /// Reply carrying only response text
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ..Default::default()
        }
    }
}
