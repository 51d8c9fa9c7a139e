//! Per-intent handler implementations
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: ClockHandler and RemindHandler each cover two intents
//! - 1.0.0: Initial set of handlers

pub mod clock;
pub mod conversation;
pub mod preferences;
pub mod remind;
pub mod weather;

use std::sync::Arc;

use super::handler::IntentHandler;

/// Create all registered intent handlers
pub fn create_all_handlers() -> Vec<Arc<dyn IntentHandler>> {
    vec![
        Arc::new(weather::WeatherHandler),
        Arc::new(clock::ClockHandler),
        Arc::new(remind::RemindHandler),
        Arc::new(preferences::PreferencesHandler),
        Arc::new(conversation::ConversationHandler),
    ]
}
