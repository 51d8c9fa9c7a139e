//! Shared context for intent handlers
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Inject weather provider, conversation capability and clock
//! - 1.0.0: Initial implementation with core shared state

use std::sync::Arc;

use crate::core::{local_now, Clock, Config};
use crate::features::{Conversation, DataStore, OpenWeatherClient, QuestionAnswerer, WeatherProvider};

/// Services every handler can reach:
/// - DataStore for the reminders/preferences document
/// - WeatherProvider for city lookups
/// - Conversation for knowledge base and QA model answers
/// - Clock for timestamps
#[derive(Clone)]
pub struct ChatContext {
    pub store: DataStore,
    pub weather: Arc<dyn WeatherProvider>,
    pub conversation: Conversation,
    pub clock: Clock,
}

impl ChatContext {
    pub fn new(
        store: DataStore,
        weather: Arc<dyn WeatherProvider>,
        conversation: Conversation,
    ) -> Self {
        Self {
            store,
            weather,
            conversation,
            clock: local_now,
        }
    }

    /// Wire the production services described by `config`
    pub fn from_config(config: &Config, model: Option<Arc<dyn QuestionAnswerer>>) -> Self {
        Self::new(
            DataStore::new(config.data_file.clone()),
            Arc::new(OpenWeatherClient::new(
                config.weather_api_url.clone(),
                config.weather_api_key.clone(),
            )),
            Conversation::new(model, config.qa_min_score),
        )
    }

    /// Replace the clock (fixed times in tests)
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}
