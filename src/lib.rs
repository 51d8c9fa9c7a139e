// Core layer - shared types and configuration
pub mod core;

// Features layer - store, weather, conversation
pub mod features;

// Application layer
pub mod chat_handler;
pub mod commands;

// HTTP layer
pub mod server;

#[cfg(test)]
pub(crate) mod test_support;

pub use core::Config;

pub use chat_handler::ChatHandler;
pub use commands::{classify, ChatContext, Intent};
pub use features::{
    // Conversation
    Conversation, QuestionAnswerer,
    // Store
    DataStore, PersistedState, Preferences, Reminder, StoreError,
    // Weather
    get_weather, OpenWeatherClient, WeatherOutcome, WeatherProvider,
};
