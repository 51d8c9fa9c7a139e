//! # Command System
//!
//! Utterance classification and per-intent handling.
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Keyword intents replace named commands
//! - 2.0.0: Modular handler infrastructure (handler trait, context, registry)
//! - 1.0.0: Initial reorganization with modular command structure

pub mod context;
pub mod handler;
pub mod handlers;
pub mod intent;
pub mod registry;

pub use crate::chat_handler::ChatHandler;

pub use context::ChatContext;
pub use handler::IntentHandler;
pub use intent::{classify, Intent, INTENT_RULES};
pub use registry::IntentRegistry;
