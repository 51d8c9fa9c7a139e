//! Intent handler registry
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Keyed by `Intent` instead of command name
//! - 1.0.0: Initial implementation for handler dispatch

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::IntentHandler;
use super::intent::Intent;

/// Registry mapping intents to handlers
///
/// A handler is registered under every intent it declares. Registering a
/// second handler for the same intent replaces the first.
#[derive(Clone)]
pub struct IntentRegistry {
    handlers: HashMap<Intent, Arc<dyn IntentHandler>>,
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry with every built-in handler
    pub fn with_default_handlers() -> Self {
        let mut registry = Self::new();
        for handler in super::handlers::create_all_handlers() {
            registry.register(handler);
        }
        registry
    }

    pub fn register(&mut self, handler: Arc<dyn IntentHandler>) {
        for intent in handler.intents() {
            self.handlers.insert(*intent, Arc::clone(&handler));
        }
    }

    pub fn get(&self, intent: Intent) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(&intent).cloned()
    }

    pub fn contains(&self, intent: Intent) -> bool {
        self.handlers.contains_key(&intent)
    }

    /// Number of registered intents (not unique handlers)
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
