//! Intent handler trait
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Handlers receive the loaded document and return a reply
//! - 1.0.0: Initial implementation for modular intent handling

use anyhow::Result;
use async_trait::async_trait;

use super::context::ChatContext;
use super::intent::Intent;
use crate::core::ChatResponse;
use crate::features::PersistedState;

/// Trait for intent handlers
///
/// Each handler serves one or more intents. It may mutate `state`, and must
/// save it through `ctx.store` when it does. The caller fills in the
/// reminders list of the returned reply.
///
/// # Example
///
/// ```ignore
/// pub struct GreetHandler;
///
/// #[async_trait]
/// impl IntentHandler for GreetHandler {
///     fn intents(&self) -> &'static [Intent] {
///         &[Intent::Conversation]
///     }
///
///     async fn handle(
///         &self,
///         _ctx: &ChatContext,
///         _intent: Intent,
///         _input: &str,
///         _state: &mut PersistedState,
///     ) -> Result<ChatResponse> {
///         Ok(ChatResponse::text("Merhaba!"))
///     }
/// }
/// ```
#[async_trait]
pub trait IntentHandler: Send + Sync {
    /// Intent(s) this handler serves
    fn intents(&self) -> &'static [Intent];

    /// Produce the reply for a classified, normalized message
    async fn handle(
        &self,
        ctx: &ChatContext,
        intent: Intent,
        input: &str,
        state: &mut PersistedState,
    ) -> Result<ChatResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn IntentHandler) {}
}
