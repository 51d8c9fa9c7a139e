//! Chat message dispatch
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Reminders attached to every reply
//! - 1.0.0: Initial load, classify and dispatch flow

use crate::commands::intent::classify;
use crate::commands::{ChatContext, IntentRegistry};
use crate::core::{ChatRequest, ChatResponse};
use anyhow::{anyhow, Result};
use log::{debug, info};
use uuid::Uuid;

/// Entry point for one chat message: load state, classify, dispatch.
#[derive(Clone)]
pub struct ChatHandler {
    ctx: ChatContext,
    registry: IntentRegistry,
}

impl ChatHandler {
    pub fn new(ctx: ChatContext) -> Self {
        Self::with_registry(ctx, IntentRegistry::with_default_handlers())
    }

    pub fn with_registry(ctx: ChatContext, registry: IntentRegistry) -> Self {
        Self { ctx, registry }
    }

    pub fn context(&self) -> &ChatContext {
        &self.ctx
    }

    pub async fn handle_message(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let request_id = Uuid::new_v4();
        let input = request.normalized();

        // A corrupt data file fails the whole request
        let mut state = self.ctx.store.load().await?;

        let intent = classify(&input);
        info!("[{request_id}] 💬 Message ({} chars) classified as {intent:?}", input.len());

        let handler = self
            .registry
            .get(intent)
            .ok_or_else(|| anyhow!("No handler registered for {intent:?}"))?;

        let mut reply = handler.handle(&self.ctx, intent, &input, &mut state).await?;
        reply.reminders = state.reminders;

        debug!("[{request_id}] 📤 Reply: {}", reply.response);
        Ok(reply)
    }
}
