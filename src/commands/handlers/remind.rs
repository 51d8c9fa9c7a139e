//! Reminder handlers
//!
//! Handles: add reminder, list reminders
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Reminders live in the JSON document, stamped at creation
//! - 1.0.0: Initial add/list handlers

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};

use crate::commands::context::ChatContext;
use crate::commands::handler::IntentHandler;
use crate::commands::intent::{Intent, ADD_REMINDER_MARKER};
use crate::core::ChatResponse;
use crate::features::{PersistedState, Reminder};

/// Handler for reminder-related intents
pub struct RemindHandler;

#[async_trait]
impl IntentHandler for RemindHandler {
    fn intents(&self) -> &'static [Intent] {
        &[Intent::AddReminder, Intent::ListReminders]
    }

    async fn handle(
        &self,
        ctx: &ChatContext,
        intent: Intent,
        input: &str,
        state: &mut PersistedState,
    ) -> Result<ChatResponse> {
        match intent {
            Intent::AddReminder => self.handle_add(ctx, input, state).await,
            _ => Ok(Self::handle_list(state)),
        }
    }
}

impl RemindHandler {
    /// Store the text left after removing the marker; no-op when nothing is left
    async fn handle_add(
        &self,
        ctx: &ChatContext,
        input: &str,
        state: &mut PersistedState,
    ) -> Result<ChatResponse> {
        let text = Self::reminder_text(input);
        if text.is_empty() {
            debug!("Add-reminder without text, ignoring");
            return Ok(ChatResponse::default());
        }

        let reminder = Reminder::new(text.clone(), (ctx.clock)());
        info!("Adding reminder '{}' at {}", reminder.text, reminder.date);
        state.reminders.push(reminder);
        ctx.store.save(state).await?;

        Ok(ChatResponse::text(format!("🔔 Hatırlatıcı eklendi: '{text}'")))
    }

    fn handle_list(state: &PersistedState) -> ChatResponse {
        if state.reminders.is_empty() {
            return ChatResponse::text("📝 Hiç hatırlatıcınız yok");
        }

        let lines: Vec<String> = state
            .reminders
            .iter()
            .map(|r| format!("• {} ({})", r.text, r.date))
            .collect();
        ChatResponse::text(format!("📝 Hatırlatıcılarınız:\n{}", lines.join("\n")))
    }

    /// Message with every marker occurrence removed, trimmed
    fn reminder_text(input: &str) -> String {
        input.replace(ADD_REMINDER_MARKER, "").trim().to_string()
    }
}
