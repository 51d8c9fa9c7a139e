//! Time and date handlers
//!
//! Handles: time, date
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;

use crate::commands::context::ChatContext;
use crate::commands::handler::IntentHandler;
use crate::commands::intent::Intent;
use crate::core::ChatResponse;
use crate::features::PersistedState;

pub const TIME_FORMAT: &str = "%H:%M";
pub const DATE_FORMAT: &str = "%d %B %Y, %A";

pub struct ClockHandler;

#[async_trait]
impl IntentHandler for ClockHandler {
    fn intents(&self) -> &'static [Intent] {
        &[Intent::Time, Intent::Date]
    }

    async fn handle(
        &self,
        ctx: &ChatContext,
        intent: Intent,
        _input: &str,
        _state: &mut PersistedState,
    ) -> Result<ChatResponse> {
        let now = (ctx.clock)();

        let reply = if intent == Intent::Date {
            let date = now.format(DATE_FORMAT).to_string();
            ChatResponse {
                response: format!("📅 Bugün {date}"),
                date: Some(date),
                ..Default::default()
            }
        } else {
            let time = now.format(TIME_FORMAT).to_string();
            ChatResponse {
                response: format!("⌚ Şu an saat {time}"),
                time: Some(time),
                ..Default::default()
            }
        };

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_context;

    #[tokio::test]
    async fn test_time_reply() {
        let (ctx, _dir) = test_context(None);
        let reply = ClockHandler
            .handle(&ctx, Intent::Time, "saat kaç", &mut PersistedState::default())
            .await
            .unwrap();

        assert_eq!(reply.response, "⌚ Şu an saat 14:07");
        assert_eq!(reply.time.as_deref(), Some("14:07"));
        assert!(reply.date.is_none());
    }

    #[tokio::test]
    async fn test_date_reply() {
        let (ctx, _dir) = test_context(None);
        let reply = ClockHandler
            .handle(&ctx, Intent::Date, "tarih", &mut PersistedState::default())
            .await
            .unwrap();

        assert_eq!(reply.response, "📅 Bugün 17 May 2024, Friday");
        assert_eq!(reply.date.as_deref(), Some("17 May 2024, Friday"));
        assert!(reply.time.is_none());
    }
}
