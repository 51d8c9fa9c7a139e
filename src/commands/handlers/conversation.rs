//! Free-form question handler
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

pub struct ConversationHandler;

#[async_trait]
impl IntentHandler for ConversationHandler {
    fn intents(&self) -> &'static [Intent] {
        &[Intent::Conversation]
    }

    async fn handle(
        &self,
        ctx: &ChatContext,
        _intent: Intent,
        input: &str,
        state: &mut PersistedState,
    ) -> Result<ChatResponse> {
        let answer = ctx
            .conversation
            .respond(input, &state.preferences.default_city)
            .await;
        Ok(ChatResponse::text(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::conversation::{FALLBACK_ANSWER, GREETING};
    use crate::test_support::test_context;

    #[tokio::test]
    async fn test_knowledge_base_answer() {
        let (ctx, _dir) = test_context(None);
        let reply = ConversationHandler
            .handle(&ctx, Intent::Conversation, "merhaba", &mut PersistedState::default())
            .await
            .unwrap();
        assert_eq!(reply.response, GREETING);
    }

    #[tokio::test]
    async fn test_unknown_question_in_simple_mode() {
        let (ctx, _dir) = test_context(None);
        let reply = ConversationHandler
            .handle(&ctx, Intent::Conversation, "pi sayısı kaç", &mut PersistedState::default())
            .await
            .unwrap();
        assert_eq!(reply.response, FALLBACK_ANSWER);
    }
}
