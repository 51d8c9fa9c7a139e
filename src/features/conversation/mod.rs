//! # Feature: Conversation Fallback
//!
//! Answers free-form questions: knowledge base first, then the optional QA
//! model, then a fixed apology.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Model capability injected instead of a process-wide flag
//! - 1.0.0: Initial knowledge base + model fallback

pub mod knowledge_base;
pub mod qa_model;

use log::debug;
use std::sync::Arc;

pub use knowledge_base::{lookup, GREETING};
pub use qa_model::{init_question_answerer, HttpQuestionAnswerer, QaAnswer, QuestionAnswerer};

/// Fixed passage the model extracts answers from
pub const ASSISTANT_CONTEXT: &str =
    "Ben bir yardımcı chatbotum. Kullanıcılara günlük işlerinde yardım ediyorum.";

pub const FALLBACK_ANSWER: &str =
    "Üzgünüm, bu konuda yeterli bilgim yok. Başka nasıl yardımcı olabilirim?";

#[derive(Clone)]
pub struct Conversation {
    /// `None` is simple mode
    model: Option<Arc<dyn QuestionAnswerer>>,
    min_score: f64,
}

impl Conversation {
    pub fn new(model: Option<Arc<dyn QuestionAnswerer>>, min_score: f64) -> Self {
        Self { model, min_score }
    }

    /// Knowledge base and fallback only
    pub fn simple() -> Self {
        Self::new(None, crate::core::config::DEFAULT_QA_MIN_SCORE)
    }

    pub fn is_simple_mode(&self) -> bool {
        self.model.is_none()
    }

    pub async fn respond(&self, question: &str, default_city: &str) -> String {
        if let Some(answer) = lookup(question, default_city) {
            return answer;
        }

        if let Some(model) = &self.model {
            match model.answer(question, ASSISTANT_CONTEXT).await {
                Ok(result) if result.score > self.min_score => return result.answer,
                Ok(result) => debug!(
                    "QA answer '{}' below threshold ({:.3} <= {:.3})",
                    result.answer, result.score, self.min_score
                ),
                Err(e) => debug!("QA model failed: {e}"),
            }
        }

        FALLBACK_ANSWER.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedModel {
        score: Option<f64>,
        calls: AtomicUsize,
    }

    impl ScriptedModel {
        fn scoring(score: f64) -> Arc<Self> {
            Arc::new(Self {
                score: Some(score),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                score: None,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl QuestionAnswerer for ScriptedModel {
        async fn answer(&self, question: &str, context: &str) -> Result<QaAnswer> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(context, ASSISTANT_CONTEXT);
            match self.score {
                Some(score) => Ok(QaAnswer {
                    answer: format!("model: {question}"),
                    score,
                }),
                None => Err(anyhow!("inference backend down")),
            }
        }
    }

    #[tokio::test]
    async fn test_greeting_in_both_modes() {
        let model = ScriptedModel::scoring(0.99);
        let with_model = Conversation::new(Some(model.clone()), 0.3);

        assert_eq!(with_model.respond("merhaba", "Ankara").await, GREETING);
        assert_eq!(Conversation::simple().respond("merhaba", "Ankara").await, GREETING);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_confident_model_answer_used() {
        let conversation = Conversation::new(Some(ScriptedModel::scoring(0.31)), 0.3);
        assert_eq!(
            conversation.respond("sen ne işe yararsın", "Ankara").await,
            "model: sen ne işe yararsın"
        );
    }

    #[tokio::test]
    async fn test_threshold_is_exclusive() {
        let conversation = Conversation::new(Some(ScriptedModel::scoring(0.3)), 0.3);
        assert_eq!(conversation.respond("xyz", "Ankara").await, FALLBACK_ANSWER);
    }

    #[tokio::test]
    async fn test_model_error_falls_through() {
        let model = ScriptedModel::failing();
        let conversation = Conversation::new(Some(model.clone()), 0.3);

        assert_eq!(conversation.respond("xyz", "Ankara").await, FALLBACK_ANSWER);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_simple_mode_fallback() {
        let conversation = Conversation::simple();
        assert!(conversation.is_simple_mode());
        assert_eq!(conversation.respond("xyz", "Ankara").await, FALLBACK_ANSWER);
    }
}
