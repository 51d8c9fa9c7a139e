//! Hosted extractive question-answering model client
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial inference-endpoint client with startup probe

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::Config;

use super::ASSISTANT_CONTEXT;

/// Model output: extracted span and its confidence
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QaAnswer {
    pub answer: String,
    pub score: f64,
}

#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    async fn answer(&self, question: &str, context: &str) -> Result<QaAnswer>;
}

#[derive(Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
}

/// Endpoints answer with either one object or a ranked list
#[derive(Deserialize)]
#[serde(untagged)]
enum QaResponse {
    Single(QaAnswer),
    Ranked(Vec<QaAnswer>),
}

#[derive(Debug, Clone)]
pub struct HttpQuestionAnswerer {
    http: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl HttpQuestionAnswerer {
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            token,
        }
    }
}

#[async_trait]
impl QuestionAnswerer for HttpQuestionAnswerer {
    async fn answer(&self, question: &str, context: &str) -> Result<QaAnswer> {
        let mut request = self.http.post(&self.url).json(&QaRequest {
            inputs: QaInputs { question, context },
        });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("QA model returned HTTP {status}"));
        }

        match response.json::<QaResponse>().await? {
            QaResponse::Single(answer) => Ok(answer),
            QaResponse::Ranked(answers) => answers
                .into_iter()
                .next()
                .ok_or_else(|| anyhow!("QA model returned no answers")),
        }
    }
}

/// Build and probe the configured model.
///
/// Returns `None` (simple mode) when no endpoint is configured or the probe
/// fails. Never retried afterwards.
pub async fn init_question_answerer(config: &Config) -> Option<Arc<dyn QuestionAnswerer>> {
    let Some(url) = config.qa_model_url.as_deref() else {
        warn!("QA model not configured, running in simple mode");
        return None;
    };

    let model = HttpQuestionAnswerer::new(url, config.qa_model_token.clone());
    match model.answer("sen kimsin", ASSISTANT_CONTEXT).await {
        Ok(_) => {
            info!("🧠 QA model ready at {url}");
            Some(Arc::new(model))
        }
        Err(e) => {
            warn!("QA model could not be loaded ({e}), running in simple mode");
            None
        }
    }
}
