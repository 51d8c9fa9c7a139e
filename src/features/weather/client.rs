//! OpenWeatherMap client
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Typed payload and errors, provider trait for injection
//! - 1.0.0: Initial current-weather lookup

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Current conditions for a city as reported by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub description: String,
    /// Kept as the provider's JSON number so it prints the way it arrived
    pub temperature: serde_json::Number,
}

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Weather provider returned HTTP {0}")]
    Status(u16),

    #[error("Weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected weather payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Weather payload has no description")]
    MissingDescription,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

#[derive(Debug, Deserialize)]
struct OpenWeatherBody {
    main: OpenWeatherMain,
    weather: Vec<OpenWeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: serde_json::Number,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    description: String,
}

/// Metric, Turkish-language lookups against the current-weather endpoint
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        debug!("Requesting weather for {city}");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "tr"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let body: OpenWeatherBody = serde_json::from_slice(&bytes)?;
        let description = body
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or(WeatherError::MissingDescription)?;

        Ok(WeatherReport {
            city: city.to_string(),
            description,
            temperature: body.main.temp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_stub, unreachable_url};
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;

    async fn echo_weather(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        // Echo the query so the test can see what was sent
        Json(serde_json::json!({
            "main": {"temp": 21.5},
            "weather": [{"description": format!(
                "{}|{}|{}|{}",
                params["q"], params["appid"], params["units"], params["lang"]
            )}],
        }))
    }

    #[tokio::test]
    async fn test_success_parses_payload_and_sends_query() {
        let base = spawn_stub(Router::new().route("/weather", get(echo_weather))).await;
        let client = OpenWeatherClient::new(format!("{base}/weather"), "secret");

        let report = client.current("Ankara").await.unwrap();
        assert_eq!(report.city, "Ankara");
        assert_eq!(report.description, "Ankara|secret|metric|tr");
        assert_eq!(report.temperature.to_string(), "21.5");
    }

    #[tokio::test]
    async fn test_integer_temperature_keeps_its_form() {
        let app = Router::new().route(
            "/weather",
            get(|| async {
                Json(serde_json::json!({"main": {"temp": 7}, "weather": [{"description": "açık"}]}))
            }),
        );
        let base = spawn_stub(app).await;
        let client = OpenWeatherClient::new(format!("{base}/weather"), "k");

        let report = client.current("Kars").await.unwrap();
        assert_eq!(report.temperature.to_string(), "7");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let app = Router::new().route(
            "/weather",
            get(|| async { (StatusCode::NOT_FOUND, Json(serde_json::json!({"cod": "404"}))) }),
        );
        let base = spawn_stub(app).await;
        let client = OpenWeatherClient::new(format!("{base}/weather"), "k");

        let err = client.current("Atlantis").await.unwrap_err();
        assert!(matches!(err, WeatherError::Status(404)));
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let app = Router::new().route("/weather", get(|| async { "not json" }));
        let base = spawn_stub(app).await;
        let client = OpenWeatherClient::new(format!("{base}/weather"), "k");

        assert!(matches!(
            client.current("Ankara").await,
            Err(WeatherError::Payload(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_conditions() {
        let app = Router::new().route(
            "/weather",
            get(|| async { Json(serde_json::json!({"main": {"temp": 1}, "weather": []})) }),
        );
        let base = spawn_stub(app).await;
        let client = OpenWeatherClient::new(format!("{base}/weather"), "k");

        assert!(matches!(
            client.current("Ankara").await,
            Err(WeatherError::MissingDescription)
        ));
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let client = OpenWeatherClient::new(unreachable_url().await, "k");
        assert!(matches!(
            client.current("Ankara").await,
            Err(WeatherError::Request(_))
        ));
    }
}
