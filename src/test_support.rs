//! Shared test fixtures: loopback stub servers and a scripted handler context

use async_trait::async_trait;
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tempfile::TempDir;

use crate::commands::ChatContext;
use crate::features::weather::{WeatherError, WeatherProvider, WeatherReport};
use crate::features::{Conversation, DataStore};

/// Serve `app` on an ephemeral loopback port and return its base URL
pub(crate) async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// URL of a loopback port nothing listens on
pub(crate) async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

pub(crate) fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .unwrap()
        .and_hms_opt(14, 7, 30)
        .unwrap()
}

/// Reports "parçalı bulutlu, 18.5" for every city, or fails with `status`
pub(crate) struct StubWeather {
    pub status: Option<u16>,
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        if let Some(status) = self.status {
            return Err(WeatherError::Status(status));
        }
        Ok(WeatherReport {
            city: city.to_string(),
            description: "parçalı bulutlu".to_string(),
            temperature: serde_json::Number::from_f64(18.5).unwrap(),
        })
    }
}

/// Simple-mode context over a fresh temp data file and a fixed clock
pub(crate) fn test_context(weather_status: Option<u16>) -> (ChatContext, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ChatContext::new(
        DataStore::new(temp_dir.path().join("chatbot_data.json")),
        Arc::new(StubWeather {
            status: weather_status,
        }),
        Conversation::simple(),
    )
    .with_clock(fixed_now);
    (ctx, temp_dir)
}
