//! Environment-driven service configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Add QA model endpoint, token and minimum score
//! - 1.0.0: Initial release with server, data file and weather settings

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATA_FILE: &str = "chatbot_data.json";
pub const DEFAULT_WEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
/// Placeholder key shipped with the service; the provider rejects it with 401.
pub const DEFAULT_WEATHER_API_KEY: &str = "YOUR_API_KEY";
pub const DEFAULT_QA_MIN_SCORE: f64 = 0.3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub weather_api_url: String,
    pub weather_api_key: String,
    /// Hosted question-answering endpoint. Unset means simple mode.
    pub qa_model_url: Option<String>,
    pub qa_model_token: Option<String>,
    /// Answers must score strictly above this to be used
    pub qa_min_score: f64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            weather_api_key: DEFAULT_WEATHER_API_KEY.to_string(),
            qa_model_url: None,
            qa_model_token: None,
            qa_min_score: DEFAULT_QA_MIN_SCORE,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let qa_min_score = match get("QA_MIN_SCORE") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|s| (0.0..=1.0).contains(s))
                .ok_or(ConfigError::Invalid {
                    key: "QA_MIN_SCORE",
                    value: raw,
                })?,
            None => defaults.qa_min_score,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            data_file: get("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            weather_api_url: get("WEATHER_API_URL").unwrap_or(defaults.weather_api_url),
            weather_api_key: get("OPENWEATHER_API_KEY").unwrap_or(defaults.weather_api_key),
            qa_model_url: get("QA_MODEL_URL"),
            qa_model_token: get("QA_MODEL_TOKEN"),
            qa_min_score,
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
