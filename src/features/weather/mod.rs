//! # Feature: Weather
//!
//! Current weather lookup with Turkish descriptions and emoji icons.
//! Provider failures never escape this module; they become apology sentences.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Carry structured temperature instead of re-parsing the sentence
//! - 1.0.0: Initial release with OpenWeatherMap integration

pub mod city;
pub mod client;
pub mod icon;

use log::{error, warn};

pub use city::{capitalize, extract_city, title_case, CITY_KEYWORDS};
pub use client::{OpenWeatherClient, WeatherError, WeatherProvider, WeatherReport};
pub use icon::weather_icon;

pub const LOOKUP_FAILED_MESSAGE: &str =
    "Hava durumu bilgisi alınamadı. Lütfen şehir ismini kontrol edin.";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Hava durumu servisine bağlanılamadı. Lütfen daha sonra tekrar deneyin.";

/// Sentence plus the structured report it was built from, if any
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherOutcome {
    pub message: String,
    pub report: Option<WeatherReport>,
}

impl WeatherOutcome {
    pub fn temperature(&self) -> Option<String> {
        self.report.as_ref().map(|r| r.temperature.to_string())
    }

    pub fn icon(&self) -> Option<&'static str> {
        self.report.as_ref().map(|r| weather_icon(&r.description))
    }
}

/// Look up `city` and phrase the result for the user
pub async fn get_weather(provider: &dyn WeatherProvider, city: &str) -> WeatherOutcome {
    match provider.current(city).await {
        Ok(report) => WeatherOutcome {
            message: format!(
                "{} için hava durumu: {}, sıcaklık: {}°C",
                capitalize(city),
                report.description,
                report.temperature
            ),
            report: Some(report),
        },
        Err(WeatherError::Status(status)) => {
            warn!("Weather lookup for {city} returned HTTP {status}");
            WeatherOutcome {
                message: LOOKUP_FAILED_MESSAGE.to_string(),
                report: None,
            }
        }
        Err(e) => {
            error!("Weather error: {e}");
            WeatherOutcome {
                message: SERVICE_UNAVAILABLE_MESSAGE.to_string(),
                report: None,
            }
        }
    }
}
