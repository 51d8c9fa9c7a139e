//! Weather intent handler
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Temperature and icon taken from the structured report

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::context::ChatContext;
use crate::commands::handler::IntentHandler;
use crate::commands::intent::Intent;
use crate::core::{ChatResponse, WeatherPayload};
use crate::features::weather::{extract_city, get_weather};
use crate::features::PersistedState;

pub struct WeatherHandler;

#[async_trait]
impl IntentHandler for WeatherHandler {
    fn intents(&self) -> &'static [Intent] {
        &[Intent::Weather]
    }

    async fn handle(
        &self,
        ctx: &ChatContext,
        _intent: Intent,
        input: &str,
        state: &mut PersistedState,
    ) -> Result<ChatResponse> {
        let city = extract_city(input).unwrap_or_else(|| state.preferences.default_city.clone());
        let outcome = get_weather(ctx.weather.as_ref(), &city).await;

        info!("Weather for {city}: {}", outcome.message);

        Ok(ChatResponse {
            weather: Some(WeatherPayload {
                temperature: outcome.temperature(),
                icon: outcome.icon().map(str::to_string),
                city,
            }),
            response: outcome.message,
            ..Default::default()
        })
    }
}
