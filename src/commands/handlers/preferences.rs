//! Preference handlers
//!
//! Handles: set default city
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};

use crate::commands::context::ChatContext;
use crate::commands::handler::IntentHandler;
use crate::commands::intent::Intent;
use crate::core::ChatResponse;
use crate::features::weather::extract_city;
use crate::features::PersistedState;

pub struct PreferencesHandler;

#[async_trait]
impl IntentHandler for PreferencesHandler {
    fn intents(&self) -> &'static [Intent] {
        &[Intent::SetDefaultCity]
    }

    async fn handle(
        &self,
        ctx: &ChatContext,
        _intent: Intent,
        input: &str,
        state: &mut PersistedState,
    ) -> Result<ChatResponse> {
        let Some(city) = extract_city(input) else {
            debug!("Set-default-city without a city, ignoring");
            return Ok(ChatResponse::default());
        };

        state.preferences.default_city = city.clone();
        ctx.store.save(state).await?;
        info!("Default city set to {city}");

        Ok(ChatResponse::text(format!(
            "🏙️ Varsayılan şehir '{city}' olarak ayarlandı"
        )))
    }
}
