//! # HTTP Surface
//!
//! `POST /chat` over axum, open to every origin.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{error, info};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::chat_handler::ChatHandler;
use crate::core::{ChatRequest, ChatResponse};

/// Request failure reported as a 500 with a JSON body
pub struct ApiError(anyhow::Error);

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Chat request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

async fn chat(
    State(handler): State<Arc<ChatHandler>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    Ok(Json(handler.handle_message(&request).await?))
}

pub fn router(handler: Arc<ChatHandler>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat))
        .layer(cors)
        .with_state(handler)
}

/// Bind `address` and serve until the process stops
pub async fn serve(address: &str, handler: Arc<ChatHandler>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("🌐 http listening on {}", listener.local_addr()?);
    axum::serve(listener, router(handler)).await?;
    Ok(())
}
