use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;

use asistan::commands::{ChatContext, ChatHandler};
use asistan::core::Config;
use asistan::features::conversation::init_question_answerer;
use asistan::features::{get_bot_version, get_features};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Asistan v{}...", get_bot_version());
    for feature in get_features() {
        info!("  • {} v{}", feature.name, feature.version);
    }

    // Probed once; on failure the process stays in simple mode
    let model = init_question_answerer(&config).await;
    let ctx = ChatContext::from_config(&config, model);

    // Seed the data file before the first request
    ctx.store.ensure_exists().await.map_err(|e| {
        error!("Failed to prepare data file {}: {e}", config.data_file.display());
        anyhow::anyhow!("Data file setup failed: {}", e)
    })?;

    if ctx.conversation.is_simple_mode() {
        info!("💡 Simple mode: unknown questions get the fallback answer");
    }

    let handler = Arc::new(ChatHandler::new(ctx));
    asistan::server::serve(&config.bind_address(), handler).await
}
