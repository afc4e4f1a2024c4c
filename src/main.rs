use anyhow::Result;
use std::env;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zipukm::bot::{callback_handler, message_handler, register_commands, CatalogBot};
use zipukm::config::{bot_token_from_env, CatalogConfig};
use zipukm::localization::init_localization;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    init_tracing();

    info!("Starting zipukm catalog bot");

    init_localization()?;

    let bot_token = bot_token_from_env()?;
    let config = CatalogConfig::from_env();

    info!(
        catalog_file = %config.catalog_file.display(),
        image_root = ?config.image_root,
        "Catalog configured"
    );

    let state = Arc::new(CatalogBot::new(config));
    let bot = Bot::new(bot_token);

    if let Err(e) = register_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
