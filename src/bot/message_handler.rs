//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::debug;

// Import localization
use crate::localization::t_lang;

use super::dialogue_manager::CatalogBot;
use super::reply::send_reply;

/// True for `/start`, `/start payload` and `/start@botname`
pub fn is_start_command(text: &str) -> bool {
    let command = text.split_whitespace().next().unwrap_or("");
    command == "/start" || command.starts_with("/start@")
}

/// Register the bot's commands in the Telegram menu
pub async fn register_commands(bot: &Bot) -> Result<()> {
    bot.set_my_commands(vec![BotCommand::new(
        "start",
        t_lang("command-start-description", None),
    )])
    .await?;
    Ok(())
}

pub async fn message_handler(bot: Bot, msg: Message, state: Arc<CatalogBot>) -> Result<()> {
    let user = match msg.from.as_ref() {
        Some(user) => user,
        None => return Ok(()),
    };

    // Extract user's language code from Telegram
    let language_code = user.language_code.as_deref();
    let text = msg.text();

    debug!(
        user_id = %user.id,
        has_text = text.is_some(),
        "Received message from user"
    );

    let reply = if text.is_some_and(is_start_command) {
        state.start(user.id, language_code).await
    } else {
        state.handle_text(user.id, text, language_code).await
    };

    send_reply(&bot, msg.chat.id, reply, language_code).await
}
