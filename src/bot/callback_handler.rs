//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, warn};

// Import localization
use crate::localization::t_lang;

use super::actions::CallbackAction;
use super::dialogue_manager::CatalogBot;
use super::reply::send_reply;

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<CatalogBot>,
) -> Result<()> {
    // Answer the callback query first to remove the loading state
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(user_id = %q.from.id, error = %e, "Failed to answer callback query");
    }

    let chat_id = match &q.message {
        Some(msg) => msg.chat().id,
        None => {
            debug!(user_id = %q.from.id, "Callback query without a message, ignoring");
            return Ok(());
        }
    };

    let data = q.data.as_deref().unwrap_or("");
    let action = match CallbackAction::parse(data) {
        Some(action) => action,
        None => {
            debug!(user_id = %q.from.id, data = %data, "Unknown callback payload");
            return Ok(());
        }
    };

    let language_code = q.from.language_code.as_deref();

    let status_message = match action.loading_message_key() {
        Some(key) => match bot.send_message(chat_id, t_lang(key, language_code)).await {
            Ok(message) => Some(message),
            Err(e) => {
                warn!(user_id = %q.from.id, error = %e, "Failed to send loading status");
                None
            }
        },
        None => None,
    };

    let reply = state.handle_action(q.from.id, action, language_code).await;
    let result = send_reply(&bot, chat_id, reply, language_code).await;

    // Always remove the status message, whatever happened to the reply
    if let Some(status) = status_message {
        if let Err(e) = bot.delete_message(chat_id, status.id).await {
            debug!(user_id = %q.from.id, error = %e, "Failed to delete loading status");
        }
    }

    result
}
