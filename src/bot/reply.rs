//! Transport-independent responses and their delivery over Telegram

use anyhow::Result;
use std::path::PathBuf;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, InputFile, InputMedia, InputMediaPhoto, ParseMode};
use tracing::{error, warn};

use crate::config::MAX_CAPTION_CHARS;
use crate::localization::t_lang;

/// What the bot answers with
#[derive(Debug, Clone)]
pub enum Reply {
    /// HTML text with optional inline controls
    Text {
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    /// Single photo with an HTML caption and inline controls
    Photo {
        path: PathBuf,
        caption: String,
        keyboard: InlineKeyboardMarkup,
    },
    /// Photos delivered together as one album
    Album { paths: Vec<PathBuf> },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn text_with_keyboard(text: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Self {
        Reply::Text {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// Send a reply to a chat.
///
/// A photo that cannot be sent degrades to the caption as text; an album that
/// cannot be sent is replaced by a generic failure message.
pub async fn send_reply(
    bot: &Bot,
    chat_id: ChatId,
    reply: Reply,
    language_code: Option<&str>,
) -> Result<()> {
    match reply {
        Reply::Text { text, keyboard } => send_text(bot, chat_id, text, keyboard).await,
        Reply::Photo {
            path,
            caption,
            keyboard,
        } => {
            if caption.chars().count() > MAX_CAPTION_CHARS {
                // Too long for a caption: photo first, details as a separate message
                if let Err(e) = bot.send_photo(chat_id, InputFile::file(&path)).await {
                    warn!(chat_id = %chat_id, path = %path.display(), error = %e, "Failed to send product photo");
                }
                return send_text(bot, chat_id, caption, Some(keyboard)).await;
            }

            let sent = bot
                .send_photo(chat_id, InputFile::file(&path))
                .caption(caption.clone())
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboard.clone())
                .await;

            if let Err(e) = sent {
                warn!(chat_id = %chat_id, path = %path.display(), error = %e, "Failed to send product photo, falling back to text");
                send_text(bot, chat_id, caption, Some(keyboard)).await?;
            }
            Ok(())
        }
        Reply::Album { paths } => {
            let result = match paths.as_slice() {
                [single] => bot
                    .send_photo(chat_id, InputFile::file(single))
                    .await
                    .map(|_| ()),
                _ => {
                    let media = paths.iter().map(|path| {
                        InputMedia::Photo(InputMediaPhoto::new(InputFile::file(path)))
                    });
                    bot.send_media_group(chat_id, media).await.map(|_| ())
                }
            };

            if let Err(e) = result {
                error!(chat_id = %chat_id, photos = paths.len(), error = %e, "Failed to send photo album");
                bot.send_message(chat_id, t_lang("photos-send-failed", language_code))
                    .await?;
            }
            Ok(())
        }
    }
}

async fn send_text(
    bot: &Bot,
    chat_id: ChatId,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
) -> Result<()> {
    let request = bot.send_message(chat_id, text).parse_mode(ParseMode::Html);
    match keyboard {
        Some(keyboard) => request.reply_markup(keyboard).await?,
        None => request.await?,
    };
    Ok(())
}
