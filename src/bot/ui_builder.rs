//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::html::escape;
use tracing::warn;

// Import localization
use crate::localization::t_lang;

use crate::catalog::{CatalogPage, NavControl};
use crate::config::{ContactConfig, MAX_CALLBACK_DATA_BYTES};
use crate::product::Product;

use super::actions::CallbackAction;

fn callback_button(text: String, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, action.payload())
}

/// Welcome text shown on /start and "home"
pub fn format_welcome(language_code: Option<&str>) -> String {
    let paragraphs: [&[&str]; 5] = [
        &["welcome-title"],
        &["welcome-offer", "welcome-parts", "welcome-reuse"],
        &["welcome-stock", "welcome-price"],
        &["welcome-browse", "welcome-browse-hint"],
        &["welcome-contact", "welcome-contact-hint"],
    ];

    let mut text = paragraphs
        .iter()
        .map(|keys| {
            keys.iter()
                .map(|key| t_lang(key, language_code))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    text.push_str(&format!(
        "\n\n{}\n{}",
        t_lang("welcome-motto", language_code),
        t_lang("welcome-motto-hint", language_code)
    ));
    text
}

/// Main menu: catalog and search on one row, contact below
pub fn create_main_menu(language_code: Option<&str>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            callback_button(t_lang("menu-catalog", language_code), CallbackAction::Catalog),
            callback_button(t_lang("menu-search", language_code), CallbackAction::Search),
        ],
        vec![callback_button(
            t_lang("menu-contact", language_code),
            CallbackAction::Contact,
        )],
    ])
}

/// Label of a product row: `name (where)`
pub fn product_label(product: &Product) -> String {
    format!("{} ({})", product.text("name"), product.text("where"))
}

/// One button per product followed by the navigation row.
///
/// Products whose payload would exceed Telegram's callback data limit get no button.
pub fn create_catalog_keyboard(
    page: &CatalogPage<'_>,
    language_code: Option<&str>,
) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = page
        .items
        .iter()
        .filter_map(|product| {
            let action = CallbackAction::Product(product.id());
            // One oversized payload makes Telegram reject the whole keyboard
            if action.payload().len() > MAX_CALLBACK_DATA_BYTES {
                warn!(
                    product_id = %product.id(),
                    "Product id too long for a callback payload, button skipped"
                );
                return None;
            }
            Some(vec![callback_button(product_label(product), action)])
        })
        .collect();

    let nav: Vec<InlineKeyboardButton> = page
        .controls
        .iter()
        .map(|control| match control {
            NavControl::Previous(current) => callback_button(
                t_lang("nav-previous", language_code),
                CallbackAction::CatalogPrev(*current),
            ),
            NavControl::Home => {
                callback_button(t_lang("nav-home", language_code), CallbackAction::BackToMain)
            }
            NavControl::Next(current) => callback_button(
                t_lang("nav-next", language_code),
                CallbackAction::CatalogNext(*current),
            ),
        })
        .collect();

    if !nav.is_empty() {
        buttons.push(nav);
    }

    InlineKeyboardMarkup::new(buttons)
}

/// Controls under a product card; "more photos" only when there is more than one
pub fn create_product_keyboard(
    has_more_photos: bool,
    language_code: Option<&str>,
) -> InlineKeyboardMarkup {
    let mut buttons = Vec::new();
    if has_more_photos {
        buttons.push(vec![callback_button(
            t_lang("product-more-photos", language_code),
            CallbackAction::MorePhotos,
        )]);
    }
    buttons.push(vec![callback_button(
        t_lang("product-back", language_code),
        CallbackAction::BackToCatalog,
    )]);
    buttons.push(vec![callback_button(
        t_lang("menu-catalog", language_code),
        CallbackAction::Catalog,
    )]);
    buttons.push(vec![callback_button(
        t_lang("menu-search", language_code),
        CallbackAction::Search,
    )]);
    buttons.push(vec![callback_button(
        t_lang("menu-contact", language_code),
        CallbackAction::Contact,
    )]);

    InlineKeyboardMarkup::new(buttons)
}

/// HTML product card
pub fn format_product_details(product: &Product, language_code: Option<&str>) -> String {
    let field = |column: &str, missing_key: &str| {
        product
            .non_blank(column)
            .map(|value| escape(&value))
            .unwrap_or_else(|| t_lang(missing_key, language_code))
    };

    format!(
        "<b>{}</b>\n\
         📍 <b>{}:</b> {}\n\
         📅 <b>{}:</b> {}\n\
         💰 <b>{}:</b> {}\n\
         📦 <b>{}:</b> {}\n\
         📄 <b>{}:</b> {}",
        escape(&product.text("name")),
        t_lang("field-location", language_code),
        field("where", "missing-location"),
        t_lang("field-year", language_code),
        field("both", "missing-year"),
        t_lang("field-price", language_code),
        field("cost", "missing-price"),
        t_lang("field-status", language_code),
        field("status", "missing-status"),
        t_lang("field-description", language_code),
        field("description", "missing-description"),
    )
}

/// HTML contact card
pub fn format_contact(contact: &ContactConfig, language_code: Option<&str>) -> String {
    format!(
        "📞 <b>{}:</b> {}\n\
         📱 <b>{}:</b> <a href='tel:{}'>{}</a>\n\
         ✉️ <b>{}:</b> <a href='mailto:{}'>{}</a>\n\
         📍 <b>{}:</b> {}\n\
         🕒 <b>{}:</b> {}",
        t_lang("contact-person", language_code),
        escape(&contact.name),
        t_lang("contact-phone", language_code),
        escape(&contact.phone),
        escape(&contact.phone),
        t_lang("contact-email", language_code),
        escape(&contact.email),
        escape(&contact.email),
        t_lang("contact-location", language_code),
        escape(&contact.location),
        t_lang("contact-schedule", language_code),
        escape(&contact.schedule),
    )
}

/// Link to the contact's Telegram (omitted when the URL is invalid) and a back button
pub fn create_contact_keyboard(
    contact: &ContactConfig,
    language_code: Option<&str>,
) -> InlineKeyboardMarkup {
    let mut buttons = Vec::new();
    match reqwest::Url::parse(&contact.telegram_url) {
        Ok(url) => buttons.push(vec![InlineKeyboardButton::url(
            t_lang("contact-write", language_code),
            url,
        )]),
        Err(e) => {
            warn!(url = %contact.telegram_url, error = %e, "Invalid contact URL, link button omitted")
        }
    }
    buttons.push(vec![callback_button(
        t_lang("contact-back", language_code),
        CallbackAction::BackToMain,
    )]);

    InlineKeyboardMarkup::new(buttons)
}
