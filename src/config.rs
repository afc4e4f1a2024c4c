//! # Catalog Configuration Module
//!
//! This module defines configuration structures for the catalog bot,
//! including the spreadsheet location, page sizes, photo lookup rules and
//! the static contact card.

use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

// Constants for catalog configuration
pub const DEFAULT_CATALOG_FILE: &str = "price.xlsx";
pub const CATALOG_PAGE_SIZE: usize = 7;
pub const SEARCH_PAGE_SIZE: usize = 10;
pub const MAX_CAPTION_CHARS: usize = 1024; // Telegram caption limit
pub const MAX_CALLBACK_DATA_BYTES: usize = 64; // Telegram callback_data limit

/// Extensions probed when an image column holds a path without one
pub const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

/// Image columns in display order
pub const IMAGE_COLUMNS: [&str; 3] = ["image_1", "image_2", "image_3"];

/// Identifier columns, highest priority first
pub const ID_ALIASES: [&str; 5] = ["id", "ID", "Id", "ID товара", "Артикул"];

/// Identifier used for rows without any identifier column
pub const UNKNOWN_PRODUCT_ID: &str = "unknown";

/// Environment variables holding the bot token, checked in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["TOKEN_ZIPUKM", "TELEGRAM_BOT_TOKEN"];

/// Static contact card shown by the "contact" menu entry
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub schedule: String,
    pub telegram_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            name: "Кирилл".to_string(),
            phone: "+79991234567".to_string(),
            email: "kirill@example.com".to_string(),
            location: "Лямино, Свердловская обл.".to_string(),
            schedule: "Пн–Пт, 8:30–17:30".to_string(),
            telegram_url: "https://t.me/shihaleevka".to_string(),
        }
    }
}

impl ContactConfig {
    /// Build the contact card from `CONTACT_*` variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: env_or("CONTACT_NAME", defaults.name),
            phone: env_or("CONTACT_PHONE", defaults.phone),
            email: env_or("CONTACT_EMAIL", defaults.email),
            location: env_or("CONTACT_LOCATION", defaults.location),
            schedule: env_or("CONTACT_SCHEDULE", defaults.schedule),
            telegram_url: env_or("CONTACT_TELEGRAM_URL", defaults.telegram_url),
        }
    }
}

/// Configuration structure for the catalog service
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Spreadsheet holding one product per row
    pub catalog_file: PathBuf,
    /// Base directory for relative image paths (working directory when unset)
    pub image_root: Option<PathBuf>,
    /// Products per page when browsing
    pub catalog_page_size: usize,
    /// Products per page for search results
    pub search_page_size: usize,
    /// Contact card settings
    pub contact: ContactConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_file: PathBuf::from(DEFAULT_CATALOG_FILE),
            image_root: None,
            catalog_page_size: CATALOG_PAGE_SIZE,
            search_page_size: SEARCH_PAGE_SIZE,
            contact: ContactConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Read `CATALOG_FILE`, `CATALOG_IMAGE_ROOT` and the contact variables
    pub fn from_env() -> Self {
        Self {
            catalog_file: env::var("CATALOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_FILE)),
            image_root: env::var("CATALOG_IMAGE_ROOT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            contact: ContactConfig::from_env(),
            ..Self::default()
        }
    }
}

/// Get the bot token from the environment
pub fn bot_token_from_env() -> Result<String> {
    TOKEN_ENV_VARS
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
        .ok_or_else(|| anyhow!("{} must be set", TOKEN_ENV_VARS.join(" or ")))
}

fn env_or(name: &str, default: String) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::default();

        assert_eq!(config.catalog_file, PathBuf::from("price.xlsx"));
        assert_eq!(config.catalog_page_size, 7);
        assert_eq!(config.search_page_size, 10);
        assert!(config.image_root.is_none());
    }

    #[test]
    fn test_contact_defaults_are_filled() {
        let contact = ContactConfig::default();

        assert!(!contact.name.is_empty());
        assert!(contact.phone.starts_with('+'));
        assert!(contact.telegram_url.starts_with("https://"));
    }
}
