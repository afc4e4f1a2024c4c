//! # Zipukm Catalog
//!
//! A Telegram bot for browsing a spreadsheet-backed catalog of used
//! machinery (paginated listing, product cards with photos, search and a
//! contact card), plus a small tool that renames product photos after
//! their folder.

pub mod bot;
pub mod catalog;
pub mod config;
pub mod dialogue;
pub mod localization;
pub mod photos;
pub mod product;
pub mod product_store;
pub mod renamer;
pub mod search;
pub mod store_errors;
pub mod transliteration;
