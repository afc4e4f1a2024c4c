//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `actions`: Callback payloads of the inline keyboards
//! - `dialogue_manager`: Turns user actions into replies (no Telegram I/O)
//! - `reply`: Reply model and its delivery
//! - `message_handler`: Handles /start and free-text messages
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards and formats messages

pub mod actions;
pub mod callback_handler;
pub mod dialogue_manager;
pub mod message_handler;
pub mod reply;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::{message_handler, register_commands};

pub use actions::CallbackAction;
pub use dialogue_manager::CatalogBot;
pub use reply::Reply;
