//! Dialogue Manager module: turns user actions into replies
//!
//! [`CatalogBot`] owns the process-scoped state (product store, sessions,
//! configuration). Its methods never talk to Telegram; they return a
//! [`Reply`] that the handlers deliver.

use std::path::PathBuf;
use std::sync::Arc;
use teloxide::types::UserId;
use tracing::{debug, info};

// Import localization
use crate::localization::{t_args_lang, t_lang};

use crate::catalog::{clamp_page, render};
use crate::config::{CatalogConfig, UNKNOWN_PRODUCT_ID};
use crate::dialogue::{validate_search_query, ConversationState, SessionStore};
use crate::photos::resolve_photo_paths;
use crate::product::Product;
use crate::product_store::ProductStore;
use crate::search::search;

use super::actions::CallbackAction;
use super::reply::Reply;
use super::ui_builder::{
    create_catalog_keyboard, create_contact_keyboard, create_main_menu, create_product_keyboard,
    format_contact, format_product_details, format_welcome,
};

/// Shared state of the running catalog bot
pub struct CatalogBot {
    store: Arc<ProductStore>,
    sessions: SessionStore,
    config: CatalogConfig,
}

impl CatalogBot {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            store: Arc::new(ProductStore::new(config.catalog_file.clone())),
            sessions: SessionStore::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub async fn products(&self) -> Arc<Vec<Product>> {
        self.store.load_async().await
    }

    /// Welcome text with the main menu
    pub fn welcome(&self, language_code: Option<&str>) -> Reply {
        Reply::text_with_keyboard(format_welcome(language_code), create_main_menu(language_code))
    }

    /// `/start`: reset the conversation and greet
    pub async fn start(&self, user: UserId, language_code: Option<&str>) -> Reply {
        self.sessions.set_state(user, ConversationState::Idle).await;
        self.welcome(language_code)
    }

    /// Dispatch a decoded menu selection
    pub async fn handle_action(
        &self,
        user: UserId,
        action: CallbackAction,
        language_code: Option<&str>,
    ) -> Reply {
        debug!(user_id = %user, action = ?action, "Handling menu action");
        match action {
            CallbackAction::Catalog | CallbackAction::BackToCatalog => {
                self.show_catalog(0, language_code).await
            }
            CallbackAction::CatalogPrev(current) => {
                self.show_catalog(current.saturating_sub(1), language_code)
                    .await
            }
            CallbackAction::CatalogNext(current) => {
                self.show_catalog(current.saturating_add(1), language_code)
                    .await
            }
            CallbackAction::BackToMain => self.welcome(language_code),
            CallbackAction::Search => self.begin_search(user, language_code).await,
            CallbackAction::Contact => self.contact(language_code),
            CallbackAction::Product(id) => self.select_product(user, &id, language_code).await,
            CallbackAction::MorePhotos => self.more_photos(user, language_code).await,
        }
    }

    /// One page of the full catalog
    pub async fn show_catalog(&self, page: usize, language_code: Option<&str>) -> Reply {
        let products = self.products().await;
        if products.is_empty() {
            return Reply::text_with_keyboard(
                t_lang("catalog-empty", language_code),
                create_main_menu(language_code),
            );
        }

        let page_size = self.config.catalog_page_size;
        let page = clamp_page(page, products.len(), page_size);
        let rendered = render(&products, page, page_size);

        Reply::text_with_keyboard(
            t_lang("catalog-choose", language_code),
            create_catalog_keyboard(&rendered, language_code),
        )
    }

    /// Ask for a query and wait for the next text message
    pub async fn begin_search(&self, user: UserId, language_code: Option<&str>) -> Reply {
        self.sessions
            .set_state(user, ConversationState::AwaitingSearchQuery)
            .await;
        Reply::text(t_lang("search-prompt", language_code))
    }

    /// Handle a non-command message. `text` is `None` for stickers, photos and the like.
    pub async fn handle_text(
        &self,
        user: UserId,
        text: Option<&str>,
        language_code: Option<&str>,
    ) -> Reply {
        match self.sessions.state(user).await {
            ConversationState::AwaitingSearchQuery => {
                self.run_search(user, text.unwrap_or_default(), language_code)
                    .await
            }
            ConversationState::Idle => Reply::text_with_keyboard(
                t_lang("idle-hint", language_code),
                create_main_menu(language_code),
            ),
        }
    }

    async fn run_search(&self, user: UserId, input: &str, language_code: Option<&str>) -> Reply {
        let query = match validate_search_query(input) {
            Ok(query) => query,
            // Stay in the search state so the next message is another attempt
            Err(_) => return Reply::text(t_lang("search-invalid", language_code)),
        };

        let products = self.products().await;
        let matches = search(&products, &query);
        self.sessions.set_state(user, ConversationState::Idle).await;
        info!(user_id = %user, query = %query, matches = matches.len(), "Search completed");

        if matches.is_empty() {
            let escaped = teloxide::utils::html::escape(&query);
            return Reply::text_with_keyboard(
                t_args_lang(
                    "search-nothing-found",
                    &[("query", escaped.as_str())],
                    language_code,
                ),
                create_main_menu(language_code),
            );
        }

        let rendered = render(&matches, 0, self.config.search_page_size);
        let count = matches.len().to_string();
        Reply::text_with_keyboard(
            t_args_lang("search-found", &[("count", count.as_str())], language_code),
            create_catalog_keyboard(&rendered, language_code),
        )
    }

    /// Open a product card
    pub async fn select_product(
        &self,
        user: UserId,
        id: &str,
        language_code: Option<&str>,
    ) -> Reply {
        let not_found = || Reply::text(t_lang("product-not-found", language_code));
        if id == UNKNOWN_PRODUCT_ID {
            return not_found();
        }

        let products = self.products().await;
        let product = match products
            .iter()
            .find(|product| product.resolve_id().as_deref() == Some(id))
        {
            Some(product) => product.clone(),
            None => {
                debug!(user_id = %user, product_id = %id, "Product not found");
                return not_found();
            }
        };

        self.sessions.set_current_product(user, product.clone()).await;

        let photos = self.photo_paths(&product);
        let details = format_product_details(&product, language_code);
        let keyboard = create_product_keyboard(photos.len() > 1, language_code);

        match photos.into_iter().next() {
            Some(path) => Reply::Photo {
                path,
                caption: details,
                keyboard,
            },
            None => Reply::text_with_keyboard(details, keyboard),
        }
    }

    /// Photos of the current product after the first one
    pub async fn more_photos(&self, user: UserId, language_code: Option<&str>) -> Reply {
        let product = match self.sessions.current_product(user).await {
            Some(product) => product,
            None => return Reply::text(t_lang("photos-no-current", language_code)),
        };

        let remaining: Vec<PathBuf> = self.photo_paths(&product).into_iter().skip(1).collect();
        if remaining.is_empty() {
            return Reply::text(t_lang("photos-none", language_code));
        }

        Reply::Album { paths: remaining }
    }

    /// Static contact card
    pub fn contact(&self, language_code: Option<&str>) -> Reply {
        Reply::text_with_keyboard(
            format_contact(&self.config.contact, language_code),
            create_contact_keyboard(&self.config.contact, language_code),
        )
    }

    fn photo_paths(&self, product: &Product) -> Vec<PathBuf> {
        resolve_photo_paths(product, self.config.image_root.as_deref())
    }
}
