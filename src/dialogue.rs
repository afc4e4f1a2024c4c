//! Per-user conversation sessions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use teloxide::types::UserId;
use tokio::sync::Mutex;

use crate::product::Product;

/// Represents the conversation state of one user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingSearchQuery,
}

/// Ephemeral per-user record, kept for the lifetime of the process
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub state: ConversationState,
    /// Last product the user opened, used by "more photos"
    pub current_product: Option<Product>,
}

/// In-memory session map shared by all handlers
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<UserId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn state(&self, user: UserId) -> ConversationState {
        self.sessions
            .lock()
            .await
            .get(&user)
            .map(|session| session.state.clone())
            .unwrap_or_default()
    }

    pub async fn set_state(&self, user: UserId, state: ConversationState) {
        self.sessions.lock().await.entry(user).or_default().state = state;
    }

    pub async fn current_product(&self, user: UserId) -> Option<Product> {
        self.sessions
            .lock()
            .await
            .get(&user)
            .and_then(|session| session.current_product.clone())
    }

    pub async fn set_current_product(&self, user: UserId, product: Product) {
        self.sessions
            .lock()
            .await
            .entry(user)
            .or_default()
            .current_product = Some(product);
    }

    pub async fn session(&self, user: UserId) -> Option<Session> {
        self.sessions.lock().await.get(&user).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}

/// Validates a search query input, returning it trimmed and lowercased
pub fn validate_search_query(query: &str) -> Result<String, &'static str> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return Err("empty");
    }

    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_validation() {
        assert_eq!(validate_search_query("  УРАЛ "), Ok("урал".to_string()));
        assert_eq!(validate_search_query("4320"), Ok("4320".to_string()));

        assert!(validate_search_query("").is_err());
        assert!(validate_search_query(" \n\t ").is_err());
    }

    #[tokio::test]
    async fn test_session_defaults() {
        let sessions = SessionStore::new();
        let user = UserId(7);

        assert_eq!(sessions.state(user).await, ConversationState::Idle);
        assert!(sessions.current_product(user).await.is_none());
        assert!(sessions.is_empty().await);
    }

    #[tokio::test]
    async fn test_state_and_product_are_independent() {
        let sessions = SessionStore::new();
        let user = UserId(7);

        sessions
            .set_state(user, ConversationState::AwaitingSearchQuery)
            .await;
        sessions.set_current_product(user, Product::new()).await;
        sessions.set_state(user, ConversationState::Idle).await;

        let session = sessions.session(user).await.unwrap();
        assert_eq!(session.state, ConversationState::Idle);
        assert_eq!(session.current_product, Some(Product::new()));
        assert_eq!(sessions.len().await, 1);
    }
}
