//! # Dialogue Tests
//!
//! Session state serialization and search query validation.

use teloxide::types::UserId;
use zipukm::dialogue::{validate_search_query, ConversationState, Session, SessionStore};
use zipukm::product::{CellValue, Product};

#[test]
fn test_conversation_state_serialization() {
    let json = serde_json::to_string(&ConversationState::AwaitingSearchQuery).unwrap();
    assert_eq!(json, "\"AwaitingSearchQuery\"");

    let state: ConversationState = serde_json::from_str("\"Idle\"").unwrap();
    assert_eq!(state, ConversationState::Idle);
}

#[test]
fn test_session_serialization_keeps_product() {
    let session = Session {
        state: ConversationState::Idle,
        current_product: Some(
            Product::new()
                .with("id", CellValue::Int(12))
                .with("name", CellValue::text("УРАЛ 4320")),
        ),
    };

    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, session);
    assert_eq!(restored.current_product.unwrap().id(), "12");
}

#[test]
fn test_search_query_edge_cases() {
    assert_eq!(validate_search_query("КамАЗ"), Ok("камаз".to_string()));
    assert_eq!(validate_search_query("  a  b  "), Ok("a  b".to_string()));
    assert_eq!(validate_search_query("\u{3000}"), Err("empty"));
}

#[tokio::test]
async fn test_sessions_are_per_user() {
    let sessions = SessionStore::new();

    sessions
        .set_state(UserId(1), ConversationState::AwaitingSearchQuery)
        .await;

    assert_eq!(
        sessions.state(UserId(1)).await,
        ConversationState::AwaitingSearchQuery
    );
    assert_eq!(sessions.state(UserId(2)).await, ConversationState::Idle);
    assert_eq!(sessions.len().await, 1);
}
