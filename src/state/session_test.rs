use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use super::*;
use crate::config::ClientConfig;
use crate::net::mock::MockTransport;
use crate::net::transport::Method;
use crate::state::storage::{LOGGED_IN_KEY, MemoryStorage};

struct Harness {
    store: SessionStore,
    mock: Arc<MockTransport>,
    hint: Arc<MemoryStorage>,
    reloads: Arc<AtomicUsize>,
}

fn harness() -> Harness {
    let mock = Arc::new(MockTransport::new());
    let hint = Arc::new(MemoryStorage::new());
    let reloads = Arc::new(AtomicUsize::new(0));
    let api = ApiClient::new(ClientConfig::new("http://registry.test/api/v1").unwrap(), mock.clone());
    let counter = reloads.clone();
    let store = SessionStore::new(
        api,
        hint.clone(),
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    Harness { store, mock, hint, reloads }
}

fn token(id: u64, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "token": "0b7f1c3e-9c5a-4d3e-8f55-3a1c2f4b6d7e" })
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_store_is_unauthenticated_and_empty() {
    let h = harness();
    assert!(!h.store.is_authenticated());
    assert!(h.store.user_record().is_empty());
    assert!(h.store.user_tokens().is_empty());
}

#[test]
fn persisted_hint_alone_reports_authenticated() {
    let h = harness();
    h.hint.set(LOGGED_IN_KEY, "1");
    assert!(h.store.is_authenticated());
    assert!(!h.store.snapshot().authenticated);
}

#[test]
fn stale_hint_value_other_than_sentinel_is_ignored() {
    let h = harness();
    h.hint.set(LOGGED_IN_KEY, "0");
    assert!(!h.store.is_authenticated());
}

// =============================================================
// fetch_current_user
// =============================================================

#[tokio::test]
async fn fetch_current_user_success_authenticates_and_writes_hint() {
    let h = harness();
    h.mock.push_json(200, &json!({ "id": 7, "name": "alice" }));

    h.store.fetch_current_user().await;

    let session = h.store.snapshot();
    assert!(session.authenticated);
    assert_eq!(session.record.name, "alice");
    assert_eq!(h.hint.get(LOGGED_IN_KEY).as_deref(), Some("1"));
    assert!(h.store.is_authenticated());
}

#[tokio::test]
async fn repeated_successful_fetches_stay_authenticated() {
    let h = harness();
    h.mock
        .push_json(200, &json!({ "id": 7, "name": "alice" }))
        .push_json(200, &json!({ "id": 7, "name": "alice", "full_name": "Alice" }));

    h.store.fetch_current_user().await;
    h.store.fetch_current_user().await;

    assert!(h.store.snapshot().authenticated);
    assert_eq!(h.store.user_record().full_name, "Alice");
    assert_eq!(h.hint.get(LOGGED_IN_KEY).as_deref(), Some("1"));
}

#[tokio::test]
async fn fetch_current_user_failure_clears_record_flag_and_hint() {
    let h = harness();
    h.mock.push_json(200, &json!({ "id": 7, "name": "alice" })).push_json(401, &json!({ "error": "unauthorized" }));

    h.store.fetch_current_user().await;
    h.store.fetch_current_user().await;

    let session = h.store.snapshot();
    assert!(!session.authenticated);
    assert!(session.record.is_empty());
    assert_eq!(h.hint.get(LOGGED_IN_KEY), None);
    assert!(!h.store.is_authenticated());
}

#[tokio::test]
async fn fetch_current_user_network_failure_clears_stale_hint() {
    let h = harness();
    h.hint.set(LOGGED_IN_KEY, "1");
    h.mock.push_network_error();

    h.store.fetch_current_user().await;

    assert_eq!(h.hint.get(LOGGED_IN_KEY), None);
    assert!(!h.store.is_authenticated());
}

// =============================================================
// update_user / confirm_email
// =============================================================

#[tokio::test]
async fn update_user_accepts_bare_true_and_patches_email() {
    let h = harness();
    h.mock
        .push_json(200, &json!({ "id": 7, "name": "alice", "email": "old@example.com", "email_confirmed": true }))
        .push_json(200, &json!(true));
    h.store.fetch_current_user().await;

    let update = UserUpdate { email: "a@example.com".to_owned() };
    h.store.update_user(&update).await.unwrap();

    let record = h.store.user_record();
    assert_eq!(record.id, 7);
    assert_eq!(record.name, "alice");
    assert_eq!(record.email.as_deref(), Some("a@example.com"));
    assert!(!record.email_confirmed);
    assert_eq!(h.mock.last_request().method, Method::Put);
    assert_eq!(h.mock.last_request().body, Some(json!({ "email": "a@example.com" })));
}

#[tokio::test]
async fn update_user_with_same_email_keeps_confirmation() {
    let h = harness();
    h.mock
        .push_json(200, &json!({ "id": 7, "name": "alice", "email": "a@example.com", "email_confirmed": true }))
        .push_json(200, &json!(true));
    h.store.fetch_current_user().await;

    h.store.update_user(&UserUpdate { email: "a@example.com".to_owned() }).await.unwrap();

    assert!(h.store.user_record().email_confirmed);
}

#[tokio::test]
async fn update_user_rejects_with_server_message() {
    let h = harness();
    h.mock.push_json(400, &json!({ "error": "invalid request: email" }));

    let err = h.store.update_user(&UserUpdate { email: "nope".to_owned() }).await.unwrap_err();

    assert_eq!(err, "invalid request: email");
    assert!(h.store.user_record().is_empty());
}

#[tokio::test]
async fn update_user_rejects_with_raw_error_without_server_message() {
    let h = harness();
    h.mock.push_network_error();

    let err = h.store.update_user(&UserUpdate { email: "a@example.com".to_owned() }).await.unwrap_err();

    assert_eq!(err, "request failed: connection refused");
}

#[tokio::test]
async fn confirm_email_commits_confirmed_record() {
    let h = harness();
    h.mock.push_json(200, &json!({ "id": 7, "name": "alice", "email_confirmed": true }));

    h.store.confirm_email("abc").await.unwrap();

    assert!(h.store.user_record().email_confirmed);
}

// =============================================================
// Tokens
// =============================================================

#[tokio::test]
async fn fetch_tokens_failure_resets_to_empty() {
    let h = harness();
    h.mock.push_json(200, &json!([token(1, "a")])).push_json(500, &json!({ "error": "db down" }));

    h.store.fetch_tokens().await;
    assert_eq!(h.store.user_tokens().len(), 1);

    h.store.fetch_tokens().await;
    assert!(h.store.user_tokens().is_empty());
}

#[tokio::test]
async fn create_then_fetch_replaces_with_server_sequence() {
    let h = harness();
    h.mock
        .push_json(200, &json!([token(1, "old")]))
        .push_json(200, &token(2, "x"))
        .push_json(200, &json!([token(2, "x"), token(3, "other")]));

    h.store.fetch_tokens().await;
    let created = h.store.create_token("x").await.unwrap();
    assert_eq!(created.name, "x");
    assert_eq!(h.store.user_tokens().iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

    h.store.fetch_tokens().await;

    let ids: Vec<u64> = h.store.user_tokens().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn create_token_failure_leaves_sequence_untouched() {
    let h = harness();
    h.mock.push_json(200, &json!([token(1, "a")])).push_json(400, &json!({ "error": "maximum tokens reached" }));

    h.store.fetch_tokens().await;
    let err = h.store.create_token("b").await.unwrap_err();

    assert_eq!(err, "maximum tokens reached");
    assert_eq!(h.store.user_tokens().len(), 1);
}

#[tokio::test]
async fn revoke_token_removes_only_matching_id_in_any_position() {
    for target in [10_u64, 20, 30] {
        let h = harness();
        h.mock
            .push_json(200, &json!([token(20, "b"), token(10, "a"), token(30, "c")]))
            .push_json(200, &json!({ "id": target, "revoked": true }));
        h.store.fetch_tokens().await;

        let victim = h.store.user_tokens().into_iter().find(|t| t.id == target).unwrap();
        h.store.revoke_token(&victim).await.unwrap();

        let remaining: Vec<u64> = h.store.user_tokens().iter().map(|t| t.id).collect();
        let expected: Vec<u64> = [20, 10, 30].into_iter().filter(|id| *id != target).collect();
        assert_eq!(remaining, expected);
        assert_eq!(h.mock.last_request().url, format!("http://registry.test/api/v1/me/tokens/{target}"));
    }
}

#[tokio::test]
async fn revoke_token_failure_keeps_token() {
    let h = harness();
    h.mock.push_json(200, &json!([token(1, "a")])).push_json(404, &json!({ "error": "token not found" }));
    h.store.fetch_tokens().await;

    let victim = h.store.user_tokens()[0].clone();
    let err = h.store.revoke_token(&victim).await.unwrap_err();

    assert_eq!(err, "token not found");
    assert_eq!(h.store.user_tokens().len(), 1);
}

// =============================================================
// Stars
// =============================================================

#[tokio::test]
async fn set_starred_tracks_user_star_list() {
    let h = harness();
    h.mock
        .push_json(200, &json!({ "id": 7, "name": "alice", "stars": [1] }))
        .push_json(200, &json!({ "stars": 4 }))
        .push_json(200, &json!({ "stars": 3 }));
    h.store.fetch_current_user().await;

    let stars = h.store.set_starred(5, true).await.unwrap();
    assert_eq!(stars.stars, 4);
    assert!(h.store.user_record().has_starred(5));

    h.store.set_starred(1, false).await.unwrap();
    assert_eq!(h.store.user_record().stars, vec![5]);
}

// =============================================================
// logout
// =============================================================

#[tokio::test]
async fn logout_clears_session_and_reloads() {
    let h = harness();
    h.mock.push_json(200, &json!({ "id": 7, "name": "alice" })).push_text(200, "");
    h.store.fetch_current_user().await;

    h.store.logout().await;

    assert!(!h.store.is_authenticated());
    assert!(h.store.user_record().is_empty());
    assert_eq!(h.hint.get(LOGGED_IN_KEY), None);
    assert_eq!(h.reloads.load(Ordering::SeqCst), 1);
    assert_eq!(h.mock.calls().last().map(|c| c.0), Some(Method::Post));
}

#[tokio::test]
async fn logout_clears_session_even_when_network_fails() {
    let h = harness();
    h.mock.push_json(200, &json!({ "id": 7, "name": "alice" })).push_network_error();
    h.store.fetch_current_user().await;

    h.store.logout().await;

    let session = h.store.snapshot();
    assert!(!session.authenticated);
    assert!(session.record.is_empty());
    assert_eq!(h.hint.get(LOGGED_IN_KEY), None);
    assert_eq!(h.reloads.load(Ordering::SeqCst), 1);
}
