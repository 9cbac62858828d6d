use std::sync::Arc;

use super::*;
use crate::config::ClientConfig;
use crate::net::mock::MockTransport;
use serde_json::json;

const BASE: &str = "http://registry.test/api/v1";

fn client_with(mock: &Arc<MockTransport>) -> ApiClient {
    ApiClient::new(ClientConfig::new(BASE).unwrap(), mock.clone())
}

// =============================================================
// Path builders
// =============================================================

#[test]
fn page_query_defaults_and_clamps() {
    assert_eq!(PageQuery::default().to_query(), "?page=1&limit=10");
    assert_eq!(PageQuery::page(0).page, 1);
    assert_eq!(PageQuery::page(4).to_query(), "?page=4&limit=10");
}

#[test]
fn search_path_encodes_query_after_pagination() {
    assert_eq!(
        search_path("ibc transfer", PageQuery::default()),
        "/modules/search?page=1&limit=10&q=ibc%20transfer"
    );
}

#[test]
fn user_paths_encode_name() {
    assert_eq!(user_path("alice"), "/users/alice");
    assert_eq!(user_modules_path("a/b"), "/users/a%2Fb/modules");
}

#[test]
fn token_and_module_paths() {
    assert_eq!(token_path(12), "/me/tokens/12");
    assert_eq!(module_path(3), "/modules/3");
    assert_eq!(modules_path(PageQuery::page(2)), "/modules?page=2&limit=10");
    assert_eq!(star_path(3, true), "/modules/3/star");
    assert_eq!(star_path(3, false), "/modules/3/unstar");
}

#[test]
fn invite_and_confirm_paths() {
    assert_eq!(confirm_email_path("abc"), "/me/confirm/abc");
    assert_eq!(accept_invite_path("tok-1"), "/me/invite/accept/tok-1");
}

// =============================================================
// Endpoint wiring
// =============================================================

#[tokio::test]
async fn create_user_token_puts_name() {
    let mock = Arc::new(MockTransport::new());
    mock.push_json(200, &json!({ "id": 5, "name": "deploy" }));
    let token = client_with(&mock).create_user_token("deploy").await.unwrap();

    assert_eq!(token.id, 5);
    let req = mock.last_request();
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.url, format!("{BASE}/me/tokens"));
    assert_eq!(req.body, Some(json!({ "name": "deploy" })));
}

#[tokio::test]
async fn revoke_user_token_deletes_by_id() {
    let mock = Arc::new(MockTransport::new());
    mock.push_json(200, &json!({ "id": 9, "revoked": true }));
    let token = UserToken { id: 9, ..UserToken::default() };

    let revoked = client_with(&mock).revoke_user_token(&token).await.unwrap();

    assert!(revoked.revoked);
    assert_eq!(mock.calls(), vec![(Method::Delete, format!("{BASE}/me/tokens/9"))]);
}

#[tokio::test]
async fn update_user_decodes_bare_acknowledgement() {
    let mock = Arc::new(MockTransport::new());
    mock.push_json(200, &json!(true));

    let update = UserUpdate { email: "bob@example.com".to_owned() };
    let ok = client_with(&mock).update_user(&update).await.unwrap();

    assert!(ok);
    assert_eq!(mock.calls(), vec![(Method::Put, format!("{BASE}/me"))]);
    assert_eq!(mock.last_request().body, Some(json!({ "email": "bob@example.com" })));
}

#[tokio::test]
async fn invite_module_owner_sends_user_and_module() {
    let mock = Arc::new(MockTransport::new());
    mock.push_json(200, &json!(true));

    let ok = client_with(&mock).invite_module_owner("carol", 4).await.unwrap();

    assert!(ok);
    assert_eq!(mock.last_request().body, Some(json!({ "user": "carol", "module_id": 4 })));
}

#[tokio::test]
async fn search_modules_decodes_page() {
    let mock = Arc::new(MockTransport::new());
    mock.push_json(
        200,
        &json!({ "page": 1, "limit": 10, "count": 1, "total": 1, "results": [{ "id": 2, "name": "x/gov" }] }),
    );

    let page = client_with(&mock).search_modules("gov", PageQuery::default()).await.unwrap();

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].name, "x/gov");
    assert_eq!(mock.last_request().url, format!("{BASE}/modules/search?page=1&limit=10&q=gov"));
}

#[tokio::test]
async fn star_and_unstar_use_put() {
    let mock = Arc::new(MockTransport::new());
    mock.push_json(200, &json!({ "stars": 3 })).push_json(200, &json!({ "stars": 2 }));
    let client = client_with(&mock);

    assert_eq!(client.star_module(1).await.unwrap().stars, 3);
    assert_eq!(client.unstar_module(1).await.unwrap().stars, 2);
    assert_eq!(
        mock.calls(),
        vec![(Method::Put, format!("{BASE}/modules/1/star")), (Method::Put, format!("{BASE}/modules/1/unstar"))]
    );
}

#[tokio::test]
async fn logout_user_posts_and_ignores_body() {
    let mock = Arc::new(MockTransport::new());
    mock.push_text(200, "");

    client_with(&mock).logout_user().await.unwrap();

    assert_eq!(mock.calls(), vec![(Method::Post, format!("{BASE}/session/logout"))]);
}
