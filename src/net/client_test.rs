use super::*;
use crate::net::mock::MockTransport;
use crate::net::types::{TokenCreate, User};
use serde_json::json;

fn client_with(mock: &Arc<MockTransport>) -> ApiClient {
    let config = ClientConfig::new("http://registry.test/api/v1").unwrap();
    ApiClient::new(config, mock.clone())
}

#[tokio::test]
async fn perform_joins_base_addr_and_decodes_body() {
    let mock = Arc::new(MockTransport::new());
    mock.push_json(200, &json!({ "id": 1, "name": "alice" }));
    let client = client_with(&mock);

    let user: User = client.perform(Method::Get, "/me", None::<&()>).await.unwrap();

    assert_eq!(user.name, "alice");
    let req = mock.last_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "http://registry.test/api/v1/me");
    assert_eq!(req.body, None);
}

#[tokio::test]
async fn perform_sends_json_body() {
    let mock = Arc::new(MockTransport::new());
    mock.push_json(200, &json!({ "id": 3, "name": "ci" }));
    let client = client_with(&mock);

    let body = TokenCreate { name: "ci".to_owned() };
    let _: serde_json::Value = client.perform(Method::Put, "/me/tokens", Some(&body)).await.unwrap();

    assert_eq!(mock.last_request().body, Some(json!({ "name": "ci" })));
}

#[tokio::test]
async fn perform_maps_non_2xx_to_status_error_with_server_message() {
    let mock = Arc::new(MockTransport::new());
    mock.push_json(400, &json!({ "error": "invalid request" }));
    let client = client_with(&mock);

    let err = client.perform::<User, ()>(Method::Put, "/me", None).await.unwrap_err();

    assert_eq!(err, RequestError::Status { status: 400, error: Some("invalid request".to_owned()) });
}

#[tokio::test]
async fn perform_propagates_transport_error_unchanged() {
    let mock = Arc::new(MockTransport::new());
    mock.push_network_error();
    let client = client_with(&mock);

    let err = client.perform::<User, ()>(Method::Get, "/me", None).await.unwrap_err();

    assert_eq!(err, RequestError::Transport("connection refused".to_owned()));
}

#[tokio::test]
async fn perform_reports_decode_failure_on_unexpected_shape() {
    let mock = Arc::new(MockTransport::new());
    mock.push_text(200, "not json");
    let client = client_with(&mock);

    let err = client.perform::<User, ()>(Method::Get, "/me", None).await.unwrap_err();

    assert!(matches!(err, RequestError::Decode(_)));
}

#[tokio::test]
async fn perform_unit_ignores_body() {
    let mock = Arc::new(MockTransport::new());
    mock.push_text(200, "<html>redirected</html>");
    let client = client_with(&mock);

    client.perform_unit(Method::Post, "/session/logout").await.unwrap();

    assert_eq!(mock.calls(), vec![(Method::Post, "http://registry.test/api/v1/session/logout".to_owned())]);
}

#[tokio::test]
async fn browser_transport_fails_off_the_browser() {
    let client = ApiClient::browser(ClientConfig::default());

    let err = client.perform::<User, ()>(Method::Get, "/me", None).await.unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
}
