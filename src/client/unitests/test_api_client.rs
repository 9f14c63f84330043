use serde_json::json;
use url::Url;

use crate::Error;
use crate::client::api_client::{APIClient, body_message};

#[test]
fn test_body_message_from_bare_string() {
    let value = json!("Group is successfully created");
    assert_eq!(
        body_message(&value).as_deref(),
        Some("Group is successfully created")
    );
}

#[test]
fn test_body_message_prefers_message_field() {
    let value = json!({
        "message": "Already a member of this group",
        "error": "ignored"
    });
    assert_eq!(
        body_message(&value).as_deref(),
        Some("Already a member of this group")
    );
}

#[test]
fn test_body_message_falls_back_to_error_field() {
    let value = json!({ "error": "Not a valid group" });
    assert_eq!(body_message(&value).as_deref(), Some("Not a valid group"));
}

#[test]
fn test_body_message_absent() {
    assert_eq!(body_message(&json!([1, 2, 3])), None);
    assert_eq!(body_message(&json!({ "status": "ok" })), None);
    assert_eq!(body_message(&json!(null)), None);
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let base = Url::parse("http://127.0.0.1:9").unwrap();
    let client = APIClient::new(&base).unwrap();

    let result = client.me().await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
