use log::LevelFilter;

use crate::{
    client::client::Builder,
    client::confirm::ConfirmAction,
    core::config::Config,
};

// No service listens on port 9; confirmations that do fire fail at the
// transport layer, which is exactly what these tests lean on.
fn offline_client() -> crate::client::client::Client {
    let mut config = Config::with_base_url("http://127.0.0.1:9").unwrap();
    config.set_log_level(LevelFilter::Off);

    Builder::new()
        .with_config(config)
        .build()
        .unwrap()
}

#[test]
fn test_request_parks_action() {
    let mut client = offline_client();
    assert!(client.pending_confirmation().is_none());

    client.request_confirmation(ConfirmAction::DeleteGroup("algo".into()));
    assert_eq!(
        client.pending_confirmation(),
        Some(&ConfirmAction::DeleteGroup("algo".into()))
    );
}

#[test]
fn test_new_request_replaces_unanswered_one() {
    let mut client = offline_client();

    client.request_confirmation(ConfirmAction::DeleteGroup("algo".into()));
    client.request_confirmation(ConfirmAction::DeletePost(3));
    assert_eq!(
        client.pending_confirmation(),
        Some(&ConfirmAction::DeletePost(3))
    );
}

#[test]
fn test_cancel_is_a_no_op() {
    let mut client = offline_client();

    client.request_confirmation(ConfirmAction::LeaveGroup("algo".into()));
    assert!(client.cancel());
    assert!(client.pending_confirmation().is_none());

    // nothing was pending, nothing to decline
    assert!(!client.cancel());
}

#[tokio::test]
async fn test_confirm_without_pending_action_fails() {
    let mut client = offline_client();
    assert!(client.confirm().await.is_err());
}

#[tokio::test]
async fn test_failed_confirmation_leaves_state_unchanged() {
    let mut client = offline_client();

    client.request_confirmation(ConfirmAction::DeleteGroup("algo".into()));
    let result = client.confirm().await;

    assert!(result.is_err());
    assert!(client.pending_confirmation().is_none());
    assert!(client.caches().all_groups().is_empty());
    assert!(client.caches().my_groups().is_empty());
}
