use serial_test::serial;

use crate::common;

#[ignore]
#[tokio::test]
#[serial]
async fn test_bootstrap_requires_session() {
    let mut client = common::build_client();

    let result = client.bootstrap().await;
    assert!(result.is_err());
    assert!(result.unwrap_err().is_unauthenticated());
    assert!(client.user().is_none());
    assert!(client.caches().all_groups().is_empty());
}

#[ignore]
#[tokio::test]
#[serial]
async fn test_login_and_bootstrap() {
    let client = common::login_as(common::ALICE).await;

    assert_eq!(client.user().unwrap().name(), common::ALICE);
}

#[ignore]
#[tokio::test]
#[serial]
async fn test_logout_clears_state() {
    let mut client = common::login_as(common::ALICE).await;

    client.logout().await;
    assert!(client.user().is_none());
    assert!(client.caches().my_groups().is_empty());
    assert!(client.caches().posts().is_empty());

    let result = client.bootstrap().await;
    assert!(result.is_err());
}
