//! Integration tests for the process-wide connections
//!
//! The global manager is shared by every test in this binary, so these run
//! serially and always leave it closed. Ports 41400-41499.

use lighter_campus::database::Connections;
use lighter_campus::testing::{self, Completion, Harness, HarnessOptions};
use serde_json::json;
use serial_test::serial;

#[actix_web::test]
#[serial]
async fn test_stop_connection_without_start() {
    testing::stop_connection().await.expect("stop without start is a no-op");
    testing::stop_connection().await.expect("and so is a second stop");

    assert!(!Connections::global().is_open());
}

#[actix_web::test]
#[serial]
async fn test_start_connection_twice_is_noop() {
    testing::start_connection().await.unwrap();
    let first = Connections::global().pair().unwrap();

    testing::start_connection().await.unwrap();
    let second = Connections::global().pair().unwrap();

    // the second call did not replace the open pools
    assert_eq!(first.fast.ping().await, Ok(()));
    assert_eq!(second.slow.ping().await, Ok(()));

    testing::stop_connection().await.unwrap();
    assert!(!Connections::global().is_open());
}

#[actix_web::test]
#[serial]
async fn test_from_env_serves_with_global_connections() {
    testing::start_connection().await.unwrap();

    let server = Harness::from_env(HarnessOptions::port(41401)).unwrap();
    assert!(server.config().await.connection.is_some());

    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_ok(
            "/users/create",
            completion.done(),
            json!({
                "name": "Jane Doe",
                "email": "jane@local.test",
                "username": "jane_doe",
                "password": "SecureP@ss123",
                "passwordConfirmation": "SecureP@ss123",
            }),
            "",
        )
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
    testing::stop_connection().await.unwrap();
}

#[actix_web::test]
#[serial]
async fn test_from_env_before_start_has_no_connections() {
    testing::stop_connection().await.unwrap();

    let server = Harness::from_env(HarnessOptions::port(41402)).unwrap();

    assert!(server.config().await.connection.is_none());
}
