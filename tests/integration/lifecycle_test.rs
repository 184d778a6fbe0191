//! Integration tests for the harness lifecycle
//!
//! Ports 41100-41199.

use lighter_campus::Config;
use lighter_campus::testing::{Completion, Harness, HarnessOptions, LifecycleError};
use serde_json::json;

fn harness(port: u16) -> Harness {
    Harness::new(HarnessOptions::port(port), &Config::default())
}

#[actix_web::test]
async fn test_start_then_stop_toggles_listening() {
    let server = harness(41101);

    server.start().await.expect("start should bind");
    assert!(server.listening().await, "listening right after start");
    assert!(server.instance().await.is_some());
    assert!(server.config().await.server.is_some(), "config carries the listener handle");

    server.stop().await.expect("stop should close");
    assert!(!server.listening().await, "not listening right after stop");
}

#[actix_web::test]
async fn test_start_twice_fails_and_keeps_listening() {
    let server = harness(41102);
    server.start().await.unwrap();

    let error = server.start().await.unwrap_err();
    assert!(matches!(error, LifecycleError::AlreadyStarted { port: 41102 }));
    assert!(server.listening().await);

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_stop_on_stopped_instance_fails() {
    let server = harness(41103);
    server.start().await.unwrap();
    server.stop().await.unwrap();

    let error = server.stop().await.unwrap_err();
    assert!(matches!(error, LifecycleError::NotActive { port: 41103 }));
    assert!(!server.listening().await);
}

#[actix_web::test]
async fn test_stopped_listener_stays_attached() {
    let server = harness(41104);
    server.start().await.unwrap();
    server.stop().await.unwrap();

    assert!(server.instance().await.is_some());
    assert!(!server.listening().await);
}

#[actix_web::test]
async fn test_start_after_stop_rebinds() {
    let server = harness(41105);

    server.start().await.unwrap();
    server.stop().await.unwrap();
    server.start().await.expect("a stopped instance can start again");

    assert!(server.listening().await);

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_restart_from_stopped_starts() {
    let server = harness(41106);

    server.restart().await.expect("restart tolerates a stopped instance");
    assert!(server.listening().await);

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_repeated_restart_leaves_one_listener() {
    let server = harness(41107);

    for _ in 0..3 {
        server.restart().await.expect("restart should rebind the same port");
        assert!(server.listening().await);
    }

    let completion = Completion::new();
    server
        .post_for_not_found("/missing", completion.done(), json!({}), "")
        .await;
    completion.assert_passed();

    // once the only listener is closed nothing answers on the port
    server.stop().await.unwrap();

    let rejection = server.post("/missing", json!({}), "").await.unwrap_err();
    assert!(rejection.response().is_none(), "no listener should be left behind");
}

#[actix_web::test]
async fn test_start_on_taken_port_is_bind_error() {
    let first = harness(41108);
    let second = harness(41108);
    first.start().await.unwrap();

    let error = second.start().await.unwrap_err();
    assert!(matches!(error, LifecycleError::Bind { port: 41108, .. }));
    assert!(!second.listening().await);
    assert!(first.listening().await);

    first.stop().await.unwrap();
}

#[actix_web::test]
async fn test_listening_reflects_port_binding() {
    let server = harness(41109);

    let rejection = server.post("/anything", json!({}), "").await.unwrap_err();
    assert!(rejection.response().is_none(), "nothing listens before start");

    server.start().await.unwrap();
    let rejection = server.post("/anything", json!({}), "").await.unwrap_err();
    assert_eq!(rejection.response().map(|r| r.status.as_u16()), Some(404));

    server.stop().await.unwrap();
}
