//! Integration tests for named instances
//!
//! Ports 41300-41399.

use std::sync::Arc;

use lighter_campus::testing::{setup, Completion, Registry};
use serde_json::json;

#[actix_web::test]
async fn test_named_instances_are_independent() {
    let registry = Registry::new();
    let (users, _users_connection) = setup::harness(41301).await;
    let (courses, _courses_connection) = setup::harness(41302).await;

    registry.register("users", users);
    registry.register("courses", courses);

    let users = registry.get("users").unwrap();
    let courses = registry.get("courses").unwrap();

    users.start().await.unwrap();

    assert!(users.listening().await);
    assert!(!courses.listening().await, "starting one instance leaves the other stopped");

    users.stop().await.unwrap();
}

#[actix_web::test]
async fn test_instances_over_separate_pairs_are_isolated() {
    let registry = Registry::new();
    let (first, _first_connection) = setup::harness(41303).await;
    let (second, _second_connection) = setup::harness(41304).await;

    let first = registry.register("first", first);
    let second = registry.register("second", second);
    first.start().await.unwrap();
    second.start().await.unwrap();

    let payload = json!({
        "name": "John Doe",
        "email": "john@local.test",
        "username": "john_doe",
        "password": "SecureP@ss123",
        "passwordConfirmation": "SecureP@ss123",
    });

    let completion = Completion::new();
    first
        .post_for_ok("/users/create", completion.done(), payload.clone(), "")
        .await;
    completion.assert_passed();

    // same user again, but against another instance's databases
    let completion = Completion::new();
    second
        .post_for_ok("/users/create", completion.done(), payload, "")
        .await;
    completion.assert_passed();

    first.stop().await.unwrap();
    second.stop().await.unwrap();
}

#[actix_web::test]
async fn test_retrieved_instance_keeps_its_state() {
    let registry = Registry::new();
    let (server, _connection) = setup::harness(41305).await;
    registry.register("users", server);

    registry.get("users").unwrap().start().await.unwrap();

    let server = registry.get("users").unwrap();
    assert!(server.listening().await, "state is shared through the registry");

    let removed = registry.unregister("users").unwrap();
    assert!(Arc::ptr_eq(&server, &removed));

    removed.stop().await.unwrap();
    assert!(!server.listening().await);
}
