//! Integration tests for the assertion helpers
//!
//! Every test checks that `done` fires exactly once, whatever the outcome.
//! Ports 41200-41299.

use actix_web::http::StatusCode;
use lighter_campus::Config;
use lighter_campus::testing::{
    setup, AssertionMismatch, Completion, Harness, HarnessOptions, ResponseKind,
};
use serde_json::{json, Value};

fn user_payload(username: &str) -> Value {
    json!({
        "name": "John Doe",
        "email": format!("{}@local.test", username),
        "username": username,
        "password": "SecureP@ss123",
        "passwordConfirmation": "SecureP@ss123",
    })
}

fn course_payload(code: &str) -> Value {
    json!({
        "code": code,
        "year": 2024,
        "name": { "en": "Programming Fundamentals" },
        "hours": { "theory": 30, "practice": 15, "labs": 15 },
        "credits": 5,
        "ects": 6,
    })
}

// =============================================================================
// Status-code helpers
// =============================================================================

#[actix_web::test]
async fn test_post_for_ok_on_user_create() {
    let (server, _connection) = setup::harness(41201).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_ok("/users/create", completion.done(), user_payload("john_doe"), "")
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_ok_fails_on_duplicate_user() {
    let (server, _connection) = setup::harness(41202).await;
    server.start().await.unwrap();

    server
        .post("/users/create", user_payload("jane_doe"), "")
        .await
        .expect("first create should succeed");

    let completion = Completion::new();
    server
        .post_for_ok("/users/create", completion.done(), user_payload("jane_doe"), "")
        .await;

    match completion.assert_failed() {
        AssertionMismatch::UnexpectedRejection(rejection) => {
            assert_eq!(rejection.response().unwrap().status, StatusCode::NOT_ACCEPTABLE);
        }
        other => panic!("unexpected mismatch: {other}"),
    }

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_not_found_on_missing_route() {
    let (server, _connection) = setup::harness(41203).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_not_found("/missing", completion.done(), json!({}), "")
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_not_found_fails_on_existing_route() {
    let (server, _connection) = setup::harness(41204).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_not_found("/users/create", completion.done(), user_payload("not_missing"), "")
        .await;

    assert!(matches!(
        completion.assert_failed(),
        AssertionMismatch::UnexpectedSuccess(StatusCode::OK)
    ));

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_bad_body_on_incomplete_json() {
    let (server, _connection) = setup::harness(41205).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_bad_body("/users/create", completion.done(), json!({ "name": "John" }), "")
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_deny_on_invalid_values() {
    let (server, _connection) = setup::harness(41206).await;
    server.start().await.unwrap();

    let mut payload = user_payload("john_doe");
    payload["passwordConfirmation"] = json!("something else");

    let completion = Completion::new();
    server
        .post_for_deny("/users/create", completion.done(), payload, "")
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_deny_reports_actual_status() {
    let (server, _connection) = setup::harness(41207).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_deny("/users/create", completion.done(), json!({}), "")
        .await;

    match completion.assert_failed() {
        AssertionMismatch::Status { expected, actual } => {
            assert_eq!(expected, StatusCode::BAD_REQUEST);
            assert_eq!(actual, StatusCode::PRECONDITION_FAILED);
        }
        other => panic!("unexpected mismatch: {other}"),
    }

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_code_with_token() {
    let (server, connection) = setup::harness(41208).await;
    let token = setup::token(&connection.fast).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_code(
            "/courses/list",
            completion.done(),
            StatusCode::OK,
            ResponseKind::Good,
            json!({}),
            &token,
        )
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_code_expired_token_is_forbidden() {
    let (server, connection) = setup::harness(41209).await;
    let token = setup::expired_token(&connection.fast).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_code(
            "/courses/list",
            completion.done(),
            StatusCode::FORBIDDEN,
            ResponseKind::Error,
            json!({}),
            &token,
        )
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
}

// =============================================================================
// Terminal helpers with caller-supplied checks
// =============================================================================

#[actix_web::test]
async fn test_post_for_good_runs_caller_checks() {
    let (server, connection) = setup::harness(41210).await;
    let token = setup::token(&connection.fast).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_good(
            "/courses/create",
            completion.done(),
            |response| {
                if response.body["code"] == "CSS101" && response.body["language"] == "en" {
                    Ok(())
                } else {
                    Err(AssertionMismatch::Check(format!("unexpected body {}", response.body)))
                }
            },
            course_payload("css101"),
            &token,
        )
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_good_reports_failed_checks() {
    let (server, _connection) = setup::harness(41211).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_good(
            "/users/create",
            completion.done(),
            |_| Err(AssertionMismatch::Check("always fails".to_string())),
            user_payload("checked"),
            "",
        )
        .await;

    assert!(matches!(completion.assert_failed(), AssertionMismatch::Check(_)));

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_error_sees_rejection_body() {
    let (server, connection) = setup::harness(41212).await;
    let token = setup::token(&connection.fast).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_error(
            "/courses/show",
            completion.done(),
            |response| match response.body["message"].as_str() {
                Some(message) if message.contains("CSS404") => Ok(()),
                _ => Err(AssertionMismatch::Check(format!("unexpected body {}", response.body))),
            },
            json!({ "code": "css404" }),
            &token,
        )
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_helpers_against_stopped_server_report_once() {
    let (server, _connection) = setup::harness(41213).await;

    let completion = Completion::new();
    server
        .post_for_error("/missing", completion.done(), |_| Ok(()), json!({}), "")
        .await;
    assert!(matches!(completion.assert_failed(), AssertionMismatch::MissingResponse(_)));

    let completion = Completion::new();
    server
        .post_for_ok("/users/create", completion.done(), user_payload("nobody"), "")
        .await;
    match completion.assert_failed() {
        AssertionMismatch::UnexpectedRejection(rejection) => assert!(rejection.response().is_none()),
        other => panic!("unexpected mismatch: {other}"),
    }
}

// =============================================================================
// Protected-route challenge
// =============================================================================

#[actix_web::test]
async fn test_post_for_protected_on_course_create() {
    let (server, _connection) = setup::harness(41214).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_protected("/courses/create", completion.done())
        .await;

    assert_eq!(completion.calls(), 1);
    completion.assert_passed();

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_protected_fails_on_public_route() {
    let (server, _connection) = setup::harness(41215).await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_protected("/users/create", completion.done())
        .await;

    match completion.assert_failed() {
        AssertionMismatch::Status { expected, .. } => assert_eq!(expected, StatusCode::UNAUTHORIZED),
        other => panic!("unexpected mismatch: {other}"),
    }

    server.stop().await.unwrap();
}

#[actix_web::test]
async fn test_post_for_protected_without_connections() {
    let server = Harness::new(HarnessOptions::port(41217), &Config::default());
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_protected("/courses/list", completion.done())
        .await;
    completion.assert_passed();

    server.stop().await.unwrap();
}

// =============================================================================
// Routes-less mode
// =============================================================================

#[actix_web::test]
async fn test_without_routes_only_answers_not_found() {
    let (server, _connection) = setup::harness_with(HarnessOptions {
        without_routes: true,
        ..HarnessOptions::port(41216)
    })
    .await;
    server.start().await.unwrap();

    let completion = Completion::new();
    server
        .post_for_not_found("/users/create", completion.done(), user_payload("john_doe"), "")
        .await;
    completion.assert_passed();

    let completion = Completion::new();
    server
        .post_for_protected("/courses/create", completion.done())
        .await;
    match completion.assert_failed() {
        AssertionMismatch::Status { actual, .. } => assert_eq!(actual, StatusCode::NOT_FOUND),
        other => panic!("unexpected mismatch: {other}"),
    }

    server.stop().await.unwrap();
}
