//! Response-contract helpers composed over [`Harness::post`]
//!
//! Each helper reports through a `done` callback that is invoked exactly
//! once: `Ok(())` when the contract held, `Err(AssertionMismatch)` when it
//! did not. Nothing here panics, so one failed contract does not take the
//! rest of a suite down with it.

use actix_web::http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

use super::dispatch::{DispatchRejection, Response};
use super::harness::Harness;

/// Token sent by [`Harness::post_for_protected`] to trigger the 403 branch.
pub const FALSE_TOKEN: &str = "some.false.token";

pub type Outcome = Result<(), AssertionMismatch>;

#[derive(Debug, Clone, Error)]
pub enum AssertionMismatch {
    #[error("Expected the request to be rejected, but it succeeded with status {0}")]
    UnexpectedSuccess(StatusCode),

    #[error("Expected the request to succeed, but it was rejected: {0}")]
    UnexpectedRejection(DispatchRejection),

    #[error("Request was rejected without a response: {0}")]
    MissingResponse(String),

    #[error("Expected status {expected}, got {actual}")]
    Status {
        expected: StatusCode,
        actual: StatusCode,
    },

    #[error("{0}")]
    Check(String),
}

/// Which terminal helper [`Harness::post_for_code`] goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// The request must resolve (2xx).
    Good,
    /// The request must be rejected with a response.
    Error,
}

pub fn expect_status(response: &Response, expected: StatusCode) -> Outcome {
    if response.status == expected {
        Ok(())
    } else {
        Err(AssertionMismatch::Status {
            expected,
            actual: response.status,
        })
    }
}

fn expect_rejected_with(
    outcome: Result<Response, DispatchRejection>,
    expected: StatusCode,
) -> Outcome {
    match outcome {
        Ok(response) => Err(AssertionMismatch::UnexpectedSuccess(response.status)),
        Err(DispatchRejection::Status(response)) => expect_status(&response, expected),
        Err(DispatchRejection::Transport(message)) => Err(AssertionMismatch::MissingResponse(message)),
    }
}

impl Harness {
    /// Expect the request to resolve, then run `tests` on the response.
    pub async fn post_for_good<D, T>(&self, point: &str, done: D, tests: T, body: Value, token: &str)
    where
        D: FnOnce(Outcome),
        T: FnOnce(&Response) -> Outcome,
    {
        let outcome = match self.post(point, body, token).await {
            Ok(response) => tests(&response),
            Err(rejection) => Err(AssertionMismatch::UnexpectedRejection(rejection)),
        };

        done(outcome);
    }

    /// Expect the request to be rejected, then run `tests` on the rejection's
    /// response. A transport failure has no response and fails the contract.
    pub async fn post_for_error<D, T>(&self, point: &str, done: D, tests: T, body: Value, token: &str)
    where
        D: FnOnce(Outcome),
        T: FnOnce(&Response) -> Outcome,
    {
        let outcome = match self.post(point, body, token).await {
            Ok(response) => Err(AssertionMismatch::UnexpectedSuccess(response.status)),
            Err(DispatchRejection::Status(response)) => tests(&response),
            Err(DispatchRejection::Transport(message)) => {
                Err(AssertionMismatch::MissingResponse(message))
            }
        };

        done(outcome);
    }

    pub async fn post_for_code<D>(
        &self,
        point: &str,
        done: D,
        code: StatusCode,
        kind: ResponseKind,
        body: Value,
        token: &str,
    ) where
        D: FnOnce(Outcome),
    {
        let tests = |response: &Response| expect_status(response, code);

        match kind {
            ResponseKind::Good => self.post_for_good(point, done, tests, body, token).await,
            ResponseKind::Error => self.post_for_error(point, done, tests, body, token).await,
        }
    }

    pub async fn post_for_ok<D: FnOnce(Outcome)>(&self, point: &str, done: D, body: Value, token: &str) {
        self.post_for_code(point, done, StatusCode::OK, ResponseKind::Good, body, token)
            .await
    }

    pub async fn post_for_not_found<D: FnOnce(Outcome)>(
        &self,
        point: &str,
        done: D,
        body: Value,
        token: &str,
    ) {
        self.post_for_code(point, done, StatusCode::NOT_FOUND, ResponseKind::Error, body, token)
            .await
    }

    pub async fn post_for_deny<D: FnOnce(Outcome)>(&self, point: &str, done: D, body: Value, token: &str) {
        self.post_for_code(point, done, StatusCode::BAD_REQUEST, ResponseKind::Error, body, token)
            .await
    }

    pub async fn post_for_bad_body<D: FnOnce(Outcome)>(
        &self,
        point: &str,
        done: D,
        body: Value,
        token: &str,
    ) {
        self.post_for_code(
            point,
            done,
            StatusCode::PRECONDITION_FAILED,
            ResponseKind::Error,
            body,
            token,
        )
        .await
    }

    /// Two-step challenge on a protected route: without a token the request
    /// must be rejected with 401, and only then, with [`FALSE_TOKEN`], with 403.
    pub async fn post_for_protected<D: FnOnce(Outcome)>(&self, point: &str, done: D) {
        done(self.challenge(point).await);
    }

    async fn challenge(&self, point: &str) -> Outcome {
        let anonymous = self.post(point, json!({}), "").await;
        expect_rejected_with(anonymous, StatusCode::UNAUTHORIZED)?;

        let forged = self.post(point, json!({}), FALSE_TOKEN).await;
        expect_rejected_with(forged, StatusCode::FORBIDDEN)
    }
}
