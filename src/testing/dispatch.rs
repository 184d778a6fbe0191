//! Outbound HTTP requests against a running harness
//!
//! Every assertion helper is built on [`post`]. It resolves on 2xx and
//! rejects otherwise, keeping the response for non-2xx outcomes and
//! dropping it for transport failures.

use actix_web::http::StatusCode;
use awc::Client;
use serde_json::Value;
use thiserror::Error;

/// Status and decoded body of a response.
///
/// Bodies that are not JSON are kept as a JSON string; an empty body is `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: StatusCode,
    pub body: Value,
}

#[derive(Debug, Clone, Error)]
pub enum DispatchRejection {
    #[error("Request failed with status {}", .0.status)]
    Status(Response),

    #[error("Request failed before a response arrived: {0}")]
    Transport(String),
}

impl DispatchRejection {
    /// The response behind a non-2xx rejection, `None` for transport failures.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Status(response) => Some(response),
            Self::Transport(_) => None,
        }
    }

    pub fn into_response(self) -> Option<Response> {
        match self {
            Self::Status(response) => Some(response),
            Self::Transport(_) => None,
        }
    }
}

/// `http://localhost:{port}/api/{path}`, with any leading slashes of `path`
/// folded into the `/api/` separator.
pub fn endpoint(port: u16, path: &str) -> String {
    format!(
        "http://localhost:{}/api/{}",
        port,
        path.trim_start_matches('/')
    )
}

/// POST `body` as JSON to `path` on `localhost:{port}`.
///
/// The `Authorization: Bearer {token}` header is always sent, even when
/// `token` is empty. Timeouts are whatever the awc client defaults to.
#[tracing::instrument(skip(body, token), fields(status = tracing::field::Empty))]
pub async fn post(
    port: u16,
    path: &str,
    body: &Value,
    token: &str,
) -> Result<Response, DispatchRejection> {
    let request = Client::new()
        .post(endpoint(port, path))
        .insert_header(("Authorization", format!("Bearer {}", token)));

    let mut response = request
        .send_json(body)
        .await
        .map_err(|e| DispatchRejection::Transport(e.to_string()))?;

    let status = response.status();
    let bytes = response
        .body()
        .await
        .map_err(|e| DispatchRejection::Transport(e.to_string()))?;

    tracing::Span::current().record("status", status.as_u16());

    let response = Response {
        status,
        body: decode(&bytes),
    };

    if status.is_success() {
        Ok(response)
    } else {
        Err(DispatchRejection::Status(response))
    }
}

fn decode(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
