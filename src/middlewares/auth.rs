use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::database::ConnectionPair;
use crate::entities::tokens;
use crate::errors::Error;

/// Session resolved from the `Authorization: Bearer <token>` header.
///
/// - header missing or not a bearer scheme: 400
/// - bearer value empty: 401
/// - token unparsable, unknown or expired: 403
#[derive(Clone, Debug)]
pub struct Auth {
    pub token: Uuid,
    pub user_id: Uuid,
}

/// Bearer value of an authorization header, `None` when the scheme is wrong.
pub fn bearer(header: &str) -> Option<&str> {
    if header == "Bearer" {
        return Some("");
    }

    header.strip_prefix("Bearer ").map(str::trim)
}

impl FromRequest for Auth {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let start = std::time::Instant::now();

        let header = match req.headers().get("Authorization") {
            Some(header) => header.to_str().ok().map(str::to_string),
            None => None,
        };

        let token = match header.as_deref().and_then(bearer) {
            Some(token) => token.to_string(),
            None => {
                return Box::pin(async move {
                    tracing::error!("Missing or malformed authorization header");

                    Err(Error::bad_request("Missing authorization header"))
                });
            }
        };

        if token.is_empty() {
            return Box::pin(async move {
                tracing::debug!("Empty bearer token");

                Err(Error::unauthorized("Unauthorized"))
            });
        }

        let id = match Uuid::parse_str(&token) {
            Ok(id) => id,
            Err(e) => {
                return Box::pin(async move {
                    tracing::debug!(error = %e, "Failed to parse token");

                    Err(Error::forbidden("Invalid token"))
                });
            }
        };

        let connection = match req.app_data::<Data<ConnectionPair>>().cloned() {
            Some(connection) => connection,
            None => {
                return Box::pin(async move {
                    tracing::error!("Failed to get database connection");

                    Err(Error::internal("Failed to get database connection"))
                });
            }
        };

        Box::pin(async move {
            let token = tokens::Model::find_active(&connection.fast, id).await?;

            let token = match token {
                Some(token) => token,
                None => {
                    tracing::debug!(token = %id, "Token not found or expired");

                    return Err(Error::forbidden("Invalid token"));
                }
            };

            tracing::debug!("Authentication took: {:?}", start.elapsed());

            Ok(Auth {
                token: token.id,
                user_id: token.user_id,
            })
        })
    }
}
