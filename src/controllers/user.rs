use actix_web::web::{Data, Json};
use actix_web::Responder;

use crate::database::ConnectionPair;
use crate::errors::Error;
use crate::requests::user::UserStoreRequest;
use crate::services;

/// Store new user
///
/// Public route. Fail if
/// - the body does not validate (400)
/// - email or username already exist (406)
#[post("/users/create")]
pub async fn store(
    connection: Data<ConnectionPair>,
    Json(request): Json<UserStoreRequest>,
) -> Result<impl Responder, Error> {
    let user = services::user::store(&connection.slow, request).await?;

    Ok(Json(user))
}
