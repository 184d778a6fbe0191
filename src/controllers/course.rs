use actix_web::web::{Data, Json};
use actix_web::Responder;

use crate::database::ConnectionPair;
use crate::errors::Error;
use crate::middlewares::Auth;
use crate::requests::course::{CourseShowRequest, CourseStoreRequest};
use crate::services;

/// Store new course
///
/// Fail if
/// - the body does not validate (400)
/// - the code already exists (406)
#[post("/courses/create")]
pub async fn store(
    _: Auth,
    connection: Data<ConnectionPair>,
    Json(request): Json<CourseStoreRequest>,
) -> Result<impl Responder, Error> {
    let course = services::course::store(&connection.slow, request).await?;

    Ok(Json(course))
}

/// Find course by code
#[post("/courses/show")]
pub async fn show(
    _: Auth,
    connection: Data<ConnectionPair>,
    Json(request): Json<CourseShowRequest>,
) -> Result<impl Responder, Error> {
    let course = services::course::show(&connection.slow, request).await?;

    Ok(Json(course))
}

#[post("/courses/list")]
pub async fn list(_: Auth, connection: Data<ConnectionPair>) -> Result<impl Responder, Error> {
    let courses = services::course::list(&connection.slow).await?;

    Ok(Json(courses))
}
