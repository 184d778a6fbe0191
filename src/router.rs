use actix_web::web::{self, JsonConfig, ServiceConfig};
use actix_web::{HttpRequest, HttpResponse};

use crate::controllers;
use crate::errors::Error;

/// Business routes, all mounted under `/api`.
pub fn route(app: &mut ServiceConfig) {
    app.service(index);
    app.service(
        web::scope("/api")
            // User
            .service(controllers::user::store)
            // Course
            .service(controllers::course::store)
            .service(controllers::course::show)
            .service(controllers::course::list),
    );
}

/// Malformed or incomplete JSON bodies answer 412 instead of actix's default 400.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _| {
        ::tracing::debug!(error = %err, "Rejected request body");

        Error::precondition_failed(err.to_string()).into()
    })
}

/// Fallback for every request no route matched.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::not_found(format!(
        "Route {} {} not found",
        req.method(),
        req.path()
    )))
}

#[get("/")]
pub async fn index() -> &'static str {
    "Hello World"
}
