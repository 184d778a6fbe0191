use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::config::{Config, DatabaseConfig};
use crate::database::ConnectionPair;
use crate::entities::tokens;

use super::harness::{Harness, HarnessOptions};

/// Returns an in-memory fast/slow pair with all migrations applied
///
/// Every call opens fresh databases, so tests never see each other's rows.
///
/// # Panics
/// Panics if a connection or a migration fails. Setup is expected to fail
/// fast when broken.
pub async fn connections() -> ConnectionPair {
    ConnectionPair::open(&DatabaseConfig::default())
        .await
        .expect("Failed to open in-memory connections")
}

/// Harness on `port` backed by its own in-memory connections.
pub async fn harness(port: u16) -> (Harness, ConnectionPair) {
    harness_with(HarnessOptions::port(port)).await
}

pub async fn harness_with(options: HarnessOptions) -> (Harness, ConnectionPair) {
    let connection = connections().await;
    let base = Config::default().with_connection(Some(connection.clone()));

    (Harness::new(options, &base), connection)
}

/// Issue a session token for a random user straight into the fast tier.
pub async fn token(db: &DatabaseConnection) -> String {
    issue(db, None).await
}

/// Issue a token that expired an hour ago.
pub async fn expired_token(db: &DatabaseConnection) -> String {
    issue(db, Some(Utc::now().naive_utc() - Duration::hours(1))).await
}

async fn issue(db: &DatabaseConnection, expired_at: Option<chrono::NaiveDateTime>) -> String {
    let model = tokens::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        expired_at,
    };

    model
        .store(db)
        .await
        .expect("Failed to store token")
        .id
        .to_string()
}

/// In-process service with every route and fresh in-memory connections,
/// for requests through `actix_web::test` without binding a port.
#[macro_export]
macro_rules! service {
    () => {{
        let connection = $crate::testing::setup::connections().await;
        let config = $crate::config::Config::default().with_connection(Some(connection.clone()));
        let application = $crate::server::Application::build(&config, true);
        let app = ::actix_web::App::new()
            .configure(move |app| application.configure(app))
            .default_service(::actix_web::web::to($crate::router::not_found));

        let service = ::actix_web::test::init_service(app).await;

        (service, connection)
    }};
}
