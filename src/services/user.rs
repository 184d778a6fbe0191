use anyhow::Context;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::entities::users::Model;
use crate::errors::Error;
use crate::requests::user::UserStoreRequest;
use crate::responses::user::User;
use crate::security::PasswordHasher;

#[::tracing::instrument(skip(db, request), fields(email = %request.email, username = %request.username))]
pub async fn store(db: &DatabaseConnection, request: UserStoreRequest) -> Result<User, Error> {
    if let Err(errors) = request.validate() {
        return Err(Error::bad_request(errors.join(", ")));
    }

    let name = request.name.trim().to_string();
    let email = request.email.trim().to_lowercase();
    let username = request.username.trim().to_lowercase();

    if Model::email_exists(db, &email).await? {
        return Err(Error::not_acceptable("Email already exists."));
    }

    if Model::username_exists(db, &username).await? {
        return Err(Error::not_acceptable("Username already exists."));
    }

    let id = Uuid::new_v4();

    ::tracing::debug!(user_id = %id, "Hashing password with Argon2id");
    let password = PasswordHasher::new()
        .hash(&request.password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    let now = Utc::now().naive_utc();
    let model = Model {
        id,
        name,
        email,
        username,
        password,
        created_at: now,
        updated_at: now,
    };

    let model = model
        .store(db)
        .await
        .context("Failed to store user to database")?;

    ::tracing::info!(user_id = %id, "User created successfully");

    Ok(model.into())
}
