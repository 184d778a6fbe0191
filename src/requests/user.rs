use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStoreRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirmation: String,
}

impl UserStoreRequest {
    /// Validates the user store request
    ///
    /// Returns Ok(()) if all validations pass, Err(Vec<String>) with error messages otherwise
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !email.contains('@') {
            errors.push("Email is invalid".to_string());
        }

        let username = self.username.trim();
        if username.len() < 3 {
            errors.push("Username must be at least 3 characters".to_string());
        }

        if self.password.len() < 8 {
            errors.push("Password must be at least 8 characters".to_string());
        }

        if self.password != self.password_confirmation {
            errors.push("Password confirmation does not match".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
