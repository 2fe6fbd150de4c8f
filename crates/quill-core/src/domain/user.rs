use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - an account that can authenticate and author posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique login name. Trimmed before storage.
    pub username: String,
    /// Never exposed through the API.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Create a new user with a generated ID.
    pub fn new(
        username: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.trim().to_string(),
            password_hash,
            first_name,
            last_name,
        }
    }
}
