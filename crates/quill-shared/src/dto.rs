//! Data Transfer Objects - the mapped representations exposed to API callers.
//!
//! Mapping is pure: the same stored record always maps to the same response,
//! and sensitive fields never cross this boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Post, User};

/// Public shape of a user. The password hash is not part of this type, so
/// it cannot leak through serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// Public shape of a post. `author` is the derived display name, not the
/// stored name-part pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author: String,
    pub content: Option<String>,
    pub title: String,
    pub created: DateTime<Utc>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            author: post.author_name(),
            content: post.content.clone(),
            title: post.title.clone(),
            created: post.created,
        }
    }
}

/// Short confirmation body, e.g. after a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::Author;

    #[test]
    fn user_mapping_never_exposes_the_hash() {
        let user = User::new(
            "ada".to_string(),
            "$argon2id$not-a-real-hash".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
        );

        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"username\":\"ada\""));
        assert!(json.contains("\"firstName\":\"Ada\""));
    }

    #[test]
    fn post_mapping_derives_the_author_name() {
        let post = Post::new(
            Author {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
            "On Engines".to_string(),
            Some("Analytical".to_string()),
        );

        let mapped = PostResponse::from(&post);
        assert_eq!(mapped.author, "Ada Lovelace");
        assert_eq!(mapped.title, "On Engines");
        assert_eq!(mapped.id, post.id);
    }

    #[test]
    fn mapping_is_idempotent() {
        let post = Post::new(Author::default(), "t".to_string(), None);
        let a = serde_json::to_value(PostResponse::from(&post)).unwrap();
        let b = serde_json::to_value(PostResponse::from(&post)).unwrap();
        assert_eq!(a, b);
    }
}
