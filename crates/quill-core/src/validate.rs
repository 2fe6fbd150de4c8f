//! Request validation rules.
//!
//! Pure functions over raw JSON bodies that either produce a typed input
//! struct or fail with the first violated rule. Rules are evaluated in a
//! fixed order and only the first violation is reported.

use serde_json::Value;

use crate::domain::{Author, PostPatch};
use crate::error::DomainError;

/// Validated input for user creation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Validated input for post creation.
///
/// Deliberately has no author: the stored author is always the
/// authenticated caller, regardless of what the body claims.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
}

fn require_string(
    body: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, DomainError> {
    let value = body.get(field).ok_or(DomainError::MissingField(field))?;
    let s = value
        .as_str()
        .ok_or(DomainError::IncorrectFieldType(field))?;
    // Emptiness is judged on the raw value; trimming happens at storage time.
    if s.is_empty() {
        return Err(DomainError::IncorrectFieldLength(field));
    }
    Ok(s.to_string())
}

/// Validate a user-creation body.
///
/// Check order: body present, then `username` (present, string, non-empty),
/// then `password` (present, string, non-empty). Name parts are optional
/// and default to empty strings.
pub fn validate_new_user(body: &Value) -> Result<NewUser, DomainError> {
    let obj = body.as_object().ok_or(DomainError::MissingBody)?;

    let username = require_string(obj, "username")?;
    let password = require_string(obj, "password")?;

    Ok(NewUser {
        username,
        password,
        first_name: obj
            .get("firstName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        last_name: obj
            .get("lastName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}

/// Validate a post-creation body.
///
/// The contract requires the `title`, `content` and `author` keys to be
/// present, but checks presence only. The `author` value is discarded:
/// requiring it keeps the input contract explicit while the stored author
/// is taken from the authenticated caller, so it cannot be spoofed.
pub fn validate_new_post(body: &Value) -> Result<NewPost, DomainError> {
    let obj = body.as_object().ok_or(DomainError::MissingBody)?;

    for field in ["title", "content", "author"] {
        if !obj.contains_key(field) {
            return Err(DomainError::MissingKey(field));
        }
    }

    Ok(NewPost {
        title: obj
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        content: obj.get("content").and_then(Value::as_str).map(str::to_string),
    })
}

/// Build a partial update from a post-update body.
///
/// No field is required; every updatable field present in the body is
/// copied into the patch and everything else stays untouched. A `content`
/// key holding null clears the stored content.
pub fn post_patch(body: &Value) -> PostPatch {
    let Some(obj) = body.as_object() else {
        return PostPatch::default();
    };

    PostPatch {
        title: obj.get("title").and_then(Value::as_str).map(str::to_string),
        content: obj
            .get("content")
            .map(|v| v.as_str().map(str::to_string)),
        author: obj
            .get("author")
            .and_then(|v| serde_json::from_value::<Author>(v.clone()).ok()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_user_body_passes() {
        let body = json!({
            "username": "ada",
            "password": "secret",
            "firstName": "Ada",
            "lastName": "Lovelace"
        });
        let user = validate_new_user(&body).unwrap();
        assert_eq!(user.username, "ada");
        assert_eq!(user.password, "secret");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
    }

    #[test]
    fn name_parts_default_to_empty() {
        let body = json!({"username": "ada", "password": "secret"});
        let user = validate_new_user(&body).unwrap();
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(matches!(
            validate_new_user(&json!("nope")),
            Err(DomainError::MissingBody)
        ));
    }

    #[test]
    fn first_violated_user_rule_wins() {
        // Both fields missing: username is checked first.
        let err = validate_new_user(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Missing field: username");

        let err = validate_new_user(&json!({"username": 7, "password": 7})).unwrap_err();
        assert_eq!(err.to_string(), "Incorrect field type: username");

        let err = validate_new_user(&json!({"username": "", "password": ""})).unwrap_err();
        assert_eq!(err.to_string(), "Incorrect field length: username");

        let err = validate_new_user(&json!({"username": "ada"})).unwrap_err();
        assert_eq!(err.to_string(), "Missing field: password");

        let err = validate_new_user(&json!({"username": "ada", "password": ""})).unwrap_err();
        assert_eq!(err.to_string(), "Incorrect field length: password");
    }

    #[test]
    fn whitespace_username_is_not_empty() {
        // The length check runs on the raw value; trimming is a storage concern.
        let body = json!({"username": "  ", "password": "secret"});
        assert!(validate_new_user(&body).is_ok());
    }

    #[test]
    fn post_body_requires_all_three_keys() {
        let err = validate_new_post(&json!({"content": "c", "author": {}})).unwrap_err();
        assert_eq!(err.to_string(), "Missing `title` in request body");

        let err = validate_new_post(&json!({"title": "t", "author": {}})).unwrap_err();
        assert_eq!(err.to_string(), "Missing `content` in request body");

        let err = validate_new_post(&json!({"title": "t", "content": "c"})).unwrap_err();
        assert_eq!(err.to_string(), "Missing `author` in request body");
    }

    #[test]
    fn post_author_value_is_discarded() {
        let body = json!({
            "title": "t",
            "content": "c",
            "author": {"firstName": "Spoofed", "lastName": "Name"}
        });
        let post = validate_new_post(&body).unwrap();
        assert_eq!(post.title, "t");
        assert_eq!(post.content.as_deref(), Some("c"));
        // NewPost carries no author at all.
    }

    #[test]
    fn patch_copies_only_present_fields() {
        let patch = post_patch(&json!({"title": "new"}));
        assert_eq!(patch.title.as_deref(), Some("new"));
        assert!(patch.content.is_none());
        assert!(patch.author.is_none());

        let patch = post_patch(&json!({"content": null}));
        assert_eq!(patch.content, Some(None));

        let patch = post_patch(&json!({
            "author": {"firstName": "Ada", "lastName": "Lovelace"}
        }));
        let author = patch.author.unwrap();
        assert_eq!(author.first_name, "Ada");
        assert_eq!(author.last_name, "Lovelace");
    }

    #[test]
    fn empty_patch_is_empty() {
        assert!(post_patch(&json!({})).is_empty());
        assert!(post_patch(&json!({"unrelated": 1})).is_empty());
    }
}
