use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Embedded author value on a post.
///
/// This is a copy of the creating user's name at creation time, not a
/// reference to the user record. Renaming a user later leaves existing
/// posts untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

/// Post entity - a blog post with an embedded author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: Option<String>,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID and creation timestamp.
    pub fn new(author: Author, title: String, content: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created: Utc::now(),
        }
    }

    /// Display name for the author: first and last name joined by a space,
    /// with surrounding whitespace trimmed so a missing part leaves no
    /// stray padding.
    pub fn author_name(&self) -> String {
        format!("{} {}", self.author.first_name, self.author.last_name)
            .trim()
            .to_string()
    }

    /// Merge a partial update into this post. Fields absent from the patch
    /// are left untouched.
    pub fn apply_patch(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
    }
}

/// Partial update of a post. `None` means "leave the stored field alone";
/// `content` distinguishes "set to null" (`Some(None)`) from "not supplied".
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<Option<String>>,
    pub author: Option<Author>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(first: &str, last: &str) -> Post {
        Post::new(
            Author {
                first_name: first.to_string(),
                last_name: last.to_string(),
            },
            "title".to_string(),
            None,
        )
    }

    #[test]
    fn author_name_joins_and_trims() {
        assert_eq!(post("Ada", "Lovelace").author_name(), "Ada Lovelace");
        assert_eq!(post("Ada", "").author_name(), "Ada");
        assert_eq!(post("", "Lovelace").author_name(), "Lovelace");
        assert_eq!(post("", "").author_name(), "");
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let mut p = post("Ada", "Lovelace");
        p.content = Some("original".to_string());

        p.apply_patch(PostPatch {
            title: Some("updated".to_string()),
            ..Default::default()
        });

        assert_eq!(p.title, "updated");
        assert_eq!(p.content.as_deref(), Some("original"));
        assert_eq!(p.author_name(), "Ada Lovelace");
    }

    #[test]
    fn patch_can_clear_content() {
        let mut p = post("Ada", "Lovelace");
        p.content = Some("original".to_string());

        p.apply_patch(PostPatch {
            content: Some(None),
            ..Default::default()
        });

        assert_eq!(p.content, None);
    }
}
