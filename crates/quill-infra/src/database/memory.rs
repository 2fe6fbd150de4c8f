//! In-memory repository implementations - used when no database is
//! configured, and by tests. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, PostPatch, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

/// In-memory user store keyed by id, with a username scan for lookups.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let mut users: Vec<User> = self.store.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        // Mirror the unique index on username.
        if store
            .values()
            .any(|u| u.username == user.username && u.id != user.id)
        {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

/// In-memory post store keyed by id.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self.store.read().await.values().cloned().collect();
        posts.sort_by_key(|p| p.created);
        Ok(posts)
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.store.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply_patch(patch);
        Ok(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::Author;

    fn user(name: &str) -> User {
        User::new(
            name.to_string(),
            "hash".to_string(),
            String::new(),
            String::new(),
        )
    }

    fn post(title: &str) -> Post {
        Post::new(
            Author {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
            title.to_string(),
            Some("content".to_string()),
        )
    }

    #[tokio::test]
    async fn save_and_find_by_username() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("ada")).await.unwrap();

        let found = repo.find_by_username("ada").await.unwrap();
        assert!(found.is_some());
        assert!(repo.find_by_username("lovelace").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_violates_constraint() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("ada")).await.unwrap();

        let err = repo.save(user("ada")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn partial_update_merges_into_stored_post() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.save(post("original")).await.unwrap();

        let updated = repo
            .update(
                saved.id,
                PostPatch {
                    title: Some("changed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "changed");
        assert_eq!(updated.content.as_deref(), Some("content"));
        assert_eq!(updated.author_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn update_of_unknown_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let err = repo
            .update(Uuid::new_v4(), PostPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn delete_then_find_is_gone() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.save(post("t")).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(saved.id).await.unwrap_err(),
            RepoError::NotFound
        ));
    }
}
