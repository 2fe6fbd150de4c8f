//! Credential verification for HTTP Basic authentication.

use std::sync::Arc;

use crate::domain::User;
use crate::error::RepoError;
use crate::ports::{PasswordService, UserRepository};

/// Terminal outcome of a single authentication attempt.
#[derive(Debug)]
pub enum CredentialOutcome {
    Authenticated(User),
    UnknownUser,
    BadPassword,
}

impl CredentialOutcome {
    /// Internal rejection reason, for logs only. Callers must present both
    /// rejections identically so a probe cannot tell which one occurred.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            CredentialOutcome::Authenticated(_) => None,
            CredentialOutcome::UnknownUser => Some("Incorrect username"),
            CredentialOutcome::BadPassword => Some("Incorrect password"),
        }
    }
}

/// Checks a username/password pair against stored credentials.
#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl CredentialVerifier {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Verify one credential pair. Store failures propagate; a malformed
    /// stored hash counts as a non-match rather than an error.
    pub async fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> Result<CredentialOutcome, RepoError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(CredentialOutcome::UnknownUser);
        };

        let valid = self
            .passwords
            .verify(password, &user.password_hash)
            .unwrap_or(false);

        if valid {
            Ok(CredentialOutcome::Authenticated(user))
        } else {
            Ok(CredentialOutcome::BadPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::domain::User;
    use crate::ports::{AuthError, BaseRepository};

    struct OneUserRepo(User);

    #[async_trait]
    impl BaseRepository<User, Uuid> for OneUserRepo {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
            Ok((self.0.id == id).then(|| self.0.clone()))
        }

        async fn find_all(&self) -> Result<Vec<User>, RepoError> {
            Ok(vec![self.0.clone()])
        }

        async fn save(&self, user: User) -> Result<User, RepoError> {
            Ok(user)
        }

        async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for OneUserRepo {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
            Ok((self.0.username == username).then(|| self.0.clone()))
        }
    }

    /// Plaintext comparison standing in for a real hasher.
    struct PlainPasswords;

    impl PasswordService for PlainPasswords {
        fn hash(&self, password: &str) -> Result<String, AuthError> {
            Ok(password.to_string())
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
            if hash == "malformed" {
                return Err(AuthError::Hashing("bad hash".to_string()));
            }
            Ok(password == hash)
        }
    }

    fn verifier(stored_hash: &str) -> CredentialVerifier {
        let user = User::new(
            "ada".to_string(),
            stored_hash.to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
        );
        CredentialVerifier::new(Arc::new(OneUserRepo(user)), Arc::new(PlainPasswords))
    }

    #[tokio::test]
    async fn known_user_with_matching_password_authenticates() {
        let outcome = verifier("secret").verify("ada", "secret").await.unwrap();
        match outcome {
            CredentialOutcome::Authenticated(user) => assert_eq!(user.username, "ada"),
            other => panic!("expected Authenticated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        let outcome = verifier("secret").verify("nobody", "secret").await.unwrap();
        assert!(matches!(outcome, CredentialOutcome::UnknownUser));
        assert_eq!(outcome.reason(), Some("Incorrect username"));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let outcome = verifier("secret").verify("ada", "wrong").await.unwrap();
        assert!(matches!(outcome, CredentialOutcome::BadPassword));
        assert_eq!(outcome.reason(), Some("Incorrect password"));
    }

    #[tokio::test]
    async fn malformed_stored_hash_counts_as_no_match() {
        let outcome = verifier("malformed").verify("ada", "secret").await.unwrap();
        assert!(matches!(outcome, CredentialOutcome::BadPassword));
    }
}
