//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::credentials::CredentialVerifier;
use quill_core::ports::{PasswordService, PostRepository, UserRepository};
use quill_infra::database::{InMemoryPostRepository, InMemoryUserRepository};
use quill_infra::{Argon2PasswordService, DatabaseConfig};

#[cfg(feature = "postgres")]
use quill_infra::{DatabaseConnections, PostgresPostRepository, PostgresUserRepository};

/// Shared application state. Cloned into every worker; the repositories are
/// the only cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub verifier: CredentialVerifier,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (users, posts): (Arc<dyn UserRepository>, Arc<dyn PostRepository>) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => (
                        Arc::new(PostgresUserRepository::new(connections.main.clone())) as _,
                        Arc::new(PostgresPostRepository::new(connections.main)) as _,
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory store.",
                            e
                        );
                        (
                            Arc::new(InMemoryUserRepository::new()) as _,
                            Arc::new(InMemoryPostRepository::new()) as _,
                        )
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                (
                    Arc::new(InMemoryUserRepository::new()) as _,
                    Arc::new(InMemoryPostRepository::new()) as _,
                )
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (users, posts): (Arc<dyn UserRepository>, Arc<dyn PostRepository>) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using the in-memory store");
            (
                Arc::new(InMemoryUserRepository::new()) as _,
                Arc::new(InMemoryPostRepository::new()) as _,
            )
        };

        tracing::info!("Application state initialized");

        Self::assemble(users, posts)
    }

    /// State backed entirely by the in-memory store. Used in tests.
    pub fn in_memory() -> Self {
        Self::assemble(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }

    fn assemble(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let verifier = CredentialVerifier::new(users.clone(), passwords.clone());

        Self {
            users,
            posts,
            passwords,
            verifier,
        }
    }
}
