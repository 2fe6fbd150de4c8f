//! HTTP Basic authentication extractor.
//!
//! Credentials travel with every request; there is no session state. Every
//! rejection - missing header, malformed header, unknown user, wrong
//! password - produces the identical 401 body, so a caller cannot probe
//! which part failed. The distinction exists only in the logs.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use futures::future::LocalBoxFuture;

use quill_core::credentials::CredentialOutcome;
use quill_core::domain::{Author, User};
use quill_shared::ErrorResponse;

use crate::state::AppState;

/// Authenticated caller identity.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl Identity {
    /// The author value stamped onto posts created by this caller.
    pub fn author(&self) -> Author {
        Author {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub enum AuthenticationError {
    /// Bad or absent credentials. Always the same 401 body.
    Rejected,
    /// The credential lookup itself failed.
    Internal,
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticationError::Rejected => write!(f, "Unauthorized"),
            AuthenticationError::Internal => write!(f, "Authentication backend failure"),
        }
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            AuthenticationError::Rejected => actix_web::http::StatusCode::UNAUTHORIZED,
            AuthenticationError::Internal => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AuthenticationError::Rejected => ErrorResponse::unauthorized(),
            AuthenticationError::Internal => ErrorResponse::internal_error(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// Decode `Authorization: Basic base64(user:pass)` into a credential pair.
fn decode_basic(req: &HttpRequest) -> Option<(String, String)> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let credentials = decode_basic(req);

        Box::pin(async move {
            let Some(state) = state else {
                tracing::error!("AppState not found in app data");
                return Err(AuthenticationError::Internal);
            };

            let Some((username, password)) = credentials else {
                tracing::debug!("Missing or malformed Basic credentials");
                return Err(AuthenticationError::Rejected);
            };

            match state.verifier.verify(&username, &password).await {
                Ok(CredentialOutcome::Authenticated(user)) => Ok(Identity::from(user)),
                Ok(rejected) => {
                    tracing::debug!(
                        %username,
                        reason = rejected.reason().unwrap_or_default(),
                        "Authentication rejected"
                    );
                    Err(AuthenticationError::Rejected)
                }
                Err(e) => {
                    tracing::error!("Credential lookup failed: {}", e);
                    Err(AuthenticationError::Internal)
                }
            }
        })
    }
}
