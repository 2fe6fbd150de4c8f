//! User handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use quill_core::domain::User;
use quill_core::ports::{BaseRepository, UserRepository};
use quill_core::validate::validate_new_user;
use quill_shared::UserResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /users - public.
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    Ok(HttpResponse::Ok().json(users.iter().map(UserResponse::from).collect::<Vec<_>>()))
}

/// POST /users - public signup.
///
/// Validation runs before any store access; the uniqueness check only after
/// the shape checks pass.
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let input = validate_new_user(&body)?;

    if state.users.find_by_username(&input.username).await?.is_some() {
        return Err(AppError::BadRequest("username taken".to_string()));
    }

    let password_hash = state
        .passwords
        .hash(&input.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(input.username, password_hash, input.first_name, input.last_name);
    let saved = state.users.save(user).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(&saved)))
}
