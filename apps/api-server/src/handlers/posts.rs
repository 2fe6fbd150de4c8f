//! Post handlers. All of these require Basic authentication.

use actix_web::{HttpResponse, web};
use serde_json::Value;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::ports::{BaseRepository, PostRepository};
use quill_core::validate::{post_patch, validate_new_post};
use quill_shared::{MessageResponse, PostResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// A malformed id cannot name any post, so it gets the same 404 as an
/// unknown one.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

/// GET /posts
pub async fn list_posts(_identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;

    Ok(HttpResponse::Ok().json(posts.iter().map(PostResponse::from).collect::<Vec<_>>()))
}

/// GET /posts/{id}
pub async fn get_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(PostResponse::from(&post)))
}

/// POST /posts
///
/// The body must carry `title`, `content` and `author` keys, but the stored
/// author is always the authenticated caller - the body's author value is
/// discarded so it cannot be spoofed.
pub async fn create_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let input = validate_new_post(&body)?;

    let post = Post::new(identity.author(), input.title, input.content);
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(&saved)))
}

/// PUT /posts/{id}
///
/// Partial update: only fields present in the body are overwritten. Returns
/// 201 with the full merged document, mirroring the creation response.
pub async fn update_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let updated = state.posts.update(id, post_patch(&body)).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(&updated)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete(id).await?;

    Ok(HttpResponse::NoContent().json(MessageResponse::new("success")))
}
