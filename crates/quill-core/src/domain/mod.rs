//! Domain entities - the core business objects.

mod post;

mod user;

pub use post::{Author, Post, PostPatch};
pub use user::User;
