//! # Quill Shared
//!
//! The wire types of the API: mapped representations of stored records and
//! the error body shape. Consumed by the server and by API clients.

pub mod dto;
pub mod response;

pub use dto::{MessageResponse, PostResponse, UserResponse};
pub use response::ErrorResponse;
