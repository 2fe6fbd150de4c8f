//! Request-level plumbing: authentication extraction and error mapping.

pub mod auth;
pub mod error;
