//! # Quill Core
//!
//! The domain layer of the Quill blog API.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod credentials;
pub mod domain;
pub mod error;
pub mod ports;
pub mod validate;

pub use error::DomainError;
