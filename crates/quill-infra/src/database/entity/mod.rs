//! SeaORM entities mirroring the domain records.

pub mod post;
pub mod user;
