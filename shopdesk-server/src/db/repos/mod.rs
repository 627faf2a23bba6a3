//! Repository implementations for database access
//!
//! Repositories borrow the connection of a [`Session`](super::Session), so
//! every statement runs inside the request's transaction.

pub mod users;

pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
