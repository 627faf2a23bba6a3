//! Database layer - connection pool, sessions and repositories
//!
//! - Connection pool (max 5 connections by default)
//! - One session (transaction) per request, committed only on success
//! - Mutations report affected rows instead of check-then-write

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod session;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use session::Session;
