//! HTTP server layer
//!
//! Axum servers with:
//! - CORS (localhost only by default)
//! - Request tracing and timeouts
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{
    catalog_app, run_catalog_server, run_user_server, user_app, ServerConfig, ServerError,
    UserState, CATALOG_ADDR, USERS_ADDR,
};
pub use error::ApiError;
