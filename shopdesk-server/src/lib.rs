//! shopdesk-server: two small CRUD HTTP services
//!
//! - Catalog service: in-memory product catalog plus informational routes
//! - User service: user records in PostgreSQL, one transaction per request

pub mod catalog;
pub mod db;
pub mod http;
pub mod models;

pub use catalog::{Catalog, SharedCatalog};
pub use http::{ApiError, ServerConfig, ServerError};
