//! Route handlers organized by resource

pub mod health;
pub mod info;
pub mod catalog;
pub mod users;
