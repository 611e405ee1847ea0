//! API endpoint handlers.
//!
//! Handlers are thin: extract, run the store work on the blocking pool,
//! wrap the result in JSON.

pub mod analytics;
pub mod auth;
pub mod data;
pub mod deep_query;
pub mod department;
pub mod patients;
pub mod search;
pub mod system;
