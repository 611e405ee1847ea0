//! HTTP API.
//!
//! Exposes patient search, analytics, department listings, login, sample
//! data management and the deep query engine as JSON endpoints nested
//! under `/api/`.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer, ServerError};
pub use types::ApiContext;
