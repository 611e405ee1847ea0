//! Deep query: route a free-text clinical question to departmental records.
//!
//! Pipeline: validate → resolve patient → classify → rank/select → format
//! evidence → compose answer. Every stage is a pure function except the
//! store reads, and nothing is kept between calls.

pub mod answer;
pub mod classify;
pub mod evidence;
pub mod orchestrator;
pub mod rank;
pub mod types;

use thiserror::Error;

use crate::db::DatabaseError;

pub use orchestrator::DeepQueryEngine;
pub use types::{DeepQueryRequest, DeepQueryResponse, EvidenceItem};

#[derive(Error, Debug)]
pub enum DeepQueryError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Patient not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}
