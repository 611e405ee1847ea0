//! Sample data management.
//!
//! `POST /api/init-data`: seed an empty store with demo patients.
//! `POST /api/clear-data`: delete every profile and record.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::clear_all;
use crate::seed::{populate_sample_data, SeedOutcome};

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn init(State(ctx): State<ApiContext>) -> Result<Json<SeedOutcome>, ApiError> {
    let outcome = ctx
        .with_store(|store| {
            let conn = store.connection()?;
            let today = chrono::Local::now().date_naive();
            Ok(populate_sample_data(&conn, &mut rand::thread_rng(), today)?)
        })
        .await?;
    Ok(Json(outcome))
}

pub async fn clear(State(ctx): State<ApiContext>) -> Result<Json<MessageResponse>, ApiError> {
    ctx.with_store(|store| Ok(clear_all(&store.connection()?)?))
        .await?;

    tracing::info!("All patient data cleared");

    Ok(Json(MessageResponse {
        message: "All data cleared successfully",
    }))
}
