//! `GET /api/patients`: every patient id and name, ordered by id.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::RecordStore;
use crate::models::PatientSummary;

#[derive(Serialize)]
pub struct PatientsResponse {
    pub patients: Vec<PatientSummary>,
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<PatientsResponse>, ApiError> {
    let patients = ctx.with_store(|store| Ok(store.list_patients()?)).await?;
    Ok(Json(PatientsResponse { patients }))
}
