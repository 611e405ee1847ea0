//! `GET /api/analytics/:patient_id`: visit timeline and health trend.

use axum::extract::{Path, State};
use axum::Json;

use crate::analytics::{compute_patient_analytics, PatientAnalytics};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

pub async fn patient(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<String>,
) -> Result<Json<PatientAnalytics>, ApiError> {
    let analytics = ctx
        .with_store(move |store| Ok(compute_patient_analytics(store, &patient_id)?))
        .await?;
    Ok(Json(analytics))
}
