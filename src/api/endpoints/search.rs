//! `GET /api/search?term=`: patient lookup by id or name fragment.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::search::{search_patient, SearchResult};

#[derive(Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
}

pub async fn search(
    State(ctx): State<ApiContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResult>, ApiError> {
    let term = query
        .term
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("term is required".into()))?;

    let result = ctx
        .with_store(move |store| Ok(search_patient(store, &term)?))
        .await?;
    Ok(Json(result))
}
