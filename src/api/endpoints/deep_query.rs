//! `POST /api/deep-query`: answer a free-text question from a patient's records.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::deep_query::{DeepQueryEngine, DeepQueryRequest, DeepQueryResponse};

pub async fn ask(
    State(ctx): State<ApiContext>,
    payload: Result<Json<DeepQueryRequest>, JsonRejection>,
) -> Result<Json<DeepQueryResponse>, ApiError> {
    let Json(request) = payload?;

    let response = ctx
        .with_store(move |store| Ok(DeepQueryEngine::new(store).run(&request)?))
        .await?;
    Ok(Json(response))
}
