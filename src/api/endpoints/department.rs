//! `GET /api/department/:name`: every record of one department.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Category;
use crate::search::{department_records, DepartmentRecords};

pub async fn list(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
) -> Result<Json<DepartmentRecords>, ApiError> {
    let category = Category::from_department_alias(&name)
        .ok_or_else(|| ApiError::NotFound("Department not found".into()))?;

    let listing = ctx
        .with_store(move |store| Ok(department_records(store, &name, category)?))
        .await?;
    Ok(Json(listing))
}
