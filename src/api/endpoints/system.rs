//! Service banner.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// `GET /api/`: identifies the service.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "United Patient Record System API",
        version: crate::config::APP_VERSION,
    })
}
