//! Staff login.
//!
//! `POST /api/login`: checks credentials against the fixed staff roster.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::authorization::{authenticate, UserInfo};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: UserInfo,
}

pub async fn login(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;

    let user = authenticate(&request.username, &request.password).ok_or_else(|| {
        tracing::warn!(username = %request.username, "Login rejected");
        ApiError::Unauthorized("Invalid credentials".into())
    })?;

    tracing::info!(username = %user.username, role = %user.role, "Login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        user,
    }))
}
