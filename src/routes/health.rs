use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::{ApiResponse, MessageResponse};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<ApiResponse<HealthData>> {
    let data = HealthData {
        status: "ok".to_string(),
    };

    Json(ApiResponse::success(data))
}

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "API root", body = MessageResponse,
            example = json!({ "msg": "From API" })),
    ),
    tag = "Health"
)]
pub async fn api_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        msg: "From API".to_string(),
    })
}
