use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::registry::all_kinds;

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
        "question_kinds": all_kinds().len(),
    });
    (StatusCode::OK, Json(body))
}
