//! Landing route handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    message: &'static str,
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to loan evaluation",
    })
}
