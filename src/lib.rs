//! Loan Evaluation Gateway
//!
//! A thin HTTP service over four pre-trained loan models. Each POST endpoint
//! validates its fixed request schema, assembles a single-row table and
//! returns the matching model's raw output under a fixed result key.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     LOAN GATEWAY                           │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌───────────────────┐  │
//! │  │  Router   │──▶│  Schemas     │──▶│  Models (ONNX)    │  │
//! │  │  (Axum)   │   │  + Row map   │   │  4 read-only      │  │
//! │  └───────────┘   └──────────────┘   │  sessions         │  │
//! │                                     └───────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `analysis` module carries the standalone statistics helpers used
//! during model development; it is not wired into the HTTP surface.

pub mod analysis;
pub mod config;
pub mod error;
pub mod handlers;
pub mod inference;
pub mod models;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
use inference::GatewayModels;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub models: GatewayModels,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::index))
        .route("/predict_loan_status", post(handlers::predict::loan_status))
        .route("/predict_loan_grade", post(handlers::predict::loan_grade))
        .route("/predict_loan_subgrade", post(handlers::predict::loan_subgrade))
        .route("/predict_loan_intrate", post(handlers::predict::loan_intrate))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
