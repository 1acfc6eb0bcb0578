//! Prediction handlers
//!
//! One handler per pre-trained model. Validation happens at extraction,
//! before the model is touched; the model's raw output goes unmodified
//! under the endpoint's fixed result key.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::Payload;
use crate::models::{LoanGradeRequest, LoanIntRateRequest, LoanStatusRequest, LoanSubGradeRequest};
use crate::{AppResult, AppState};

/// Accept/reject decision for a loan application
pub async fn loan_status(
    State(state): State<AppState>,
    Payload(req): Payload<LoanStatusRequest>,
) -> AppResult<Json<Value>> {
    let pred = state.models.status.predict(&req.into_row())?;
    Ok(Json(json!({ "Loan status": pred })))
}

/// Loan grade classification
pub async fn loan_grade(
    State(state): State<AppState>,
    Payload(req): Payload<LoanGradeRequest>,
) -> AppResult<Json<Value>> {
    let pred = state.models.grade.predict(&req.into_row())?;
    Ok(Json(json!({ "Loan grade": pred })))
}

/// Loan sub-grade classification
pub async fn loan_subgrade(
    State(state): State<AppState>,
    Payload(req): Payload<LoanSubGradeRequest>,
) -> AppResult<Json<Value>> {
    let pred = state.models.sub_grade.predict(&req.into_row())?;
    Ok(Json(json!({ "Loan sub grade": pred })))
}

/// Loan interest rate regression
pub async fn loan_intrate(
    State(state): State<AppState>,
    Payload(req): Payload<LoanIntRateRequest>,
) -> AppResult<Json<Value>> {
    let pred = state.models.int_rate.predict(&req.into_row())?;
    Ok(Json(json!({ "Loan int rate": pred })))
}
