//! Model inference layer.
//!
//! The four pre-trained models are opaque prediction functions: loaded once
//! at startup, read-only for the life of the process. Handlers see them only
//! through the [`Predictor`] trait, so tests can inject stubs in place of
//! real ONNX sessions.

mod onnx;

pub use onnx::OnnxModel;

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::models::Row;

/// Failure during row assembly or model invocation.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PredictError(pub String);

/// Scalar model output: a classification label or a continuous number.
///
/// Serialized untagged so the raw value lands in the response body as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    Label(String),
    Number(f64),
}

/// A pre-trained, read-only prediction function over a single row.
pub trait Predictor: Send + Sync {
    fn predict(&self, row: &Row) -> Result<Prediction, PredictError>;
}

/// The four models served by the gateway, shared read-only across requests.
#[derive(Clone)]
pub struct GatewayModels {
    pub status: Arc<dyn Predictor>,
    pub grade: Arc<dyn Predictor>,
    pub sub_grade: Arc<dyn Predictor>,
    pub int_rate: Arc<dyn Predictor>,
}

impl GatewayModels {
    /// Load all four ONNX artifacts from the configured model directory.
    pub fn load(config: &Config) -> Result<Self, PredictError> {
        Ok(Self {
            status: Arc::new(OnnxModel::load(config.status_model_path())?),
            grade: Arc::new(OnnxModel::load(config.grade_model_path())?),
            sub_grade: Arc::new(OnnxModel::load(config.sub_grade_model_path())?),
            int_rate: Arc::new(OnnxModel::load(config.int_rate_model_path())?),
        })
    }
}
