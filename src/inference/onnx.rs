//! ONNX-backed model implementation.
//!
//! The artifacts are scikit-learn pipelines exported to ONNX: every input
//! column is a separate named tensor of shape `[1, 1]`, numeric columns as
//! f32/i64 and categorical columns as strings. The first output carries the
//! predicted label or number.

use std::borrow::Cow;
use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session, SessionInputValue};
use ort::value::{DynValue, Tensor};

use crate::models::{ColumnValue, Row};

use super::{PredictError, Prediction, Predictor};

#[derive(Debug)]
pub struct OnnxModel {
    session: Session,
}

impl OnnxModel {
    /// Load a model artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictError> {
        let path = path.as_ref();
        tracing::info!("Loading model artifact: {}", path.display());

        if !path.exists() {
            return Err(PredictError(format!("Model not found: {}", path.display())));
        }

        let session = Session::builder()
            .map_err(|e| PredictError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| PredictError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| PredictError(format!("Failed to load model: {}", e)))?;

        Ok(Self { session })
    }

    /// One row column as a `[1, 1]` tensor of the matching ONNX dtype.
    fn column_tensor(value: &ColumnValue) -> Result<DynValue, PredictError> {
        let tensor = match value {
            ColumnValue::Float(v) => Tensor::from_array(
                Array2::from_shape_vec((1, 1), vec![*v as f32])
                    .map_err(|e| PredictError(format!("Array error: {}", e)))?,
            )
            .map_err(|e| PredictError(format!("Tensor error: {}", e)))?
            .into_dyn(),

            ColumnValue::Int(v) => Tensor::from_array(
                Array2::from_shape_vec((1, 1), vec![*v])
                    .map_err(|e| PredictError(format!("Array error: {}", e)))?,
            )
            .map_err(|e| PredictError(format!("Tensor error: {}", e)))?
            .into_dyn(),

            ColumnValue::Text(s) => Tensor::from_string_array(
                Array2::from_shape_vec((1, 1), vec![s.clone()])
                    .map_err(|e| PredictError(format!("Array error: {}", e)))?,
            )
            .map_err(|e| PredictError(format!("Tensor error: {}", e)))?
            .into_dyn(),
        };

        Ok(tensor)
    }
}

impl Predictor for OnnxModel {
    fn predict(&self, row: &Row) -> Result<Prediction, PredictError> {
        let mut inputs: Vec<(Cow<'static, str>, SessionInputValue<'static>)> =
            Vec::with_capacity(row.columns().len());
        for (name, value) in row.columns() {
            inputs.push((Cow::Borrowed(*name), Self::column_tensor(value)?.into()));
        }

        let output_name = self
            .session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| PredictError("Model has no output".to_string()))?;

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| PredictError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| PredictError("No output produced".to_string()))?;

        // Classifier labels come out as a string tensor; numeric outputs as
        // i64 (integer-labelled classifiers) or f32 (regressors).
        if let Ok(labels) = output.try_extract_string_tensor() {
            let label = labels
                .first()
                .cloned()
                .ok_or_else(|| PredictError("Empty model output".to_string()))?;
            return Ok(Prediction::Label(label));
        }

        if let Ok(values) = output.try_extract_tensor::<i64>() {
            if let Some(v) = values.first() {
                return Ok(Prediction::Number(*v as f64));
            }
        }

        let values = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictError(format!("Extract error: {}", e)))?;
        let value = values
            .first()
            .copied()
            .ok_or_else(|| PredictError("Empty model output".to_string()))?;

        Ok(Prediction::Number(value as f64))
    }
}
