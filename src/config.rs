//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Directory holding the four model artifacts
    pub model_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            model_dir: env::var("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("models")),
        }
    }

    /// Accept/reject classifier artifact
    pub fn status_model_path(&self) -> PathBuf {
        self.model_dir.join("acc_rej_clf.onnx")
    }

    /// Grade classifier artifact
    pub fn grade_model_path(&self) -> PathBuf {
        self.model_dir.join("grade_clf.onnx")
    }

    /// Sub-grade classifier artifact
    pub fn sub_grade_model_path(&self) -> PathBuf {
        self.model_dir.join("sub_grade_clf.onnx")
    }

    /// Interest rate regressor artifact
    pub fn int_rate_model_path(&self) -> PathBuf {
        self.model_dir.join("int_rate_pred.onnx")
    }
}
