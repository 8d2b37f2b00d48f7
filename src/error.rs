use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigitError {
    #[error("Model file not found at: {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("Failed to initialize classifier: {0}")]
    InitializationError(String),

    #[error("Inference failed: {0}")]
    InferenceError(String),

    #[error("Preprocessing failed: {0}")]
    PreprocessingError(String),

    #[error("No digit drawn")]
    EmptyCanvas,

    #[error("Invalid label {0:?}: expected a single digit (0-9)")]
    InvalidLabel(String),

    #[error("Malformed sample record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DigitError {
    /// Stable identifier attached to log events
    pub fn code(&self) -> &'static str {
        match self {
            DigitError::ModelNotFound(_) => "MODEL_NOT_FOUND",
            DigitError::InitializationError(_) => "INIT_ERROR",
            DigitError::InferenceError(_) => "INFERENCE_ERROR",
            DigitError::PreprocessingError(_) => "PREPROCESSING_ERROR",
            DigitError::EmptyCanvas => "EMPTY_CANVAS",
            DigitError::InvalidLabel(_) => "INVALID_LABEL",
            DigitError::MalformedRecord { .. } => "MALFORMED_RECORD",
            DigitError::Io(_) => "IO_ERROR",
            DigitError::Csv(_) => "CSV_ERROR",
            DigitError::ImageError(_) => "IMAGE_ERROR",
            DigitError::Json(_) => "JSON_ERROR",
        }
    }

    /// Whether the error is an expected user condition rather than a failure
    pub fn is_user_error(&self) -> bool {
        matches!(self, DigitError::EmptyCanvas | DigitError::InvalidLabel(_))
    }
}
