//! Error types for the docintel-core library.

use thiserror::Error;

/// Main error type for the docintel library.
#[derive(Error, Debug)]
pub enum DocIntelError {
    /// Document analysis failed.
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// OCR engine setup failed, outside of an analysis request.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a single "analyze document" request.
///
/// A field that matches none of its patterns is not an error; it is simply
/// left out of the field map.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Content is not an image, or the image bytes fail to decode.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The OCR engine failed. Not retried.
    #[error("OCR processing failed: {0}")]
    OcrFailure(#[from] OcrError),

    /// OCR succeeded but produced no usable text.
    #[error("no text found in image")]
    EmptyText,
}

impl AnalysisError {
    /// Whether the failure is caused by the submitted content rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalysisError::InvalidInput(_) | AnalysisError::EmptyText)
    }
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// The engine failed while processing an image.
    #[error("engine failure: {0}")]
    Engine(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Errors related to loading and saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("config I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for this schema.
    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the docintel library.
pub type Result<T> = std::result::Result<T, DocIntelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(AnalysisError::InvalidInput("text/plain".into()).is_client_error());
        assert!(AnalysisError::EmptyText.is_client_error());
        assert!(!AnalysisError::OcrFailure(OcrError::Engine("boom".into())).is_client_error());
    }

    #[test]
    fn test_ocr_failure_converts() {
        let err: AnalysisError = OcrError::ModelLoad("det.onnx".into()).into();
        assert_eq!(err.to_string(), "OCR processing failed: failed to load model: det.onnx");
    }
}
