//! Error types for preprocessing operations.

use std::fmt;

/// Error type for preprocessing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PreprocessingError {
    /// Prediction array has the wrong number of dimensions.
    DimensionMismatch { expected: usize, got: usize },
    /// Shape mismatch between expected and actual array dimensions.
    InvalidShape { expected: String, got: String },
    /// Padding target is smaller than the current size of an axis.
    PaddingTooSmall {
        axis: usize,
        size: usize,
        target: usize,
    },
    /// Axis index is outside the array's rank.
    InvalidAxis { axis: usize, ndim: usize },
    /// Feature dimension mismatch.
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// Class label does not fit in the requested number of classes.
    LabelOutOfRange { label: usize, n_classes: usize },
    /// Invalid hyperparameter value.
    InvalidParameter(String),
    /// Empty data provided where non-empty was required.
    EmptyData(String),
}

impl fmt::Display for PreprocessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocessingError::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "Input array must have {} dimensions\nGot predictions.ndim: {}",
                    expected, got
                )
            }
            PreprocessingError::InvalidShape { expected, got } => {
                write!(f, "Invalid shape: expected {}, got {}", expected, got)
            }
            PreprocessingError::PaddingTooSmall { axis, size, target } => {
                write!(
                    f,
                    "Cannot pad axis {} of size {} down to {} elements",
                    axis, size, target
                )
            }
            PreprocessingError::InvalidAxis { axis, ndim } => {
                write!(f, "Axis {} is out of bounds for array with ndim {}", axis, ndim)
            }
            PreprocessingError::FeatureMismatch {
                expected_features,
                got_features,
            } => {
                write!(
                    f,
                    "Feature mismatch: expected {} features, got {}",
                    expected_features, got_features
                )
            }
            PreprocessingError::LabelOutOfRange { label, n_classes } => {
                write!(
                    f,
                    "Label {} does not fit in {} classes",
                    label, n_classes
                )
            }
            PreprocessingError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            PreprocessingError::EmptyData(msg) => {
                write!(f, "Empty data: {}", msg)
            }
        }
    }
}

impl std::error::Error for PreprocessingError {}

impl From<ndarray::ShapeError> for PreprocessingError {
    fn from(err: ndarray::ShapeError) -> Self {
        PreprocessingError::InvalidShape {
            expected: "compatible shape".to_string(),
            got: err.to_string(),
        }
    }
}

/// Result alias used throughout the preprocessing module.
pub type Result<T> = std::result::Result<T, PreprocessingError>;
