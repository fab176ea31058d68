//! One-hot encoding for integer class labels.
//!
//! Transforms a 1-D array of class indices into a `(n_labels, n_classes)`
//! indicator matrix, and recovers class indices from one-hot or score
//! matrices by taking the row-wise argmax.

use crate::preprocessing::error::{PreprocessingError, Result};
use ndarray::{Array1, Array2, ArrayBase, Data, Dimension, Ix1, Ix2};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Element type of a one-hot matrix chosen at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DType {
    /// 32-bit float (the default).
    #[default]
    Float32,
    /// 64-bit float.
    Float64,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 8-bit unsigned integer.
    UInt8,
}

/// One-hot matrix tagged with its element type.
#[derive(Clone, Debug, PartialEq)]
pub enum OneHotMatrix {
    Float32(Array2<f32>),
    Float64(Array2<f64>),
    Int32(Array2<i32>),
    Int64(Array2<i64>),
    UInt8(Array2<u8>),
}

impl OneHotMatrix {
    /// Element type of the stored matrix.
    pub fn dtype(&self) -> DType {
        match self {
            OneHotMatrix::Float32(_) => DType::Float32,
            OneHotMatrix::Float64(_) => DType::Float64,
            OneHotMatrix::Int32(_) => DType::Int32,
            OneHotMatrix::Int64(_) => DType::Int64,
            OneHotMatrix::UInt8(_) => DType::UInt8,
        }
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            OneHotMatrix::Float32(m) => m.dim(),
            OneHotMatrix::Float64(m) => m.dim(),
            OneHotMatrix::Int32(m) => m.dim(),
            OneHotMatrix::Int64(m) => m.dim(),
            OneHotMatrix::UInt8(m) => m.dim(),
        }
    }

    pub fn as_f32(&self) -> Option<&Array2<f32>> {
        match self {
            OneHotMatrix::Float32(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<&Array2<i32>> {
        match self {
            OneHotMatrix::Int32(m) => Some(m),
            _ => None,
        }
    }

    /// Widen the matrix to `f64` regardless of the stored element type.
    pub fn to_f64(&self) -> Array2<f64> {
        match self {
            OneHotMatrix::Float32(m) => m.mapv(f64::from),
            OneHotMatrix::Float64(m) => m.clone(),
            OneHotMatrix::Int32(m) => m.mapv(f64::from),
            OneHotMatrix::Int64(m) => m.mapv(|x| x as f64),
            OneHotMatrix::UInt8(m) => m.mapv(f64::from),
        }
    }

    /// Recover class labels via [`onehot_reverse`].
    pub fn reverse(&self) -> Result<Array1<i32>> {
        match self {
            OneHotMatrix::Float32(m) => onehot_reverse(m),
            OneHotMatrix::Float64(m) => onehot_reverse(m),
            OneHotMatrix::Int32(m) => onehot_reverse(m),
            OneHotMatrix::Int64(m) => onehot_reverse(m),
            OneHotMatrix::UInt8(m) => onehot_reverse(m),
        }
    }
}

/// Configuration for one-hot encoding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OneHotConfig {
    /// Number of output columns. `None` means `max(label) + 1`.
    pub n_classes: Option<usize>,
    /// Element type of the output matrix.
    pub dtype: DType,
}

/// One-hot encoder for 1-D class labels.
///
/// Labels are not compacted: with labels `{0, 1, 2, 3, 5}` the output has six
/// columns and column 4 stays zero.
///
/// # Example
/// ```
/// use arrayprep::preprocessing::{DType, OneHotEncoder};
/// use ndarray::array;
///
/// let encoded = OneHotEncoder::new()
///     .with_n_classes(4)
///     .with_dtype(DType::Int32)
///     .encode(&array![0usize, 2, 3])
///     .unwrap();
/// assert_eq!(encoded.shape(), (3, 4));
/// ```
#[derive(Clone, Debug, Default)]
pub struct OneHotEncoder {
    config: OneHotConfig,
}

impl OneHotEncoder {
    /// Create a new OneHotEncoder with default settings.
    pub fn new() -> Self {
        Self {
            config: OneHotConfig::default(),
        }
    }

    /// Build an encoder from an existing configuration.
    pub fn from_config(config: OneHotConfig) -> Self {
        Self { config }
    }

    /// Fix the number of output columns.
    pub fn with_n_classes(mut self, n_classes: usize) -> Self {
        self.config.n_classes = Some(n_classes);
        self
    }

    /// Set the output element type.
    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.config.dtype = dtype;
        self
    }

    pub fn config(&self) -> &OneHotConfig {
        &self.config
    }

    /// Encode labels using the configured dtype.
    pub fn encode<S>(&self, labels: &ArrayBase<S, Ix1>) -> Result<OneHotMatrix>
    where
        S: Data<Elem = usize>,
    {
        onehot_with_dtype(labels, self.config.n_classes, self.config.dtype)
    }

    /// Encode labels into a matrix of a compile-time element type.
    ///
    /// The configured dtype is ignored.
    pub fn encode_as<T, S>(&self, labels: &ArrayBase<S, Ix1>) -> Result<Array2<T>>
    where
        T: Clone + Zero + One,
        S: Data<Elem = usize>,
    {
        onehot(labels, self.config.n_classes)
    }
}

fn resolve_n_classes(labels: &[usize], n_classes: Option<usize>) -> Result<usize> {
    let max_label = labels.iter().copied().max();
    match (n_classes, max_label) {
        (Some(n), Some(max)) if max >= n => Err(PreprocessingError::LabelOutOfRange {
            label: max,
            n_classes: n,
        }),
        (Some(n), _) => Ok(n),
        (None, Some(max)) => Ok(max + 1),
        (None, None) => Err(PreprocessingError::EmptyData(
            "Cannot infer the number of classes from empty labels".to_string(),
        )),
    }
}

/// One-hot encode class labels into a matrix of element type `T`.
///
/// Without `n_classes` the column count is `max(label) + 1`.
///
/// # Errors
/// - [`PreprocessingError::EmptyData`] if `labels` is empty and `n_classes` is `None`.
/// - [`PreprocessingError::LabelOutOfRange`] if a label is `>= n_classes`.
pub fn onehot<T, S>(labels: &ArrayBase<S, Ix1>, n_classes: Option<usize>) -> Result<Array2<T>>
where
    T: Clone + Zero + One,
    S: Data<Elem = usize>,
{
    let labels: Vec<usize> = labels.iter().copied().collect();
    let n_columns = resolve_n_classes(&labels, n_classes)?;

    debug!(
        n_labels = labels.len(),
        n_columns,
        "one-hot encoding labels"
    );

    let mut result = Array2::<T>::zeros((labels.len(), n_columns));
    for (row, &label) in labels.iter().enumerate() {
        result[[row, label]] = T::one();
    }
    Ok(result)
}

/// One-hot encode class labels into a matrix whose element type is picked at runtime.
pub fn onehot_with_dtype<S>(
    labels: &ArrayBase<S, Ix1>,
    n_classes: Option<usize>,
    dtype: DType,
) -> Result<OneHotMatrix>
where
    S: Data<Elem = usize>,
{
    Ok(match dtype {
        DType::Float32 => OneHotMatrix::Float32(onehot(labels, n_classes)?),
        DType::Float64 => OneHotMatrix::Float64(onehot(labels, n_classes)?),
        DType::Int32 => OneHotMatrix::Int32(onehot(labels, n_classes)?),
        DType::Int64 => OneHotMatrix::Int64(onehot(labels, n_classes)?),
        DType::UInt8 => OneHotMatrix::UInt8(onehot(labels, n_classes)?),
    })
}

/// Convert a one-hot or score matrix back to class labels.
///
/// Each row maps to the column index of its maximum value. Ties resolve to
/// the lowest column index. A value that is unordered with itself (NaN)
/// counts as the maximum, so a row containing NaN maps to its first NaN.
///
/// # Errors
/// - [`PreprocessingError::DimensionMismatch`] if `predictions` is not 2-D.
/// - [`PreprocessingError::EmptyData`] if rows are present but there are no columns.
pub fn onehot_reverse<S, A, D>(predictions: &ArrayBase<S, D>) -> Result<Array1<i32>>
where
    S: Data<Elem = A>,
    A: PartialOrd,
    D: Dimension,
{
    let ndim = predictions.ndim();
    if ndim != 2 {
        return Err(PreprocessingError::DimensionMismatch {
            expected: 2,
            got: ndim,
        });
    }
    let matrix = predictions.view().into_dimensionality::<Ix2>()?;
    let (rows, cols) = matrix.dim();

    if rows > 0 && cols == 0 {
        return Err(PreprocessingError::EmptyData(
            "Cannot take argmax of rows with no columns".to_string(),
        ));
    }

    debug!(rows, cols, "reversing one-hot matrix");

    let labels = matrix
        .outer_iter()
        .map(|row| {
            let mut best = 0;
            for (col, value) in row.iter().enumerate() {
                if value.partial_cmp(value).is_none() {
                    best = col;
                    break;
                }
                if *value > row[best] {
                    best = col;
                }
            }
            i32::try_from(best).map_err(|_| {
                PreprocessingError::InvalidParameter(format!(
                    "Class index {} does not fit in i32",
                    best
                ))
            })
        })
        .collect::<Result<Vec<i32>>>()?;

    Ok(Array1::from(labels))
}
