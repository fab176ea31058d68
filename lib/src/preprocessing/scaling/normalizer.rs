//! Normalizer - scales vectors along the last axis to unit norm.
//!
//! Every lane along the last axis is divided by its own norm, so a 2-D array
//! is normalized row by row and a 1-D array is treated as a single vector.
//!
//! Supports three norm types:
//! - L1: Sum of absolute values = 1
//! - L2 (default): Sum of squares = 1 (Euclidean norm)
//! - Max: Maximum absolute value = 1
//!
//! A lane whose norm is zero is divided by zero and comes back as NaN.
//!
//! # Example
//! ```
//! use arrayprep::preprocessing::l2_normalize;
//! use ndarray::array;
//!
//! let normalized = l2_normalize(&array![3.0, 4.0]).unwrap();
//! assert_eq!(normalized, array![0.6, 0.8]);
//! ```

use crate::preprocessing::error::{PreprocessingError, Result};
use ndarray::{Array, ArrayBase, ArrayView1, Axis, Data, Dimension};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Type of normalization to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormType {
    /// L1 norm: sum of absolute values = 1
    L1,
    /// L2 norm (Euclidean): sum of squares = 1
    #[default]
    L2,
    /// Max norm: maximum absolute value = 1
    Max,
}

impl NormType {
    fn norm_of<F: Float>(self, lane: ArrayView1<'_, F>) -> F {
        match self {
            NormType::L1 => lane.iter().fold(F::zero(), |acc, &x| acc + x.abs()),
            NormType::L2 => lane.iter().fold(F::zero(), |acc, &x| acc + x * x).sqrt(),
            NormType::Max => lane.iter().fold(F::zero(), |acc, &x| acc.max(x.abs())),
        }
    }
}

/// Normalizer with a fixed norm type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    norm: NormType,
}

impl Normalizer {
    /// Create a new Normalizer with the specified norm type.
    pub fn new(norm: NormType) -> Self {
        Self { norm }
    }

    /// Get the norm type used.
    pub fn norm(&self) -> NormType {
        self.norm
    }

    pub fn transform<F, S, D>(&self, array: &ArrayBase<S, D>) -> Result<Array<F, D>>
    where
        F: Float,
        S: Data<Elem = F>,
        D: Dimension,
    {
        normalize(array, self.norm)
    }
}

/// Divide every vector along the last axis by its `norm`.
///
/// # Errors
/// [`PreprocessingError::InvalidShape`] for a zero-dimensional array.
pub fn normalize<F, S, D>(array: &ArrayBase<S, D>, norm: NormType) -> Result<Array<F, D>>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension,
{
    let ndim = array.ndim();
    if ndim == 0 {
        return Err(PreprocessingError::InvalidShape {
            expected: "at least 1 dimension".to_string(),
            got: "0 dimensions".to_string(),
        });
    }

    let last = Axis(ndim - 1);
    debug!(shape = ?array.shape(), ?norm, "normalizing along last axis");

    let mut result = array.to_owned();
    for mut lane in result.lanes_mut(last) {
        let scale = norm.norm_of(lane.view());
        lane.mapv_inplace(|x| x / scale);
    }
    Ok(result)
}

/// Scale every vector along the last axis to unit Euclidean length.
pub fn l2_normalize<F, S, D>(array: &ArrayBase<S, D>) -> Result<Array<F, D>>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension,
{
    normalize(array, NormType::L2)
}
