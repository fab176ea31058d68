//! Min-Max Scaler.
//!
//! Transforms features by scaling each column to a given range (default [0, 1]).
//!
//! The transformation is given by:
//! ```text
//! X_scaled = min + (X - X_min) * (max - min) / (X_max - X_min)
//! ```
//!
//! `X_min` and `X_max` are computed from the input unless precomputed values
//! are supplied, in which case the input's own extrema are ignored. This is
//! how a held-out set is scaled with training statistics; its values may then
//! fall outside the target range.
//!
//! A constant column divides by zero and yields non-finite values.
//!
//! # Example
//! ```
//! use arrayprep::preprocessing::minmax_scaling;
//! use ndarray::array;
//!
//! let train: ndarray::Array2<f64> = array![[1.0, 1.0, 1.0], [4.0, 5.0, 6.0]];
//! let (scaled, min, max) = minmax_scaling(&train, (0.1, 0.9), None, None).unwrap();
//!
//! let test = array![[1.0, 2.0, 3.0], [4.0, 3.0, 4.0]];
//! let (test_scaled, _, _) = minmax_scaling(&test, (0.1, 0.9), Some(&min), Some(&max)).unwrap();
//! assert!((test_scaled[[0, 1]] - 0.3).abs() < 1e-12);
//! ```

use crate::preprocessing::error::{PreprocessingError, Result};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2, RawData, Zip};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for MinMaxScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScalerConfig {
    /// Minimum value of the target range.
    pub min: f64,
    /// Maximum value of the target range.
    pub max: f64,
}

impl Default for MinMaxScalerConfig {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl MinMaxScalerConfig {
    fn target_range<F: Float>(&self) -> Result<(F, F)> {
        if !(self.min.is_finite() && self.max.is_finite() && self.max > self.min) {
            return Err(PreprocessingError::InvalidParameter(format!(
                "feature range must satisfy min < max, got ({}, {})",
                self.min, self.max
            )));
        }
        let low = num_traits::cast::<f64, F>(self.min);
        let high = num_traits::cast::<f64, F>(self.max);
        match (low, high) {
            (Some(low), Some(high)) => Ok((low, high)),
            _ => Err(PreprocessingError::InvalidParameter(format!(
                "feature range ({}, {}) is not representable",
                self.min, self.max
            ))),
        }
    }
}

/// Per-column extrema used for min-max scaling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinMaxParams<F> {
    /// Minimum of each feature.
    pub min: Array1<F>,
    /// Maximum of each feature.
    pub max: Array1<F>,
}

impl<F: Float> MinMaxParams<F> {
    /// Compute column minima and maxima of `data`.
    pub fn fit<S>(data: &ArrayBase<S, Ix2>) -> Result<Self>
    where
        S: Data<Elem = F>,
    {
        Ok(Self {
            min: column_min(data)?,
            max: column_max(data)?,
        })
    }

    /// Number of features the parameters describe.
    pub fn n_features(&self) -> usize {
        self.min.len()
    }

    /// Get the data range (max - min) for each feature.
    pub fn data_range(&self) -> Array1<F> {
        &self.max - &self.min
    }

    fn check_features(&self, cols: usize) -> Result<()> {
        if self.max.len() != self.min.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.min.len(),
                got_features: self.max.len(),
            });
        }
        if cols != self.n_features() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.n_features(),
                got_features: cols,
            });
        }
        Ok(())
    }

    /// Scale `data` into the configured range using these extrema.
    pub fn transform<S>(
        &self,
        data: &ArrayBase<S, Ix2>,
        config: &MinMaxScalerConfig,
    ) -> Result<Array2<F>>
    where
        S: Data<Elem = F>,
    {
        self.check_features(data.ncols())?;
        let (low, high) = config.target_range::<F>()?;
        let span = high - low;
        let range = self.data_range();

        let mut result = data.to_owned();
        for mut row in result.rows_mut() {
            Zip::from(&mut row)
                .and(&self.min)
                .and(&range)
                .for_each(|x, &lo, &r| *x = low + (*x - lo) * span / r);
        }
        Ok(result)
    }

    /// Map scaled values back to the original feature space.
    pub fn inverse_transform<S>(
        &self,
        data: &ArrayBase<S, Ix2>,
        config: &MinMaxScalerConfig,
    ) -> Result<Array2<F>>
    where
        S: Data<Elem = F>,
    {
        self.check_features(data.ncols())?;
        let (low, high) = config.target_range::<F>()?;
        let span = high - low;
        let range = self.data_range();

        let mut result = data.to_owned();
        for mut row in result.rows_mut() {
            Zip::from(&mut row)
                .and(&self.min)
                .and(&range)
                .for_each(|x, &lo, &r| *x = lo + (*x - low) * r / span);
        }
        Ok(result)
    }
}

fn require_rows<S: RawData>(data: &ArrayBase<S, Ix2>, what: &str) -> Result<()> {
    if data.nrows() == 0 {
        return Err(PreprocessingError::EmptyData(format!(
            "Cannot compute column {} of empty data",
            what
        )));
    }
    Ok(())
}

fn column_min<F, S>(data: &ArrayBase<S, Ix2>) -> Result<Array1<F>>
where
    F: Float,
    S: Data<Elem = F>,
{
    require_rows(data, "minimum")?;
    Ok(data.fold_axis(Axis(0), F::infinity(), |&acc, &x| acc.min(x)))
}

fn column_max<F, S>(data: &ArrayBase<S, Ix2>) -> Result<Array1<F>>
where
    F: Float,
    S: Data<Elem = F>,
{
    require_rows(data, "maximum")?;
    Ok(data.fold_axis(Axis(0), F::neg_infinity(), |&acc, &x| acc.max(x)))
}

/// MinMaxScaler with optional precomputed extrema.
///
/// # Example
/// ```
/// use arrayprep::preprocessing::MinMaxScaler;
/// use ndarray::array;
///
/// let (scaled, params) = MinMaxScaler::new()
///     .with_range(-1.0, 1.0)
///     .scale(&array![[0.0], [5.0], [10.0]])
///     .unwrap();
/// assert_eq!(scaled, array![[-1.0], [0.0], [1.0]]);
/// assert_eq!(params.max, array![10.0]);
/// ```
#[derive(Clone, Debug)]
pub struct MinMaxScaler<F> {
    config: MinMaxScalerConfig,
    precomputed_min: Option<Array1<F>>,
    precomputed_max: Option<Array1<F>>,
}

impl<F: Float> Default for MinMaxScaler<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> MinMaxScaler<F> {
    /// Create a new MinMaxScaler with default range [0, 1].
    pub fn new() -> Self {
        Self {
            config: MinMaxScalerConfig::default(),
            precomputed_min: None,
            precomputed_max: None,
        }
    }

    pub fn from_config(config: MinMaxScalerConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Set the target range for scaling.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.config.min = min;
        self.config.max = max;
        self
    }

    /// Use these column minima instead of computing them.
    pub fn with_precomputed_min(mut self, min: Array1<F>) -> Self {
        self.precomputed_min = Some(min);
        self
    }

    /// Use these column maxima instead of computing them.
    pub fn with_precomputed_max(mut self, max: Array1<F>) -> Self {
        self.precomputed_max = Some(max);
        self
    }

    /// Reuse both extrema from an earlier call.
    pub fn with_params(self, params: MinMaxParams<F>) -> Self {
        self.with_precomputed_min(params.min)
            .with_precomputed_max(params.max)
    }

    pub fn config(&self) -> &MinMaxScalerConfig {
        &self.config
    }

    /// Scale `data`, returning the scaled array and the extrema actually used.
    pub fn scale<S>(&self, data: &ArrayBase<S, Ix2>) -> Result<(Array2<F>, MinMaxParams<F>)>
    where
        S: Data<Elem = F>,
    {
        let min = match &self.precomputed_min {
            Some(min) => min.clone(),
            None => column_min(data)?,
        };
        let max = match &self.precomputed_max {
            Some(max) => max.clone(),
            None => column_max(data)?,
        };

        debug!(
            shape = ?data.shape(),
            precomputed_min = self.precomputed_min.is_some(),
            precomputed_max = self.precomputed_max.is_some(),
            range_min = self.config.min,
            range_max = self.config.max,
            "min-max scaling"
        );

        let params = MinMaxParams { min, max };
        let scaled = params.transform(data, &self.config)?;
        Ok((scaled, params))
    }
}

/// Rescale each column of `data` into `feature_minmax`.
///
/// Returns `(scaled, min, max)` where `min` and `max` are the column extrema
/// that were used, either computed from `data` or taken verbatim from
/// `precomputed_min` / `precomputed_max`.
///
/// # Errors
/// - [`PreprocessingError::InvalidParameter`] if `feature_minmax.0 >= feature_minmax.1`.
/// - [`PreprocessingError::FeatureMismatch`] if a precomputed vector length
///   differs from the column count.
/// - [`PreprocessingError::EmptyData`] if extrema must be computed from zero rows.
pub fn minmax_scaling<F, S>(
    data: &ArrayBase<S, Ix2>,
    feature_minmax: (f64, f64),
    precomputed_min: Option<&Array1<F>>,
    precomputed_max: Option<&Array1<F>>,
) -> Result<(Array2<F>, Array1<F>, Array1<F>)>
where
    F: Float,
    S: Data<Elem = F>,
{
    let mut scaler = MinMaxScaler::new().with_range(feature_minmax.0, feature_minmax.1);
    if let Some(min) = precomputed_min {
        scaler = scaler.with_precomputed_min(min.clone());
    }
    if let Some(max) = precomputed_max {
        scaler = scaler.with_precomputed_max(max.clone());
    }
    let (scaled, params) = scaler.scale(data)?;
    Ok((scaled, params.min, params.max))
}
