//! Standard Scaler (Z-score normalization).
//!
//! Transforms features by removing the mean and scaling to unit variance.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the column mean and `s` the population standard deviation
//! (`ddof = 0`). Both are computed from the input unless precomputed values
//! are supplied. A zero standard deviation yields non-finite values.
//!
//! # Example
//! ```
//! use arrayprep::preprocessing::standardize;
//! use ndarray::array;
//!
//! let train: ndarray::Array2<f64> = array![[1.0, 1.0, 1.0], [4.0, 5.0, 6.0]];
//! let (scaled, mean, std) = standardize(&train, None, None).unwrap();
//! assert_eq!(scaled, array![[-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]]);
//!
//! let test = array![[1.0, 2.0, 3.0], [4.0, 3.0, 4.0]];
//! let (test_scaled, _, _) = standardize(&test, Some(&mean), Some(&std)).unwrap();
//! assert!((test_scaled[[0, 1]] + 0.5).abs() < 1e-12);
//! ```

use crate::preprocessing::error::{PreprocessingError, Result};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2, Zip};
use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-column statistics used for standardization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardParams<F> {
    /// Mean of each feature.
    pub mean: Array1<F>,
    /// Population standard deviation of each feature.
    pub std: Array1<F>,
}

impl<F: Float + FromPrimitive> StandardParams<F> {
    /// Compute column means and standard deviations of `data`.
    pub fn fit<S>(data: &ArrayBase<S, Ix2>) -> Result<Self>
    where
        S: Data<Elem = F>,
    {
        Ok(Self {
            mean: column_mean(data)?,
            std: column_std(data)?,
        })
    }
}

impl<F: Float> StandardParams<F> {
    /// Number of features the parameters describe.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn check_features(&self, cols: usize) -> Result<()> {
        if self.std.len() != self.mean.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.mean.len(),
                got_features: self.std.len(),
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

    /// Standardize `data` with these statistics.
    pub fn transform<S>(&self, data: &ArrayBase<S, Ix2>) -> Result<Array2<F>>
    where
        S: Data<Elem = F>,
    {
        self.check_features(data.ncols())?;
        let mut result = data.to_owned();
        for mut row in result.rows_mut() {
            Zip::from(&mut row)
                .and(&self.mean)
                .and(&self.std)
                .for_each(|x, &mu, &sigma| *x = (*x - mu) / sigma);
        }
        Ok(result)
    }

    /// Map standardized values back to the original feature space.
    pub fn inverse_transform<S>(&self, data: &ArrayBase<S, Ix2>) -> Result<Array2<F>>
    where
        S: Data<Elem = F>,
    {
        self.check_features(data.ncols())?;
        let mut result = data.to_owned();
        for mut row in result.rows_mut() {
            Zip::from(&mut row)
                .and(&self.mean)
                .and(&self.std)
                .for_each(|x, &mu, &sigma| *x = *x * sigma + mu);
        }
        Ok(result)
    }
}

fn column_mean<F, S>(data: &ArrayBase<S, Ix2>) -> Result<Array1<F>>
where
    F: Float + FromPrimitive,
    S: Data<Elem = F>,
{
    data.mean_axis(Axis(0)).ok_or_else(|| {
        PreprocessingError::EmptyData("Cannot compute column mean of empty data".to_string())
    })
}

fn column_std<F, S>(data: &ArrayBase<S, Ix2>) -> Result<Array1<F>>
where
    F: Float + FromPrimitive,
    S: Data<Elem = F>,
{
    if data.nrows() == 0 {
        return Err(PreprocessingError::EmptyData(
            "Cannot compute column standard deviation of empty data".to_string(),
        ));
    }
    Ok(data.std_axis(Axis(0), F::zero()))
}

/// StandardScaler with optional precomputed statistics.
#[derive(Clone, Debug)]
pub struct StandardScaler<F> {
    precomputed_mean: Option<Array1<F>>,
    precomputed_std: Option<Array1<F>>,
}

impl<F: Float + FromPrimitive> Default for StandardScaler<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float + FromPrimitive> StandardScaler<F> {
    pub fn new() -> Self {
        Self {
            precomputed_mean: None,
            precomputed_std: None,
        }
    }

    /// Use these column means instead of computing them.
    pub fn with_precomputed_mean(mut self, mean: Array1<F>) -> Self {
        self.precomputed_mean = Some(mean);
        self
    }

    /// Use these column standard deviations instead of computing them.
    pub fn with_precomputed_std(mut self, std: Array1<F>) -> Self {
        self.precomputed_std = Some(std);
        self
    }

    /// Reuse both statistics from an earlier call.
    pub fn with_params(self, params: StandardParams<F>) -> Self {
        self.with_precomputed_mean(params.mean)
            .with_precomputed_std(params.std)
    }

    /// Standardize `data`, returning the result and the statistics actually used.
    pub fn scale<S>(&self, data: &ArrayBase<S, Ix2>) -> Result<(Array2<F>, StandardParams<F>)>
    where
        S: Data<Elem = F>,
    {
        let mean = match &self.precomputed_mean {
            Some(mean) => mean.clone(),
            None => column_mean(data)?,
        };
        let std = match &self.precomputed_std {
            Some(std) => std.clone(),
            None => column_std(data)?,
        };

        debug!(
            shape = ?data.shape(),
            precomputed_mean = self.precomputed_mean.is_some(),
            precomputed_std = self.precomputed_std.is_some(),
            "standardizing"
        );

        let params = StandardParams { mean, std };
        let scaled = params.transform(data)?;
        Ok((scaled, params))
    }
}

/// Standardize each column of `data` to zero mean and unit variance.
///
/// Returns `(standardized, mean, std)` where `mean` and `std` are the column
/// statistics that were used, either computed from `data` or taken verbatim
/// from `precomputed_mean` / `precomputed_std`.
///
/// # Errors
/// - [`PreprocessingError::FeatureMismatch`] if a precomputed vector length
///   differs from the column count.
/// - [`PreprocessingError::EmptyData`] if statistics must be computed from zero rows.
pub fn standardize<F, S>(
    data: &ArrayBase<S, Ix2>,
    precomputed_mean: Option<&Array1<F>>,
    precomputed_std: Option<&Array1<F>>,
) -> Result<(Array2<F>, Array1<F>, Array1<F>)>
where
    F: Float + FromPrimitive,
    S: Data<Elem = F>,
{
    let mut scaler = StandardScaler::new();
    if let Some(mean) = precomputed_mean {
        scaler = scaler.with_precomputed_mean(mean.clone());
    }
    if let Some(std) = precomputed_std {
        scaler = scaler.with_precomputed_std(std.clone());
    }
    let (scaled, params) = scaler.scale(data)?;
    Ok((scaled, params.mean, params.std))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn create_train_data() -> Array2<f64> {
        array![[1.0, 1.0, 1.0], [4.0, 5.0, 6.0]]
    }

    fn create_test_data() -> Array2<f64> {
        array![[1.0, 2.0, 3.0], [4.0, 3.0, 4.0]]
    }

    #[test]
    fn test_standardize_train() {
        let (scaled, mean, std) = standardize(&create_train_data(), None, None).unwrap();
        assert_abs_diff_eq!(
            scaled,
            array![[-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]],
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(mean, array![2.5, 3.0, 3.5], epsilon = 1e-12);
        assert_abs_diff_eq!(std, array![1.5, 2.0, 2.5], epsilon = 1e-12);
    }

    #[test]
    fn test_standardize_precomputed() {
        let (_, mean, std) = standardize(&create_train_data(), None, None).unwrap();
        let (scaled, used_mean, used_std) =
            standardize(&create_test_data(), Some(&mean), Some(&std)).unwrap();
        assert_abs_diff_eq!(
            scaled,
            array![[-1.0, -0.5, -0.2], [1.0, 0.0, 0.2]],
            epsilon = 1e-12
        );
        assert_eq!(used_mean, mean);
        assert_eq!(used_std, std);
    }

    #[test]
    fn test_standardize_reference_has_zero_mean_unit_std() {
        let data = array![[2.0, -7.0], [4.0, 1.0], [9.0, 0.5], [-3.0, 3.0]];
        let (scaled, _, _) = standardize(&data, None, None).unwrap();
        let (_, mean, std) = standardize(&scaled, None, None).unwrap();
        assert_abs_diff_eq!(mean, array![0.0, 0.0], epsilon = 1e-12);
        assert_abs_diff_eq!(std, array![1.0, 1.0], epsilon = 1e-12);
    }

    #[test]
    fn test_standardize_only_std_precomputed() {
        let data = array![[1.0], [3.0]];
        let std = array![4.0];
        let (scaled, mean, _) = standardize(&data, None, Some(&std)).unwrap();
        assert_eq!(mean, array![2.0]);
        assert_abs_diff_eq!(scaled, array![[-0.25], [0.25]], epsilon = 1e-12);
    }

    #[test]
    fn test_standardize_constant_column_is_not_finite() {
        let data = array![[2.0, 1.0], [2.0, 3.0]];
        let (scaled, _, std) = standardize(&data, None, None).unwrap();
        assert_eq!(std[0], 0.0);
        assert!(scaled.column(0).iter().all(|v| !v.is_finite()));
    }

    #[test]
    fn test_standardize_feature_mismatch() {
        let mean = array![0.0];
        let result = standardize(&create_test_data(), Some(&mean), None);
        assert!(matches!(
            result,
            Err(PreprocessingError::FeatureMismatch {
                expected_features: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_standardize_empty_data() {
        let data = Array2::<f64>::zeros((0, 3));
        let result = standardize(&data, None, None);
        assert!(matches!(result, Err(PreprocessingError::EmptyData(_))));
    }

    #[test]
    fn test_standard_scaler_with_params_f32() {
        let train = array![[0.0f32], [2.0]];
        let params = StandardParams::fit(&train).unwrap();
        assert_eq!(params.n_features(), 1);
        let (scaled, used) = StandardScaler::new()
            .with_params(params.clone())
            .scale(&array![[3.0f32]])
            .unwrap();
        assert_eq!(used, params);
        assert_abs_diff_eq!(scaled, array![[2.0f32]], epsilon = 1e-6);
    }

    #[test]
    fn test_standard_params_inverse_transform() {
        let data = create_test_data();
        let params = StandardParams::fit(&data).unwrap();
        let scaled = params.transform(&data).unwrap();
        let recovered = params.inverse_transform(&scaled).unwrap();
        assert_abs_diff_eq!(recovered, data, epsilon = 1e-12);
    }
}
