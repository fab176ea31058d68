//! Scaling transformations for feature normalization.
//!
//! | Operation | Description | Returns |
//! |-----------|-------------|---------|
//! | [`standardize`] | Z-score normalization (mean=0, std=1) per column | `(array, mean, std)` |
//! | [`minmax_scaling`] | Scale each column to `[min, max]` | `(array, min, max)` |
//! | [`l2_normalize`] | Scale vectors along the last axis to unit L2 norm | `array` |
//!
//! Column statistics are plain return values. Feed them back as precomputed
//! parameters to scale a held-out set exactly like the training set:
//!
//! ```
//! use arrayprep::preprocessing::standardize;
//! use ndarray::array;
//!
//! let train = array![[1.0, 10.0], [3.0, 30.0]];
//! let (_, mean, std) = standardize(&train, None, None).unwrap();
//! let (test_scaled, _, _) = standardize(&array![[2.0, 50.0]], Some(&mean), Some(&std)).unwrap();
//! assert_eq!(test_scaled, array![[0.0, 3.0]]);
//! ```

pub mod minmax;
pub mod normalizer;
pub mod standard;

pub use minmax::{minmax_scaling, MinMaxParams, MinMaxScaler, MinMaxScalerConfig};
pub use normalizer::{l2_normalize, normalize, NormType, Normalizer};
pub use standard::{standardize, StandardParams, StandardScaler};
