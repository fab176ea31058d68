//! Stateless preprocessing transformations for numeric models.
//!
//! Every operation borrows its input and returns freshly allocated output.
//! Nothing is cached between calls: statistics such as column minima or
//! means are returned to the caller, who passes them back in to rescale
//! other data consistently.
//!
//! # Available Transformations
//!
//! ## Encoding
//! - [`onehot`] / [`onehot_with_dtype`]: class labels to indicator matrix
//! - [`onehot_reverse`]: indicator or score matrix back to labels
//!
//! ## Padding
//! - [`square_padding`]: grow selected axes symmetrically to a common size
//!
//! ## Scaling
//! - [`l2_normalize`]: unit-norm vectors along the last axis
//! - [`minmax_scaling`]: per-column rescaling into a target range
//! - [`standardize`]: per-column z-scores
//!
//! ## Text
//! - [`subsampling_frequent_tokens`]: seeded thinning of frequent tokens
//!
//! # Example
//!
//! ```
//! use arrayprep::preprocessing::{minmax_scaling, onehot, onehot_reverse};
//! use ndarray::{array, Array2};
//!
//! let labels = array![0usize, 2, 1];
//! let encoded: Array2<f32> = onehot(&labels, None)?;
//! assert_eq!(onehot_reverse(&encoded)?, array![0, 2, 1]);
//!
//! let train = array![[0.0, 4.0], [2.0, 8.0]];
//! let (_, min, max) = minmax_scaling(&train, (0.0, 1.0), None, None)?;
//! let (test, _, _) = minmax_scaling(&array![[1.0, 6.0]], (0.0, 1.0), Some(&min), Some(&max))?;
//! assert_eq!(test, array![[0.5, 0.5]]);
//! # Ok::<(), arrayprep::preprocessing::PreprocessingError>(())
//! ```

pub mod encoding;
pub mod error;
pub mod padding;
pub mod scaling;
pub mod text;

// Re-export main types
pub use encoding::{
    onehot, onehot_reverse, onehot_with_dtype, DType, OneHotConfig, OneHotEncoder, OneHotMatrix,
};
pub use error::{PreprocessingError, Result};
pub use padding::{square_padding, PaddingConfig, SquarePadder, DEFAULT_PADDING_AXES};
pub use scaling::{
    l2_normalize, minmax_scaling, normalize, standardize, MinMaxParams, MinMaxScaler,
    MinMaxScalerConfig, NormType, Normalizer, StandardParams, StandardScaler,
};
pub use text::{
    subsample_with_rng, subsampling_frequent_tokens, token_frequencies, MtStream,
    SubsamplingConfig, TokenSubsampler,
};
