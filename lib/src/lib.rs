//! # arrayprep
//!
//! Stateless preprocessing for numeric arrays and tokenized text, built on
//! [`ndarray`].
//!
//! ## Core Design Principles
//!
//! - **No hidden state**: every operation is a function of its arguments.
//!   Fitted statistics are returned to the caller instead of being cached.
//! - **Train/test consistency**: statistics computed on a reference set can be
//!   passed back in to transform any other set the same way.
//! - **Explicit shapes**: fixed-rank inputs use fixed-rank array types, and
//!   rank-generic operations take explicit axis lists.
//! - **Reproducible randomness**: random operations take a seed or a
//!   caller-owned random stream.
//!
//! ## Quick Start
//!
//! ```rust
//! use arrayprep::{l2_normalize, onehot, onehot_reverse, square_padding, standardize};
//! use ndarray::{array, Array2};
//!
//! let encoded: Array2<f32> = onehot(&array![0usize, 2, 1], None).unwrap();
//! assert_eq!(onehot_reverse(&encoded).unwrap(), array![0, 2, 1]);
//!
//! let padded = square_padding(&array![[1.0, 2.0], [3.0, 4.0]], 4, &[0, 1], 0.0).unwrap();
//! assert_eq!(padded.dim(), (4, 4));
//!
//! let unit = l2_normalize(&array![[3.0, 4.0]]).unwrap();
//! assert_eq!(unit, array![[0.6, 0.8]]);
//!
//! let (z, mean, std) = standardize(&array![[1.0], [3.0]], None, None).unwrap();
//! assert_eq!(z, array![[-1.0], [1.0]]);
//! assert_eq!((mean[0], std[0]), (2.0, 1.0));
//! ```
//!
//! ## Module Structure
//!
//! - `preprocessing::encoding`: One-hot encoding and its argmax inverse
//! - `preprocessing::padding`: Symmetric constant padding of selected axes
//! - `preprocessing::scaling`: Unit-norm normalization, min-max scaling, standardization
//! - `preprocessing::text`: Frequency-based subsampling of token corpora
//! - `preprocessing::error`: Error type shared by all operations
//!
//! ## Logging
//!
//! Operations emit `tracing` events at `debug` level. Install any `tracing`
//! subscriber to see them; without one they cost nothing.

/// Data preprocessing transformations.
pub mod preprocessing;

/// Re-export of the free functions for convenient usage.
pub use preprocessing::{
    l2_normalize, minmax_scaling, onehot, onehot_reverse, square_padding, standardize,
    subsampling_frequent_tokens, PreprocessingError,
};
