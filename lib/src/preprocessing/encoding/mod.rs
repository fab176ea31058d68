//! Categorical label encoding.
//!
//! # Available Encoders
//!
//! ## OneHotEncoder
//! Converts integer class labels to one-hot (indicator) rows, and converts
//! one-hot or score matrices back to labels by row-wise argmax.
//!
//! ```ignore
//! // Input:  [0, 2, 1]
//! // Output: [[1,0,0], [0,0,1], [0,1,0]]
//! ```
//!
//! # Design Notes
//!
//! Labels are `usize` class indices. Gaps are kept as all-zero columns rather
//! than compacted, so column `j` always means class `j`. The output element
//! type is either a type parameter ([`onehot`]) or a runtime [`DType`]
//! ([`onehot_with_dtype`]).

mod one_hot;

pub use one_hot::{
    onehot, onehot_reverse, onehot_with_dtype, DType, OneHotConfig, OneHotEncoder, OneHotMatrix,
};
