//! Benchmark utilities for arrayprep benchmarks.
//!
//! Provides seeded synthetic inputs so every benchmark run measures the same
//! data:
//!
//! - Feature matrices for the scalers and normalizers
//! - Label vectors for one-hot encoding
//! - Token corpora with a skewed frequency distribution for subsampling

pub mod data;

pub use data::{SyntheticCorpus, SyntheticFeatures};
