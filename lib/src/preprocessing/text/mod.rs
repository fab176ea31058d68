//! Transformations over tokenized corpora.
//!
//! A corpus is a slice of documents, each a `Vec` of tokens. Tokens can be
//! any `AsRef<str> + Clone` type, so both `&str` and `String` corpora work
//! and the output keeps the input token type.

pub mod subsampling;

pub use subsampling::{
    subsample_with_rng, subsampling_frequent_tokens, token_frequencies, MtStream,
    SubsamplingConfig, TokenSubsampler,
};
