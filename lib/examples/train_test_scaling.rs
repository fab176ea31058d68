//! Preprocessing walkthrough: scale a held-out set with training statistics.
//!
//! This example shows the train/test workflow the crate is built around:
//! - Fit min-max and standard statistics on a training split
//! - Reuse them unchanged on a test split
//! - One-hot encode labels with a class count shared by both splits
//! - Normalize embeddings and pad variable-size grids to a common shape
//! - Thin frequent tokens from a small corpus with a fixed seed
//!
//! Run with: cargo run --example train_test_scaling

use arrayprep::preprocessing::{
    l2_normalize, minmax_scaling, onehot, onehot_reverse, square_padding, standardize,
    subsampling_frequent_tokens, token_frequencies,
};
use ndarray::{array, Array2};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Train/Test Preprocessing ===\n");

    // 1. Numeric features
    let x_train = array![[1.0, 1.0, 1.0], [4.0, 5.0, 6.0]];
    let x_test = array![[1.0, 2.0, 3.0], [4.0, 3.0, 4.0]];

    let (train_mm, min, max) = minmax_scaling(&x_train, (0.1, 0.9), None, None)?;
    let (test_mm, _, _) = minmax_scaling(&x_test, (0.1, 0.9), Some(&min), Some(&max))?;
    println!("Min-max (0.1, 0.9)");
    println!("  column min: {}", min);
    println!("  column max: {}", max);
    println!("  train:\n{:.3}", train_mm);
    println!("  test:\n{:.3}\n", test_mm);

    let (train_z, mean, std) = standardize(&x_train, None, None)?;
    let (test_z, _, _) = standardize(&x_test, Some(&mean), Some(&std))?;
    println!("Standardization");
    println!("  column mean: {}", mean);
    println!("  column std:  {}", std);
    println!("  train:\n{:.3}", train_z);
    println!("  test:\n{:.3}\n", test_z);

    // 2. Labels
    let y_train = array![0usize, 1, 2, 3, 5];
    let y_test = array![2usize, 5];
    let train_onehot: Array2<f32> = onehot(&y_train, None)?;
    let test_onehot: Array2<f32> = onehot(&y_test, Some(train_onehot.ncols()))?;
    println!("One-hot: {} classes", train_onehot.ncols());
    println!("  test labels back: {}\n", onehot_reverse(&test_onehot)?);

    let scores = array![[0.66, 0.24, 0.10], [0.24, 0.66, 0.10]];
    println!("Argmax of scores: {}\n", onehot_reverse(&scores)?);

    // 3. Vectors and grids
    let embeddings = array![[1.0, 2.0, 3.0], [3.0, 2.0, 1.0]];
    println!("L2-normalized embeddings:\n{:.4}\n", l2_normalize(&embeddings)?);

    let grid = array![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    println!("Padded 3x3 grid to 6x6:\n{}\n", square_padding(&grid, 6, &[0, 1], 0)?);

    // 4. Tokens
    let corpus = vec![
        vec!["the", "cat", "sat", "on", "the", "mat"],
        vec!["the", "dog", "ate", "the", "bone"],
    ];
    let frequencies = token_frequencies(&corpus);
    println!("Frequency of \"the\": {:.3}", frequencies["the"]);
    let thinned = subsampling_frequent_tokens(&corpus, 0.05, Some(42))?;
    for (before, after) in corpus.iter().zip(thinned.iter()) {
        println!("  {:?} -> {:?}", before, after);
    }

    Ok(())
}
