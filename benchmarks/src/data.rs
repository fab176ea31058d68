use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator of numeric benchmark inputs.
#[derive(Debug, Clone)]
pub struct SyntheticFeatures {
    rng: StdRng,
}

impl SyntheticFeatures {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Matrix of `rows x cols` values, column `j` drawn from `[-j, 10 + j)`.
    ///
    /// Every column gets a different range so scaling does real work.
    pub fn matrix(&mut self, rows: usize, cols: usize) -> Array2<f64> {
        let rng = &mut self.rng;
        Array2::from_shape_fn((rows, cols), |(_, j)| {
            let j = j as f64;
            rng.gen_range(-j..10.0 + j)
        })
    }

    /// `n` class labels in `0..n_classes`.
    pub fn labels(&mut self, n: usize, n_classes: usize) -> Array1<usize> {
        let rng = &mut self.rng;
        Array1::from_shape_fn(n, |_| rng.gen_range(0..n_classes))
    }
}

/// Seeded generator of token corpora.
///
/// Token `i` of the vocabulary is drawn with weight `1 / (i + 1)`, giving a
/// Zipf-like distribution where a handful of tokens dominate.
#[derive(Debug, Clone)]
pub struct SyntheticCorpus {
    rng: StdRng,
    vocabulary: Vec<String>,
    cumulative: Vec<f64>,
}

impl SyntheticCorpus {
    pub fn new(vocabulary_size: usize, seed: u64) -> Self {
        let vocabulary = (0..vocabulary_size).map(|i| format!("tok{}", i)).collect();
        let mut total = 0.0;
        let cumulative = (0..vocabulary_size)
            .map(|i| {
                total += 1.0 / (i as f64 + 1.0);
                total
            })
            .collect();
        Self {
            rng: StdRng::seed_from_u64(seed),
            vocabulary,
            cumulative,
        }
    }

    fn draw(&mut self) -> String {
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        let target = self.rng.gen::<f64>() * total;
        let index = self
            .cumulative
            .partition_point(|&c| c <= target)
            .min(self.vocabulary.len().saturating_sub(1));
        self.vocabulary[index].clone()
    }

    /// `documents` documents of `length` tokens each.
    pub fn corpus(&mut self, documents: usize, length: usize) -> Vec<Vec<String>> {
        (0..documents)
            .map(|_| (0..length).map(|_| self.draw()).collect())
            .collect()
    }
}
