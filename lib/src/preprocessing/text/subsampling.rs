//! Subsampling of frequent tokens.
//!
//! Each token occurrence is kept with probability
//!
//! ```text
//! p(token) = sqrt(threshold / frequency(token))
//! ```
//!
//! where `frequency` is the token's share of all tokens in the corpus. One
//! uniform draw in `[0, 1)` is taken per occurrence, in corpus order, and the
//! occurrence survives when `draw > 1 - p(token)`. Tokens rarer than
//! `threshold` have `p > 1` and are always kept.
//!
//! Seeded calls draw from [`MtStream`], an MT19937 generator whose doubles
//! match numpy's legacy `RandomState`, so a seed gives the same thinning as
//! `np.random.seed(seed)` followed by `np.random.random_sample()` per token.

use crate::preprocessing::error::{PreprocessingError, Result};
use rand::Rng;
use rand_mt::Mt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Configuration for token subsampling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubsamplingConfig {
    /// Frequency scale; tokens rarer than this are never dropped.
    pub threshold: f64,
    /// Seed for the random stream. `None` seeds from system entropy.
    pub seed: Option<u32>,
}

impl SubsamplingConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// MT19937 stream of uniform doubles in `[0, 1)`.
///
/// Seeding uses `init_genrand`, and each double is built from two 32-bit
/// outputs with 53 bits of precision, the same layout numpy's legacy
/// `random_sample` uses.
#[derive(Clone, Debug)]
pub struct MtStream {
    mt: Mt,
}

impl MtStream {
    pub fn new(seed: u32) -> Self {
        Self { mt: Mt::new(seed) }
    }

    /// Stream seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn next_f64(&mut self) -> f64 {
        let high = self.mt.next_u32() >> 5;
        let low = self.mt.next_u32() >> 6;
        (f64::from(high) * 67_108_864.0 + f64::from(low)) / 9_007_199_254_740_992.0
    }
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(PreprocessingError::InvalidParameter(format!(
            "subsampling threshold must be positive and finite, got {}",
            threshold
        )));
    }
    Ok(())
}

/// Relative frequency of every token across the whole corpus.
pub fn token_frequencies<T: AsRef<str>>(corpus: &[Vec<T>]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;
    for document in corpus {
        for token in document {
            *counts.entry(token.as_ref()).or_insert(0) += 1;
            total += 1;
        }
    }
    counts
        .into_iter()
        .map(|(token, count)| (token, count as f64 / total as f64))
        .collect()
}

// Threshold must already be validated. `draw` is called once per occurrence.
fn thin_corpus<T, G>(corpus: &[Vec<T>], threshold: f64, mut draw: G) -> Vec<Vec<T>>
where
    T: AsRef<str> + Clone,
    G: FnMut() -> f64,
{
    let drop_below: HashMap<&str, f64> = token_frequencies(corpus)
        .into_iter()
        .map(|(token, frequency)| (token, 1.0 - (threshold / frequency).sqrt()))
        .collect();

    let mut kept = 0usize;
    let mut dropped = 0usize;
    let subsampled = corpus
        .iter()
        .map(|document| {
            document
                .iter()
                .filter(|token| {
                    let key: &str = (*token).as_ref();
                    let keep = draw() > drop_below[key];
                    if keep {
                        kept += 1;
                    } else {
                        dropped += 1;
                    }
                    keep
                })
                .cloned()
                .collect::<Vec<T>>()
        })
        .collect::<Vec<_>>();

    debug!(
        documents = corpus.len(),
        distinct_tokens = drop_below.len(),
        kept,
        dropped,
        threshold,
        "subsampled frequent tokens"
    );

    subsampled
}

/// Drop frequent tokens from `corpus`, drawing from a caller-owned `rng`.
///
/// Document count and the relative order of surviving tokens are preserved.
///
/// # Errors
/// [`PreprocessingError::InvalidParameter`] if `threshold` is not positive and finite.
pub fn subsample_with_rng<T, R>(
    corpus: &[Vec<T>],
    threshold: f64,
    rng: &mut R,
) -> Result<Vec<Vec<T>>>
where
    T: AsRef<str> + Clone,
    R: Rng + ?Sized,
{
    validate_threshold(threshold)?;
    Ok(thin_corpus(corpus, threshold, || rng.gen::<f64>()))
}

/// Token subsampler that owns its random stream.
///
/// Consecutive calls on the same instance continue the stream, so two calls
/// with the same corpus generally differ. Build a new subsampler with the same
/// seed to replay a result.
///
/// # Example
/// ```
/// use arrayprep::preprocessing::TokenSubsampler;
///
/// let corpus = vec![vec!["a", "b", "a", "a"], vec!["c", "a"]];
/// let first = TokenSubsampler::new(0.1).unwrap().with_seed(7).subsample(&corpus);
/// let again = TokenSubsampler::new(0.1).unwrap().with_seed(7).subsample(&corpus);
/// assert_eq!(first, again);
/// ```
#[derive(Clone, Debug)]
pub struct TokenSubsampler {
    threshold: f64,
    stream: MtStream,
}

impl TokenSubsampler {
    /// Create a subsampler seeded from system entropy.
    pub fn new(threshold: f64) -> Result<Self> {
        validate_threshold(threshold)?;
        Ok(Self {
            threshold,
            stream: MtStream::from_entropy(),
        })
    }

    pub fn from_config(config: &SubsamplingConfig) -> Result<Self> {
        let subsampler = Self::new(config.threshold)?;
        Ok(match config.seed {
            Some(seed) => subsampler.with_seed(seed),
            None => subsampler,
        })
    }

    /// Reset the random stream to a fixed seed.
    pub fn with_seed(self, seed: u32) -> Self {
        self.with_stream(MtStream::new(seed))
    }

    /// Use an explicitly constructed random stream.
    pub fn with_stream(mut self, stream: MtStream) -> Self {
        self.stream = stream;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn subsample<T>(&mut self, corpus: &[Vec<T>]) -> Vec<Vec<T>>
    where
        T: AsRef<str> + Clone,
    {
        let stream = &mut self.stream;
        thin_corpus(corpus, self.threshold, || stream.next_f64())
    }
}

/// Subsample frequent tokens with a fresh random stream per call.
///
/// Identical `corpus`, `threshold` and `seed` always give identical output.
/// With `seed = None` the stream is seeded from system entropy.
///
/// # Errors
/// [`PreprocessingError::InvalidParameter`] if `threshold` is not positive and finite.
pub fn subsampling_frequent_tokens<T>(
    corpus: &[Vec<T>],
    threshold: f64,
    seed: Option<u32>,
) -> Result<Vec<Vec<T>>>
where
    T: AsRef<str> + Clone,
{
    validate_threshold(threshold)?;
    let mut stream = match seed {
        Some(seed) => MtStream::new(seed),
        None => MtStream::from_entropy(),
    };
    Ok(thin_corpus(corpus, threshold, || stream.next_f64()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_test_corpus() -> Vec<Vec<&'static str>> {
        vec![
            vec!["this", "is", "is", "a", "test"],
            vec!["test", "hello", "world"],
        ]
    }

    fn create_skewed_corpus() -> Vec<Vec<String>> {
        let mut document: Vec<String> = (0..1000).map(|_| "the".to_string()).collect();
        document.extend((0..10).map(|i| format!("rare{}", i)));
        vec![document, vec!["the".to_string(), "rare0".to_string()]]
    }

    fn is_subsequence<T: PartialEq>(sub: &[T], full: &[T]) -> bool {
        let mut remaining = full.iter();
        sub.iter().all(|x| remaining.any(|y| y == x))
    }

    #[test]
    fn test_mt_stream_seed_1() {
        let mut stream = MtStream::new(1);
        let expected = [
            0.417022005,
            0.720324493,
            0.000114374817,
            0.302332573,
            0.146755891,
            0.0923385948,
            0.186260211,
            0.345560727,
        ];
        for want in expected {
            assert_abs_diff_eq!(stream.next_f64(), want, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_mt_stream_range() {
        let mut stream = MtStream::new(123);
        assert!((0..1000).map(|_| stream.next_f64()).all(|x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_token_frequencies() {
        let corpus = create_test_corpus();
        let frequencies = token_frequencies(&corpus);
        assert_eq!(frequencies.len(), 6);
        assert_abs_diff_eq!(frequencies["is"], 0.25);
        assert_abs_diff_eq!(frequencies["test"], 0.25);
        assert_abs_diff_eq!(frequencies["hello"], 0.125);
        assert_abs_diff_eq!(frequencies.values().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_subsampling_seed_1_reference_output() {
        let got = subsampling_frequent_tokens(&create_test_corpus(), 0.1, Some(1)).unwrap();
        assert_eq!(got, vec![vec!["this", "is", "a"], vec!["hello", "world"]]);
    }

    #[test]
    fn test_subsampling_keeps_only_draws_above_one_minus_p() {
        // single token: frequency 1, p = 0.5, kept iff draw > 0.5
        // seed 1 draws: 0.417 0.720 0.0001 0.302 | 0.147 0.092 0.186 0.346
        let same: Vec<Vec<&str>> = vec![vec!["the"; 4], vec!["the"; 4]];
        let got = subsampling_frequent_tokens(&same, 0.25, Some(1)).unwrap();
        assert_eq!(got, vec![vec!["the"], vec![]]);

        // p = 0.3: only the 0.720 draw clears 0.7
        let got = subsampling_frequent_tokens(&same, 0.09, Some(1)).unwrap();
        assert_eq!(got, vec![vec!["the"], vec![]]);

        // p = 0.6: draws above 0.4 are 0.417 and 0.720
        let got = subsampling_frequent_tokens(&same, 0.36, Some(1)).unwrap();
        assert_eq!(got, vec![vec!["the", "the"], vec![]]);
    }

    #[test]
    fn test_subsampling_same_seed_same_output() {
        let corpus = create_test_corpus();
        let first = subsampling_frequent_tokens(&corpus, 0.1, Some(1)).unwrap();
        for _ in 0..5 {
            let again = subsampling_frequent_tokens(&corpus, 0.1, Some(1)).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_subsample_with_rng_is_reproducible() {
        let corpus = create_skewed_corpus();
        let mut rng = StdRng::seed_from_u64(42);
        let first = subsample_with_rng(&corpus, 0.002, &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let again = subsample_with_rng(&corpus, 0.002, &mut rng).unwrap();
        assert_eq!(first, again);
        assert_eq!(first[0].iter().filter(|t| t.starts_with("rare")).count(), 10);
    }

    #[test]
    fn test_subsampling_preserves_documents_and_order() {
        let corpus = create_test_corpus();
        for seed in 0..20 {
            let got = subsampling_frequent_tokens(&corpus, 0.1, Some(seed)).unwrap();
            assert_eq!(got.len(), corpus.len());
            for (kept, original) in got.iter().zip(corpus.iter()) {
                assert!(is_subsequence(kept, original));
            }
        }
    }

    #[test]
    fn test_subsampling_keeps_rare_tokens() {
        let corpus = create_skewed_corpus();
        let got = subsampling_frequent_tokens(&corpus, 0.002, Some(3)).unwrap();
        let rare_kept = got[0].iter().filter(|t| t.starts_with("rare")).count();
        assert_eq!(rare_kept, 10);
        assert!(got[1].contains(&"rare0".to_string()));
    }

    #[test]
    fn test_subsampling_thins_frequent_tokens() {
        let corpus = create_skewed_corpus();
        let got = subsampling_frequent_tokens(&corpus, 0.002, Some(3)).unwrap();
        let the_kept = got.iter().flatten().filter(|t| t.as_str() == "the").count();
        // p(the) is roughly 0.045
        assert!(the_kept < 200, "kept {} of 1001", the_kept);
    }

    #[test]
    fn test_subsampling_threshold_above_all_frequencies_keeps_everything() {
        let corpus = create_test_corpus();
        let got = subsampling_frequent_tokens(&corpus, 1.0, Some(9)).unwrap();
        assert_eq!(got, corpus);
    }

    #[test]
    fn test_subsampling_invalid_threshold() {
        let corpus = create_test_corpus();
        for threshold in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                subsampling_frequent_tokens(&corpus, threshold, Some(1)),
                Err(PreprocessingError::InvalidParameter(_))
            ));
        }
        assert!(TokenSubsampler::new(0.0).is_err());
    }

    #[test]
    fn test_subsampling_empty_corpus() {
        let corpus: Vec<Vec<&str>> = Vec::new();
        assert!(subsampling_frequent_tokens(&corpus, 0.1, Some(1))
            .unwrap()
            .is_empty());

        let corpus: Vec<Vec<&str>> = vec![vec![], vec![]];
        let got = subsampling_frequent_tokens(&corpus, 0.1, Some(1)).unwrap();
        assert_eq!(got, corpus);
    }

    #[test]
    fn test_token_subsampler_continues_stream() {
        let corpus = create_skewed_corpus();
        let mut subsampler =
            TokenSubsampler::from_config(&SubsamplingConfig::new(0.002).with_seed(11)).unwrap();
        let first = subsampler.subsample(&corpus);
        let second = subsampler.subsample(&corpus);

        // doubling the corpus keeps every frequency, so one call over both
        // copies consumes the stream exactly like the two calls above
        let doubled: Vec<Vec<String>> = corpus.iter().chain(corpus.iter()).cloned().collect();
        let both = subsampling_frequent_tokens(&doubled, 0.002, Some(11)).unwrap();
        assert_eq!(both, [first, second].concat());
    }

    #[test]
    fn test_token_subsampler_with_stream() {
        let corpus = create_test_corpus();
        let mut subsampler = TokenSubsampler::new(0.1)
            .unwrap()
            .with_stream(MtStream::new(5));
        assert_eq!(subsampler.threshold(), 0.1);
        let got = subsampler.subsample(&corpus);
        assert_eq!(
            got,
            subsampling_frequent_tokens(&corpus, 0.1, Some(5)).unwrap()
        );
    }
}
