//! Symmetric padding of selected axes.
//!
//! Grows each listed axis to a common target length, centring the original
//! values and filling the border with a constant. When the amount of padding
//! on an axis is odd, the leading side receives the extra element:
//!
//! ```text
//! size 3 -> 7: 2 before, 2 after
//! size 3 -> 6: 2 before, 1 after
//! ```

use crate::preprocessing::error::{PreprocessingError, Result};
use ndarray::{Array, ArrayBase, Axis, Data, Dimension, Slice};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Axes padded when none are given.
pub const DEFAULT_PADDING_AXES: [usize; 2] = [0, 1];

/// Configuration for [`SquarePadder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingConfig {
    /// Target length of every padded axis.
    pub n_elements: usize,
    /// Axes to pad.
    pub axes: Vec<usize>,
}

impl PaddingConfig {
    pub fn new(n_elements: usize) -> Self {
        Self {
            n_elements,
            axes: DEFAULT_PADDING_AXES.to_vec(),
        }
    }
}

/// Pads arrays to a square (or cubic, ...) block along selected axes.
///
/// # Example
/// ```
/// use arrayprep::preprocessing::SquarePadder;
/// use ndarray::array;
///
/// let padded = SquarePadder::new(4, 0.0)
///     .pad(&array![[1.0, 2.0], [3.0, 4.0]])
///     .unwrap();
/// assert_eq!(padded.dim(), (4, 4));
/// assert_eq!(padded[[1, 1]], 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct SquarePadder<A> {
    config: PaddingConfig,
    value: A,
}

impl<A: Clone> SquarePadder<A> {
    /// Pad the default axes to `n_elements`, filling with `value`.
    pub fn new(n_elements: usize, value: A) -> Self {
        Self {
            config: PaddingConfig::new(n_elements),
            value,
        }
    }

    pub fn from_config(config: PaddingConfig, value: A) -> Self {
        Self { config, value }
    }

    /// Set which axes are padded.
    pub fn with_axes(mut self, axes: &[usize]) -> Self {
        self.config.axes = axes.to_vec();
        self
    }

    pub fn config(&self) -> &PaddingConfig {
        &self.config
    }

    pub fn pad<S, D>(&self, array: &ArrayBase<S, D>) -> Result<Array<A, D>>
    where
        S: Data<Elem = A>,
        D: Dimension,
    {
        square_padding(
            array,
            self.config.n_elements,
            &self.config.axes,
            self.value.clone(),
        )
    }
}

/// Split `total` padding elements into `(before, after)`.
fn split_padding(total: usize) -> (usize, usize) {
    let after = total / 2;
    (total - after, after)
}

/// Symmetrically pad `axes` of `array` to `n_elements`, filling with `value`.
///
/// Axes not listed keep their size. The source values are copied unchanged
/// into the interior of the result.
///
/// Listed axes do not need to share a size: each one is padded on its own
/// from its current length up to `n_elements`, so a `2 x 3` input padded to
/// 5 comes back `5 x 5`.
///
/// # Errors
/// - [`PreprocessingError::InvalidAxis`] if an axis is `>= array.ndim()`.
/// - [`PreprocessingError::InvalidParameter`] if an axis is listed twice.
/// - [`PreprocessingError::PaddingTooSmall`] if `n_elements` is smaller than
///   the current size of a listed axis.
pub fn square_padding<A, S, D>(
    array: &ArrayBase<S, D>,
    n_elements: usize,
    axes: &[usize],
    value: A,
) -> Result<Array<A, D>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    let ndim = array.ndim();
    let mut before: Vec<Option<usize>> = vec![None; ndim];
    let mut shape = array.raw_dim();

    for &axis in axes {
        if axis >= ndim {
            return Err(PreprocessingError::InvalidAxis { axis, ndim });
        }
        if before[axis].is_some() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "axis {} listed more than once",
                axis
            )));
        }
        let size = array.len_of(Axis(axis));
        if n_elements < size {
            return Err(PreprocessingError::PaddingTooSmall {
                axis,
                size,
                target: n_elements,
            });
        }
        let (lead, _) = split_padding(n_elements - size);
        before[axis] = Some(lead);
        shape[axis] = n_elements;
    }

    debug!(
        from = ?array.shape(),
        to = ?shape.slice(),
        ?axes,
        "padding array"
    );

    let mut padded = Array::from_elem(shape, value);
    padded
        .slice_each_axis_mut(|desc| {
            let axis = desc.axis.index();
            match before[axis] {
                Some(lead) => Slice::from(lead..lead + array.len_of(desc.axis)),
                None => Slice::from(..),
            }
        })
        .assign(array);

    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3, ArrayD, IxDyn};

    fn create_test_data() -> ndarray::Array2<f64> {
        array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
    }

    fn create_stacked_data() -> Array3<f64> {
        array![
            [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]],
            [[10.0, 11.0, 12.0], [13.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
        ]
    }

    #[test]
    fn test_split_padding() {
        assert_eq!(split_padding(4), (2, 2));
        assert_eq!(split_padding(3), (2, 1));
        assert_eq!(split_padding(1), (1, 0));
        assert_eq!(split_padding(0), (0, 0));
    }

    #[test]
    fn test_square_padding_3_to_7() {
        let got = square_padding(&create_test_data(), 7, &DEFAULT_PADDING_AXES, 0.0).unwrap();
        let expected = array![
            [0., 0., 0., 0., 0., 0., 0.],
            [0., 0., 0., 0., 0., 0., 0.],
            [0., 0., 1., 2., 3., 0., 0.],
            [0., 0., 4., 5., 6., 0., 0.],
            [0., 0., 7., 8., 9., 0., 0.],
            [0., 0., 0., 0., 0., 0., 0.],
            [0., 0., 0., 0., 0., 0., 0.]
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn test_square_padding_3_to_6() {
        let got = square_padding(&create_test_data(), 6, &DEFAULT_PADDING_AXES, 0.0).unwrap();
        let expected = array![
            [0., 0., 0., 0., 0., 0.],
            [0., 0., 0., 0., 0., 0.],
            [0., 0., 1., 2., 3., 0.],
            [0., 0., 4., 5., 6., 0.],
            [0., 0., 7., 8., 9., 0.],
            [0., 0., 0., 0., 0., 0.]
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn test_square_padding_stacked_3_to_7() {
        let source = create_stacked_data();
        let got = square_padding(&source, 7, &[1, 2], 0.0).unwrap();
        assert_eq!(got.dim(), (2, 7, 7));
        assert_eq!(got.slice(ndarray::s![.., 2..5, 2..5]), source);
        assert_eq!(got[[1, 2, 2]], 10.0);
        assert_eq!(got[[1, 3, 2]], 13.0);
        assert_eq!(got.iter().filter(|&&v| v != 0.0).count(), 18);
    }

    #[test]
    fn test_square_padding_stacked_3_to_6() {
        let source = create_stacked_data();
        let got = square_padding(&source, 6, &[1, 2], 0.0).unwrap();
        assert_eq!(got.dim(), (2, 6, 6));
        assert_eq!(got.slice(ndarray::s![.., 2..5, 2..5]), source);
        assert!(got.slice(ndarray::s![.., 5, ..]).iter().all(|&v| v == 0.0));
        assert!(got.slice(ndarray::s![.., .., 0..2]).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_square_padding_fill_value() {
        let got = square_padding(&array![[1, 2], [3, 4]], 4, &[0, 1], -1).unwrap();
        assert_eq!(
            got,
            array![
                [-1, -1, -1, -1],
                [-1, 1, 2, -1],
                [-1, 3, 4, -1],
                [-1, -1, -1, -1]
            ]
        );
    }

    #[test]
    fn test_square_padding_same_size_is_copy() {
        let source = create_test_data();
        let got = square_padding(&source, 3, &DEFAULT_PADDING_AXES, 0.0).unwrap();
        assert_eq!(got, source);
    }

    #[test]
    fn test_square_padding_unequal_axes() {
        let source = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let got = square_padding(&source, 5, &[0, 1], 0.0).unwrap();
        assert_eq!(got.dim(), (5, 5));
        // axis 0 pads 3 (2 before), axis 1 pads 2 (1 before)
        assert_eq!(got.slice(ndarray::s![2..4, 1..4]), source);
        assert_eq!(got.sum(), 21.0);
    }

    #[test]
    fn test_square_padding_too_small() {
        let result = square_padding(&create_test_data(), 2, &DEFAULT_PADDING_AXES, 0.0);
        assert_eq!(
            result.unwrap_err(),
            PreprocessingError::PaddingTooSmall {
                axis: 0,
                size: 3,
                target: 2
            }
        );
    }

    #[test]
    fn test_square_padding_invalid_axis() {
        let result = square_padding(&create_test_data(), 5, &[0, 2], 0.0);
        assert_eq!(
            result.unwrap_err(),
            PreprocessingError::InvalidAxis { axis: 2, ndim: 2 }
        );
    }

    #[test]
    fn test_square_padding_duplicate_axis() {
        let result = square_padding(&create_test_data(), 5, &[1, 1], 0.0);
        assert!(matches!(
            result,
            Err(PreprocessingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_square_padding_dynamic_rank() {
        let source = ArrayD::<f32>::ones(IxDyn(&[2, 3, 1]));
        let got = square_padding(&source, 5, &[1, 2], 0.0).unwrap();
        assert_eq!(got.shape(), &[2, 5, 5]);
        assert_eq!(got.sum(), 6.0);
        assert_eq!(got[[0, 1, 2]], 1.0);
        assert_eq!(got[[0, 4, 2]], 0.0);
    }

    #[test]
    fn test_square_padder_builder() {
        let padder = SquarePadder::new(7, 0.0).with_axes(&[1, 2]);
        assert_eq!(padder.config().axes, vec![1, 2]);
        let got = padder.pad(&create_stacked_data()).unwrap();
        assert_eq!(got.dim(), (2, 7, 7));
    }
}
