//! Bounding boxes of a stroke or a stroke collection.

use super::Aabb2;
use crate::error::StrokeError;
use crate::stroke::Stroke;
use num_traits::Float;

/// What to compute a bounding box of.
///
/// The two variants use different reductions: a single stroke is bounded
/// over its points directly, a collection is bounded per stroke first and the
/// per-stroke boxes are then combined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingBoxInput<'a, F> {
    /// One stroke.
    Single(&'a Stroke<F>),
    /// A collection of strokes.
    Many(&'a [Stroke<F>]),
}

impl<'a, F> From<&'a Stroke<F>> for BoundingBoxInput<'a, F> {
    fn from(stroke: &'a Stroke<F>) -> Self {
        BoundingBoxInput::Single(stroke)
    }
}

impl<'a, F> From<&'a [Stroke<F>]> for BoundingBoxInput<'a, F> {
    fn from(strokes: &'a [Stroke<F>]) -> Self {
        BoundingBoxInput::Many(strokes)
    }
}

impl<'a, F> From<&'a Vec<Stroke<F>>> for BoundingBoxInput<'a, F> {
    fn from(strokes: &'a Vec<Stroke<F>>) -> Self {
        BoundingBoxInput::Many(strokes.as_slice())
    }
}

/// Computes the bounding box of a stroke or a list of strokes.
///
/// Use [`Aabb2::to_array`] for the `[[min_x, min_y], [max_x, max_y]]` form.
///
/// # Errors
///
/// [`StrokeError::EmptyCollection`] for an empty collection. A single stroke
/// always has a box.
///
/// # Example
///
/// ```
/// use strokes::{bounding_box, to_strokes};
///
/// let strokes = to_strokes(vec![
///     vec![[0.0_f64, 0.0], [1.0, 1.0]],
///     vec![[2.0, -1.0], [3.0, 5.0]],
/// ])
/// .unwrap();
///
/// let all = bounding_box(&strokes).unwrap();
/// assert_eq!(all.to_array(), [[0.0, -1.0], [3.0, 5.0]]);
///
/// let first = bounding_box(&strokes[0]).unwrap();
/// assert_eq!(first.to_array(), [[0.0, 0.0], [1.0, 1.0]]);
/// ```
pub fn bounding_box<'a, F, I>(input: I) -> Result<Aabb2<F>, StrokeError>
where
    F: Float + 'a,
    I: Into<BoundingBoxInput<'a, F>>,
{
    match input.into() {
        BoundingBoxInput::Single(stroke) => Ok(Aabb2::from_stroke(stroke)),
        BoundingBoxInput::Many(strokes) => {
            Aabb2::from_strokes(strokes).ok_or(StrokeError::EmptyCollection)
        }
    }
}
