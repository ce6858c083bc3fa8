//! Concatenation of end-to-start adjacent strokes.

use super::core::Stroke;
use crate::error::StrokeError;
use crate::tolerance::Tolerance;
use log::trace;
use num_traits::Float;

/// Concatenates strokes that follow each other end to start.
///
/// Uses [`Tolerance::default`] for the endpoint check. See
/// [`concat_with_tolerance`].
///
/// # Example
///
/// ```
/// use strokes::{concat, to_strokes};
///
/// let strokes = to_strokes(vec![
///     vec![[0.0_f64, 0.0], [1.0, 1.0]],
///     vec![[1.0, 1.0], [2.0, 2.0]],
/// ])
/// .unwrap();
///
/// let joined = concat(&strokes).unwrap();
/// assert_eq!(joined.to_array(), vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
/// ```
pub fn concat<F: Float>(strokes: &[Stroke<F>]) -> Result<Stroke<F>, StrokeError> {
    concat_with_tolerance(strokes, Tolerance::default())
}

/// Concatenates strokes whose junction points match within `tolerance`.
///
/// The first stroke is taken in full. Every following stroke must start
/// where the result so far ends; its first point is then dropped and the
/// rest appended. The output therefore has
/// `sum(len) - (strokes.len() - 1)` points.
///
/// # Errors
///
/// * [`StrokeError::EmptyCollection`] if `strokes` is empty.
/// * [`StrokeError::NotAdjacent`] at the first junction that does not match.
///   Nothing is skipped or reordered.
pub fn concat_with_tolerance<F: Float>(
    strokes: &[Stroke<F>],
    tolerance: Tolerance<F>,
) -> Result<Stroke<F>, StrokeError> {
    let (first, rest) = strokes
        .split_first()
        .ok_or(StrokeError::EmptyCollection)?;

    let total: usize = strokes.iter().map(Stroke::len).sum::<usize>() - rest.len();
    let mut points = Vec::with_capacity(total);
    points.extend_from_slice(first.points());

    for (offset, stroke) in rest.iter().enumerate() {
        // `points` is never empty here
        let end = points[points.len() - 1];
        let start = stroke.first();
        if !tolerance.points_close(end, start) {
            let index = offset + 1;
            trace!("stroke {} does not start at the previous end point", index);
            return Err(StrokeError::NotAdjacent {
                index,
                end: end.to_f64_tuple(),
                start: start.to_f64_tuple(),
            });
        }
        points.extend_from_slice(&stroke.points()[1..]);
    }

    Ok(Stroke::from_points_unchecked(points))
}
