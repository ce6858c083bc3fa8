//! Core stroke type and conversion from point sequences.

use crate::bounds::Aabb2;
use crate::error::StrokeError;
use crate::primitives::Point2;
use num_traits::Float;

/// A continuous pen-down path: an ordered, non-empty sequence of points.
///
/// Strokes are built through [`Stroke::new`] or [`to_strokes`], both of which
/// reject empty input, so [`first`](Stroke::first) and [`last`](Stroke::last)
/// never fail. Repeated consecutive points are allowed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<Point2<F>>",
        into = "Vec<Point2<F>>",
        bound(
            serialize = "F: Float + serde::Serialize",
            deserialize = "F: Float + serde::Deserialize<'de>"
        )
    )
)]
pub struct Stroke<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Stroke<F> {
    /// Creates a stroke from points.
    ///
    /// Returns [`StrokeError::EmptyStroke`] if `points` is empty.
    pub fn new(points: Vec<Point2<F>>) -> Result<Self, StrokeError> {
        if points.is_empty() {
            return Err(StrokeError::EmptyStroke);
        }
        Ok(Self { points })
    }

    /// Creates a stroke consisting of a single point (a pen dot).
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { points: vec![p] }
    }

    /// Wraps points that are already known to be non-empty.
    #[inline]
    pub(crate) fn from_points_unchecked(points: Vec<Point2<F>>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// Returns the points of the stroke.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Consumes the stroke and returns its points.
    #[inline]
    pub fn into_points(self) -> Vec<Point2<F>> {
        self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a stroke holds at least one point. Provided to pair
    /// with [`len`](Stroke::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first point.
    #[inline]
    pub fn first(&self) -> Point2<F> {
        self.points[0]
    }

    /// Returns the last point.
    #[inline]
    pub fn last(&self) -> Point2<F> {
        self.points[self.points.len() - 1]
    }

    /// Returns an iterator over the points.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point2<F>> {
        self.points.iter()
    }

    /// Returns the same path drawn in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns `true` if the stroke has more than one point and ends exactly
    /// where it starts.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.first() == self.last()
    }

    /// Returns the total length of the path (sum of segment lengths).
    pub fn length(&self) -> F {
        self.points
            .windows(2)
            .fold(F::zero(), |acc, w| acc + w[0].distance(w[1]))
    }

    /// Returns the axis-aligned bounding box of the stroke.
    #[inline]
    pub fn bounding_box(&self) -> Aabb2<F> {
        Aabb2::from_stroke(self)
    }

    /// Returns the points as dense `[x, y]` rows.
    pub fn to_array(&self) -> Vec<[F; 2]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}

impl<F: Float> TryFrom<Vec<Point2<F>>> for Stroke<F> {
    type Error = StrokeError;

    fn try_from(points: Vec<Point2<F>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<F> From<Stroke<F>> for Vec<Point2<F>> {
    fn from(stroke: Stroke<F>) -> Self {
        stroke.points
    }
}

impl<F> AsRef<[Point2<F>]> for Stroke<F> {
    fn as_ref(&self) -> &[Point2<F>] {
        &self.points
    }
}

impl<F> IntoIterator for Stroke<F> {
    type Item = Point2<F>;
    type IntoIter = std::vec::IntoIter<Point2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a Stroke<F> {
    type Item = &'a Point2<F>;
    type IntoIter = std::slice::Iter<'a, Point2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Values that can be interpreted as a stroke.
///
/// Implemented for the usual point-sequence shapes: point vectors and
/// slices, `[x, y]` rows, `(x, y)` tuples, dense `Vec<F>` rows, and strokes
/// themselves.
pub trait IntoStroke<F> {
    /// Converts `self` into a stroke.
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError>;
}

impl<F: Float> IntoStroke<F> for Stroke<F> {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        Ok(self)
    }
}

impl<F: Float> IntoStroke<F> for &Stroke<F> {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        Ok(self.clone())
    }
}

impl<F: Float> IntoStroke<F> for Vec<Point2<F>> {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        Stroke::new(self)
    }
}

impl<F: Float> IntoStroke<F> for &[Point2<F>] {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        Stroke::new(self.to_vec())
    }
}

impl<F: Float> IntoStroke<F> for Vec<[F; 2]> {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        self.as_slice().into_stroke()
    }
}

impl<F: Float> IntoStroke<F> for &[[F; 2]] {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        Stroke::new(self.iter().map(|&row| Point2::from(row)).collect())
    }
}

impl<F: Float, const N: usize> IntoStroke<F> for [[F; 2]; N] {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        self.as_slice().into_stroke()
    }
}

impl<F: Float> IntoStroke<F> for Vec<(F, F)> {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        Stroke::new(self.into_iter().map(Point2::from).collect())
    }
}

impl<F: Float> IntoStroke<F> for Vec<Vec<F>> {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        self.as_slice().into_stroke()
    }
}

impl<F: Float> IntoStroke<F> for &[Vec<F>] {
    fn into_stroke(self) -> Result<Stroke<F>, StrokeError> {
        let points = self
            .iter()
            .enumerate()
            .map(|(row, coords)| match coords.as_slice() {
                &[x, y] => Ok(Point2::new(x, y)),
                _ => Err(StrokeError::Dimension {
                    row,
                    len: coords.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Stroke::new(points)
    }
}

/// Converts a collection of point sequences into strokes, preserving order.
///
/// Each element is converted on its own; the first element that cannot be
/// read as a non-empty 2D point sequence aborts the conversion and its error
/// is returned as is.
///
/// # Example
///
/// ```
/// use strokes::to_strokes;
///
/// let strokes = to_strokes(vec![
///     vec![[0.0_f64, 0.0], [1.0, 1.0]],
///     vec![[2.0, 2.0], [3.0, 3.0], [4.0, 2.0]],
/// ])
/// .unwrap();
///
/// assert_eq!(strokes.len(), 2);
/// assert_eq!(strokes[0].to_array(), vec![[0.0, 0.0], [1.0, 1.0]]);
/// ```
pub fn to_strokes<F, I>(lines: I) -> Result<Vec<Stroke<F>>, StrokeError>
where
    F: Float,
    I: IntoIterator,
    I::Item: IntoStroke<F>,
{
    lines.into_iter().map(IntoStroke::into_stroke).collect()
}
