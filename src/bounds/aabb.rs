//! Axis-aligned bounding box.

use crate::primitives::Point2;
use crate::stroke::Stroke;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates the AABB of a single stroke.
    pub fn from_stroke(stroke: &Stroke<F>) -> Self {
        stroke.points()[1..]
            .iter()
            .fold(Self::from_point(stroke.first()), |aabb, &p| {
                aabb.expand_to_include(p)
            })
    }

    /// Creates the AABB of a stroke collection.
    ///
    /// Each stroke is bounded on its own first, then the per-stroke minima
    /// and maxima are combined.
    ///
    /// Returns `None` if `strokes` is empty.
    pub fn from_strokes(strokes: &[Stroke<F>]) -> Option<Self> {
        strokes
            .iter()
            .map(Self::from_stroke)
            .reduce(Self::union)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the union of two AABBs (smallest AABB containing both).
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Returns the box as `[[min_x, min_y], [max_x, max_y]]`.
    #[inline]
    pub fn to_array(self) -> [[F; 2]; 2] {
        [self.min.to_array(), self.max.to_array()]
    }
}

impl<F: Float> From<Aabb2<F>> for [[F; 2]; 2] {
    #[inline]
    fn from(aabb: Aabb2<F>) -> Self {
        aabb.to_array()
    }
}
