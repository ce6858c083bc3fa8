//! 2D point type.

use num_traits::Float;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the coordinates as `[x, y]`.
    #[inline]
    pub fn to_array(self) -> [F; 2] {
        [self.x, self.y]
    }

    /// Returns the coordinates widened to `f64`, for diagnostics.
    ///
    /// Coordinates that cannot be represented become NaN.
    #[inline]
    pub fn to_f64_tuple(self) -> (f64, f64) {
        (
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
        )
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    #[inline]
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(a.distance_squared(b), 25.0);
    }

    #[test]
    fn test_conversions() {
        let p: Point2<f32> = [1.5, -2.0].into();
        assert_eq!(p, Point2::new(1.5, -2.0));
        assert_eq!(Point2::from((1.5_f32, -2.0)), p);
        assert_eq!(p.to_array(), [1.5, -2.0]);
        assert_eq!(p.to_f64_tuple(), (1.5, -2.0));
    }
}
