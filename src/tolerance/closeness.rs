//! Relative/absolute closeness tests for coordinates.

use crate::primitives::Point2;
use num_traits::Float;

/// Relative and absolute tolerance for approximate coordinate equality.
///
/// Two values `a` and `b` are close when `|a - b| <= atol + rtol * |b|`.
/// The test is asymmetric: `b` is the reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance<F> {
    /// Tolerance relative to the magnitude of the reference value.
    pub rtol: F,
    /// Absolute tolerance, dominant near zero.
    pub atol: F,
}

impl<F: Float> Tolerance<F> {
    /// Creates a tolerance from relative and absolute parts.
    #[inline]
    pub fn new(rtol: F, atol: F) -> Self {
        Self { rtol, atol }
    }

    /// A tolerance that only accepts identical values.
    #[inline]
    pub fn exact() -> Self {
        Self {
            rtol: F::zero(),
            atol: F::zero(),
        }
    }

    /// Returns `true` if `a` is close to the reference value `b`.
    ///
    /// Equal values (including equal infinities) are always close. Any other
    /// pairing with an infinity or a NaN is not.
    #[inline]
    pub fn close(self, a: F, b: F) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    /// Returns `true` if both coordinates of `a` are close to those of `b`.
    #[inline]
    pub fn points_close(self, a: Point2<F>, b: Point2<F>) -> bool {
        self.close(a.x, b.x) && self.close(a.y, b.y)
    }
}

impl<F: Float> Default for Tolerance<F> {
    /// `rtol = 1e-5`, `atol = 1e-8`.
    fn default() -> Self {
        Self {
            rtol: F::from(1e-5).unwrap_or_else(F::epsilon),
            atol: F::from(1e-8).unwrap_or_else(F::epsilon),
        }
    }
}

/// Checks whether two points coincide within `tolerance`.
///
/// `b` is the reference point, see [`Tolerance::close`].
#[inline]
pub fn points_close<F: Float>(a: Point2<F>, b: Point2<F>, tolerance: Tolerance<F>) -> bool {
    tolerance.points_close(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let tol: Tolerance<f64> = Tolerance::default();
        assert_eq!(tol.rtol, 1e-5);
        assert_eq!(tol.atol, 1e-8);
    }

    #[test]
    fn test_close_absolute_near_zero() {
        let tol: Tolerance<f64> = Tolerance::default();
        assert!(tol.close(5e-9, 0.0));
        assert!(!tol.close(1e-7, 0.0));
    }

    #[test]
    fn test_close_relative_for_large_values() {
        let tol: Tolerance<f64> = Tolerance::default();
        // 1e-5 relative of 1000 is 0.01
        assert!(tol.close(1000.005, 1000.0));
        assert!(!tol.close(1000.02, 1000.0));
    }

    #[test]
    fn test_nan_never_close() {
        let tol: Tolerance<f64> = Tolerance::default();
        assert!(!tol.close(f64::NAN, f64::NAN));
        assert!(!tol.close(f64::NAN, 0.0));
    }

    #[test]
    fn test_infinities() {
        let tol: Tolerance<f64> = Tolerance::default();
        assert!(tol.close(f64::INFINITY, f64::INFINITY));
        assert!(!tol.close(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn test_finite_against_infinite() {
        let tol: Tolerance<f64> = Tolerance::default();
        assert!(!tol.close(1.0, f64::INFINITY));
        assert!(!tol.close(f64::INFINITY, 1.0));
        assert!(!tol.close(-1e300, f64::NEG_INFINITY));
        assert!(!tol.points_close(Point2::new(1.0, 1.0), Point2::new(f64::INFINITY, 1.0)));
    }

    #[test]
    fn test_exact() {
        let tol: Tolerance<f64> = Tolerance::exact();
        assert!(tol.close(1.0, 1.0));
        assert!(!tol.close(1.0, 1.0 + f64::EPSILON));
    }

    #[test]
    fn test_points_close() {
        let tol = Tolerance::default();
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        assert!(points_close(a, Point2::new(1.0 + 1e-9, 1.0), tol));
        assert!(!points_close(a, Point2::new(1.0, 1.001), tol));
    }

    #[test]
    fn test_f32() {
        let tol: Tolerance<f32> = Tolerance::default();
        assert!(tol.points_close(Point2::new(0.5, 0.5), Point2::new(0.5, 0.500_001)));
    }
}
