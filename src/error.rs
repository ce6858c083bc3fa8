//! Error types for stroke operations.

use thiserror::Error;

/// Errors that can occur while building or combining strokes.
///
/// Coordinates are reported as `f64` so the error type stays independent of
/// the float type the strokes were built with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrokeError {
    /// Two consecutive strokes do not share an endpoint.
    #[error("could not concatenate strokes: {end:?} != {start:?} at stroke {index}")]
    NotAdjacent {
        /// Index of the stroke whose first point did not match.
        index: usize,
        /// Last point of the concatenation so far.
        end: (f64, f64),
        /// First point of the offending stroke.
        start: (f64, f64),
    },

    /// A stroke must contain at least one point.
    #[error("stroke has no points")]
    EmptyStroke,

    /// A row of coordinates was not two-dimensional.
    #[error("row {row} has {len} coordinates, expected 2")]
    Dimension {
        /// Index of the offending row within its sequence.
        row: usize,
        /// Number of coordinates found in the row.
        len: usize,
    },

    /// The operation needs at least one stroke.
    #[error("stroke collection is empty")]
    EmptyCollection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_adjacent_message_names_both_points() {
        let err = StrokeError::NotAdjacent {
            index: 1,
            end: (1.0, 1.0),
            start: (2.0, 2.5),
        };
        let msg = err.to_string();
        assert!(msg.contains("(1.0, 1.0)"));
        assert!(msg.contains("(2.0, 2.5)"));
        assert!(msg.contains("stroke 1"));
    }

    #[test]
    fn test_dimension_message() {
        let err = StrokeError::Dimension { row: 3, len: 1 };
        assert_eq!(err.to_string(), "row 3 has 1 coordinates, expected 2");
    }
}
