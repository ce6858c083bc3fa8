//! strokes - Geometry helpers for pen-plotter drawings
//!
//! A drawing is a list of strokes, each an ordered run of 2D points the pen
//! traces without lifting. This library converts point data into strokes,
//! joins strokes end to start, computes their bounding boxes, and fuses
//! strokes that meet at shared endpoints into longer paths.

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod stroke;
pub mod tolerance;

pub use bounds::{bounding_box, Aabb2, BoundingBoxInput};
pub use error::StrokeError;
pub use primitives::Point2;
pub use stroke::{
    concat, concat_with_tolerance, merge_strokes, merge_strokes_with, to_strokes, IntoStroke,
    LineMerger, Merged, NodeMerger, Stroke,
};
pub use tolerance::{points_close, Tolerance};
