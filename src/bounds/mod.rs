//! Bounding boxes of strokes.

mod aabb;
mod stroke_box;

pub use aabb::Aabb2;
pub use stroke_box::{bounding_box, BoundingBoxInput};
