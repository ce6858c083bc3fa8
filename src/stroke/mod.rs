//! Strokes: continuous pen-down paths and the operations that combine them.
//!
//! This module provides:
//! - Conversion of point sequences into [`Stroke`]s
//! - Concatenation of end-to-start adjacent strokes (tolerant endpoint match)
//! - Merging of strokes that share exact endpoints
//!
//! # Example
//!
//! ```
//! use strokes::stroke::{concat, merge_strokes, to_strokes};
//!
//! let strokes = to_strokes(vec![
//!     vec![[0.0_f64, 0.0], [1.0, 0.0]],
//!     vec![[1.0, 0.0], [1.0, 1.0]],
//!     vec![[5.0, 5.0], [6.0, 6.0]],
//! ])
//! .unwrap();
//!
//! // The first two strokes form one path
//! let path = concat(&strokes[..2]).unwrap();
//! assert_eq!(path.len(), 3);
//!
//! // Merging finds that on its own and leaves the third stroke alone
//! let merged = merge_strokes(&strokes);
//! assert_eq!(merged.len(), 2);
//! ```

mod concat;
mod core;
mod merge;

pub use concat::{concat, concat_with_tolerance};
pub use core::{to_strokes, IntoStroke, Stroke};
pub use merge::{merge_strokes, merge_strokes_with, LineMerger, Merged, NodeMerger};
