//! Tolerance-aware coordinate comparison.
//!
//! Functions here take the tolerance explicitly. The default tolerance
//! mirrors conventional floating-point closeness (`rtol = 1e-5`,
//! `atol = 1e-8`).

mod closeness;

pub use closeness::{points_close, Tolerance};
