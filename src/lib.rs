//! Fast approximate nth roots (n = 2..10) for `f32` and `f64`.
//!
//! Every root is a bit-pattern guess followed by exactly one Halley step.
//! Inputs are expected to be positive, finite and normal; nothing is checked
//! on the fast path. See [`checked`] for the guarded variants.

pub mod core;
pub use crate::core::*;

#[cfg(feature = "design")]
pub mod design;
#[cfg(feature = "design")]
pub use design::*;
