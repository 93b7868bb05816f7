//! Pure math for the over-scroll bounce effect.
//!
//! This crate has no state and no dependencies: the rubber-band damping
//! curve, the easing functions used by the bounce animations, and the
//! Android-Scroller-style coast estimators used by the fling hand-off.

mod curve;
mod easing;
mod fling;

pub use curve::*;
pub use easing::*;
pub use fling::*;
