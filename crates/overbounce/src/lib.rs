//! Rubber-band over-scroll decorator.
//!
//! Decorates an existing scrollable surface with a physically-motivated
//! over-scroll effect: dragging past the content's start or end edge yields
//! with progressively increasing resistance, then springs back with an
//! eased, velocity-aware animation. A native fling that runs out of content
//! can be handed off and converted into a bounce-forward/bounce-back pair.
//!
//! The engine is single-threaded and clockless: pointer events carry their
//! own timestamps and animations advance through externally driven
//! [`tick`](OverscrollDecorator::tick) calls. The host surface is reached
//! only through the [`ContentAdapter`] trait.

mod adapter;
mod bounce;
mod decorator;
mod fling_handoff;
mod state;

pub use adapter::ContentAdapter;
pub use decorator::OverscrollDecorator;
pub use fling_handoff::{BounceForwardCommand, FlingHandoff, FlingRecord};
pub use state::{OverscrollState, OverscrollStateMachine, UpdateEvent};

pub use overbounce_input::{
    Axis, MotionSample, MotionSampler, Point, PointerEvent, PointerEventKind, PointerId,
    MAX_FLING_VELOCITY,
};
pub use overbounce_physics::{Easing, FlingCalculator, RubberBandCurve};

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
