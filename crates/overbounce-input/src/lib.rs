//! Pointer event model and motion sampling.
//!
//! Converts a raw single-pointer event stream into the per-axis samples the
//! over-scroll state machine consumes. Behavior-agnostic: nothing here
//! knows about edges, curves, or animations.

mod constants;
mod events;
mod sampler;

pub use constants::*;
pub use events::*;
pub use sampler::*;
