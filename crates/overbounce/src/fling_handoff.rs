//! One-shot fling hand-off arbitration.
//!
//! Observes a native fling beginning near an edge and, when the content
//! settles having run out of scroll room before the predicted coast
//! distance, converts the unspent energy into a bounce-forward request.

use overbounce_input::MAX_FLING_VELOCITY;
use overbounce_physics::FlingCalculator;

use crate::adapter::ContentAdapter;
use crate::state::OverscrollState;

/// Snapshot taken when a native fling begins.
///
/// At most one record is live at a time; it is consumed (or discarded)
/// exactly once when the fling settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingRecord {
    /// Content scroll offset when the fling began.
    pub start_offset: f32,
    /// Fling velocity in px/s (negative = toward the content start).
    pub start_velocity: f32,
    /// Predicted total coast distance, px.
    pub predicted_distance: f32,
    /// Predicted total coast time, ms.
    pub predicted_total_ms: i64,
    /// Host time when the fling began, ms.
    pub timestamp_ms: i64,
}

/// Bounce-forward parameters produced by a successful hand-off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceForwardCommand {
    /// Unspent coast distance, signed per side (positive on the start
    /// side). Mapped through the rubber-band curve by the state machine.
    pub overshoot: f32,
    /// Coast time the fling had left, ms. May be negative when the fling
    /// outlived its prediction; the bounce duration clamp absorbs that.
    pub duration_hint_ms: f32,
    /// Velocity remaining at the edge, px/ms, sign of the fling.
    pub velocity: f32,
}

/// Records fling begin/settle events and arbitrates the hand-off.
#[derive(Debug, Default)]
pub struct FlingHandoff {
    calculator: FlingCalculator,
    record: Option<FlingRecord>,
}

impl FlingHandoff {
    pub fn new(calculator: FlingCalculator) -> Self {
        Self {
            calculator,
            record: None,
        }
    }

    pub fn record(&self) -> Option<&FlingRecord> {
        self.record.as_ref()
    }

    /// A native fling just started on the decorated content.
    ///
    /// No record is taken at a zero scroll offset (spurious triggers at
    /// exact rest on some hosts).
    pub fn on_fling_begin(&mut self, adapter: &impl ContentAdapter, velocity: f32, now_ms: i64) {
        let start_offset = adapter.current_scroll_offset();
        if start_offset <= 0.0 {
            return;
        }
        let velocity = velocity.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        self.record = Some(FlingRecord {
            start_offset,
            start_velocity: velocity,
            predicted_distance: self.calculator.fling_distance(velocity),
            predicted_total_ms: self.calculator.fling_duration_ms(velocity),
            timestamp_ms: now_ms,
        });
    }

    /// Discard any live record (a new gesture began).
    pub fn invalidate(&mut self) {
        self.record = None;
    }

    /// The content came to rest; decide whether to inject a bounce-forward.
    ///
    /// One-shot: the record is discarded whichever branch is taken. A
    /// bounce-back in progress discards it without acting, so a
    /// user-initiated settle never compounds with a hand-off.
    pub fn on_fling_settle(
        &mut self,
        adapter: &impl ContentAdapter,
        current_state: OverscrollState,
        now_ms: i64,
    ) -> Option<BounceForwardCommand> {
        let record = self.record.take()?;
        if current_state == OverscrollState::BounceBack {
            return None;
        }

        let elapsed_ms = (now_ms - record.timestamp_ms) as f32;
        let duration_hint_ms = record.predicted_total_ms as f32 - elapsed_ms;

        if record.start_velocity < 0.0 && !adapter.can_scroll_further(false) {
            // Coasting toward the start and the edge was reached: whatever
            // the coast had left past the start offset overshoots.
            if record.predicted_distance > record.start_offset {
                return Some(BounceForwardCommand {
                    overshoot: record.predicted_distance - record.start_offset,
                    duration_hint_ms,
                    velocity: self
                        .calculator
                        .velocity_at_distance(record.start_velocity, record.start_offset)
                        / 1000.0,
                });
            }
        } else if record.start_velocity > 0.0 && !adapter.can_scroll_further(true) {
            let scrolled = adapter.current_scroll_offset() - record.start_offset;
            if record.predicted_distance > scrolled {
                return Some(BounceForwardCommand {
                    overshoot: scrolled - record.predicted_distance,
                    duration_hint_ms,
                    velocity: self
                        .calculator
                        .velocity_at_distance(record.start_velocity, scrolled)
                        / 1000.0,
                });
            }
        }

        None
    }
}
