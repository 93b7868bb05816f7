//! The decorator façade: composition only.

use overbounce_input::{Axis, MotionSampler, PointerEvent, PointerEventKind};
use overbounce_physics::{FlingCalculator, RubberBandCurve};

use crate::adapter::ContentAdapter;
use crate::fling_handoff::FlingHandoff;
use crate::state::{OverscrollState, OverscrollStateMachine, UpdateEvent};

/// Wires a pointer-event source, a [`ContentAdapter`] and listeners to the
/// over-scroll state machine.
///
/// The host delivers pointer events through [`on_pointer_event`], drives
/// animations by calling [`tick`] from its frame loop, and reports native
/// fling begin/settle through [`on_fling_begin`] / [`on_fling_settle`]. All
/// calls must come from one logical thread.
///
/// [`on_pointer_event`]: OverscrollDecorator::on_pointer_event
/// [`tick`]: OverscrollDecorator::tick
/// [`on_fling_begin`]: OverscrollDecorator::on_fling_begin
/// [`on_fling_settle`]: OverscrollDecorator::on_fling_settle
pub struct OverscrollDecorator<A: ContentAdapter> {
    machine: OverscrollStateMachine<A>,
    sampler: MotionSampler,
    handoff: FlingHandoff,
}

impl<A: ContentAdapter> OverscrollDecorator<A> {
    /// Decorate `adapter` along `axis` with default physics.
    pub fn new(adapter: A, axis: Axis) -> Self {
        Self::with_physics(adapter, axis, RubberBandCurve::default(), FlingCalculator::default())
    }

    pub fn with_physics(
        adapter: A,
        axis: Axis,
        curve: RubberBandCurve,
        calculator: FlingCalculator,
    ) -> Self {
        Self {
            machine: OverscrollStateMachine::new(adapter, curve),
            sampler: MotionSampler::new(axis),
            handoff: FlingHandoff::new(calculator),
        }
    }

    /// Feed one pointer event. Returns whether the effect consumed it.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                // A fresh gesture: drop the offset carry and any pending
                // fling record, reseed the sampler, and let the state
                // machine see the (history-less) sample.
                self.machine.set_additional_offset(0.0);
                self.handoff.invalidate();
                self.sampler.reset();
                let sample = self.sampler.sample(self.machine.offset(), event);
                self.machine.handle_move(event.id, sample)
            }
            PointerEventKind::Move => {
                let sample = self.sampler.sample(self.machine.offset(), event);
                self.machine.handle_move(event.id, sample)
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.sampler.reset();
                self.machine.handle_up_or_cancel()
            }
        }
    }

    /// Advance the active bounce animation by `dt_ms`. No-op while idle or
    /// dragging.
    pub fn tick(&mut self, dt_ms: f32) {
        self.machine.tick(dt_ms);
    }

    /// A native fling started with `velocity` px/s.
    pub fn on_fling_begin(&mut self, velocity: f32, now_ms: i64) {
        self.handoff
            .on_fling_begin(self.machine.adapter(), velocity, now_ms);
    }

    /// The native fling settled; inject a bounce-forward if it ran out of
    /// content with coast distance left.
    pub fn on_fling_settle(&mut self, now_ms: i64) {
        let command =
            self.handoff
                .on_fling_settle(self.machine.adapter(), self.machine.state(), now_ms);
        if let Some(command) = command {
            self.machine.bounce_forward_from_fling(
                command.overshoot,
                command.duration_hint_ms,
                command.velocity,
            );
        }
    }

    /// Force a bounce-forward to `target_offset` over `duration_ms`.
    /// Ignored while a bounce-forward is already in flight.
    pub fn scroll_to(&mut self, target_offset: f32, duration_ms: f32) {
        self.machine.scroll_to(target_offset, duration_ms);
    }

    /// Force a bounce-back from an explicit start offset. Ignored while a
    /// bounce-forward is in flight.
    pub fn come_back_from_overscroll(&mut self, offset: f32) {
        self.machine.come_back_from_overscroll(offset);
    }

    pub fn set_max_offset(&mut self, max_offset: f32) {
        self.machine.set_max_offset(max_offset);
    }

    pub fn set_skip_value(&mut self, skip_value: f32) {
        self.machine.set_skip_value(skip_value);
    }

    pub fn set_additional_offset(&mut self, additional_offset: f32) {
        self.machine.set_additional_offset(additional_offset);
    }

    pub fn state(&self) -> OverscrollState {
        self.machine.state()
    }

    /// Translation currently applied to the decorated surface.
    pub fn offset(&self) -> f32 {
        self.machine.offset()
    }

    pub fn on_state_change(
        &mut self,
        listener: impl FnMut(OverscrollState, OverscrollState) + 'static,
    ) {
        self.machine.on_state_change(listener);
    }

    pub fn on_update(&mut self, listener: impl FnMut(&UpdateEvent) + 'static) {
        self.machine.on_update(listener);
    }
}
