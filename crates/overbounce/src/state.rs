//! The four-state over-scroll controller.
//!
//! Owns the current state, the attributes captured when a drag crosses an
//! edge, the cross-phase drag velocity, and the offset clamp. Offset
//! computation is delegated to [`RubberBandCurve`]; time only ever arrives
//! from outside, through event timestamps and [`tick`] deltas.
//!
//! [`tick`]: OverscrollStateMachine::tick

use smallvec::SmallVec;

use overbounce_input::{MotionSample, PointerId};
use overbounce_physics::RubberBandCurve;

use crate::adapter::ContentAdapter;
use crate::bounce::BounceAnimation;

/// Externally observable state of the decorator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverscrollState {
    Idle,
    /// Dragging past the content's start edge.
    OverscrollAtStart,
    /// Dragging past the content's end edge.
    OverscrollAtEnd,
    /// Settling back to neutral.
    BounceBack,
    /// Overshooting toward a target beyond neutral.
    BounceForward,
}

/// Payload of every update listener callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdateEvent {
    /// True while the offset tracks the user's finger (dragging, or a
    /// programmatic `scroll_to` the caller owns), false for settle
    /// animations.
    pub user_driven: bool,
    pub state: OverscrollState,
    /// Translation currently applied to the surface.
    pub offset: f32,
    /// Velocity in px/ms.
    pub velocity: f32,
}

/// Attributes captured once when a drag crosses an edge.
#[derive(Clone, Copy, Debug)]
struct DragStart {
    pointer_id: PointerId,
    abs_offset: f32,
    /// True when the initiating drag travelled forward (start-edge side).
    dir_forward: bool,
}

enum StateKind {
    Idle,
    Overscroll {
        start: DragStart,
    },
    BounceBack {
        animation: BounceAnimation,
    },
    BounceForward {
        animation: BounceAnimation,
        user_driven: bool,
    },
}

type StateChangeFn = Box<dyn FnMut(OverscrollState, OverscrollState)>;
type UpdateFn = Box<dyn FnMut(&UpdateEvent)>;

/// The over-scroll state machine.
///
/// Exclusively owns the decorated surface's adapter, the drag-start
/// attributes, and the current drag velocity. Every input maps to a defined
/// transition; nothing here returns an error.
pub struct OverscrollStateMachine<A: ContentAdapter> {
    adapter: A,
    curve: RubberBandCurve,
    state: StateKind,
    /// Drag velocity in px/ms. Written while over-scrolling, carried into
    /// whichever bounce animation is constructed next, then reset.
    velocity: f32,
    /// Translation currently applied through the adapter.
    current_offset: f32,
    max_offset: f32,
    /// One-shot discount subtracted from the next bounce-back start.
    skip_value: f32,
    /// One-shot carry added to the next computed drag offset.
    additional_offset: f32,
    state_listeners: SmallVec<[StateChangeFn; 1]>,
    update_listeners: SmallVec<[UpdateFn; 2]>,
}

impl<A: ContentAdapter> OverscrollStateMachine<A> {
    pub fn new(adapter: A, curve: RubberBandCurve) -> Self {
        Self {
            adapter,
            curve,
            state: StateKind::Idle,
            velocity: 0.0,
            current_offset: 0.0,
            max_offset: f32::INFINITY,
            skip_value: 0.0,
            additional_offset: 0.0,
            state_listeners: SmallVec::new(),
            update_listeners: SmallVec::new(),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The externally reported state id.
    pub fn state(&self) -> OverscrollState {
        match &self.state {
            StateKind::Idle => OverscrollState::Idle,
            StateKind::Overscroll { start } => {
                if start.dir_forward {
                    OverscrollState::OverscrollAtStart
                } else {
                    OverscrollState::OverscrollAtEnd
                }
            }
            StateKind::BounceBack { .. } => OverscrollState::BounceBack,
            StateKind::BounceForward { .. } => OverscrollState::BounceForward,
        }
    }

    /// Translation currently applied to the surface.
    pub fn offset(&self) -> f32 {
        self.current_offset
    }

    /// Clamp for the displayed over-scroll magnitude.
    pub fn set_max_offset(&mut self, max_offset: f32) {
        self.max_offset = max_offset;
    }

    /// Discount subtracted (floored at zero) from the next bounce-back's
    /// start offset. Consumed by that bounce-back.
    pub fn set_skip_value(&mut self, skip_value: f32) {
        self.skip_value = skip_value.max(0.0);
    }

    /// Carry added once to the next computed drag offset. Reset by
    /// pointer-down.
    pub fn set_additional_offset(&mut self, additional_offset: f32) {
        self.additional_offset = additional_offset;
    }

    pub fn on_state_change(&mut self, listener: impl FnMut(OverscrollState, OverscrollState) + 'static) {
        self.state_listeners.push(Box::new(listener));
    }

    pub fn on_update(&mut self, listener: impl FnMut(&UpdateEvent) + 'static) {
        self.update_listeners.push(Box::new(listener));
    }

    /// Feed one move sample (or a history-less `None`) for `pointer_id`.
    ///
    /// Returns whether the event was consumed by the effect.
    pub fn handle_move(&mut self, pointer_id: PointerId, sample: Option<MotionSample>) -> bool {
        match &self.state {
            StateKind::Idle => {
                let Some(sample) = sample else {
                    return false;
                };
                // Start-side wins if the adapter claims both edges at once.
                let crossed_edge = (self.adapter.is_at_absolute_start() && sample.dir_forward)
                    || (self.adapter.is_at_absolute_end() && !sample.dir_forward);
                if !crossed_edge {
                    return false;
                }

                let start = DragStart {
                    pointer_id,
                    abs_offset: sample.abs_offset,
                    dir_forward: sample.dir_forward,
                };
                self.transition(StateKind::Overscroll { start });
                // Re-dispatch the same sample into the new state.
                self.handle_move(pointer_id, Some(sample))
            }
            StateKind::Overscroll { start } => {
                let start = *start;
                // Switching fingers mid-drag isn't supported; abort cleanly
                // through the usual bounce-back.
                if start.pointer_id != pointer_id {
                    self.enter_bounce_back(None);
                    return true;
                }
                let Some(sample) = sample else {
                    // Keep intercepting while still over-scrolling.
                    return true;
                };
                self.overscroll_move(start, sample)
            }
            // Flush all touches down the drain until the animation is over.
            StateKind::BounceBack { .. } | StateKind::BounceForward { .. } => true,
        }
    }

    /// Feed a pointer-up or pointer-cancel.
    pub fn handle_up_or_cancel(&mut self) -> bool {
        match &self.state {
            StateKind::Idle => false,
            StateKind::Overscroll { .. } => {
                // Even an offset-zero drag animates (with zero duration) so
                // listeners always see the same callback sequence.
                self.enter_bounce_back(None);
                false
            }
            StateKind::BounceBack { .. } | StateKind::BounceForward { .. } => true,
        }
    }

    /// Advance the active bounce animation by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f32) {
        enum Active {
            Back,
            Forward { user_driven: bool },
        }

        let (tick, carried_velocity, active) = match &mut self.state {
            StateKind::BounceBack { animation } => {
                (animation.advance(dt_ms), animation.velocity(), Active::Back)
            }
            StateKind::BounceForward {
                animation,
                user_driven,
            } => {
                let user_driven = *user_driven;
                (
                    animation.advance(dt_ms),
                    animation.velocity(),
                    Active::Forward { user_driven },
                )
            }
            StateKind::Idle | StateKind::Overscroll { .. } => return,
        };

        match active {
            Active::Back => {
                self.apply(tick.value);
                self.emit_update(UpdateEvent {
                    user_driven: false,
                    state: OverscrollState::BounceBack,
                    offset: tick.value,
                    velocity: carried_velocity,
                });
                if tick.done {
                    self.velocity = 0.0;
                    self.transition(StateKind::Idle);
                    self.emit_update(UpdateEvent {
                        user_driven: false,
                        state: OverscrollState::Idle,
                        offset: 0.0,
                        velocity: 0.0,
                    });
                }
            }
            Active::Forward { user_driven } => {
                self.apply(tick.value);
                self.emit_update(UpdateEvent {
                    user_driven,
                    state: OverscrollState::BounceForward,
                    offset: tick.value,
                    velocity: carried_velocity,
                });
                if tick.done {
                    // A forward overshoot always settles back through the
                    // bounce-back animation, never straight to idle.
                    self.enter_bounce_back(None);
                }
            }
        }
    }

    /// Force a bounce-forward toward an explicit target.
    ///
    /// Ignored when a bounce-forward is already in flight.
    pub fn scroll_to(&mut self, target_offset: f32, duration_ms: f32) {
        if matches!(self.state, StateKind::BounceForward { .. }) {
            log::debug!("scroll_to ignored: bounce-forward already in flight");
            return;
        }
        let velocity = std::mem::replace(&mut self.velocity, 0.0);
        self.transition(StateKind::BounceForward {
            animation: BounceAnimation::forward(target_offset, velocity, duration_ms),
            user_driven: true,
        });
    }

    /// Force a bounce-back from an explicit start offset.
    ///
    /// Ignored while a bounce-forward is in flight.
    pub fn come_back_from_overscroll(&mut self, offset: f32) {
        if matches!(self.state, StateKind::BounceForward { .. }) {
            log::debug!("come_back_from_overscroll ignored: bounce-forward in flight");
            return;
        }
        self.enter_bounce_back(Some(offset));
    }

    /// Enter a bounce-forward on behalf of the fling hand-off.
    ///
    /// `overshoot` is the unspent coast distance (signed per side); it is
    /// mapped through the rubber-band curve before becoming the target.
    /// `velocity` is the remaining coast velocity in px/ms.
    pub fn bounce_forward_from_fling(
        &mut self,
        overshoot: f32,
        duration_hint_ms: f32,
        velocity: f32,
    ) {
        let target = self.curve.bounce_target_for(overshoot);
        let duration = (duration_hint_ms / 10.0).clamp(100.0, 400.0);
        self.velocity = 0.0;
        self.transition(StateKind::BounceForward {
            animation: BounceAnimation::forward(target, velocity, duration),
            user_driven: false,
        });
    }

    fn overscroll_move(&mut self, start: DragStart, sample: MotionSample) -> bool {
        let abs_offset = sample.abs_offset;
        let sign = if abs_offset < 0.0 { -1.0 } else { 1.0 };

        let prev_x = self.curve.inverse(abs_offset.abs());
        let new_x = prev_x + sample.delta_offset * sign;
        // Below zero the drag has crossed neutral; pass the raw value
        // through instead of the curve.
        let new_y = sign
            * if new_x < 0.0 {
                new_x
            } else {
                self.curve.display_offset(new_x)
            };
        let curve_delta = new_y - abs_offset;
        let new_offset = (new_y + self.additional_offset).min(self.max_offset);
        self.additional_offset = 0.0;

        let reported = self.state();

        // Moving back past the captured start offset would under-scroll:
        // snap to the start offset and hand control back to the host.
        let reversed_past_start = (start.dir_forward
            && !sample.dir_forward
            && new_offset <= start.abs_offset)
            || (!start.dir_forward && sample.dir_forward && new_offset >= start.abs_offset);
        if reversed_past_start {
            self.apply(start.abs_offset);
            let velocity = self.velocity;
            self.emit_update(UpdateEvent {
                user_driven: true,
                state: reported,
                offset: start.abs_offset,
                velocity,
            });
            self.transition(StateKind::Idle);
            return true;
        }

        // Event timing occasionally collapses to the same millisecond; skip
        // the velocity update rather than divide by zero.
        if sample.dt_ms > 0.0 {
            self.velocity = curve_delta / sample.dt_ms;
        }

        self.apply(new_offset);
        let velocity = self.velocity;
        self.emit_update(UpdateEvent {
            user_driven: true,
            state: reported,
            offset: new_offset,
            velocity,
        });
        true
    }

    fn enter_bounce_back(&mut self, start_override: Option<f32>) {
        let real_start = start_override.unwrap_or(self.current_offset);
        let start_value = if self.skip_value > 0.0 {
            (real_start - self.skip_value).max(0.0)
        } else {
            real_start
        };
        self.skip_value = 0.0;

        let duration_ms = if start_value == 0.0 {
            0.0
        } else {
            (start_value.abs() / 10.0).clamp(100.0, 400.0)
        };
        let velocity = std::mem::replace(&mut self.velocity, 0.0);

        self.transition(StateKind::BounceBack {
            animation: BounceAnimation::back(start_value, velocity, duration_ms),
        });
    }

    fn apply(&mut self, offset: f32) {
        self.adapter.apply_offset(offset);
        self.current_offset = offset;
    }

    fn transition(&mut self, new_state: StateKind) {
        let old = self.state();
        self.state = new_state;
        let new = self.state();
        log::trace!("overscroll state {:?} -> {:?}", old, new);

        let mut listeners = std::mem::take(&mut self.state_listeners);
        for listener in listeners.iter_mut() {
            listener(old, new);
        }
        let added = std::mem::replace(&mut self.state_listeners, listeners);
        self.state_listeners.extend(added);
    }

    fn emit_update(&mut self, event: UpdateEvent) {
        let mut listeners = std::mem::take(&mut self.update_listeners);
        for listener in listeners.iter_mut() {
            listener(&event);
        }
        let added = std::mem::replace(&mut self.update_listeners, listeners);
        self.update_listeners.extend(added);
    }
}
