//! Tick-driven bounce value generators.

use overbounce_physics::Easing;

/// Which bounce protocol an animation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BounceKind {
    /// Ease an over-scrolled surface back to neutral.
    Back,
    /// Overshoot toward a target beyond neutral.
    Forward,
}

/// One animation step: the value to apply and whether the run finished.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BounceTick {
    pub value: f32,
    pub done: bool,
}

/// A single bounce run.
///
/// The generator owns no clock: the host advances it with elapsed-time
/// deltas and applies the produced values itself. The residual drag
/// velocity (px/ms) is blended in through a `(1 - p) * velocity` term so
/// the animation starts moving at the rate the finger was moving, decaying
/// to zero by the end.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BounceAnimation {
    kind: BounceKind,
    start_value: f32,
    end_value: f32,
    velocity: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl BounceAnimation {
    /// Settle from `start_value` back to zero.
    pub fn back(start_value: f32, velocity: f32, duration_ms: f32) -> Self {
        Self {
            kind: BounceKind::Back,
            start_value,
            end_value: 0.0,
            velocity,
            duration_ms,
            elapsed_ms: 0.0,
            easing: Easing::DECELERATE,
        }
    }

    /// Overshoot from neutral toward `end_value`.
    pub fn forward(end_value: f32, velocity: f32, duration_ms: f32) -> Self {
        Self {
            kind: BounceKind::Forward,
            start_value: 0.0,
            end_value,
            velocity,
            duration_ms,
            elapsed_ms: 0.0,
            easing: Easing::DECELERATE,
        }
    }

    /// The velocity carried into this run, px/ms.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Advance by `dt_ms` and produce the next value.
    ///
    /// A zero-duration run completes on its first tick, yielding the end
    /// value once (the synthetic "at rest" update).
    pub fn advance(&mut self, dt_ms: f32) -> BounceTick {
        if self.duration_ms <= 0.0 {
            return BounceTick {
                value: self.end_value,
                done: true,
            };
        }

        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
        let t = self.elapsed_ms / self.duration_ms;
        let progress = self.easing.transform(t);
        let damped_velocity = (1.0 - progress) * self.velocity;

        let mut value = match self.kind {
            BounceKind::Back => {
                self.start_value + (self.end_value - self.start_value) * progress - damped_velocity
            }
            BounceKind::Forward => self.end_value * progress - damped_velocity,
        };

        match self.kind {
            // Never cross past the end value in the direction of travel.
            BounceKind::Back => {
                if (self.start_value >= self.end_value && value < self.end_value)
                    || (self.start_value <= self.end_value && value > self.end_value)
                {
                    value = self.end_value;
                }
            }
            // Never exceed the target magnitude.
            BounceKind::Forward => {
                if value.abs() > self.end_value.abs() {
                    value = self.end_value;
                }
            }
        }

        let done = t >= 1.0;
        if done {
            value = self.end_value;
        }
        BounceTick { value, done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(anim: &mut BounceAnimation) -> (Vec<f32>, usize) {
        let mut values = Vec::new();
        for ticks in 1..=100 {
            let tick = anim.advance(16.0);
            values.push(tick.value);
            if tick.done {
                return (values, ticks);
            }
        }
        panic!("animation did not terminate");
    }

    #[test]
    fn back_reaches_end_exactly() {
        let mut anim = BounceAnimation::back(200.0, 0.0, 160.0);
        let (values, ticks) = run_to_completion(&mut anim);
        assert_eq!(*values.last().unwrap(), 0.0);
        assert_eq!(ticks, 10);
    }

    #[test]
    fn back_decreases_monotonically_without_velocity() {
        let mut anim = BounceAnimation::back(300.0, 0.0, 320.0);
        let (values, _) = run_to_completion(&mut anim);
        let mut prev = 300.0;
        for value in values {
            assert!(value <= prev);
            prev = value;
        }
    }

    #[test]
    fn back_never_crosses_past_end() {
        // A large carried velocity would push the value below zero; the
        // clamp pins it at the end value instead.
        let mut anim = BounceAnimation::back(50.0, 120.0, 400.0);
        let (values, _) = run_to_completion(&mut anim);
        for value in values {
            assert!(value >= 0.0, "crossed past end: {}", value);
        }
    }

    #[test]
    fn back_clamp_holds_on_negative_side() {
        let mut anim = BounceAnimation::back(-50.0, -120.0, 400.0);
        let (values, _) = run_to_completion(&mut anim);
        for value in values {
            assert!(value <= 0.0, "crossed past end: {}", value);
        }
    }

    #[test]
    fn forward_never_exceeds_target_magnitude() {
        let mut anim = BounceAnimation::forward(120.0, -2.0, 300.0);
        let (values, _) = run_to_completion(&mut anim);
        for value in &values {
            assert!(value.abs() <= 120.0 + 1e-3);
        }
        assert_eq!(*values.last().unwrap(), 120.0);
    }

    #[test]
    fn forward_starts_with_carried_velocity() {
        // Negative carried velocity (fling toward start) boosts the first
        // frames of a positive-target overshoot.
        let mut with_velocity = BounceAnimation::forward(120.0, -2.0, 300.0);
        let mut without = BounceAnimation::forward(120.0, 0.0, 300.0);
        let boosted = with_velocity.advance(16.0).value;
        let plain = without.advance(16.0).value;
        assert!(boosted > plain);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut anim = BounceAnimation::back(0.0, 0.0, 0.0);
        let tick = anim.advance(16.0);
        assert!(tick.done);
        assert_eq!(tick.value, 0.0);
    }
}
