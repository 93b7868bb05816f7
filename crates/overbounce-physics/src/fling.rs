//! Fling coast estimators.
//!
//! Closed-form port of the Android Scroller deceleration model: given a
//! fling's initial velocity, how far it will coast, how long the coast
//! takes, and how much velocity is left after covering part of the
//! distance. The fling hand-off uses these to convert the unspent energy of
//! a fling that ran out of content into a bounce-forward animation.

/// Tension curve inflection point (from Android Scroller).
const INFLECTION: f32 = 0.35;

/// Earth's gravity in SI units (m/s^2).
const GRAVITY_EARTH: f32 = 9.80665;
/// Inches per meter, for density conversion.
const INCHES_PER_METER: f32 = 39.37;
/// Deceleration rate constant: (ln(0.78) / ln(0.9)).abs()
const DECELERATION_RATE: f64 = 2.358_201_6;

fn compute_deceleration(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * friction
}

/// Coast estimator for native fling gestures.
///
/// Velocities are in px/s, distances in logical px, durations in ms. All
/// estimators are monotone in the velocity magnitude and total over their
/// domain (a zero or sub-threshold velocity coasts zero distance in zero
/// time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCalculator {
    friction: f32,
    physical_coefficient: f32,
}

impl FlingCalculator {
    /// Default scroll friction (matches Android ViewConfiguration).
    pub const DEFAULT_FRICTION: f32 = 0.015;

    /// Velocities below this magnitude coast nowhere.
    const VELOCITY_THRESHOLD: f32 = 1e-3;

    /// Create a calculator for the given friction and screen density.
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: compute_deceleration(0.84, density),
        }
    }

    /// Calculator with default friction for the given density.
    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn drag(&self) -> f64 {
        (self.friction * self.physical_coefficient) as f64
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64 / self.drag()).ln()
    }

    /// Total coast duration in milliseconds.
    pub fn fling_duration_ms(&self, velocity: f32) -> i64 {
        if velocity.abs() < Self::VELOCITY_THRESHOLD {
            return 0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE - 1.0;
        (1000.0 * (l / decel_minus_one).exp()) as i64
    }

    /// Total coast distance in logical px (always non-negative).
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        if velocity.abs() < Self::VELOCITY_THRESHOLD {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE - 1.0;
        (self.drag() * (DECELERATION_RATE / decel_minus_one * l).exp()) as f32
    }

    /// Initial velocity magnitude whose coast covers exactly `distance`.
    ///
    /// Exact inverse of [`fling_distance`](Self::fling_distance).
    pub fn velocity_for_distance(&self, distance: f32) -> f32 {
        if distance <= 0.0 {
            return 0.0;
        }
        let l = (DECELERATION_RATE - 1.0) / DECELERATION_RATE * (distance as f64 / self.drag()).ln();
        (self.drag() * l.exp() / INFLECTION as f64) as f32
    }

    /// Velocity remaining after the coast has covered `travelled` px.
    ///
    /// Returned in px/s with the sign of `start_velocity`; zero once the
    /// coast is exhausted.
    pub fn velocity_at_distance(&self, start_velocity: f32, travelled: f32) -> f32 {
        let remaining = self.fling_distance(start_velocity) - travelled.abs();
        if remaining <= 0.0 {
            return 0.0;
        }
        start_velocity.signum() * self.velocity_for_distance(remaining)
    }
}

impl Default for FlingCalculator {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_fling_is_positive_and_monotone() {
        let calc = FlingCalculator::with_density(2.0);

        let duration = calc.fling_duration_ms(5000.0);
        let distance = calc.fling_distance(5000.0);
        assert!(duration > 0);
        assert!(distance > 0.0);

        assert!(calc.fling_duration_ms(10_000.0) > duration);
        assert!(calc.fling_distance(10_000.0) > distance);
    }

    #[test]
    fn zero_velocity_coasts_nowhere() {
        let calc = FlingCalculator::default();
        assert_eq!(calc.fling_duration_ms(0.0), 0);
        assert_eq!(calc.fling_distance(0.0), 0.0);
        assert_eq!(calc.velocity_for_distance(0.0), 0.0);
    }

    #[test]
    fn sign_does_not_affect_magnitudes() {
        let calc = FlingCalculator::default();
        assert_eq!(calc.fling_distance(-4000.0), calc.fling_distance(4000.0));
        assert_eq!(
            calc.fling_duration_ms(-4000.0),
            calc.fling_duration_ms(4000.0)
        );
    }

    #[test]
    fn distance_velocity_roundtrip() {
        let calc = FlingCalculator::with_density(1.0);
        for velocity in [500.0, 2000.0, 8000.0] {
            let recovered = calc.velocity_for_distance(calc.fling_distance(velocity));
            assert!(
                (recovered - velocity).abs() < velocity * 1e-3,
                "roundtrip for {}: {}",
                velocity,
                recovered
            );
        }
    }

    #[test]
    fn velocity_at_distance_endpoints() {
        let calc = FlingCalculator::with_density(1.0);
        let v0 = -6000.0f32;
        let total = calc.fling_distance(v0);

        let at_start = calc.velocity_at_distance(v0, 0.0);
        assert!((at_start - v0).abs() < v0.abs() * 1e-3);
        assert_eq!(calc.velocity_at_distance(v0, total), 0.0);
        assert_eq!(calc.velocity_at_distance(v0, total + 50.0), 0.0);
    }

    #[test]
    fn velocity_decays_along_the_coast() {
        let calc = FlingCalculator::with_density(1.0);
        let total = calc.fling_distance(6000.0);
        let mut prev = f32::INFINITY;
        for i in 0..10 {
            let travelled = total * i as f32 / 10.0;
            let v = calc.velocity_at_distance(6000.0, travelled);
            assert!(v < prev);
            prev = v;
        }
    }
}
