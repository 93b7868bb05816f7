//! The rubber-band damping curve.
//!
//! Maps accumulated drag distance to a displayed over-scroll offset with
//! progressively increasing resistance, and back. The curve is a saturating
//! hyperbola `y = s*x / (x + s)`: slope 1 at the origin, concave, and never
//! exceeding the configured saturation, with a closed-form inverse.

/// Rubber-band damping curve with a configurable saturation offset.
///
/// All functions are total and operate sign-symmetrically:
/// `display_offset(-x) == -display_offset(x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBandCurve {
    saturation: f32,
}

impl RubberBandCurve {
    /// Default asymptotic display offset, in logical px.
    pub const DEFAULT_SATURATION: f32 = 1200.0;

    /// Drag magnitudes beyond this are clamped before computing a
    /// bounce-forward target, bounding worst-case bounce travel.
    pub const MAX_BOUNCE_INPUT: f32 = 3000.0;

    /// Create a curve saturating at the given display offset.
    ///
    /// Non-positive or non-finite saturations fall back to the default.
    pub fn new(saturation: f32) -> Self {
        let saturation = if saturation.is_finite() && saturation > 0.0 {
            saturation
        } else {
            Self::DEFAULT_SATURATION
        };
        Self { saturation }
    }

    /// The asymptotic display offset.
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Displayed offset for an accumulated drag distance `x`.
    pub fn display_offset(&self, x: f32) -> f32 {
        let s = self.saturation;
        let magnitude = x.abs();
        x.signum() * (s * magnitude) / (magnitude + s)
    }

    /// Accumulated drag distance producing the displayed offset `y`.
    ///
    /// Exact inverse of [`display_offset`](Self::display_offset) on the
    /// curve's range; magnitudes at or beyond the saturation are clamped
    /// just below the asymptote to keep the function total.
    pub fn inverse(&self, y: f32) -> f32 {
        let s = self.saturation;
        let magnitude = y.abs().min(s * (1.0 - f32::EPSILON));
        y.signum() * (s * magnitude) / (s - magnitude)
    }

    /// Bounce-forward travel for a raw over-shoot magnitude.
    ///
    /// The input is clamped to [`MAX_BOUNCE_INPUT`](Self::MAX_BOUNCE_INPUT)
    /// before curve application; sign is preserved.
    pub fn bounce_target_for(&self, offset: f32) -> f32 {
        offset.signum() * self.display_offset(offset.abs().min(Self::MAX_BOUNCE_INPUT))
    }
}

impl Default for RubberBandCurve {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SATURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_zero() {
        let curve = RubberBandCurve::default();
        assert_eq!(curve.display_offset(0.0), 0.0);
        assert_eq!(curve.inverse(0.0), 0.0);
    }

    #[test]
    fn invertible_within_tolerance() {
        let curve = RubberBandCurve::default();
        for x in [0.5, 10.0, 50.0, 250.0, 1000.0, 5000.0, 50_000.0] {
            let roundtrip = curve.inverse(curve.display_offset(x));
            assert!(
                (roundtrip - x).abs() < x * 1e-3 + 1e-3,
                "inverse(display({})) = {}",
                x,
                roundtrip
            );
        }
    }

    #[test]
    fn monotonically_increasing() {
        let curve = RubberBandCurve::default();
        let mut prev = 0.0;
        for i in 1..200 {
            let y = curve.display_offset(i as f32 * 25.0);
            assert!(y > prev);
            prev = y;
        }
    }

    #[test]
    fn resistance_grows_with_distance() {
        // Secant slope from the origin must shrink as x grows (concavity).
        let curve = RubberBandCurve::default();
        let mut prev_slope = f32::INFINITY;
        for i in 1..100 {
            let x = i as f32 * 40.0;
            let slope = curve.display_offset(x) / x;
            assert!(slope < prev_slope, "resistance not growing at x={}", x);
            prev_slope = slope;
        }
    }

    #[test]
    fn sign_symmetric() {
        let curve = RubberBandCurve::default();
        for x in [1.0, 42.0, 999.0] {
            assert_eq!(curve.display_offset(-x), -curve.display_offset(x));
            let y = curve.display_offset(x);
            assert_eq!(curve.inverse(-y), -curve.inverse(y));
        }
    }

    #[test]
    fn display_saturates_below_asymptote() {
        let curve = RubberBandCurve::new(600.0);
        assert!(curve.display_offset(1e9) < 600.0);
    }

    #[test]
    fn inverse_is_total_past_saturation() {
        let curve = RubberBandCurve::new(600.0);
        assert!(curve.inverse(600.0).is_finite());
        assert!(curve.inverse(10_000.0).is_finite());
    }

    #[test]
    fn bounce_target_clamps_input() {
        let curve = RubberBandCurve::default();
        let at_cap = curve.bounce_target_for(RubberBandCurve::MAX_BOUNCE_INPUT);
        assert_eq!(curve.bounce_target_for(9000.0), at_cap);
        assert_eq!(curve.bounce_target_for(-9000.0), -at_cap);
    }
}
