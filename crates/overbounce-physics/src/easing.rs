//! Easing functions for the bounce animations.

/// Easing applied to a linear animation fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Decelerating ease-out: `1 - (1 - t)^(2 * factor)`.
    ///
    /// With `factor = 1.0` this is the quadratic ease-out used by the
    /// bounce animations: fast at the start, settling gently into the
    /// target. Larger factors decelerate harder. Concave for
    /// `factor >= 0.5`.
    Decelerate { factor: f32 },
}

impl Easing {
    /// The default bounce easing (quadratic decelerate).
    pub const DECELERATE: Easing = Easing::Decelerate { factor: 1.0 };

    /// Apply the easing to a linear fraction, clamped to `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Decelerate { factor } => 1.0 - (1.0 - t).powf(2.0 * factor),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::DECELERATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::DECELERATE] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::DECELERATE.transform(-0.5), 0.0);
        assert_eq!(Easing::DECELERATE.transform(1.5), 1.0);
    }

    #[test]
    fn decelerate_is_strictly_increasing() {
        let easing = Easing::DECELERATE;
        let mut prev = 0.0;
        for i in 1..=100 {
            let p = easing.transform(i as f32 / 100.0);
            assert!(p > prev, "not increasing at step {}", i);
            prev = p;
        }
    }

    #[test]
    fn decelerate_is_concave() {
        // Rate of change must decrease over time: each successive step
        // covers less progress than the one before it.
        let easing = Easing::Decelerate { factor: 1.5 };
        let mut prev_step = f32::INFINITY;
        for i in 1..=50 {
            let a = easing.transform((i - 1) as f32 / 50.0);
            let b = easing.transform(i as f32 / 50.0);
            let step = b - a;
            assert!(step <= prev_step + 1e-6, "convex at step {}", i);
            prev_step = step;
        }
    }

    #[test]
    fn decelerate_leads_linear() {
        let easing = Easing::DECELERATE;
        for i in 1..100 {
            let t = i as f32 / 100.0;
            assert!(easing.transform(t) > t);
        }
    }
}
