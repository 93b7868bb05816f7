//! Shared gesture constants.

/// Maximum fling velocity in logical px per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on
/// a baseline density. Fling velocities reported by the host are clamped to
/// this magnitude before any coast prediction.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
