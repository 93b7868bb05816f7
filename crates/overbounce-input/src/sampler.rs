//! Per-axis motion sampling.

use crate::{Axis, PointerEvent};

/// One processed move: the surface's current translation, the pointer's
/// travel since the previous sample, its direction, and the elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Current translation applied to the decorated surface.
    pub abs_offset: f32,
    /// Pointer travel along the axis since the previous sample.
    pub delta_offset: f32,
    /// True when travelling forward (toward positive axis values).
    pub dir_forward: bool,
    /// Milliseconds elapsed since the previous sample.
    pub dt_ms: f32,
}

#[derive(Clone, Copy, Debug)]
struct LastPosition {
    position: f32,
    time_ms: i64,
}

/// Converts raw pointer events into [`MotionSample`]s along one axis.
///
/// The very first event of a gesture carries no history; `sample` returns
/// `None` for it, which callers must treat as "keep intercepting, no
/// physics update yet".
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionSampler {
    axis: Axis,
    last: Option<LastPosition>,
}

impl MotionSampler {
    pub fn new(axis: Axis) -> Self {
        Self { axis, last: None }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Record `event` and derive a sample relative to the previous one.
    ///
    /// `translation` is the over-scroll offset currently applied to the
    /// surface; it is passed through as the sample's `abs_offset`.
    pub fn sample(&mut self, translation: f32, event: &PointerEvent) -> Option<MotionSample> {
        let position = self.axis.component(event.position);
        let previous = self.last.replace(LastPosition {
            position,
            time_ms: event.time_ms,
        })?;

        let delta_offset = position - previous.position;
        Some(MotionSample {
            abs_offset: translation,
            delta_offset,
            dir_forward: delta_offset > 0.0,
            dt_ms: (event.time_ms - previous.time_ms) as f32,
        })
    }

    /// Drop gesture history. The next `sample` call reseeds and yields
    /// `None`.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, PointerEvent};

    fn move_at(y: f32, time_ms: i64) -> PointerEvent {
        PointerEvent::moved(1, Point::new(0.0, y), time_ms)
    }

    #[test]
    fn first_sample_has_no_history() {
        let mut sampler = MotionSampler::new(Axis::Vertical);
        assert!(sampler.sample(0.0, &move_at(100.0, 0)).is_none());
    }

    #[test]
    fn derives_delta_direction_and_dt() {
        let mut sampler = MotionSampler::new(Axis::Vertical);
        sampler.sample(0.0, &move_at(100.0, 0));

        let sample = sampler.sample(12.0, &move_at(150.0, 16)).unwrap();
        assert_eq!(sample.abs_offset, 12.0);
        assert_eq!(sample.delta_offset, 50.0);
        assert!(sample.dir_forward);
        assert_eq!(sample.dt_ms, 16.0);

        let back = sampler.sample(12.0, &move_at(120.0, 32)).unwrap();
        assert_eq!(back.delta_offset, -30.0);
        assert!(!back.dir_forward);
    }

    #[test]
    fn horizontal_axis_reads_x() {
        let mut sampler = MotionSampler::new(Axis::Horizontal);
        sampler.sample(0.0, &PointerEvent::moved(1, Point::new(10.0, 99.0), 0));
        let sample = sampler
            .sample(0.0, &PointerEvent::moved(1, Point::new(35.0, 0.0), 8))
            .unwrap();
        assert_eq!(sample.delta_offset, 25.0);
    }

    #[test]
    fn reset_drops_history() {
        let mut sampler = MotionSampler::new(Axis::Vertical);
        sampler.sample(0.0, &move_at(100.0, 0));
        sampler.reset();
        assert!(sampler.sample(0.0, &move_at(160.0, 16)).is_none());
    }
}
