use std::ops::{Add, Sub};

pub type PointerId = u64;

/// A 2D point in logical px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// The axis a decorator operates along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Default for Axis {
    fn default() -> Self {
        Axis::Vertical
    }
}

impl Axis {
    /// The coordinate of `point` along this axis.
    pub fn component(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }
}

/// A single pointer sample: kind, position, and event time.
///
/// Event times are host-supplied milliseconds on a monotonic scale; the
/// engine only ever subtracts them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            id,
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(id: PointerId, position: Point, time_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Down, position, time_ms)
    }

    pub fn moved(id: PointerId, position: Point, time_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Move, position, time_ms)
    }

    pub fn up(id: PointerId, position: Point, time_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Up, position, time_ms)
    }

    pub fn cancel(id: PointerId, position: Point, time_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Cancel, position, time_ms)
    }
}
