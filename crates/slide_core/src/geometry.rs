//! Core geometry types
//!
//! Positions are anchored: they are measured relative to the widget's parent,
//! the way host layout systems report them.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along an axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy of this point with the coordinate along `axis` replaced
    pub fn with_along(&self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => Point::new(value, self.y),
            Axis::Vertical => Point::new(self.x, value),
        }
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A vector with `amount` on `axis` and zero on the other
    pub fn on_axis(axis: Axis, amount: f32) -> Self {
        match axis {
            Axis::Horizontal => Vec2::new(amount, 0.0),
            Axis::Vertical => Vec2::new(0.0, amount),
        }
    }

    /// Component along an axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Axis of motion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}
