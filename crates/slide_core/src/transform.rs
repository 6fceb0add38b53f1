//! Anchored transform seam
//!
//! Hosts own the positioned object a widget moves. Widgets only read and
//! write its anchored position through [`AnchoredTransform`].

use crate::geometry::Point;

/// A host object exposing a 2D anchored position
pub trait AnchoredTransform {
    /// Current anchored position
    fn anchored_position(&self) -> Point;

    /// Replace the anchored position
    fn set_anchored_position(&mut self, position: Point);
}

/// Plain in-memory transform for headless hosts and tests
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectTransform {
    position: Point,
}

impl RectTransform {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y))
    }
}

impl AnchoredTransform for RectTransform {
    fn anchored_position(&self) -> Point {
        self.position
    }

    fn set_anchored_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl<T: AnchoredTransform + ?Sized> AnchoredTransform for Box<T> {
    fn anchored_position(&self) -> Point {
        (**self).anchored_position()
    }

    fn set_anchored_position(&mut self, position: Point) {
        (**self).set_anchored_position(position)
    }
}
