//! Momentum glides along a bounded track
//!
//! A glide keeps a signed velocity. Every frame its magnitude grows by
//! [`Glide::ACCELERATION`] and the new velocity is the offset to apply for
//! that frame. Zero velocity counts as positive.

/// A closed range `[lower, upper]` along one axis
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Track {
    pub lower: f32,
    pub upper: f32,
}

/// Which end of a track a glide reached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrival {
    Lower,
    Upper,
}

impl Track {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// Clamp a coordinate into the track.
    ///
    /// The track must not be inverted; widgets validate bounds before
    /// building one.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.lower, self.upper)
    }

    /// Whether `value` lies strictly between the ends
    pub fn is_interior(&self, value: f32) -> bool {
        self.lower < value && value < self.upper
    }

    /// The end a value outside the interior has reached. The lower end
    /// wins on a zero-length track.
    pub fn arrival(&self, value: f32) -> Arrival {
        if value <= self.lower {
            Arrival::Lower
        } else {
            Arrival::Upper
        }
    }
}

/// Accelerating glide velocity
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Glide {
    velocity: f32,
}

impl Glide {
    /// Magnitude gained per frame
    pub const ACCELERATION: f32 = 1.0;

    pub fn new(velocity: f32) -> Self {
        Self { velocity }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Accelerate by one frame and return the offset for that frame
    pub fn advance(&mut self) -> f32 {
        if self.velocity >= 0.0 {
            self.velocity += Self::ACCELERATION;
        } else {
            self.velocity -= Self::ACCELERATION;
        }
        self.velocity
    }

    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }
}
