use rand::Rng;

use crate::vec2f::Vec2f;

/// An 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);

    /// Random opaque color.
    pub fn random_opaque<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgba(rng.random(), rng.random(), rng.random(), 255)
    }
}

/// A colored square drifting across the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingRect {
    pub position: Vec2f, // Top-left corner, in logical pixels.
    pub velocity: Vec2f, // Pixels per second on each axis.
    pub color: Rgba,     // Fixed at creation.
}

impl MovingRect {
    /// Creates a new rectangle at `position` moving with `velocity`.
    pub fn new(position: Vec2f, velocity: Vec2f, color: Rgba) -> Self {
        Self {
            position,
            velocity,
            color,
        }
    }

    /// Integrates the velocity over `dt` seconds.
    #[inline]
    pub fn step(&mut self, dt: f32) {
        self.position += self.velocity.scale(dt);
    }
}
