use rand::Rng;

use crate::settings::Settings;
use crate::surface::{DrawCommand, Surface};
use crate::vec2f::Vec2f;

use super::{Arena, MovingRect, Rgba};

/// Every square in the simulation, in draw order.
pub struct Population {
    rects: Vec<MovingRect>, // Later entries draw over earlier ones.
    arena: Arena,           // Region the squares bounce within.
    rect_size: u32,         // Edge length of each square.
    max_speed: f32,         // Bound on each velocity component at spawn.
    floor: usize,           // Shrinking requires strictly more squares than this.
    background: Rgba,       // Color the frame is cleared to.
}

impl Population {
    /// Creates an empty population for the given settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            rects: Vec::new(),
            arena: Arena::new(settings.width, settings.height, settings.rect_size),
            rect_size: settings.rect_size,
            max_speed: settings.max_speed,
            floor: settings.floor,
            background: settings.background,
        }
    }

    /// Amount of squares currently alive.
    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Squares in draw order.
    #[cfg(test)]
    pub fn rects(&self) -> &[MovingRect] {
        &self.rects
    }

    /// Arena the squares are confined to.
    #[cfg(test)]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Appends an already built square.
    #[cfg(test)]
    pub fn push(&mut self, rect: MovingRect) {
        self.rects.push(rect);
    }

    /// Appends `count` squares with random positions, velocities, and colors.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        self.rects.reserve(count);
        for _ in 0..count {
            let position = self.arena.random_point(rng);
            let velocity = Vec2f(
                rng.random_range(-self.max_speed..=self.max_speed),
                rng.random_range(-self.max_speed..=self.max_speed),
            );
            let color = Rgba::random_opaque(rng);
            debug_assert!(self.arena.contains(position));
            self.rects.push(MovingRect::new(position, velocity, color));
        }
    }

    /// Checks if the population is large enough to be shrunk.
    #[inline]
    pub fn can_shrink(&self) -> bool {
        self.rects.len() > self.floor
    }

    /// Removes the last `count` squares. Refused unless the population exceeds the floor.
    /// Returns whether anything was removed.
    pub fn shrink(&mut self, count: usize) -> bool {
        if !self.can_shrink() {
            return false;
        }

        let keep = self.rects.len().saturating_sub(count);
        self.rects.truncate(keep);
        true
    }

    /// Moves every square by its velocity over `dt` seconds, then bounces it off any edge it has
    /// crossed.
    pub fn advance(&mut self, dt: f32) {
        for rect in &mut self.rects {
            rect.step(dt);
            self.arena.reflect(rect);
        }
    }

    /// Clears the frame and draws every square at its truncated position.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw(DrawCommand::Clear(self.background));
        for rect in &self.rects {
            let (x, y) = rect.position.truncate();
            surface.draw(DrawCommand::FillRect(x, y, self.rect_size, rect.color));
        }
    }
}
