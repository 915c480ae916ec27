use rand::Rng;

use crate::vec2f::Vec2f;

use super::MovingRect;

/// The region a square's top-left corner may occupy without drawing off-screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    max_x: f32, // Width minus the square size.
    max_y: f32, // Height minus the square size.
}

impl Arena {
    /// Creates the arena for a `width` x `height` window holding squares of `size`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(width: u32, height: u32, size: u32) -> Self {
        Self {
            max_x: width.saturating_sub(size) as f32,
            max_y: height.saturating_sub(size) as f32,
        }
    }

    /// Largest in-range x position.
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    /// Largest in-range y position.
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Checks if a given point is within the bounds of the arena.
    pub fn contains(&self, point: Vec2f) -> bool {
        let within_x = point.0 >= 0.0 && point.0 <= self.max_x();
        let within_y = point.1 >= 0.0 && point.1 <= self.max_y();
        within_x && within_y
    }

    /// Uniformly random point inside the arena.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2f {
        Vec2f(
            rng.random_range(0.0..=self.max_x()),
            rng.random_range(0.0..=self.max_y()),
        )
    }

    /// Negates the velocity on every axis where the position has left the arena.
    /// The position itself is left where it is, so a square may overshoot for one frame.
    pub fn reflect(&self, rect: &mut MovingRect) {
        let Vec2f(x, y) = rect.position;
        if x < 0.0 || x > self.max_x {
            rect.velocity.0 = -rect.velocity.0;
        }

        if y < 0.0 || y > self.max_y {
            rect.velocity.1 = -rect.velocity.1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rgba;

    fn rect_at(x: f32, y: f32, dx: f32, dy: f32) -> MovingRect {
        MovingRect::new(Vec2f(x, y), Vec2f(dx, dy), Rgba::BLACK)
    }

    #[test]
    fn bounds_are_inset_by_square_size() {
        let arena = Arena::new(1024, 600, 20);
        assert_eq!(arena.max_x(), 1004.0);
        assert_eq!(arena.max_y(), 580.0);
        assert!(arena.contains(Vec2f(1004.0, 580.0)));
        assert!(arena.contains(Vec2f(0.0, 0.0)));
        assert!(!arena.contains(Vec2f(1004.5, 10.0)));
        assert!(!arena.contains(Vec2f(10.0, -0.1)));
    }

    #[test]
    fn reflect_only_touches_the_offending_axis() {
        let arena = Arena::new(1024, 600, 20);

        let mut rect = rect_at(1054.0, 300.0, 50.0, -30.0);
        arena.reflect(&mut rect);
        assert_eq!(rect.velocity, Vec2f(-50.0, -30.0));
        assert_eq!(rect.position, Vec2f(1054.0, 300.0));

        let mut rect = rect_at(500.0, -2.0, 10.0, -30.0);
        arena.reflect(&mut rect);
        assert_eq!(rect.velocity, Vec2f(10.0, 30.0));

        let mut rect = rect_at(-1.0, 581.0, -10.0, 5.0);
        arena.reflect(&mut rect);
        assert_eq!(rect.velocity, Vec2f(10.0, -5.0));
    }

    #[test]
    fn edges_are_in_range() {
        let arena = Arena::new(1024, 600, 20);
        let mut rect = rect_at(1004.0, 0.0, 50.0, -50.0);
        arena.reflect(&mut rect);
        assert_eq!(rect.velocity, Vec2f(50.0, -50.0));
    }

    #[test]
    fn oversized_squares_collapse_the_arena() {
        let arena = Arena::new(10, 10, 20);
        assert_eq!(arena.max_x(), 0.0);
        assert_eq!(arena.max_y(), 0.0);
    }

    #[test]
    fn random_points_may_land_on_the_far_edge() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        // A 21x21 window with 20 px squares leaves a 1 px arena; both ends are valid.
        let arena = Arena::new(21, 21, 20);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let point = arena.random_point(&mut rng);
            assert!(arena.contains(point), "{point:?}");
        }

        let collapsed = Arena::new(20, 20, 20);
        assert_eq!(collapsed.random_point(&mut rng), Vec2f(0.0, 0.0));
    }
}
