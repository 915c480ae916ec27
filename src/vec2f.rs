/// A 2D vector where the components are 32-bit floats.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Vec2f(pub f32, pub f32);

impl Vec2f {
    /// Scales the vector by a scalar.
    pub fn scale(self, s: f32) -> Vec2f {
        Vec2f(self.0 * s, self.1 * s)
    }

    /// Truncates both components toward zero, yielding pixel coordinates.
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncate(self) -> (i32, i32) {
        (self.0 as i32, self.1 as i32)
    }
}

impl std::ops::Add for Vec2f {
    type Output = Vec2f;

    fn add(self, other: Vec2f) -> Vec2f {
        Vec2f(self.0 + other.0, self.1 + other.1)
    }
}

impl std::ops::AddAssign for Vec2f {
    fn add_assign(&mut self, other: Vec2f) {
        self.0 += other.0;
        self.1 += other.1;
    }
}
