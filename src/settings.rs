use crate::sim::Rgba;

/// Compiled-in parameters of the benchmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub title: &'static str,  // Window title.
    pub width: u32,           // Logical window width in pixels.
    pub height: u32,          // Logical window height in pixels.
    pub rect_size: u32,       // Edge length of every square.
    pub initial_count: usize, // Squares spawned at start-up.
    pub batch: usize,         // Squares added or removed per key press.
    pub floor: usize,         // Population must exceed this before shrinking.
    pub max_speed: f32,       // Velocity components are drawn from [-max_speed, max_speed].
    pub report_ms: u64,       // Minimum time between throughput reports.
    pub background: Rgba,     // Clear color.
}

impl Settings {
    pub const WIDTH: u32 = 1024;
    pub const HEIGHT: u32 = 600;
    pub const RECT_SIZE: u32 = 20;
    pub const INITIAL_COUNT: usize = 500;
    pub const BATCH: usize = 1000;
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "SDL3 Benchmark",
            width: Self::WIDTH,
            height: Self::HEIGHT,
            rect_size: Self::RECT_SIZE,
            initial_count: Self::INITIAL_COUNT,
            batch: Self::BATCH,
            floor: Self::BATCH,
            max_speed: 200.0,
            report_ms: 1000,
            background: Rgba::BLACK,
        }
    }
}
