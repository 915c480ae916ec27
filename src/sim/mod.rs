mod arena;
mod core;
mod metrics;
mod population;
mod rect;

pub use arena::Arena;
pub use self::core::SimCore;
pub use metrics::{FrameCounter, Report};
pub use population::Population;
pub use rect::{MovingRect, Rgba};
