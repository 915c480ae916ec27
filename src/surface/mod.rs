mod input;
mod sdl;

#[cfg(test)]
pub(crate) mod recording;

pub use input::Input;
pub use sdl::SdlSurface;

use crate::sim::Rgba;

/// Diagnostic description of the active renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendInfo {
    pub name: String,           // Name of the render driver in use.
    pub texture_formats: usize, // Number of texture formats the driver supports.
}

/// A single drawing operation issued by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),                   // Fill the whole frame.
    FillRect(i32, i32, u32, Rgba), // Filled square: x, y, edge length, color.
}

/// Window, event queue, and 2D renderer the simulation draws into.
pub trait Surface {
    /// Drains every pending event, appending the ones the simulation cares about.
    fn poll_input(&mut self, out: &mut Vec<Input>);

    /// Executes a drawing operation on the back buffer.
    fn draw(&mut self, command: DrawCommand);

    /// Shows the composed frame. May block on vertical sync.
    fn present(&mut self);

    /// Monotonic time in milliseconds.
    fn ticks_ms(&self) -> u64;

    /// Describes the renderer in use.
    fn backend_info(&self) -> BackendInfo;
}
