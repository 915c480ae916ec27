use std::collections::VecDeque;

use super::{BackendInfo, DrawCommand, Input, Surface};

/// Scripted surface for driving the simulation without a display.
///
/// Each call to `poll_input` consumes one frame of the script: the queued inputs for that frame
/// and the clock value the frame should observe.
pub(crate) struct RecordingSurface {
    frames: VecDeque<(u64, Vec<Input>)>,  // Clock and inputs for each upcoming frame.
    now: u64,                             // Current clock value.
    pub commands: Vec<DrawCommand>,       // Every command drawn since the last present.
    pub presented: Vec<Vec<DrawCommand>>, // Completed frames.
}

impl RecordingSurface {
    /// Creates a surface whose clock starts at `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            frames: VecDeque::new(),
            now: start_ms,
            commands: Vec::new(),
            presented: Vec::new(),
        }
    }

    /// Queues a frame observed at `at_ms` with the given inputs.
    pub fn frame(mut self, at_ms: u64, inputs: &[Input]) -> Self {
        self.frames.push_back((at_ms, inputs.to_vec()));
        self
    }

    /// Queues `count` input-free frames spaced `step_ms` apart after the last queued one.
    pub fn idle_frames(mut self, count: usize, step_ms: u64) -> Self {
        let mut at = self.frames.back().map_or(self.now, |(at, _)| *at);
        for _ in 0..count {
            at += step_ms;
            self.frames.push_back((at, Vec::new()));
        }
        self
    }
}

impl Surface for RecordingSurface {
    fn poll_input(&mut self, out: &mut Vec<Input>) {
        match self.frames.pop_front() {
            Some((at, inputs)) => {
                self.now = at;
                out.extend(inputs);
            }
            // Script exhausted.
            None => out.push(Input::Quit),
        }
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn present(&mut self) {
        self.presented.push(std::mem::take(&mut self.commands));
    }

    fn ticks_ms(&self) -> u64 {
        self.now
    }

    fn backend_info(&self) -> BackendInfo {
        BackendInfo {
            name: String::from("recording"),
            texture_formats: 0,
        }
    }
}
