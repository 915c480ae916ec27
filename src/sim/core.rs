use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::settings::Settings;
use crate::surface::{Input, Surface};

use super::{FrameCounter, Population, Report};

/// Whether the loop should keep iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,    // Default; iterate again.
    Terminated, // Quit requested; shut down after the current iteration.
}

/// Core of the benchmark. Owns every piece of simulation state.
pub struct SimCore {
    settings: Settings,     // Compiled-in parameters.
    population: Population, // The squares.
    rng: StdRng,            // Sole source of randomness, seeded once.
    metrics: FrameCounter,  // Throughput reporting.
    last_frame_ms: u64,     // Clock value at the previous frame.
    state: LoopState,       // Running or terminated.
    inputs: Vec<Input>,     // Reused event buffer.
}

impl SimCore {
    /// Creates the simulation with an RNG seeded from the wall clock.
    pub fn new(settings: Settings, now_ms: u64) -> Self {
        Self::with_rng(settings, now_ms, StdRng::seed_from_u64(Self::wall_clock_seed()))
    }

    /// Creates the simulation with the given RNG and spawns the initial batch.
    pub fn with_rng(settings: Settings, now_ms: u64, mut rng: StdRng) -> Self {
        let mut population = Population::new(&settings);
        population.spawn(&mut rng, settings.initial_count);

        Self {
            metrics: FrameCounter::start(now_ms, settings.report_ms),
            settings,
            population,
            rng,
            last_frame_ms: now_ms,
            state: LoopState::Running,
            inputs: Vec::new(),
        }
    }

    /// Nanoseconds since the epoch, folded into a seed.
    #[allow(clippy::cast_possible_truncation)]
    fn wall_clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }

    /// Current loop state.
    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The squares being simulated.
    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Adds a batch of squares.
    pub fn grow(&mut self) {
        self.population.spawn(&mut self.rng, self.settings.batch);
        log::debug!("Population grown to {}.", self.population.len());
    }

    /// Removes a batch of squares if the population is above the floor.
    pub fn shrink(&mut self) {
        if self.population.shrink(self.settings.batch) {
            log::debug!("Population shrunk to {}.", self.population.len());
        } else {
            log::debug!(
                "Shrink refused, population {} does not exceed {}.",
                self.population.len(),
                self.settings.floor
            );
        }
    }

    /// Applies a single input.
    fn handle_input(&mut self, input: Input) {
        match input {
            Input::Quit => self.state = LoopState::Terminated,
            Input::Grow => self.grow(),
            Input::Shrink => self.shrink(),
        }
    }

    /// Runs one iteration: input, physics, render, present, metrics.
    /// Returns a report when a reporting window has closed.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<Report> {
        let mut inputs = std::mem::take(&mut self.inputs);
        inputs.clear();
        surface.poll_input(&mut inputs);
        for input in inputs.drain(..) {
            self.handle_input(input);
        }
        self.inputs = inputs;

        // Get the delta time.
        let now = surface.ticks_ms();
        #[allow(clippy::cast_precision_loss)]
        let dt = now.saturating_sub(self.last_frame_ms) as f32 / 1000.0;
        self.last_frame_ms = now;

        self.population.advance(dt);

        self.population.render(surface);
        surface.present();

        self.metrics.tick(now, self.population.len())
    }

    /// Runs the main loop until a quit is requested.
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        while self.state == LoopState::Running {
            if let Some(report) = self.step(surface) {
                log::info!("{report}");
            }
        }
    }
}
