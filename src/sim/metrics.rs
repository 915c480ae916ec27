/// Throughput observed over one reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub frames: u32,       // Frames rendered since the previous report.
    pub population: usize, // Squares alive when the report was made.
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FPS: {} | Objs: {}", self.frames, self.population)
    }
}

/// Counts frames and produces a report once per interval.
pub struct FrameCounter {
    frames: u32,      // Frames since the last report.
    last_report: u64, // Clock value of the last report, in milliseconds.
    interval: u64,    // Minimum milliseconds between reports.
}

impl FrameCounter {
    /// Creates a counter whose first window starts at `now_ms`.
    pub fn start(now_ms: u64, interval_ms: u64) -> Self {
        Self {
            frames: 0,
            last_report: now_ms,
            interval: interval_ms,
        }
    }

    /// Frames counted in the current window.
    #[cfg(test)]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Counts a frame. Once the interval has elapsed, returns the report and resets the window.
    pub fn tick(&mut self, now_ms: u64, population: usize) -> Option<Report> {
        self.frames = self.frames.saturating_add(1);
        if now_ms.saturating_sub(self.last_report) < self.interval {
            return None;
        }

        let report = Report {
            frames: self.frames,
            population,
        };
        self.frames = 0;
        self.last_report = now_ms;
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_after_the_interval() {
        let mut counter = FrameCounter::start(0, 1000);

        // 60 frames spaced ~16 ms apart stay inside the first second.
        for frame in 1..=60u64 {
            assert_eq!(counter.tick(frame * 16, 500), None);
        }
        assert_eq!(counter.frames(), 60);

        let report = counter.tick(1000, 500);
        assert_eq!(
            report,
            Some(Report {
                frames: 61,
                population: 500
            })
        );
        assert_eq!(counter.frames(), 0);

        // The next window is measured from the report.
        assert_eq!(counter.tick(1999, 500), None);
        assert_eq!(counter.tick(2000, 1500).map(|r| r.frames), Some(2));
    }

    #[test]
    fn slow_frames_report_every_time() {
        let mut counter = FrameCounter::start(0, 1000);
        assert_eq!(counter.tick(2500, 10).map(|r| r.frames), Some(1));
        assert_eq!(counter.tick(3600, 10).map(|r| r.frames), Some(1));
    }

    #[test]
    fn report_format() {
        let report = Report {
            frames: 59,
            population: 1500,
        };
        assert_eq!(report.to_string(), "FPS: 59 | Objs: 1500");
    }
}
