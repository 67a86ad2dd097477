//! Fixed-step animation clock and frame timing.
//!
//! Animation time advances by a constant step per rendered frame, not by
//! wall-clock time, so motion speed follows the frame rate. Wall-clock frame
//! durations are tracked separately for FPS reporting.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default animation step per frame.
pub const DEFAULT_FRAME_STEP: f64 = 0.016;

/// Frames between FPS reports.
pub const FPS_REPORT_INTERVAL: u64 = 600;

const MAX_SAMPLES: usize = 120;

/// Drives the per-frame time value handed to the scene.
pub struct FrameClock {
    time: f64,
    frame: u64,
    step: f64,
    frame_times: VecDeque<Duration>,
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new(step: f64) -> Self {
        Self {
            time: 0.0,
            frame: 0,
            step,
            frame_times: VecDeque::with_capacity(MAX_SAMPLES),
            last_frame: None,
        }
    }

    /// Advance one frame and return the new animation time.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    /// [`Self::tick`] with an explicit wall-clock instant.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        if let Some(last) = self.last_frame {
            self.frame_times.push_back(now.saturating_duration_since(last));
            if self.frame_times.len() > MAX_SAMPLES {
                self.frame_times.pop_front();
            }
        }
        self.last_frame = Some(now);

        self.time += self.step;
        self.frame += 1;
        self.time
    }

    /// Cumulative animation time. Never decreases.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// True on frames where FPS should be logged.
    pub fn report_due(&self) -> bool {
        self.frame > 0 && self.frame % FPS_REPORT_INTERVAL == 0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_STEP)
    }
}
