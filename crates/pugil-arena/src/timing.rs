//! Frame pacing for the bout loop.
//!
//! Keeps the simulation stepping at a steady cadence and tracks recent
//! frame times for the end-of-bout summary.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Paces the bout loop at a target frame rate.
#[derive(Debug)]
pub struct FrameClock {
    /// Target frames per second
    target_fps: u32,
    /// Time budget per frame
    frame_budget: Duration,
    /// Time of last frame start
    last_frame: Instant,
    /// Maximum delta time to prevent spiral of death
    max_dt: f32,
    /// Recent frame times for averaging
    frame_times: VecDeque<f32>,
    /// Maximum samples for averaging
    max_samples: usize,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameClock {
    /// Create a new frame clock.
    ///
    /// # Arguments
    /// * `target_fps` - Target frames per second for frame limiting
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            target_fps,
            frame_budget: Duration::from_secs_f64(1.0 / f64::from(target_fps)),
            last_frame: Instant::now(),
            max_dt: 0.25, // Max 250ms delta (prevents spiral of death)
            frame_times: VecDeque::with_capacity(120),
            max_samples: 120,
        }
    }

    /// Calculate delta time since last frame.
    /// Also stores the frame time for averaging.
    pub fn delta_time(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        // Clamp to prevent spiral of death
        let clamped_dt = dt.min(self.max_dt);

        // Store for averaging
        self.frame_times.push_back(clamped_dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }

        clamped_dt
    }

    /// Sleep for the remainder of the frame budget.
    pub fn sleep_remainder(&self) {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_budget {
            let sleep_time = self.frame_budget - elapsed;
            // Use spin sleep for more accurate timing on short durations
            if sleep_time > Duration::from_millis(1) {
                std::thread::sleep(sleep_time - Duration::from_millis(1));
            }
            // Spin for the remainder
            while self.last_frame.elapsed() < self.frame_budget {
                std::hint::spin_loop();
            }
        }
    }

    /// Get the current FPS (averaged over recent frames).
    #[must_use]
    pub fn current_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        let avg_frame_time: f32 =
            self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;

        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }

    /// Get the average frame time in milliseconds.
    #[must_use]
    pub fn average_frame_time_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        (self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32) * 1000.0
    }

    /// Get the target FPS.
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_fps_is_clamped_to_at_least_one() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.target_fps(), 1);
    }

    #[test]
    fn test_default_clock_targets_sixty_fps() {
        let clock = FrameClock::default();
        assert_eq!(clock.target_fps(), 60);
    }

    #[test]
    fn test_delta_time_is_non_negative_and_clamped() {
        let mut clock = FrameClock::new(60);
        let dt = clock.delta_time();
        assert!(dt >= 0.0);
        assert!(dt <= 0.25);
    }

    #[test]
    fn test_averages_are_zero_before_any_frame() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.current_fps(), 0.0);
        assert_eq!(clock.average_frame_time_ms(), 0.0);
    }

    #[test]
    fn test_averages_track_recorded_frames() {
        let mut clock = FrameClock::new(60);
        for _ in 0..5 {
            clock.delta_time();
            std::thread::sleep(Duration::from_millis(2));
        }
        clock.delta_time();
        assert!(clock.current_fps() > 0.0);
        assert!(clock.average_frame_time_ms() > 0.0);
    }

    #[test]
    fn test_sleep_remainder_pads_out_the_frame_budget() {
        // 50 FPS gives a 20ms budget; the frame itself does no work, so
        // nearly all of it should be slept off.
        let mut clock = FrameClock::new(50);
        clock.delta_time();
        let start = Instant::now();
        clock.sleep_remainder();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
