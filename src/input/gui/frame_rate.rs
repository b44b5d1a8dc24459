use std::time::{Duration, Instant};

const SMOOTHING: f64 = 0.1;

/// Exponentially smoothed frames-per-second estimate for the debug overlay.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameRate {
    last_frame: Option<Instant>,
    fps: f64,
}

impl FrameRate {
    pub fn record_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.record_interval(now.saturating_duration_since(last));
        }
        self.last_frame = Some(now);
    }

    fn record_interval(&mut self, interval: Duration) {
        let seconds = interval.as_secs_f64();
        if seconds <= 0.0 {
            return;
        }

        let instant_fps = 1.0 / seconds;
        self.fps = if self.fps == 0.0 {
            instant_fps
        } else {
            self.fps + SMOOTHING * (instant_fps - self.fps)
        };
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }
}
