//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Sleeps between frames so that at most `tick_rate` frames run per second.
#[derive(Debug)]
pub struct Pacer {
    frame: Option<Duration>,
    last: Option<Instant>,
}

impl Pacer {
    /// A tick rate of 0 disables pacing
    pub fn new(tick_rate: u32) -> Self {
        let frame = (tick_rate > 0).then(|| Duration::from_secs(1) / tick_rate);
        Self { frame, last: None }
    }

    /// Target frame duration, if paced
    pub fn frame_duration(&self) -> Option<Duration> {
        self.frame
    }

    /// Wait out the rest of the current frame. Returns the time slept.
    pub fn tick(&mut self) -> Duration {
        let Some(frame) = self.frame else {
            return Duration::ZERO;
        };

        let slept = match self.last {
            Some(last) => {
                let remaining = frame.saturating_sub(last.elapsed());
                if !remaining.is_zero() {
                    std::thread::sleep(remaining);
                }
                remaining
            }
            None => Duration::ZERO,
        };
        self.last = Some(Instant::now());
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaced_never_sleeps() {
        let mut pacer = Pacer::new(0);
        assert!(pacer.frame_duration().is_none());
        for _ in 0..10 {
            assert_eq!(pacer.tick(), Duration::ZERO);
        }
    }

    #[test]
    fn test_paced_frames_take_at_least_frame_time() {
        let mut pacer = Pacer::new(100);
        assert_eq!(pacer.frame_duration(), Some(Duration::from_millis(10)));

        let start = Instant::now();
        for _ in 0..4 {
            pacer.tick();
        }
        // First tick starts the clock; three full frames follow
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
