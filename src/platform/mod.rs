//! Platform glue for the native loop
//!
//! Only frame pacing lives here. Window, input sampling and drawing
//! belong to whatever frontend embeds the crate; the sim never touches
//! the wall clock.

use std::time::{Duration, Instant};

/// Blocking frame-rate governor.
///
/// `tick` sleeps out the remainder of the frame. Pacing only, never a
/// correctness mechanism: the sim advances per tick, not per elapsed
/// second.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Block until the frame budget for `target_fps` has elapsed since
    /// the previous tick, then return the real delta in seconds.
    pub fn tick(&mut self, target_fps: u32) -> f32 {
        let frame = Duration::from_secs_f32(1.0 / target_fps.max(1) as f32);
        let elapsed = self.last.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_blocks_for_at_least_the_frame_budget() {
        let mut clock = FrameClock::new();
        // 200 fps = 5ms frames; sleep guarantees at least that much
        let dt = clock.tick(200);
        assert!(dt >= 0.004, "frame came back after {dt}s");
    }
}
