/// Wall-clock timing: the repeating fruit timer and the frame limiter.
///
/// Both take `Instant`s from the caller so tests can drive them without
/// sleeping.

use std::time::{Duration, Instant};

/// Repeating timer measured in wall-clock time, independent of frame rate.
#[derive(Clone, Debug)]
pub struct SpawnTimer {
    period: Duration,
    next_due: Instant,
}

impl SpawnTimer {
    pub fn new(start: Instant, period: Duration) -> Self {
        SpawnTimer {
            period,
            next_due: start + period,
        }
    }

    /// Number of periods that elapsed since the last poll. Each one is a
    /// separate firing; a zero period never fires.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        let mut fired = 0;
        while now >= self.next_due {
            self.next_due += self.period;
            fired += 1;
        }
        fired
    }
}

/// Caps the loop at a fixed rate by sleeping out the rest of each frame.
#[derive(Clone, Debug)]
pub struct FramePacer {
    frame: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(fps: u64, now: Instant) -> Self {
        FramePacer {
            frame: Duration::from_micros(1_000_000 / fps.max(1)),
            frame_start: now,
        }
    }

    /// Time left in the current frame as of `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.frame_start))
    }

    /// Block until the current frame is over, then start the next one.
    pub fn wait(&mut self) {
        let left = self.remaining(Instant::now());
        if !left.is_zero() {
            std::thread::sleep(left);
        }
        self.frame_start = Instant::now();
    }
}
