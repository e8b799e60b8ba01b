//! Timing boundary

use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate pacing plus the blocking wait used by splash screens
pub trait Pacer {
    /// Sleep out the rest of the current tick at `fps` ticks per second
    fn pace(&mut self, fps: u32);
    /// Block for `ms` milliseconds
    fn wait_ms(&mut self, ms: u32);
}

/// Wall-clock pacer
#[derive(Debug, Default)]
pub struct SleepPacer {
    last: Option<Instant>,
}

impl SleepPacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pacer for SleepPacer {
    fn pace(&mut self, fps: u32) {
        let period = Duration::from_secs(1) / fps.max(1);
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < period {
                thread::sleep(period - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }

    fn wait_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms as u64));
        self.last = Some(Instant::now());
    }
}

/// Pacer that never sleeps; it only tallies what it was asked to do
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullPacer {
    pub ticks_paced: u64,
    pub waited_ms: u64,
}

impl Pacer for NullPacer {
    fn pace(&mut self, _fps: u32) {
        self.ticks_paced += 1;
    }

    fn wait_ms(&mut self, ms: u32) {
        self.waited_ms += ms as u64;
    }
}
