use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate pacing for the game loop.
///
/// `wait` blocks until the next tick deadline and re-arms it, so calling it
/// at the top of every loop iteration yields a steady logical tick rate
/// independent of how long the rest of the iteration took.
#[derive(Debug)]
pub struct TickClock {
    interval: Duration,
    deadline: Instant,
    last_tick: Instant,
}

impl TickClock {
    /// Creates a clock ticking `ticks_per_second` times per second.
    #[must_use]
    pub fn new(ticks_per_second: u32) -> Self {
        debug_assert!(ticks_per_second > 0);

        let interval = Duration::from_secs(1) / ticks_per_second;
        let now = Instant::now();

        Self {
            interval,
            deadline: now + interval,
            last_tick: now,
        }
    }

    /// Returns the configured tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until the next tick boundary.
    ///
    /// Returns the time elapsed since the previous tick. When the loop has
    /// fallen behind the deadline, the clock re-bases instead of firing a
    /// burst of catch-up ticks.
    pub fn wait(&mut self) -> Duration {
        let now = Instant::now();
        let remaining = self.deadline.saturating_duration_since(now);
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }

        let ticked_at = Instant::now();
        let elapsed = ticked_at.duration_since(self.last_tick);
        self.last_tick = ticked_at;

        self.deadline += self.interval;
        if self.deadline < ticked_at {
            self.deadline = ticked_at + self.interval;
        }

        elapsed
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::TickClock;

    #[test]
    fn interval_divides_one_second_by_the_rate() {
        assert_eq!(TickClock::new(10).interval(), Duration::from_millis(100));
        assert_eq!(TickClock::new(4).interval(), Duration::from_millis(250));
    }

    #[test]
    fn wait_paces_successive_ticks() {
        let start = std::time::Instant::now();
        let mut clock = TickClock::new(100);

        clock.wait();
        clock.wait();

        // Two waits from a fresh clock span at least two full intervals.
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
