//! Clocks

use std::time::{Duration, Instant};

use super::Clock;

/// Real time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Virtual time that only advances when slept on
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Duration,
    sleeps: u32,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            sleeps: 0,
        }
    }

    /// Total virtual time slept
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of `sleep` calls
    pub fn sleeps(&self) -> u32 {
        self.sleeps
    }

    /// Move time forward without counting a sleep (simulates work)
    pub fn advance(&mut self, duration: Duration) {
        self.elapsed += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    fn sleep(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.sleeps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances_on_sleep() {
        let mut clock = ManualClock::new();
        let start = clock.now();
        clock.sleep(Duration::from_millis(8));
        clock.advance(Duration::from_millis(2));
        assert_eq!(clock.since(start), Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::from_millis(10));
        assert_eq!(clock.sleeps(), 1);
    }

    #[test]
    fn test_since_saturates() {
        let clock = ManualClock::new();
        let later = clock.now() + Duration::from_secs(1);
        assert_eq!(clock.since(later), Duration::ZERO);
    }
}
