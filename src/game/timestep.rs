use std::time::{Duration, Instant};

/// Accumulator-driven fixed timestep.
///
/// Each frame adds the real time elapsed since the previous frame to `lag`
/// and pays it back in whole `period` steps, so simulated time tracks wall
/// clock time no matter how fast frames are drawn.
#[derive(Debug)]
pub struct FixedTimestep {
    period: Duration,
    lag: Duration,
    previous: Instant,
}

impl FixedTimestep {
    pub fn new(period: Duration, now: Instant) -> Self {
        assert!(!period.is_zero(), "timestep period must be non-zero");
        Self {
            period,
            lag: Duration::ZERO,
            previous: now,
        }
    }

    pub fn from_rate(rate_hz: u32, now: Instant) -> Self {
        Self::new(Duration::from_secs(1) / rate_hz.max(1), now)
    }

    pub fn lag(&self) -> Duration {
        self.lag
    }

    /// Number of simulation updates owed at `now`.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.previous);
        self.previous = now;
        self.accumulate(elapsed)
    }

    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.lag += elapsed;

        let mut steps = 0;
        while self.lag >= self.period {
            self.lag -= self.period;
            steps += 1;
        }
        steps
    }
}
