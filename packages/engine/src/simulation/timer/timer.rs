/// Most ticks one `advance` call may release. A tab that was hidden for a
/// minute resumes with a few spawns instead of a burst of hundreds.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

/// Frame-driven interval timer for hosts without `setInterval`.
///
/// Accumulates elapsed milliseconds and reports how many whole intervals
/// passed. Once cancelled it never fires again.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnTimer {
    interval_ms: f64,
    accumulated_ms: f64,
    running: bool,
    cancelled: bool,
}

impl SpawnTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1) as f64,
            accumulated_ms: 0.0,
            running: false,
            cancelled: false,
        }
    }

    /// Arm the timer. Has no effect after cancellation.
    pub fn start(&mut self, interval_ms: u32) {
        if self.cancelled {
            return;
        }
        self.interval_ms = interval_ms.max(1) as f64;
        self.accumulated_ms = 0.0;
        self.running = true;
    }

    /// Number of ticks due after `dt_ms` more milliseconds
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !self.running || !(dt_ms > 0.0) || !dt_ms.is_finite() {
            return 0;
        }
        self.accumulated_ms += dt_ms;
        let due = (self.accumulated_ms / self.interval_ms).floor();
        self.accumulated_ms -= due * self.interval_ms;

        if due > MAX_CATCH_UP_TICKS as f64 {
            self.accumulated_ms = 0.0;
            MAX_CATCH_UP_TICKS
        } else {
            due as u32
        }
    }

    pub fn cancel(&mut self) {
        self.running = false;
        self.cancelled = true;
        self.accumulated_ms = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut timer = SpawnTimer::new(100);
        assert_eq!(timer.advance(500.0), 0, "not started yet");

        timer.start(100);
        assert_eq!(timer.advance(16.0), 0);
        assert_eq!(timer.advance(84.0), 1);
        assert_eq!(timer.advance(250.0), 2);
        assert_eq!(timer.advance(50.0), 1);
    }

    #[test]
    fn long_pause_is_capped() {
        let mut timer = SpawnTimer::new(100);
        timer.start(100);
        assert_eq!(timer.advance(60_000.0), MAX_CATCH_UP_TICKS);
        assert_eq!(timer.advance(99.0), 0);
    }

    #[test]
    fn cancelled_timer_stays_silent() {
        let mut timer = SpawnTimer::new(100);
        timer.start(100);
        timer.cancel();
        assert_eq!(timer.advance(1_000.0), 0);
        timer.start(100);
        assert!(!timer.is_running());
        assert_eq!(timer.advance(1_000.0), 0);
    }
}
