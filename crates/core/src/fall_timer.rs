//! Fall timer - gates the automatic one-cell descent.
//!
//! Timestamps are milliseconds on the driver's clock. The interval is fixed
//! for the whole game.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallTimer {
    interval_ms: u32,
    last_fall_ms: u64,
}

impl FallTimer {
    pub fn new(interval_ms: u32, now_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fall_ms: now_ms,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn last_fall_ms(&self) -> u64 {
        self.last_fall_ms
    }

    /// Strictly more than one interval has passed since the last fall.
    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_fall_ms) > self.interval_ms as u64
    }

    /// Move the baseline to `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.last_fall_ms = now_ms;
    }

    /// Time left until the timer is due, zero when already due.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        (self.last_fall_ms + self.interval_ms as u64 + 1).saturating_sub(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_only_strictly_after_interval() {
        let timer = FallTimer::new(500, 1000);
        assert!(!timer.is_due(1000));
        assert!(!timer.is_due(1500));
        assert!(timer.is_due(1501));
    }

    #[test]
    fn reset_moves_baseline() {
        let mut timer = FallTimer::new(500, 0);
        assert!(timer.is_due(600));
        timer.reset(600);
        assert!(!timer.is_due(1100));
        assert!(timer.is_due(1101));
    }

    #[test]
    fn clock_going_backwards_is_not_due() {
        let timer = FallTimer::new(500, 2000);
        assert!(!timer.is_due(10));
    }

    #[test]
    fn remaining_counts_down() {
        let timer = FallTimer::new(500, 0);
        assert_eq!(timer.remaining_ms(0), 501);
        assert_eq!(timer.remaining_ms(500), 1);
        assert_eq!(timer.remaining_ms(501), 0);
    }
}
