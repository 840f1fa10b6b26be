//! Countdown timer.
//!
//! The countdown is the single source of truth for remaining time. It knows
//! nothing about wall-clock time: the caller issues one [`Countdown::tick`] per
//! interval. Bonuses and penalties are plain additions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining_seconds: i32,
    running: bool,
}

impl Countdown {
    pub fn new(starting_seconds: i32) -> Self {
        Self {
            remaining_seconds: starting_seconds,
            running: true,
        }
    }

    pub fn remaining_seconds(&self) -> i32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time has run out.
    pub fn is_expired(&self) -> bool {
        self.remaining_seconds <= 0
    }

    /// At or below the warning threshold
    pub fn is_critical(&self, critical_seconds: i32) -> bool {
        self.remaining_seconds <= critical_seconds
    }

    /// Count down one second. Returns `false` if the countdown is stopped.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_seconds -= 1;
        true
    }

    /// Apply a bonus (positive) or penalty (negative).
    pub fn add(&mut self, seconds: i32) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_add(seconds);
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_decrements_by_one() {
        let mut timer = Countdown::new(3);
        assert!(timer.tick());
        assert_eq!(timer.remaining_seconds(), 2);
        assert!(!timer.is_expired());
        timer.tick();
        timer.tick();
        assert!(timer.is_expired());
    }

    #[test]
    fn test_bonus_and_penalty() {
        let mut timer = Countdown::new(10);
        timer.add(5);
        assert_eq!(timer.remaining_seconds(), 15);
        timer.add(-20);
        assert_eq!(timer.remaining_seconds(), -5);
        assert!(timer.is_expired());
    }

    #[test]
    fn test_critical_threshold_is_inclusive() {
        let timer = Countdown::new(10);
        assert!(timer.is_critical(10));
        assert!(!timer.is_critical(9));
    }

    #[test]
    fn test_stopped_timer_ignores_changes() {
        let mut timer = Countdown::new(10);
        timer.stop();
        assert!(!timer.tick());
        assert!(!timer.add(5));
        assert_eq!(timer.remaining_seconds(), 10);
        assert!(!timer.is_running());
    }
}
