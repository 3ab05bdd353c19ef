use std::time::Duration;

/// Elapsed-time counter shown during an exam.
///
/// The counter does not own a clock: the caller feeds it the wall time that
/// went by with [`ExamTimer::advance`] and it counts whole seconds. Seconds
/// that pass while paused are dropped, the same way an interval callback
/// that skips its increment would.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExamTimer {
    elapsed_seconds: u64,
    running: bool,
    paused: bool,
    carry: Duration,
}

impl ExamTimer {
    /// Restarts from zero, unpaused.
    pub fn start(&mut self) {
        *self = Self {
            running: true,
            ..Self::default()
        };
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Feeds `dt` of wall time and returns how many seconds were counted.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        if !self.running {
            return 0;
        }
        self.carry += dt;
        let whole = self.carry.as_secs();
        self.carry -= Duration::from_secs(whole);
        if self.paused {
            return 0;
        }
        self.elapsed_seconds += whole;
        whole
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `mm:ss`
    pub fn label(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.elapsed_seconds / 60,
            self.elapsed_seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_whole_seconds_only() {
        let mut timer = ExamTimer::default();
        timer.start();
        assert_eq!(timer.advance(Duration::from_millis(600)), 0);
        assert_eq!(timer.advance(Duration::from_millis(600)), 1);
        assert_eq!(timer.advance(Duration::from_millis(2_900)), 3);
        assert_eq!(timer.elapsed_seconds(), 4);
    }

    #[test]
    fn idle_timer_ignores_ticks() {
        let mut timer = ExamTimer::default();
        assert_eq!(timer.advance(Duration::from_secs(5)), 0);
        assert_eq!(timer.elapsed_seconds(), 0);
    }

    #[test]
    fn paused_seconds_are_dropped() {
        let mut timer = ExamTimer::default();
        timer.start();
        timer.advance(Duration::from_secs(2));
        timer.toggle_pause();
        timer.advance(Duration::from_secs(10));
        timer.toggle_pause();
        timer.advance(Duration::from_secs(1));
        assert_eq!(timer.elapsed_seconds(), 3);
    }

    #[test]
    fn stop_freezes_and_reset_zeroes() {
        let mut timer = ExamTimer::default();
        timer.start();
        timer.advance(Duration::from_secs(65));
        timer.stop();
        timer.advance(Duration::from_secs(30));
        assert_eq!(timer.label(), "01:05");
        assert!(!timer.is_running());

        timer.reset();
        assert_eq!(timer.label(), "00:00");
    }

    #[test]
    fn start_clears_previous_run_and_pause() {
        let mut timer = ExamTimer::default();
        timer.start();
        timer.advance(Duration::from_secs(9));
        timer.toggle_pause();
        timer.start();
        assert_eq!(timer.elapsed_seconds(), 0);
        assert!(!timer.is_paused());
        assert!(timer.is_running());
    }
}
