use crate::core::random;
use crate::domain::model::{DriverState, TickReport, PROGRESS_MAX};
use crate::domain::ports::RandomSource;
use crate::utils::error::Result;

/// Progress state machine.
///
/// Owns the only mutable progress cell in the crate. The value stays in
/// `[0, 100]`: each tick adds a random step from the configured range and a
/// sum reaching 100 clamps there and stops the machine. Scheduling lives in
/// `engine`; this type is synchronous and fully deterministic given its
/// randomness source.
#[derive(Debug)]
pub struct ProgressDriver {
    progress: u8,
    state: DriverState,
    step_min: u32,
    step_max: u32,
}

impl ProgressDriver {
    pub fn new(step_min: u32, step_max: u32) -> Self {
        Self {
            progress: 0,
            state: DriverState::Idle,
            step_min,
            step_max,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Reset to 0 and enter `Running`. Valid from any state; restarting
    /// mid-run simply discards the old run.
    pub fn begin(&mut self) -> TickReport {
        self.progress = 0;
        self.state = DriverState::Running;
        self.report()
    }

    /// Advance by one random step. Outside `Running` this is a no-op and
    /// draws nothing from `rng`.
    pub fn tick<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<TickReport> {
        if self.state != DriverState::Running {
            return Ok(self.report());
        }

        let step = random::in_range(rng, self.step_min, self.step_max)?;
        let next = u32::from(self.progress) + step;

        if next >= u32::from(PROGRESS_MAX) {
            self.progress = PROGRESS_MAX;
            self.state = DriverState::Complete;
        } else {
            self.progress = next as u8;
        }

        Ok(self.report())
    }

    /// Stop ticking without touching the fill level.
    pub fn cancel(&mut self) -> TickReport {
        if self.state == DriverState::Running {
            self.state = DriverState::Idle;
        }
        self.report()
    }

    /// Back to the initial state: progress 0, not running.
    pub fn reset(&mut self) -> TickReport {
        self.progress = 0;
        self.state = DriverState::Idle;
        self.report()
    }

    fn report(&self) -> TickReport {
        TickReport {
            progress: self.progress,
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed step and counts how often it was consulted.
    struct CountingSource {
        step: u32,
        draws: usize,
    }

    impl CountingSource {
        fn new(step: u32) -> Self {
            Self { step, draws: 0 }
        }
    }

    impl RandomSource for CountingSource {
        fn next_in_range(&mut self, _min: u32, _max: u32) -> u32 {
            self.draws += 1;
            self.step
        }
    }

    #[test]
    fn test_new_driver_is_idle_at_zero() {
        let driver = ProgressDriver::new(1, 5);
        assert_eq!(driver.progress(), 0);
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn test_twenty_max_steps_complete_exactly() {
        let mut driver = ProgressDriver::new(1, 5);
        let mut rng = CountingSource::new(5);

        driver.begin();
        for expected in 1..=20u32 {
            let report = driver.tick(&mut rng).unwrap();
            assert_eq!(u32::from(report.progress), (expected * 5).min(100));
        }

        assert_eq!(driver.progress(), 100);
        assert_eq!(driver.state(), DriverState::Complete);
        assert_eq!(rng.draws, 20);

        // Further ticks are no-ops and draw nothing.
        let report = driver.tick(&mut rng).unwrap();
        assert_eq!(report.progress, 100);
        assert_eq!(report.state, DriverState::Complete);
        assert_eq!(rng.draws, 20);
    }

    #[test]
    fn test_overshoot_clamps_to_one_hundred() {
        let mut driver = ProgressDriver::new(1, 5);
        let mut rng = CountingSource::new(3);

        driver.begin();
        // 33 ticks of 3 put the driver at 99.
        for _ in 0..33 {
            driver.tick(&mut rng).unwrap();
        }
        assert_eq!(driver.progress(), 99);
        assert_eq!(driver.state(), DriverState::Running);

        let report = driver.tick(&mut rng).unwrap();
        assert_eq!(report.progress, 100);
        assert_eq!(report.state, DriverState::Complete);
    }

    #[test]
    fn test_cancel_keeps_progress() {
        let mut driver = ProgressDriver::new(1, 5);
        let mut rng = CountingSource::new(4);

        driver.begin();
        driver.tick(&mut rng).unwrap();
        driver.tick(&mut rng).unwrap();
        assert_eq!(driver.progress(), 8);

        let report = driver.cancel();
        assert_eq!(report.state, DriverState::Idle);
        assert_eq!(report.progress, 8);

        // Idle ticks change nothing.
        driver.tick(&mut rng).unwrap();
        assert_eq!(driver.progress(), 8);
        assert_eq!(rng.draws, 2);
    }

    #[test]
    fn test_cancel_outside_running_is_a_no_op() {
        let mut driver = ProgressDriver::new(1, 5);
        assert_eq!(driver.cancel().state, DriverState::Idle);

        let mut rng = CountingSource::new(100);
        driver.begin();
        driver.tick(&mut rng).unwrap();
        assert_eq!(driver.state(), DriverState::Complete);
        assert_eq!(driver.cancel().state, DriverState::Complete);
    }

    #[test]
    fn test_complete_holds_until_begin() {
        let mut driver = ProgressDriver::new(1, 5);
        let mut rng = CountingSource::new(100);

        driver.begin();
        driver.tick(&mut rng).unwrap();
        assert_eq!(driver.progress(), 100);

        for _ in 0..10 {
            driver.tick(&mut rng).unwrap();
            assert_eq!(driver.progress(), 100);
        }

        let report = driver.begin();
        assert_eq!(report.progress, 0);
        assert_eq!(report.state, DriverState::Running);
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut driver = ProgressDriver::new(1, 5);
        let mut rng = CountingSource::new(5);

        driver.begin();
        driver.tick(&mut rng).unwrap();
        driver.cancel();

        let report = driver.reset();
        assert_eq!(report.progress, 0);
        assert_eq!(report.state, DriverState::Idle);
    }
}
