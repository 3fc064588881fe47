use std::time::Duration;


/// Whole-second countdown consumed one tick at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    time_elapsed: Duration,
    time_limit: Duration,
}

impl Countdown {
    pub const TICK: Duration = Duration::from_secs(1);

    pub fn new(duration: Duration) -> Self {
        Countdown {
            time_elapsed: Duration::default(),
            time_limit: duration,
        }
    }

    pub fn tick(&mut self) {
        self.time_elapsed += Self::TICK;
    }

    pub fn remaining_seconds(&self) -> u32 {
        let remaining = self
            .time_limit
            .checked_sub(self.time_elapsed)
            .unwrap_or_default();
        let seconds = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        seconds as u32
    }

    pub fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_limit
    }
}
