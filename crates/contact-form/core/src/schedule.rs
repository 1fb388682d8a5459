// File: contact-form/core/src/schedule.rs
// Purpose: Time ports - deferred callbacks and wall-clock reads

use std::time::Duration;

use chrono::Utc;

/// Runs callbacks later on the UI thread. Nothing is cancellable: callbacks
/// still pending when the page goes away are never observed.
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>);
    fn schedule_repeating(&self, every: Duration, task: Box<dyn FnMut()>);
}

/// Wall-clock source
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
