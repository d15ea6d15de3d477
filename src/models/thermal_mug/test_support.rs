use std::cell::Cell;

use jiff::{SignedDuration, Timestamp};

use super::Clock;

/// A clock that only moves when told to.
#[derive(Debug)]
pub(super) struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    pub(super) fn new() -> Self {
        Self {
            now: Cell::new(Timestamp::UNIX_EPOCH),
        }
    }

    pub(super) fn advance_minutes(&self, minutes: f64) {
        let step = SignedDuration::from_secs_f64(minutes * 60.0);
        let next = self
            .now
            .get()
            .checked_add(step)
            .expect("manual clock overflowed");
        self.now.set(next);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
