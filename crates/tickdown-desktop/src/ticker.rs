//! Periodic 1-second tick source owned by the shell.
//!
//! The engine itself never reads the clock; this driver turns elapsed wall
//! time into discrete ticks on the UI thread. Armed on start/resume and
//! disarmed synchronously on pause/reset/finish, so no stray tick can
//! follow a transition out of `Running`.

use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
pub struct Ticker {
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { next_due: None }
    }

    /// Arm the source; the first tick is due one second from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + TICK);
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of whole seconds that became due since the last poll.
    ///
    /// A stalled frame (hidden or occluded window) yields the missed ticks
    /// in one batch, in order, never concurrently.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut ticks = 0;
        while due <= now {
            ticks += 1;
            due += TICK;
        }
        self.next_due = Some(due);
        ticks
    }

    /// Time until the next tick is due, for repaint scheduling.
    pub fn time_to_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
