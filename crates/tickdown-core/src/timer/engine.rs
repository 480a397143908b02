//! Countdown engine implementation.
//!
//! The engine is a tick-driven state machine. It does not use internal
//! threads or read the wall clock - the caller delivers `tick()` once per
//! elapsed second while the countdown is running.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> (tick to 0) -> Finished
//! ```
//!
//! `reset()` returns to `Idle` from any state. `start()` while already
//! `Running` or `Paused` is a no-op.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CountdownEngine::new();
//! engine.start(600);
//! // Once per second:
//! engine.tick(); // Returns Some(Event) describing the new display state
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::display::{format_hms, tier_for, ColorTier};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Core countdown engine.
///
/// Single-owner, no interior mutability: the host shell owns one instance
/// per window and drives it from the UI event thread.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    state: CountdownState,
    /// Duration armed by the last `start()`, in seconds.
    original_secs: u64,
    /// Seconds left; decremented by exactly 1 per delivered tick.
    remaining_secs: u64,
}

impl CountdownEngine {
    /// Create a new engine in the `Idle` state with a zero display.
    pub fn new() -> Self {
        Self {
            state: CountdownState::Idle,
            original_secs: 0,
            remaining_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn original_secs(&self) -> u64 {
        self.original_secs
    }

    /// Formatted `HH:MM:SS` for the current remaining time.
    pub fn display(&self) -> String {
        format_hms(self.remaining_secs)
    }

    /// Fraction of the countdown still remaining, 0.0 when nothing is armed.
    pub fn progress(&self) -> f64 {
        if self.original_secs == 0 {
            return 0.0;
        }
        self.remaining_secs as f64 / self.original_secs as f64
    }

    /// Color tier for the display, `None` when the neutral color applies
    /// (`Idle` and `Finished`).
    pub fn tier(&self) -> Option<ColorTier> {
        match self.state {
            CountdownState::Running | CountdownState::Paused => {
                Some(tier_for(self.remaining_secs, self.original_secs))
            }
            CountdownState::Idle | CountdownState::Finished => None,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            original_secs: self.original_secs,
            display: self.display(),
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────
    //
    // Commands return `None` for invalid transitions; callers treat that
    // as a no-op rather than an error.

    /// Arm and start a countdown of `duration_secs` seconds.
    ///
    /// Valid only in `Idle` and `Finished`; a zero duration is ignored.
    /// On success the host must arm its 1-second tick source and disable
    /// the duration input.
    pub fn start(&mut self, duration_secs: u64) -> Option<Event> {
        match self.state {
            CountdownState::Idle | CountdownState::Finished => {
                if duration_secs == 0 {
                    return None;
                }
                self.original_secs = duration_secs;
                self.remaining_secs = duration_secs;
                self.state = CountdownState::Running;
                Some(Event::Started {
                    duration_secs,
                    at: Utc::now(),
                })
            }
            // Must reset or finish before re-arming.
            CountdownState::Running | CountdownState::Paused => None,
        }
    }

    /// Suspend the countdown. The host must disarm its tick source before
    /// this call returns control to the event loop.
    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            CountdownState::Running => {
                self.state = CountdownState::Paused;
                Some(Event::Paused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Resume a paused countdown without touching the counters.
    pub fn resume(&mut self) -> Option<Event> {
        match self.state {
            CountdownState::Paused => {
                self.state = CountdownState::Running;
                Some(Event::Resumed {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Return to `Idle` with a zero display. Valid in any state.
    pub fn reset(&mut self) -> Option<Event> {
        self.state = CountdownState::Idle;
        self.original_secs = 0;
        self.remaining_secs = 0;
        Some(Event::Reset {
            display: self.display(),
            at: Utc::now(),
        })
    }

    /// Deliver one elapsed second. Only meaningful while `Running`;
    /// a stray tick in any other state is ignored.
    ///
    /// Returns `Some(Event::Finished)` on the tick that reaches zero,
    /// `Some(Event::Ticked)` otherwise.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != CountdownState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = CountdownState::Finished;
            return Some(Event::Finished {
                display: self.display(),
                at: Utc::now(),
            });
        }
        Some(Event::Ticked {
            remaining_secs: self.remaining_secs,
            display: self.display(),
            tier: tier_for(self.remaining_secs, self.original_secs),
            progress: self.progress(),
            at: Utc::now(),
        })
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pause_resume() {
        let mut engine = CountdownEngine::new();
        assert_eq!(engine.state(), CountdownState::Idle);

        assert!(engine.start(60).is_some());
        assert_eq!(engine.state(), CountdownState::Running);

        assert!(engine.pause().is_some());
        assert_eq!(engine.state(), CountdownState::Paused);

        assert!(engine.resume().is_some());
        assert_eq!(engine.state(), CountdownState::Running);
    }

    #[test]
    fn start_with_zero_duration_is_noop() {
        let mut engine = CountdownEngine::new();
        assert!(engine.start(0).is_none());
        assert_eq!(engine.state(), CountdownState::Idle);
        assert_eq!(engine.remaining_secs(), 0);
    }

    #[test]
    fn start_while_running_or_paused_is_noop() {
        let mut engine = CountdownEngine::new();
        engine.start(10);
        assert!(engine.start(99).is_none());
        assert_eq!(engine.original_secs(), 10);

        engine.pause();
        assert!(engine.start(99).is_none());
        assert_eq!(engine.state(), CountdownState::Paused);
    }

    #[test]
    fn tick_runs_down_to_finished() {
        let mut engine = CountdownEngine::new();
        engine.start(3);
        assert!(matches!(engine.tick(), Some(Event::Ticked { .. })));
        assert!(matches!(engine.tick(), Some(Event::Ticked { .. })));
        assert!(matches!(engine.tick(), Some(Event::Finished { .. })));
        assert_eq!(engine.state(), CountdownState::Finished);
        assert_eq!(engine.remaining_secs(), 0);
        assert_eq!(engine.tier(), None);
    }

    #[test]
    fn tick_outside_running_is_ignored() {
        let mut engine = CountdownEngine::new();
        assert!(engine.tick().is_none());

        engine.start(10);
        engine.pause();
        let held = engine.remaining_secs();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), held);
    }

    #[test]
    fn reset_from_any_state_goes_idle() {
        let mut engine = CountdownEngine::new();
        engine.start(30);
        engine.tick();
        engine.reset();
        assert_eq!(engine.state(), CountdownState::Idle);
        assert_eq!(engine.remaining_secs(), 0);
        assert_eq!(engine.display(), "00:00:00");

        engine.start(1);
        engine.tick(); // Finished
        engine.reset();
        assert_eq!(engine.state(), CountdownState::Idle);
    }

    #[test]
    fn restart_after_finish() {
        let mut engine = CountdownEngine::new();
        engine.start(1);
        engine.tick();
        assert_eq!(engine.state(), CountdownState::Finished);

        assert!(engine.start(5).is_some());
        assert_eq!(engine.state(), CountdownState::Running);
        assert_eq!(engine.remaining_secs(), 5);
        assert_eq!(engine.original_secs(), 5);
    }

    #[test]
    fn freshly_started_huge_countdown_is_safe() {
        let mut engine = CountdownEngine::new();
        engine.start(u64::MAX);
        assert_eq!(engine.tier(), Some(ColorTier::Safe));
        engine.tick();
        assert_eq!(engine.tier(), Some(ColorTier::Safe));
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let engine = CountdownEngine::new();
        match engine.snapshot() {
            Event::StateSnapshot {
                state,
                remaining_secs,
                display,
                progress,
                ..
            } => {
                assert_eq!(state, CountdownState::Idle);
                assert_eq!(remaining_secs, 0);
                assert_eq!(display, "00:00:00");
                assert_eq!(progress, 0.0);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
