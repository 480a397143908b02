use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{ColorTier, CountdownState};

/// Every engine state change produces an Event.
/// The desktop shell logs them; the CLI prints them as JSON lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    Started {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    Paused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    Resumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// One-second decrement while running. Carries everything a renderer
    /// needs so hosts do not have to re-derive the display.
    Ticked {
        remaining_secs: u64,
        display: String,
        tier: ColorTier,
        progress: f64,
        at: DateTime<Utc>,
    },
    /// Final tick reached zero. Display reverts to the neutral color and
    /// the host re-enables its duration input.
    Finished {
        display: String,
        at: DateTime<Utc>,
    },
    Reset {
        display: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: CountdownState,
        remaining_secs: u64,
        original_secs: u64,
        display: String,
        progress: f64,
        at: DateTime<Utc>,
    },
}
