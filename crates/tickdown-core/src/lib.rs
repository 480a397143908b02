//! # Tickdown Core Library
//!
//! This library provides the core logic for the Tickdown desktop countdown
//! widget. The desktop shell and the CLI are thin layers over the same core:
//! all counting, display derivation and duration parsing live here.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: A tick-driven state machine that requires the
//!   caller to deliver `tick()` once per elapsed second while running
//! - **Display**: `HH:MM:SS` formatting and color-tier derivation from the
//!   remaining fraction
//! - **Duration parsing**: `HH:MM:SS`, `MM:SS`, bare seconds and
//!   unit-suffixed forms (`1h30m`, `25m`, `90s`)
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: Core countdown state machine
//! - [`Event`]: State-change events consumed by the shells
//! - [`parse_duration`]: Duration-string parsing for CLI and flags

pub mod duration;
pub mod error;
pub mod events;
pub mod timer;

pub use duration::{parse_duration, DurationError};
pub use error::{CoreError, Result};
pub use events::Event;
pub use timer::{format_hms, CountdownEngine, CountdownState, ColorTier};
