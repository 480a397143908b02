mod display;
mod engine;

pub use display::{format_hms, tier_for, ColorTier};
pub use engine::{CountdownEngine, CountdownState};
