//! Theme colors for the countdown widget.

use eframe::egui::Color32;

use tickdown_core::ColorTier;

/// Container background (dark slate).
pub const CONTAINER_BG: Color32 = Color32::from_rgb(40, 44, 52);
/// Hairline border around the container.
pub const CONTAINER_BORDER: Color32 = Color32::from_gray(70);

/// Neutral time display (idle / finished).
pub const TEXT_NEUTRAL: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_gray(150);

/// Tier colors for the running display.
pub const TIER_SAFE: Color32 = Color32::from_rgb(0, 200, 0);
pub const TIER_WARNING: Color32 = Color32::from_rgb(255, 165, 0);
pub const TIER_CRITICAL: Color32 = Color32::from_rgb(255, 50, 50);

/// Resolve the display color for a tier, neutral when `None`.
pub fn tier_color(tier: Option<ColorTier>) -> Color32 {
    match tier {
        Some(ColorTier::Safe) => TIER_SAFE,
        Some(ColorTier::Warning) => TIER_WARNING,
        Some(ColorTier::Critical) => TIER_CRITICAL,
        None => TEXT_NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_when_no_tier() {
        assert_eq!(tier_color(None), TEXT_NEUTRAL);
        assert_eq!(tier_color(Some(ColorTier::Critical)), TIER_CRITICAL);
    }
}
