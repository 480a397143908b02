use serde::{Deserialize, Serialize};

/// Color tier for the time display, selected from the remaining fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    /// More than half the countdown remains.
    Safe,
    /// Between 20% and 50% remains.
    Warning,
    /// 20% or less remains.
    Critical,
}

/// Format a second count as zero-padded `HH:MM:SS`.
///
/// The hours field widens past two digits instead of capping, so very long
/// countdowns still render losslessly.
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Select the color tier for `remaining_secs` out of `original_secs`.
///
/// Boundaries are exact: strictly more than 1/2 remaining is `Safe`,
/// strictly more than 1/5 is `Warning`, everything else `Critical`.
/// Integer arithmetic avoids float rounding at the tier edges; the
/// comparisons are widened to u128 so scaling cannot overflow.
pub fn tier_for(remaining_secs: u64, original_secs: u64) -> ColorTier {
    let remaining = u128::from(remaining_secs);
    let original = u128::from(original_secs);
    if remaining * 2 > original {
        ColorTier::Safe
    } else if remaining * 5 > original {
        ColorTier::Warning
    } else {
        ColorTier::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded_fields() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(3600), "01:00:00");
        assert_eq!(format_hms(3661), "01:01:01");
    }

    #[test]
    fn hours_field_widens_past_two_digits() {
        assert_eq!(format_hms(100 * 3600), "100:00:00");
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(tier_for(51, 100), ColorTier::Safe);
        assert_eq!(tier_for(50, 100), ColorTier::Warning);
        assert_eq!(tier_for(21, 100), ColorTier::Warning);
        assert_eq!(tier_for(20, 100), ColorTier::Critical);
        assert_eq!(tier_for(1, 100), ColorTier::Critical);
    }

    #[test]
    fn large_durations_do_not_overflow_tier_math() {
        assert_eq!(tier_for(u64::MAX, u64::MAX), ColorTier::Safe);
        assert_eq!(tier_for(u64::MAX / 2, u64::MAX), ColorTier::Warning);
        assert_eq!(tier_for(u64::MAX / 5, u64::MAX), ColorTier::Critical);
    }
}
