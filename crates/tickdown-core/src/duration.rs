//! Duration-string parsing for the CLI and desktop flags.
//!
//! Accepted forms:
//!
//! - `HH:MM:SS` / `MM:SS` colon notation (trailing fields must be < 60,
//!   the leading field is unbounded)
//! - bare seconds: `90`
//! - unit-suffixed: `1h30m`, `25m`, `90s` (units may be combined in
//!   h, m, s order; each number needs a unit)

use thiserror::Error;

/// Errors produced while parsing a duration string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("invalid duration '{input}': expected HH:MM:SS, MM:SS, seconds, or a form like 1h30m")]
    Invalid { input: String },

    #[error("{field} out of range in '{input}': must be less than 60")]
    FieldOutOfRange { input: String, field: &'static str },

    #[error("unknown unit '{unit}' in '{input}': expected h, m, or s")]
    UnknownUnit { input: String, unit: char },

    #[error("duration '{input}' is too large")]
    TooLarge { input: String },
}

/// Parse a duration string into whole seconds.
pub fn parse_duration(input: &str) -> Result<u64, DurationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DurationError::Empty);
    }
    if s.contains(':') {
        parse_colon(s)
    } else if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().map_err(|_| DurationError::TooLarge {
            input: s.to_string(),
        })
    } else {
        parse_suffixed(s)
    }
}

fn parse_field(input: &str, part: &str) -> Result<u64, DurationError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DurationError::Invalid {
            input: input.to_string(),
        });
    }
    part.parse().map_err(|_| DurationError::TooLarge {
        input: input.to_string(),
    })
}

fn parse_colon(input: &str) -> Result<u64, DurationError> {
    let parts: Vec<&str> = input.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (
            parse_field(input, h)?,
            parse_field(input, m)?,
            parse_field(input, s)?,
        ),
        [m, s] => (0, parse_field(input, m)?, parse_field(input, s)?),
        _ => {
            return Err(DurationError::Invalid {
                input: input.to_string(),
            })
        }
    };
    // Only the leading field is unbounded.
    if parts.len() == 3 && minutes > 59 {
        return Err(DurationError::FieldOutOfRange {
            input: input.to_string(),
            field: "minutes",
        });
    }
    if seconds > 59 {
        return Err(DurationError::FieldOutOfRange {
            input: input.to_string(),
            field: "seconds",
        });
    }
    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| DurationError::TooLarge {
            input: input.to_string(),
        })
}

fn parse_suffixed(input: &str) -> Result<u64, DurationError> {
    let mut total: u64 = 0;
    let mut number = String::new();
    for c in input.chars() {
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }
        if number.is_empty() {
            return Err(DurationError::Invalid {
                input: input.to_string(),
            });
        }
        let value: u64 = number.parse().map_err(|_| DurationError::TooLarge {
            input: input.to_string(),
        })?;
        number.clear();
        let scale = match c {
            'h' | 'H' => 3600,
            'm' | 'M' => 60,
            's' | 'S' => 1,
            other => {
                return Err(DurationError::UnknownUnit {
                    input: input.to_string(),
                    unit: other,
                })
            }
        };
        total = value
            .checked_mul(scale)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(|| DurationError::TooLarge {
                input: input.to_string(),
            })?;
    }
    if !number.is_empty() {
        // Trailing number without a unit, e.g. "1h30".
        return Err(DurationError::Invalid {
            input: input.to_string(),
        });
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_colon_forms() {
        assert_eq!(parse_duration("01:01:01"), Ok(3661));
        assert_eq!(parse_duration("00:00:59"), Ok(59));
        assert_eq!(parse_duration("10:00"), Ok(600));
        assert_eq!(parse_duration("100:00:00"), Ok(360_000));
    }

    #[test]
    fn parses_bare_seconds() {
        assert_eq!(parse_duration("90"), Ok(90));
        assert_eq!(parse_duration("0"), Ok(0));
    }

    #[test]
    fn parses_suffixed_forms() {
        assert_eq!(parse_duration("1h30m"), Ok(5400));
        assert_eq!(parse_duration("25m"), Ok(1500));
        assert_eq!(parse_duration("90s"), Ok(90));
        assert_eq!(parse_duration("1h1m1s"), Ok(3661));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            parse_duration("00:61:00"),
            Err(DurationError::FieldOutOfRange {
                input: "00:61:00".into(),
                field: "minutes",
            })
        );
        assert_eq!(
            parse_duration("00:00:60"),
            Err(DurationError::FieldOutOfRange {
                input: "00:00:60".into(),
                field: "seconds",
            })
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(parse_duration("   "), Err(DurationError::Empty));
        assert!(matches!(
            parse_duration("1:2:3:4"),
            Err(DurationError::Invalid { .. })
        ));
        assert!(matches!(
            parse_duration("abc"),
            Err(DurationError::Invalid { .. })
        ));
        assert!(matches!(
            parse_duration("1h30"),
            Err(DurationError::Invalid { .. })
        ));
        assert!(matches!(
            parse_duration("10x"),
            Err(DurationError::UnknownUnit { unit: 'x', .. })
        ));
    }

    #[test]
    fn rejects_overflow() {
        assert!(matches!(
            parse_duration("99999999999999999999"),
            Err(DurationError::TooLarge { .. })
        ));
        assert!(matches!(
            parse_duration("9999999999999999999h"),
            Err(DurationError::TooLarge { .. })
        ));
        // An unbounded leading minutes field must not wrap when scaled.
        assert!(matches!(
            parse_duration("400000000000000000:00"),
            Err(DurationError::TooLarge { .. })
        ));
        assert!(matches!(
            parse_duration("9999999999999999999:00:00"),
            Err(DurationError::TooLarge { .. })
        ));
    }
}
