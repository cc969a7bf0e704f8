//! SI byte-size formatting and parsing for tabla.
//!
//! Sizes are shown the way the table renders them: plain bytes below 1000,
//! one decimal with an SI prefix (`kMGTPE`, powers of 1000) above. The parser
//! is the inverse used by the size-column sort so formatted strings compare
//! numerically instead of lexically.

use thiserror::Error;

// Decimal SI prefixes, index 0 = kilo.
const SI_PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

// Scale lookup for parsing; index is the power of 1000.
const SCALE_CHARS: [char; 7] = ['B', 'k', 'M', 'G', 'T', 'P', 'E'];

// Values at or above this would round to "1000.0" at one decimal, so the
// next prefix is used instead. 999_949 stays "999.9 kB", 999_950 is "1.0 MB".
const ROLLOVER: f64 = 999_950.0;

/// Error produced when a size string cannot be parsed back into bytes.
#[derive(Debug, Error, PartialEq)]
pub enum SizeParseError {
    #[error("malformed size string: '{0}'")]
    Malformed(String),
    #[error("invalid number in size string: '{0}'")]
    BadNumber(String),
    #[error("unknown size unit '{unit}' in '{input}'")]
    UnknownUnit { input: String, unit: char },
}

/// Formats a byte count into a human-readable SI string.
///
/// Counts in `-1000..1000` are printed as-is with a `B` suffix, including
/// zero and negative sentinel values. Anything larger is scaled down by
/// powers of 1000 and printed with one decimal and the matching prefix,
/// e.g. `1234` -> `"1.2 kB"`, `999950` -> `"1.0 MB"`. Counts beyond the `E`
/// range are clamped to the `E` prefix.
pub fn format_si(n: i64) -> String {
    if n > -1000 && n < 1000 {
        return format!("{} B", n);
    }

    let mut value = n as f64;
    let mut prefix = 0usize;
    while (value <= -ROLLOVER || value >= ROLLOVER) && prefix + 1 < SI_PREFIXES.len() {
        value /= 1000.0;
        prefix += 1;
    }

    format!("{:.1} {}B", value / 1000.0, SI_PREFIXES[prefix])
}

/// Parses a string produced by [format_si] back into a byte count.
///
/// Splits on whitespace into number and unit; a unit starting with `B` is
/// plain bytes, otherwise the unit's first character selects the power of
/// 1000. Only as precise as the one-decimal rounding of [format_si], so the
/// result is a float, not an integer.
pub fn parse_si(s: &str) -> Result<f64, SizeParseError> {
    let mut parts = s.split_whitespace();
    let (Some(number), Some(unit)) = (parts.next(), parts.next()) else {
        return Err(SizeParseError::Malformed(s.to_string()));
    };

    let value: f64 = number
        .parse()
        .map_err(|_| SizeParseError::BadNumber(s.to_string()))?;

    let scale = if unit.starts_with('B') {
        0
    } else {
        let first = match unit.chars().next() {
            Some(c) => c,
            None => return Err(SizeParseError::Malformed(s.to_string())),
        };
        match SCALE_CHARS.iter().position(|&c| c == first) {
            Some(idx) => idx,
            None => {
                return Err(SizeParseError::UnknownUnit {
                    input: s.to_string(),
                    unit: first,
                });
            }
        }
    };

    Ok(value * 1000f64.powi(scale as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_bytes_below_one_thousand() {
        for n in [-999, -1, 0, 1, 42, 999] {
            assert_eq!(format_si(n), format!("{} B", n));
        }
    }

    #[test]
    fn kilo_range() {
        assert_eq!(format_si(1000), "1.0 kB");
        assert_eq!(format_si(1234), "1.2 kB");
        assert_eq!(format_si(-1234), "-1.2 kB");
        assert_eq!(format_si(12_345), "12.3 kB");
    }

    #[test]
    fn rollover_boundary() {
        assert_eq!(format_si(999_949), "999.9 kB");
        assert_eq!(format_si(999_950), "1.0 MB");
        assert_eq!(format_si(-999_949), "-999.9 kB");
        assert_eq!(format_si(-999_950), "-1.0 MB");
    }

    #[test]
    fn higher_prefixes() {
        assert_eq!(format_si(1_000_000_000), "1.0 GB");
        assert_eq!(format_si(1_500_000_000_000), "1.5 TB");
        assert_eq!(format_si(i64::MAX), "9.2 EB");
        assert_eq!(format_si(i64::MIN), "-9.2 EB");
    }

    #[test]
    fn mantissa_never_reaches_one_thousand() {
        for n in [
            999_949i64,
            999_950,
            999_999_949,
            999_999_950,
            999_999_999_949,
            i64::MAX,
        ] {
            let s = format_si(n);
            let mantissa: f64 = s.split_whitespace().next().unwrap().parse().unwrap();
            assert!(
                mantissa.abs() < 1000.0,
                "format_si({}) = '{}' has mantissa >= 1000",
                n,
                s
            );
        }
    }

    #[test]
    fn parse_plain_and_prefixed() {
        assert_eq!(parse_si("0 B").unwrap(), 0.0);
        assert_eq!(parse_si("999 B").unwrap(), 999.0);
        assert_eq!(parse_si("-12 B").unwrap(), -12.0);
        assert_eq!(parse_si("1.2 kB").unwrap(), 1200.0);
        assert_eq!(parse_si("1.0 MB").unwrap(), 1_000_000.0);
        assert_eq!(parse_si("9.2 EB").unwrap(), 9.2e18);
    }

    #[test]
    fn round_trip_within_rounding_tolerance() {
        for n in [
            1000i64,
            1234,
            999_949,
            999_950,
            123_456_789,
            987_654_321_000,
            i64::MAX,
        ] {
            let parsed = parse_si(&format_si(n)).unwrap();
            let tolerance = (n as f64).abs() / 10.0;
            assert!(
                (parsed - n as f64).abs() <= tolerance,
                "round trip of {} drifted to {}",
                n,
                parsed
            );
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_si("nonsense"),
            Err(SizeParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_si("abc kB"),
            Err(SizeParseError::BadNumber(_))
        ));
        assert!(matches!(
            parse_si("1.0 xB"),
            Err(SizeParseError::UnknownUnit { unit: 'x', .. })
        ));
        assert!(matches!(parse_si(""), Err(SizeParseError::Malformed(_))));
    }
}
