//! Formatting helpers for presenting capture statistics.

use time::{macros::format_description, OffsetDateTime};

const BYTE_UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
const MAX_FRACTION_DIGITS: usize = 100;

/// Human-readable binary byte count, e.g. `1536.0` -> `"1.5 KiB"`.
///
/// Zero always renders as `"0 B"` and non-finite input as `"0"`. The unit
/// saturates at PiB, and magnitudes below one byte stay in B.
pub fn format_bytes(bytes: f64, precision: Option<usize>) -> String {
    if bytes == 0.0 {
        return format!("0 {}", BYTE_UNITS[0]);
    }

    if !bytes.is_finite() {
        return "0".to_string();
    }

    let precision = precision.unwrap_or(1);
    // log2 / 10 == log_1024, and stays exact on powers of two.
    let exponent = (bytes.abs().log2() / 10.0).floor();
    let index = exponent.clamp(0.0, (BYTE_UNITS.len() - 1) as f64) as usize;
    let scaled = bytes / 1024f64.powi(index as i32);

    format!("{} {}", to_fixed(scaled, precision), BYTE_UNITS[index])
}

/// Fixed-point rendering that rounds exact ties away from zero.
///
/// Matches JavaScript's `toFixed`: `1.25` -> `"1.3"`, where `{:.1}` gives
/// `"1.2"`. Rounding works on the exact decimal expansion of `value`.
fn to_fixed(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_FRACTION_DIGITS);
    // Every finite f64 has at most 1074 fractional decimal digits.
    let exact = format!("{:.1074}", value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .collect();

    if fraction.as_bytes().get(precision).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(*d)));
    if precision > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(*d)));
    }
    out
}

pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(ch);
    }
    out
}

pub fn format_duration_ms(ms: f64) -> String {
    if !ms.is_finite() {
        return "—".to_string();
    }
    if ms < 1000.0 {
        format!("{ms:.1} ms")
    } else if ms < 60_000.0 {
        format!("{:.3} s", ms / 1000.0)
    } else {
        let total_secs = (ms / 1000.0).floor() as u64;
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{minutes} min {seconds:02} s")
    }
}

/// UTC wall-clock time for an epoch-milliseconds stamp.
pub fn format_timestamp_ms(epoch_ms: f64) -> String {
    if !epoch_ms.is_finite() {
        return "—".to_string();
    }

    let nanos = (epoch_ms * 1_000_000.0).round() as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|stamp| {
            stamp
                .format(&format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3] UTC"
                ))
                .ok()
        })
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_plain_bytes_for_any_precision() {
        assert_eq!(format_bytes(0.0, None), "0 B");
        assert_eq!(format_bytes(0.0, Some(3)), "0 B");
        assert_eq!(format_bytes(-0.0, Some(0)), "0 B");
    }

    #[test]
    fn non_finite_input_collapses_to_zero() {
        assert_eq!(format_bytes(f64::NAN, None), "0");
        assert_eq!(format_bytes(f64::INFINITY, None), "0");
        assert_eq!(format_bytes(f64::NEG_INFINITY, Some(2)), "0");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_bytes(1023.0, None), "1023.0 B");
        assert_eq!(format_bytes(1024.0, None), "1.0 KiB");
        assert_eq!(format_bytes(1536.0, Some(2)), "1.50 KiB");
        assert_eq!(format_bytes(1024.0 * 1024.0 * 1024.0, None), "1.0 GiB");
        assert_eq!(format_bytes(5.0 * 1024f64.powi(5), Some(0)), "5 PiB");
    }

    #[test]
    fn unit_saturates_at_pib() {
        assert_eq!(format_bytes(1024f64.powi(6), None), "1024.0 PiB");
        assert_eq!(format_bytes(1024f64.powi(7), Some(0)), "1048576 PiB");
    }

    #[test]
    fn fractions_and_negatives_stay_readable() {
        assert_eq!(format_bytes(0.5, None), "0.5 B");
        assert_eq!(format_bytes(-2048.0, None), "-2.0 KiB");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_bytes(1280.0, None), "1.3 KiB");
        assert_eq!(format_bytes(2560.0, Some(0)), "3 KiB");
        assert_eq!(format_bytes(1152.0, Some(2)), "1.13 KiB");
        assert_eq!(format_bytes(-1280.0, None), "-1.3 KiB");
    }

    #[test]
    fn rounding_carries_into_whole_part() {
        // 1023.96875 B is exact in binary; 9s carry all the way up.
        assert_eq!(format_bytes(1023.96875, Some(1)), "1024.0 B");
        assert_eq!(format_bytes(0.96875, Some(0)), "1 B");
    }

    #[test]
    fn near_ties_follow_the_stored_value() {
        // 1.15 is stored as 1.149999..., so it rounds down.
        assert_eq!(to_fixed(1.15, 1), "1.1");
        assert_eq!(to_fixed(1.35, 1), "1.4");
        assert_eq!(to_fixed(0.5, 3), "0.500");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1234), "1\u{202f}234");
        assert_eq!(format_count(1234567), "1\u{202f}234\u{202f}567");
    }

    #[test]
    fn durations_pick_a_sensible_unit() {
        assert_eq!(format_duration_ms(12.34), "12.3 ms");
        assert_eq!(format_duration_ms(2500.0), "2.500 s");
        assert_eq!(format_duration_ms(125_000.0), "2 min 05 s");
        assert_eq!(format_duration_ms(f64::NAN), "—");
    }

    #[test]
    fn timestamps_render_in_utc() {
        assert_eq!(
            format_timestamp_ms(1_500_000_000_123.0),
            "2017-07-14 02:40:00.123 UTC"
        );
    }
}
