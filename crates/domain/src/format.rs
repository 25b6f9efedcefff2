//! Display formatting for values handed to metric cards.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::time::Timestamp;

/// Round to a whole number and group digits by thousands: `276431.4` → `"276,431"`.
#[must_use]
pub fn grouped_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fixed-point rendering with exactly `decimals` fractional digits.
#[must_use]
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Whole milliseconds, rounded half away from zero, suffixed with `" ms"`.
#[must_use]
pub fn milliseconds(value: f64) -> String {
    format!("{:.0} ms", value.round())
}

/// Twelve-hour time of day (`h:mm:ss AM/PM`) in the timestamp's own zone.
#[must_use]
pub fn time_of_day<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.format("%-I:%M:%S %p").to_string()
}

/// [`time_of_day`] in the viewer's local time zone.
#[must_use]
pub fn local_time_of_day(ts: Timestamp) -> String {
    time_of_day(&ts.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn should_group_six_digit_volume() {
        assert_eq!(grouped_thousands(276_431.0), "276,431");
    }

    #[test]
    fn should_not_group_short_numbers() {
        assert_eq!(grouped_thousands(0.0), "0");
        assert_eq!(grouped_thousands(999.0), "999");
    }

    #[test]
    fn should_group_millions() {
        assert_eq!(grouped_thousands(1_234_567.0), "1,234,567");
    }

    #[test]
    fn should_round_before_grouping() {
        assert_eq!(grouped_thousands(299_999.6), "300,000");
    }

    #[test]
    fn should_keep_sign_of_negative_numbers() {
        assert_eq!(grouped_thousands(-12_345.0), "-12,345");
    }

    #[test]
    fn should_render_four_decimals() {
        assert_eq!(fixed(1.05, 4), "1.0500");
        assert_eq!(fixed(1.073_456, 4), "1.0735");
    }

    #[test]
    fn should_render_latency_as_whole_milliseconds() {
        assert_eq!(milliseconds(187.2), "187 ms");
        assert_eq!(milliseconds(150.0), "150 ms");
    }

    #[test]
    fn should_round_latency_half_away_from_zero() {
        assert_eq!(milliseconds(186.5), "187 ms");
        assert_eq!(milliseconds(229.99), "230 ms");
    }

    #[test]
    fn should_format_afternoon_time_of_day() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap();
        assert_eq!(time_of_day(&ts), "3:04:05 PM");
    }

    #[test]
    fn should_format_midnight_as_twelve_am() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 7).unwrap();
        assert_eq!(time_of_day(&ts), "12:00:07 AM");
    }
}
