//! Formatting utilities for display values.

const MS_PER_DAY: u64 = 86_400_000;

/// UTC date of a millisecond Unix timestamp as `YYYY-MM-DD`.
pub fn format_date_iso(timestamp_ms: u64) -> String {
    let (year, month, day) = civil_from_days((timestamp_ms / MS_PER_DAY) as i64);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Gregorian (year, month, day) for a day count since 1970-01-01.
///
/// Counts in 400-year eras starting on 0000-03-01, so each leap day is the
/// last day of its year.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let shifted = days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    // 0 = March .. 11 = February
    let march_month = (5 * day_of_year + 2) / 153;

    let day = (day_of_year - (153 * march_month + 2) / 5 + 1) as u32;
    let month = (if march_month < 10 { march_month + 3 } else { march_month - 9 }) as u32;
    let year = era * 400 + year_of_era + i64::from(month <= 2);
    (year, month, day)
}
