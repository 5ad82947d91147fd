//! Hour-of-day resolution under the fixed business timezone.

use chrono::{NaiveDateTime, TimeZone, Timelike};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

/// All time-of-day reporting happens in Eastern time regardless of where
/// the ledger was pasted from.
pub const BUSINESS_TZ: Tz = New_York;

/// Resolve the local hour-of-day for a ledger date + time pair.
///
/// Primary path parses the combined timestamp ("Oct 8, 2025 11:54 AM") and
/// interprets it in [`BUSINESS_TZ`]. If that fails (odd date spelling,
/// DST gap), falls back to reading the hour straight out of the time
/// token. Never errors; total failure resolves to hour 0.
pub fn resolve_hour(date: &str, time: &str) -> u32 {
    let stamp = format!("{} {}", date.trim(), time.trim().to_uppercase());
    if let Ok(naive) = NaiveDateTime::parse_from_str(&stamp, "%b %d, %Y %I:%M %p") {
        if let Some(local) = BUSINESS_TZ.from_local_datetime(&naive).earliest() {
            return local.hour();
        }
    }
    hour_from_time_text(time)
}

/// Textual fallback: leading digits of a 12-hour clock token, converted to
/// 24-hour. "12 pm" stays 12, "12 am" becomes 0, other pm hours add 12.
pub fn hour_from_time_text(time: &str) -> u32 {
    let t = time.trim().to_lowercase();
    let digits: String = t.chars().take_while(|c| c.is_ascii_digit()).collect();
    let Ok(mut hour) = digits.parse::<u32>() else {
        return 0;
    };
    if t.contains("pm") && hour != 12 {
        hour += 12;
    }
    if t.contains("am") && hour == 12 {
        hour = 0;
    }
    hour.min(23)
}
