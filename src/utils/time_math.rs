use chrono::{DateTime, Utc};
use chrono_tz::America::Los_Angeles;

use crate::error::MuniError;

/// Convert a UTC ISO 8601 time string to a San Francisco local time string.
/// Example: "2025-06-27T22:18:15Z" -> "03:18 PM (PDT)".
pub fn to_local_display(utc_iso: &str) -> Result<String, MuniError> {
    let utc_time = DateTime::parse_from_rfc3339(utc_iso)?;
    let local_time = utc_time.with_timezone(&Los_Angeles);
    Ok(local_time.format("%I:%M %p (%Z)").to_string())
}

/// Whole minutes between `now` and the arrival time, floored. An arrival
/// 90 seconds in the past is -2, not -1. `now` defaults to the current
/// wall-clock time; tests inject a fixed reference instead.
pub fn minutes_until(utc_iso: &str, now: Option<DateTime<Utc>>) -> Result<i64, MuniError> {
    let arrival = DateTime::parse_from_rfc3339(utc_iso)?.with_timezone(&Utc);
    let now = now.unwrap_or_else(Utc::now);
    let delta = arrival.signed_duration_since(now);
    Ok(delta.num_seconds().div_euclid(60))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn converts_summer_timestamp_to_pdt() {
        let formatted = to_local_display("2025-06-27T22:18:15Z").unwrap();
        assert_eq!(formatted, "03:18 PM (PDT)");
    }

    #[test]
    fn converts_winter_timestamp_to_pst() {
        let formatted = to_local_display("2025-01-15T01:05:00Z").unwrap();
        assert_eq!(formatted, "05:05 PM (PST)");
    }

    #[test]
    fn handles_spring_forward_boundary() {
        // DST began 2025-03-09 at 02:00 local; 10:00 UTC is the transition.
        assert_eq!(
            to_local_display("2025-03-09T09:59:00Z").unwrap(),
            "01:59 AM (PST)"
        );
        assert_eq!(
            to_local_display("2025-03-09T10:01:00Z").unwrap(),
            "03:01 AM (PDT)"
        );
    }

    #[test]
    fn accepts_explicit_utc_offset() {
        let formatted = to_local_display("2025-06-27T22:18:15+00:00").unwrap();
        assert_eq!(formatted, "03:18 PM (PDT)");
    }

    #[test]
    fn rejects_invalid_timestamp() {
        assert!(to_local_display("not a timestamp").is_err());
        assert!(minutes_until("2025-13-99", None).is_err());
    }

    #[test]
    fn whole_minutes_in_the_future() {
        let now = Utc.with_ymd_and_hms(2025, 6, 27, 22, 13, 15).unwrap();
        let minutes = minutes_until("2025-06-27T22:18:15Z", Some(now)).unwrap();
        assert_eq!(minutes, 5);
    }

    #[test]
    fn partial_minutes_round_down_in_the_future() {
        // 5 minutes 30 seconds out is still "5 minutes away".
        let now = Utc.with_ymd_and_hms(2025, 6, 27, 22, 12, 45).unwrap();
        let minutes = minutes_until("2025-06-27T22:18:15Z", Some(now)).unwrap();
        assert_eq!(minutes, 5);
    }

    #[test]
    fn elapsed_arrivals_floor_toward_negative_infinity() {
        // 90 seconds past the prediction is -2 minutes, not -1.
        let now = Utc.with_ymd_and_hms(2025, 6, 27, 22, 19, 45).unwrap();
        let minutes = minutes_until("2025-06-27T22:18:15Z", Some(now)).unwrap();
        assert_eq!(minutes, -2);
    }
}
