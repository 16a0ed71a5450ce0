//! Civil (wall-clock) time helpers.
//!
//! The engine carries every instant with an explicit IANA zone; these helpers
//! attach zones to civil datetimes and normalize precision without ever
//! consulting a process-wide timezone.

use chrono::{DateTime, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

/// Attach `tz` to a civil datetime.
///
/// DST transitions make this lossy at the edges: an ambiguous wall time
/// resolves to its earlier occurrence, and a wall time inside a
/// spring-forward gap is read as UTC. Both keep the pure layer infallible on
/// well-formed input.
pub(crate) fn at_civil(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => tz.from_utc_datetime(&naive),
    }
}

/// Drop seconds and all sub-second precision
pub(crate) fn truncate_seconds(dt: DateTime<Tz>) -> DateTime<Tz> {
    dt.with_second(0).and_then(|dt| dt.with_nanosecond(0)).unwrap_or(dt)
}

/// Drop sub-second precision only, keeping whole seconds
pub(crate) fn truncate_subsec(dt: DateTime<Tz>) -> DateTime<Tz> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Wall time for a preference entry, clamped into a valid hour/minute range
pub(crate) fn wall_time(hour: u32, minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour.min(23), minutes.min(59), 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use chrono_tz::America::New_York;
    use chrono_tz::UTC;

    use super::*;

    #[test]
    fn ambiguous_wall_time_resolves_to_earlier_occurrence() {
        // 2024-11-03 01:30 happens twice in New York (fall-back)
        let naive = NaiveDate::from_ymd_opt(2024, 11, 3)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();

        let dt = at_civil(New_York, naive);
        assert_eq!(dt.naive_local(), naive);
        // Earlier occurrence is still on EDT (UTC-4)
        assert_eq!(dt.with_timezone(&UTC).naive_utc(), naive + chrono::Duration::hours(4));
    }

    #[test]
    fn truncation_zeroes_seconds_and_nanos() {
        let dt = at_civil(
            UTC,
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_nano_opt(9, 15, 42, 7).unwrap(),
        );

        let truncated = truncate_seconds(dt);
        assert_eq!(truncated.second(), 0);
        assert_eq!(truncated.nanosecond(), 0);
        assert_eq!(truncated.minute(), 15);

        let subsec = truncate_subsec(dt);
        assert_eq!(subsec.second(), 42);
        assert_eq!(subsec.nanosecond(), 0);
    }

    #[test]
    fn wall_time_clamps_out_of_range_entries() {
        assert_eq!(wall_time(9, 30), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(wall_time(25, 90), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }
}
