//! Common data types used throughout the scheduling engine

use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_WORK_END_HOUR, DEFAULT_WORK_END_MINUTE, DEFAULT_WORK_START_HOUR,
    DEFAULT_WORK_START_MINUTE,
};
use crate::errors::{Result, SlotwiseError};

/// Start or end of a party's working period on one ISO weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHour {
    pub weekday: Weekday,
    pub hour: u32,
    pub minutes: u32,
}

impl WorkHour {
    /// Create a work-hour entry for the given weekday
    pub fn new(weekday: Weekday, hour: u32, minutes: u32) -> Self {
        Self { weekday, hour, minutes }
    }
}

/// Per-weekday working-hour preferences for a party.
///
/// Both sequences are looked up by weekday; a weekday without an entry falls
/// back to the default working hours (08:00 start, 20:00 end).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePreferences {
    pub start_times: Vec<WorkHour>,
    pub end_times: Vec<WorkHour>,
}

impl SchedulePreferences {
    /// Working-period start `(hour, minutes)` for the given weekday
    pub fn work_start_for(&self, weekday: Weekday) -> (u32, u32) {
        self.start_times
            .iter()
            .find(|wh| wh.weekday == weekday)
            .map(|wh| (wh.hour, wh.minutes))
            .unwrap_or((DEFAULT_WORK_START_HOUR, DEFAULT_WORK_START_MINUTE))
    }

    /// Working-period end `(hour, minutes)` for the given weekday
    pub fn work_end_for(&self, weekday: Weekday) -> (u32, u32) {
        self.end_times
            .iter()
            .find(|wh| wh.weekday == weekday)
            .map(|wh| (wh.hour, wh.minutes))
            .unwrap_or((DEFAULT_WORK_END_HOUR, DEFAULT_WORK_END_MINUTE))
    }
}

/// A bookable meeting slot, expressed in the receiver's timezone.
///
/// `end == start + slot_duration`; neighbouring slots generated for the same
/// day are contiguous. Ids are freshly minted per generation call and carry
/// no content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub id: Uuid,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// A time range already occupied by an existing event, in its source timezone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// An existing calendar event as returned by the event store.
///
/// Timestamps are stored in UTC alongside the event's own IANA timezone name;
/// [`BusyEvent::to_interval`] projects them back into that zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyEvent {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: String,
}

impl BusyEvent {
    /// Project this event into its stored timezone as a [`BusyInterval`]
    pub fn to_interval(&self) -> Result<BusyInterval> {
        let tz: Tz = self
            .timezone
            .parse()
            .map_err(|_| SlotwiseError::InvalidTimezone(self.timezone.clone()))?;
        Ok(BusyInterval { start: self.start.with_timezone(&tz), end: self.end.with_timezone(&tz) })
    }
}

/// The requested generation window, owned by the caller for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub window_start: DateTime<Tz>,
    pub window_end: DateTime<Tz>,
    pub slot_duration_minutes: i64,
}

impl AvailabilityWindow {
    /// Slot granularity as a [`chrono::Duration`]
    pub fn slot_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.slot_duration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::America::New_York;

    use super::*;

    #[test]
    fn preference_lookup_falls_back_to_defaults() {
        let prefs = SchedulePreferences {
            start_times: vec![WorkHour::new(Weekday::Mon, 9, 30)],
            end_times: vec![WorkHour::new(Weekday::Mon, 17, 0)],
        };

        assert_eq!(prefs.work_start_for(Weekday::Mon), (9, 30));
        assert_eq!(prefs.work_end_for(Weekday::Mon), (17, 0));
        // Tuesday has no entry and takes the documented defaults
        assert_eq!(prefs.work_start_for(Weekday::Tue), (8, 0));
        assert_eq!(prefs.work_end_for(Weekday::Tue), (20, 0));
    }

    #[test]
    fn busy_event_projects_into_stored_timezone() {
        let event = BusyEvent {
            start: Utc.with_ymd_and_hms(2024, 6, 10, 14, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 6, 10, 15, 0, 0).unwrap(),
            timezone: "America/New_York".to_string(),
        };

        let interval = event.to_interval().expect("valid zone");
        assert_eq!(interval.start, New_York.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap());
        assert_eq!(interval.end.timezone(), New_York);
    }

    #[test]
    fn busy_event_rejects_unknown_timezone() {
        let event = BusyEvent {
            start: Utc.with_ymd_and_hms(2024, 6, 10, 14, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 6, 10, 15, 0, 0).unwrap(),
            timezone: "Not/AZone".to_string(),
        };

        assert!(matches!(event.to_interval(), Err(SlotwiseError::InvalidTimezone(_))));
    }
}
