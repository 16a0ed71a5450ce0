//! Time Window Splitter
//!
//! Divides a multi-day request window into one context per calendar day, in
//! the receiver's timezone, inclusive of both endpoints. Day boundaries are
//! calendar-day differences, not elapsed-hours divided by 24.

use chrono::{DateTime, Duration, NaiveDate};
use chrono_tz::Tz;
use slotwise_domain::BusyInterval;

use super::civil::{at_civil, truncate_subsec};

/// Position of one calendar day within the requested window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPosition {
    /// The window starts and ends on the same calendar day
    FirstAndLast,
    /// First day of a multi-day window
    FirstOnly,
    /// Last day of a multi-day window
    LastOnly,
    /// A day strictly between the first and the last
    Interior,
}

/// The per-calendar-day unit of work consumed by the day slot generator.
///
/// Carries the subset of busy intervals whose start date (receiver timezone)
/// falls on this day, so conflict checks stay O(day) instead of O(window).
#[derive(Debug, Clone)]
pub struct DayContext {
    /// Calendar date in the receiver timezone
    pub date: NaiveDate,
    /// Window start shifted onto this day, receiver timezone
    pub anchor: DateTime<Tz>,
    /// Where this day sits in the window
    pub position: DayPosition,
    /// Busy intervals starting on this day
    pub busy: Vec<BusyInterval>,
}

/// Split `[window_start, window_end]` into one [`DayContext`] per calendar
/// day in the receiver timezone.
///
/// Both endpoints are truncated to whole-second civil fields before zone
/// conversion to avoid sub-second conversion drift. A same-day window yields
/// exactly one context marked [`DayPosition::FirstAndLast`].
pub fn split_window(
    window_start: DateTime<Tz>,
    window_end: DateTime<Tz>,
    receiver_tz: Tz,
    busy: &[BusyInterval],
) -> Vec<DayContext> {
    let start = truncate_subsec(window_start).with_timezone(&receiver_tz);
    let end = truncate_subsec(window_end).with_timezone(&receiver_tz);

    let diff_days = (end.date_naive() - start.date_naive()).num_days();
    if diff_days < 1 {
        return vec![day_context(start, DayPosition::FirstAndLast, busy, receiver_tz)];
    }

    (0..=diff_days)
        .map(|offset| {
            let position = if offset == 0 {
                DayPosition::FirstOnly
            } else if offset == diff_days {
                DayPosition::LastOnly
            } else {
                DayPosition::Interior
            };
            // Advance by civil days so the anchor keeps the window's wall time
            let anchor = at_civil(receiver_tz, start.naive_local() + Duration::days(offset));
            day_context(anchor, position, busy, receiver_tz)
        })
        .collect()
}

fn day_context(
    anchor: DateTime<Tz>,
    position: DayPosition,
    busy: &[BusyInterval],
    receiver_tz: Tz,
) -> DayContext {
    let date = anchor.date_naive();
    let busy = busy
        .iter()
        .filter(|interval| interval.start.with_timezone(&receiver_tz).date_naive() == date)
        .cloned()
        .collect();
    DayContext { date, anchor, position, busy }
}
