//! Day Slot Generator
//!
//! Produces the raw candidate slot sequence for one day-context, honoring
//! the sender's per-weekday working hours and first/last-day clipping.
//!
//! The four [`DayPosition`] branches deliberately round in different
//! directions: a first-day anchor is quantized *up* to the next grid
//! boundary (never start early), while a last-day window end is floored to
//! the grid (never overrun the caller's window). That asymmetry is part of
//! the contract and is pinned by the tests below.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Weekday};
use chrono_tz::Tz;
use slotwise_domain::{SchedulePreferences, Slot};
use uuid::Uuid;

use super::civil::{at_civil, truncate_seconds, wall_time};
use super::window::{DayContext, DayPosition};

/// Per-call parameters shared by every day of one generation run
#[derive(Debug, Clone)]
pub struct DayParams<'a> {
    /// Sender's working-hour preferences
    pub prefs: &'a SchedulePreferences,
    /// Zone the sender's working hours are expressed in
    pub sender_tz: Tz,
    /// Zone the output slots are expressed in
    pub receiver_tz: Tz,
    /// Slot granularity, strictly positive
    pub slot_duration_minutes: i64,
    /// Caller-supplied window end, already in the receiver timezone
    pub window_end: DateTime<Tz>,
}

/// Generate the raw candidate slots for one day-context.
///
/// Returns an empty list when the day has no bookable range (anchor past the
/// sender's work end, or a clipped range of zero or negative length).
/// Conflict filtering is a separate pass.
pub fn generate_day_slots(ctx: &DayContext, params: &DayParams<'_>) -> Vec<Slot> {
    let weekday = ctx.anchor.weekday();

    match ctx.position {
        DayPosition::FirstAndLast => first_day_slots(ctx, params, weekday, params.window_end),
        DayPosition::FirstOnly => {
            // Not also the last day, so the sender's work end bounds the day
            let end = sender_work_end(ctx, params, weekday).with_timezone(&params.receiver_tz);
            first_day_slots(ctx, params, weekday, end)
        }
        DayPosition::LastOnly => {
            let start = sender_work_start(ctx, params, weekday).with_timezone(&params.receiver_tz);
            let end = floor_to_grid(params.window_end, params.slot_duration_minutes);
            build_slots(start, end, params)
        }
        DayPosition::Interior => {
            let start = sender_work_start(ctx, params, weekday).with_timezone(&params.receiver_tz);
            let end = sender_work_end(ctx, params, weekday).with_timezone(&params.receiver_tz);
            build_slots(start, end, params)
        }
    }
}

/// Shared first-day logic for the `FirstAndLast` and `FirstOnly` branches.
///
/// The anchor is quantized up to the slot grid; a day already past the
/// sender's work end yields nothing, and a pre-work anchor is clipped
/// forward to the sender's work start.
fn first_day_slots(
    ctx: &DayContext,
    params: &DayParams<'_>,
    weekday: Weekday,
    generation_end: DateTime<Tz>,
) -> Vec<Slot> {
    let sender_anchor = ctx.anchor.with_timezone(&params.sender_tz);

    let work_end = sender_work_end(ctx, params, weekday);
    if sender_anchor > work_end {
        return Vec::new();
    }

    let work_start = sender_work_start(ctx, params, weekday);
    let start = if sender_anchor < work_start {
        work_start.with_timezone(&params.receiver_tz)
    } else {
        ceil_to_grid(ctx.anchor, params.slot_duration_minutes)
    };

    build_slots(start, generation_end, params)
}

/// Sender's configured work start for `weekday`, on the anchor's sender-zone
/// date, as a sender-zone instant
fn sender_work_start(ctx: &DayContext, params: &DayParams<'_>, weekday: Weekday) -> DateTime<Tz> {
    let (hour, minutes) = params.prefs.work_start_for(weekday);
    sender_wall_clock(ctx, params, hour, minutes)
}

/// Sender's configured work end for `weekday`, as a sender-zone instant
fn sender_work_end(ctx: &DayContext, params: &DayParams<'_>, weekday: Weekday) -> DateTime<Tz> {
    let (hour, minutes) = params.prefs.work_end_for(weekday);
    sender_wall_clock(ctx, params, hour, minutes)
}

fn sender_wall_clock(
    ctx: &DayContext,
    params: &DayParams<'_>,
    hour: u32,
    minutes: u32,
) -> DateTime<Tz> {
    let sender_date = ctx.anchor.with_timezone(&params.sender_tz).date_naive();
    at_civil(params.sender_tz, sender_date.and_time(wall_time(hour, minutes)))
}

/// Quantize a time-of-day up to the next slot-grid boundary.
///
/// A time already on the grid stays put; anything inside a grid cell rounds
/// forward to the cell boundary.
fn ceil_to_grid(dt: DateTime<Tz>, step: i64) -> DateTime<Tz> {
    snap_to_grid(dt, step, true)
}

/// Quantize a time-of-day down to the slot-grid boundary at or before it
fn floor_to_grid(dt: DateTime<Tz>, step: i64) -> DateTime<Tz> {
    snap_to_grid(dt, step, false)
}

fn snap_to_grid(dt: DateTime<Tz>, step: i64, round_up: bool) -> DateTime<Tz> {
    let minute_of_day = i64::from(dt.hour()) * 60 + i64::from(dt.minute());
    let snapped = if round_up {
        (minute_of_day + step - 1) / step * step
    } else {
        minute_of_day / step * step
    };
    // Rebuild from midnight so a snap past 24:00 rolls into the next date
    let civil = dt.date_naive().and_time(NaiveTime::MIN) + Duration::minutes(snapped);
    at_civil(dt.timezone(), civil)
}

/// Lay contiguous slots over `[start, end)` at the configured granularity,
/// projected into the receiver timezone with seconds zeroed
fn build_slots(start: DateTime<Tz>, end: DateTime<Tz>, params: &DayParams<'_>) -> Vec<Slot> {
    let step = params.slot_duration_minutes;
    let start = truncate_seconds(start.with_timezone(&params.receiver_tz));
    let end = truncate_seconds(end.with_timezone(&params.receiver_tz));

    let total_minutes = (end - start).num_minutes();
    if total_minutes <= 0 {
        return Vec::new();
    }

    let mut slots = Vec::with_capacity((total_minutes / step) as usize + 1);
    let mut offset = 0;
    while offset < total_minutes {
        let slot_start = start + Duration::minutes(offset);
        slots.push(Slot {
            id: Uuid::new_v4(),
            start: slot_start,
            end: slot_start + Duration::minutes(step),
        });
        offset += step;
    }
    slots
}
