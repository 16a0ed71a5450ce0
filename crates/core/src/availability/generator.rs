//! Window Aggregator
//!
//! Runs the full pure pipeline: split the request window into day-contexts,
//! generate and conflict-filter each day's candidates, and concatenate the
//! results in day order. Slot ids come from `Uuid::new_v4`, so two calls
//! with identical inputs agree on every start/end pair but never on ids.

use chrono_tz::Tz;
use slotwise_domain::{AvailabilityWindow, BusyInterval, SchedulePreferences, Slot};

use super::civil::truncate_subsec;
use super::conflicts::filter_conflicts;
use super::day_slots::{generate_day_slots, DayParams};
use super::window::split_window;

/// Compute the bookable slots for one request window.
///
/// Pure and infallible: the orchestrator validates the window and resolves
/// the collaborator data before calling in. `busy = None` distinguishes
/// "no constraints" from "constraints present but all filtered out".
pub fn generate_slots(
    window: &AvailabilityWindow,
    prefs: &SchedulePreferences,
    sender_tz: Tz,
    receiver_tz: Tz,
    busy: Option<&[BusyInterval]>,
) -> Vec<Slot> {
    let contexts =
        split_window(window.window_start, window.window_end, receiver_tz, busy.unwrap_or(&[]));

    let params = DayParams {
        prefs,
        sender_tz,
        receiver_tz,
        slot_duration_minutes: window.slot_duration_minutes,
        window_end: truncate_subsec(window.window_end).with_timezone(&receiver_tz),
    };

    contexts
        .iter()
        .flat_map(|ctx| {
            let candidates = generate_day_slots(ctx, &params);
            let day_busy = busy.map(|_| ctx.busy.as_slice());
            filter_conflicts(candidates, day_busy, receiver_tz)
        })
        .collect()
}
