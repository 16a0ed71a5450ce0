//! Conflict Filter
//!
//! Removes candidate slots that overlap an existing busy interval. The busy
//! interval's bounds are shrunk by one minute on each side before the range
//! checks, so a candidate that starts exactly when a busy interval ends (or
//! ends exactly when one begins) is kept: back-to-back adjacency is not a
//! conflict. An exact minute-for-minute duplicate always is.

use chrono::Duration;
use chrono_tz::Tz;
use slotwise_domain::{BusyInterval, Slot};

use super::civil::truncate_seconds;

/// Whether `slot` survives every busy interval
pub fn is_available(slot: &Slot, busy: &[BusyInterval], receiver_tz: Tz) -> bool {
    !busy.iter().any(|interval| overlaps(slot, interval, receiver_tz))
}

/// Drop candidates that overlap a busy interval.
///
/// `busy = None` means the caller had no constraints at all, as opposed to
/// constraints that all filtered out; the slots pass through untouched either
/// way, but the distinction is preserved for the orchestrator's logging.
pub fn filter_conflicts(
    slots: Vec<Slot>,
    busy: Option<&[BusyInterval]>,
    receiver_tz: Tz,
) -> Vec<Slot> {
    match busy {
        None => slots,
        Some(busy) if busy.is_empty() => slots,
        Some(busy) => {
            slots.into_iter().filter(|slot| is_available(slot, busy, receiver_tz)).collect()
        }
    }
}

/// The single shared overlap predicate, evaluated at minute precision in the
/// receiver timezone
fn overlaps(slot: &Slot, interval: &BusyInterval, receiver_tz: Tz) -> bool {
    let a_start = truncate_seconds(slot.start.with_timezone(&receiver_tz));
    let a_end = truncate_seconds(slot.end.with_timezone(&receiver_tz));
    let na_start = truncate_seconds(interval.start.with_timezone(&receiver_tz));
    let na_end = truncate_seconds(interval.end.with_timezone(&receiver_tz));

    let lower = na_start + Duration::minutes(1);
    let upper = na_end - Duration::minutes(1);

    (a_end >= lower && a_end <= upper)
        || (a_start >= lower && a_start <= upper)
        || (a_start == na_start && a_end == na_end)
}
