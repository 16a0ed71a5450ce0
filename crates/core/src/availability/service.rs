//! Availability orchestration service - the only suspension point.
//!
//! Fetches busy events and preferences through the port traits, projects the
//! events into their stored timezones, and hands the pure pipeline a fully
//! resolved input set. Either the whole call succeeds or it fails with
//! `AvailabilityGenerationFailed`; no partial results.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use slotwise_domain::{
    AvailabilityWindow, BusyEvent, BusyInterval, Result, SchedulePreferences, Slot, SlotwiseError,
};
use tracing::{debug, info, instrument};

use super::generator::generate_slots;
use super::ports::{BusyEventRepository, PreferenceRepository};

/// Availability generation service
pub struct AvailabilityService {
    events: Arc<dyn BusyEventRepository>,
    preferences: Arc<dyn PreferenceRepository>,
}

impl AvailabilityService {
    /// Create a new availability service
    pub fn new(
        events: Arc<dyn BusyEventRepository>,
        preferences: Arc<dyn PreferenceRepository>,
    ) -> Self {
        Self { events, preferences }
    }

    /// Generate the bookable slots for `user_id` over the given window.
    ///
    /// The window arrives in the sender's timezone; the returned slots are in
    /// the receiver's. The two collaborator reads are independent and are
    /// issued concurrently; both must land before generation starts.
    #[instrument(skip(self))]
    pub async fn generate_availability(
        &self,
        user_id: &str,
        window_start: DateTime<Tz>,
        window_end: DateTime<Tz>,
        sender_tz: Tz,
        receiver_tz: Tz,
        slot_duration_minutes: i64,
    ) -> Result<Vec<Slot>> {
        if window_end < window_start {
            return Err(SlotwiseError::InvalidWindow(format!(
                "window end {window_end} is before window start {window_start}"
            )));
        }
        if slot_duration_minutes <= 0 {
            return Err(SlotwiseError::InvalidWindow(format!(
                "slot duration must be positive, got {slot_duration_minutes}"
            )));
        }

        let (busy_events, preferences) = tokio::try_join!(
            self.fetch_busy_events(user_id, window_start, window_end),
            self.fetch_preferences(user_id),
        )?;

        let busy = busy_events
            .iter()
            .map(|event| event.to_interval())
            .collect::<Result<Vec<BusyInterval>>>()
            .map_err(|err| SlotwiseError::AvailabilityGenerationFailed(err.to_string()))?;

        let prefs = match preferences {
            Some(prefs) => prefs,
            None => {
                debug!(user_id, "no preference record, using default working hours");
                SchedulePreferences::default()
            }
        };

        let window = AvailabilityWindow { window_start, window_end, slot_duration_minutes };
        // None rather than an empty slice keeps "no constraints" and
        // "all candidates filtered out" apart in the logs
        let busy = if busy.is_empty() { None } else { Some(busy.as_slice()) };
        let slots = generate_slots(&window, &prefs, sender_tz, receiver_tz, busy);

        info!(
            user_id,
            slots = slots.len(),
            busy_intervals = busy.map_or(0, <[BusyInterval]>::len),
            "generated availability"
        );
        Ok(slots)
    }

    async fn fetch_busy_events(
        &self,
        user_id: &str,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<Vec<BusyEvent>> {
        let events = self
            .events
            .find_busy_events(user_id, start.with_timezone(&Utc), end.with_timezone(&Utc))
            .await
            .map_err(|err| SlotwiseError::AvailabilityGenerationFailed(err.to_string()))?;
        debug!(user_id, count = events.len(), "fetched busy events");
        Ok(events)
    }

    async fn fetch_preferences(&self, user_id: &str) -> Result<Option<SchedulePreferences>> {
        self.preferences
            .get_preferences(user_id)
            .await
            .map_err(|err| SlotwiseError::AvailabilityGenerationFailed(err.to_string()))
    }
}
