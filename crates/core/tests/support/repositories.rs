use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use slotwise_core::{BusyEventRepository, PreferenceRepository};
use slotwise_domain::{BusyEvent, Result as DomainResult, SchedulePreferences, SlotwiseError};

/// In-memory mock for `BusyEventRepository`.
///
/// Stores a fixed set of events and returns those overlapping the requested
/// window. Designed for orchestrator tests where deterministic responses are
/// required; `failing` flips every call into a database error so the
/// propagation path can be exercised.
#[derive(Default, Clone)]
pub struct MockBusyEventRepository {
    events: Arc<Mutex<Vec<BusyEvent>>>,
    failing: bool,
}

impl MockBusyEventRepository {
    /// Create a new mock seeded with the provided events.
    pub fn new(events: Vec<BusyEvent>) -> Self {
        Self { events: Arc::new(Mutex::new(events)), failing: false }
    }

    /// Convenience helper for adding a single event to the mock.
    pub fn with_event(self, event: BusyEvent) -> Self {
        self.events.lock().unwrap().push(event);
        self
    }

    /// A mock whose every call fails.
    pub fn failing() -> Self {
        Self { events: Arc::new(Mutex::new(Vec::new())), failing: true }
    }
}

#[async_trait]
impl BusyEventRepository for MockBusyEventRepository {
    async fn find_busy_events(
        &self,
        _user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<BusyEvent>> {
        if self.failing {
            return Err(SlotwiseError::Database("busy event store unavailable".to_string()));
        }

        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.start <= end && event.end >= start)
            .cloned()
            .collect())
    }
}

/// In-memory mock for `PreferenceRepository`.
#[derive(Default, Clone)]
pub struct MockPreferenceRepository {
    preferences: Arc<Mutex<Option<SchedulePreferences>>>,
    failing: bool,
}

impl MockPreferenceRepository {
    /// A mock holding no preference record (the engine's defaults apply).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A mock returning the given preference record.
    pub fn with_preferences(preferences: SchedulePreferences) -> Self {
        Self { preferences: Arc::new(Mutex::new(Some(preferences))), failing: false }
    }

    /// A mock whose every call fails.
    pub fn failing() -> Self {
        Self { preferences: Arc::new(Mutex::new(None)), failing: true }
    }
}

#[async_trait]
impl PreferenceRepository for MockPreferenceRepository {
    async fn get_preferences(&self, _user_id: &str) -> DomainResult<Option<SchedulePreferences>> {
        if self.failing {
            return Err(SlotwiseError::NotFound("preference store unavailable".to_string()));
        }

        Ok(self.preferences.lock().unwrap().clone())
    }
}
