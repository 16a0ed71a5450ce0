//! Availability port interfaces
//!
//! The two external reads the orchestrator depends on. Adapters (GraphQL
//! store, Google Calendar, in-memory test doubles) live outside this crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use slotwise_domain::{BusyEvent, Result, SchedulePreferences};

/// Trait for fetching a user's already-scheduled events
#[async_trait]
pub trait BusyEventRepository: Send + Sync {
    /// Fetch events overlapping `[start, end]` for the user
    async fn find_busy_events(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<BusyEvent>>;
}

/// Trait for fetching a user's working-hour preferences
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Fetch the preference record; `None` is a valid answer and means the
    /// engine's defaults apply
    async fn get_preferences(&self, user_id: &str) -> Result<Option<SchedulePreferences>>;
}
