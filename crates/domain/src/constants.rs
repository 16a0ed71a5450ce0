//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! scheduling engine.

// Default working hours, applied when a weekday has no preference entry
pub const DEFAULT_WORK_START_HOUR: u32 = 8;
pub const DEFAULT_WORK_START_MINUTE: u32 = 0;
pub const DEFAULT_WORK_END_HOUR: u32 = 20;
pub const DEFAULT_WORK_END_MINUTE: u32 = 0;

// Slot grid configuration
pub const MINUTES_PER_DAY: i64 = 24 * 60;
pub const DEFAULT_SLOT_DURATION_MINUTES: i64 = 30;
