//! # Slotwise Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The availability-slot generation engine
//! - Port/adapter interfaces (traits) for the two external reads
//! - The orchestrating availability service
//!
//! ## Architecture Principles
//! - Only depends on `slotwise-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod availability;

// Re-export specific items to avoid ambiguity
pub use availability::conflicts::{filter_conflicts, is_available};
pub use availability::day_slots::{generate_day_slots, DayParams};
pub use availability::generator::generate_slots;
pub use availability::ports::{BusyEventRepository, PreferenceRepository};
pub use availability::service::AvailabilityService;
pub use availability::window::{split_window, DayContext, DayPosition};
