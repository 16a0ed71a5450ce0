//! # Slotwise Domain
//!
//! Business domain types and models for Slotwise.
//!
//! This crate contains:
//! - Domain data types (WorkHour, Slot, BusyInterval, etc.)
//! - Domain error types and Result definitions
//! - Domain constants (default working hours)
//!
//! ## Architecture
//! - No dependencies on other Slotwise crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
