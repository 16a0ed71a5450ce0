//! Availability-slot generation engine.
//!
//! Pipeline, leaf to root: [`window`] splits a request window into per-day
//! contexts in the receiver's timezone, [`day_slots`] produces the raw
//! candidate slots for one day, [`conflicts`] drops candidates that overlap
//! busy intervals, [`generator`] runs the whole pipeline per day and
//! concatenates, and [`service`] is the only piece that touches external
//! collaborators.

pub(crate) mod civil;

pub mod conflicts;
pub mod day_slots;
pub mod generator;
pub mod ports;
pub mod service;
pub mod window;
