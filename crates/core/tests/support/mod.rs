//! Shared test helpers for `slotwise-core` integration tests.
//!
//! These helpers provide in-memory mocks for the two availability ports so
//! the orchestrator tests can focus on behaviour instead of boilerplate.

pub mod repositories;
