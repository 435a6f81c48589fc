//! Crux Test Harness - fakes and manual time control
//!
//! Tools for exercising the scoring core without a network or a real
//! clock:
//! - `FakeDirectory`: in-memory code/contest resolver with failure
//!   injection
//! - `ManualClock` / `ManualScheduler`: hand-driven time for the phase
//!   engine and ticker
//! - End-to-end scenarios across authentication, phases, and scoring

pub mod harness;
pub mod integration;

pub use harness::*;
