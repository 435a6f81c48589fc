//! Crux Phase Engine - temporal contest state
//!
//! Derives a contest's current phase from its time window and the wall
//! clock, and guarantees that every boundary crossing is observed as
//! soon as the clock passes it, without polling:
//! - Clock and scheduler abstractions (injectable for tests)
//! - The phase engine: one pending wake-up, recompute-on-wake
//! - A boundary-aligned periodic ticker for countdown displays

pub mod clock;
pub mod engine;
pub mod scheduler;
pub mod ticker;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::*;
pub use engine::*;
pub use scheduler::*;
pub use ticker::*;
