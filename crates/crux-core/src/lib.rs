//! Crux Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the Crux scoring
//! platform:
//! - Identifiers (ContenderId, ContestId) and registration codes
//! - Contest windows and phase derivation
//! - Rule sets, ascents, and contender sessions
//! - The central error type

pub mod code;
pub mod error;
pub mod id;
pub mod models;
pub mod window;

pub use code::*;
pub use error::*;
pub use id::*;
pub use models::*;
pub use window::*;
