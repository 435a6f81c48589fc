#![allow(async_fn_in_trait)]
//! Crux Session Store - durable contender session cache
//!
//! Keeps a bounded, expiring record of which contender sessions were
//! recently authenticated on this device, so a user can resume without
//! re-entering a registration code:
//! - Key-value storage abstraction over the persistence substrate
//! - Injected resolver capabilities for code and contest lookup
//! - The store itself: upsert, bound to 3, never surface an expired
//!   session, discard corrupt data wholesale

pub mod resolver;
pub mod storage;
pub mod store;

pub use resolver::*;
pub use storage::*;
pub use store::*;
