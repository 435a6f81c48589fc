//! Identity types for the Crux scoring platform
//!
//! Identifiers are 64-bit and assigned by the remote API; the client
//! never mints them itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Contender identity - one registered climber in one contest
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContenderId(pub u64);

impl ContenderId {
    pub const ZERO: ContenderId = ContenderId(0);

    #[inline]
    pub fn new(id: u64) -> Self {
        ContenderId(id)
    }
}

impl fmt::Debug for ContenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contender({})", self.0)
    }
}

impl fmt::Display for ContenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contest identity
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContestId(pub u64);

impl ContestId {
    pub const ZERO: ContestId = ContestId(0);

    #[inline]
    pub fn new(id: u64) -> Self {
        ContestId(id)
    }
}

impl fmt::Debug for ContestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contest({})", self.0)
    }
}

impl fmt::Display for ContestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Problem identity - one boulder on the wall
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(pub u64);

impl ProblemId {
    pub const ZERO: ProblemId = ProblemId(0);

    #[inline]
    pub fn new(id: u64) -> Self {
        ProblemId(id)
    }
}

impl fmt::Debug for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Problem({})", self.0)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
