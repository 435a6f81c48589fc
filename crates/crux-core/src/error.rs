//! Error types for the Crux scoring platform

use thiserror::Error;

use crate::ContestId;

/// Core Crux errors
#[derive(Error, Debug)]
pub enum CruxError {
    // Contest window errors
    #[error("Invalid contest window: {0}")]
    InvalidContestWindow(String),

    // Registration code errors
    #[error("Invalid registration code: {0:?}")]
    InvalidRegistrationCode(String),

    #[error("Unknown registration code: {0}")]
    UnknownRegistrationCode(String),

    // Contest lookup errors
    #[error("Contest not found: {0:?}")]
    ContestNotFound(ContestId),

    // Phase engine errors
    #[error("Phase engine disposed")]
    EngineDisposed,

    // Collaborator transport errors
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for Crux operations
pub type CruxResult<T> = Result<T, CruxError>;
