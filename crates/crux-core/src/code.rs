//! Registration codes
//!
//! An 8-character alphanumeric credential identifying a contender, used
//! in lieu of a password. Codes are matched case-insensitively and kept
//! uppercase internally.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CruxError, CruxResult};

/// A validated contender registration code
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RegistrationCode(String);

impl RegistrationCode {
    /// Fixed length of every registration code
    pub const LENGTH: usize = 8;

    /// Parse a human-entered code.
    ///
    /// Accepts exactly 8 ASCII alphanumeric characters (surrounding
    /// whitespace tolerated) and normalizes to uppercase. Anything else
    /// is rejected before it reaches a resolver.
    pub fn parse(raw: &str) -> CruxResult<Self> {
        let raw = raw.trim();
        if raw.len() != Self::LENGTH || !raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(CruxError::InvalidRegistrationCode(raw.to_string()));
        }
        Ok(RegistrationCode(raw.to_ascii_uppercase()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RegistrationCode {
    type Err = CruxError;

    fn from_str(s: &str) -> CruxResult<Self> {
        RegistrationCode::parse(s)
    }
}

impl fmt::Debug for RegistrationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self.0)
    }
}

impl fmt::Display for RegistrationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RegistrationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// Deserialization re-validates, so stored session data carrying a
// malformed code fails the schema as a whole.
impl<'de> Deserialize<'de> for RegistrationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RegistrationCode::parse(&raw).map_err(D::Error::custom)
    }
}
