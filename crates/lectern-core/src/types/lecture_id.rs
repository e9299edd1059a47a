//! Lecture identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a lecture on the target server.
///
/// The scenario addresses lectures by fixed numeric ids (the smoke flow
/// assumes lectures 1 and 2 exist on the target).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LectureId(u64);

impl LectureId {
    /// Create a lecture id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LectureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LectureId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
