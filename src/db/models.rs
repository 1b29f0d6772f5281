/// Data models for database entities

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Weight added by the first visit to a directory
pub const VISIT_STEP: u64 = 100;

/// A visited directory and its weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub path: String,
    pub weight: i64,
}

impl Entry {
    /// Weight after one more visit: `sqrt(w^2 + 100^2)`, rounded down
    ///
    /// Frequent directories keep climbing but each visit counts for less.
    pub fn increased(weight: u64) -> u64 {
        let squared = weight
            .saturating_pow(2)
            .saturating_add(VISIT_STEP * VISIT_STEP);
        (squared as f64).sqrt() as u64
    }

    /// Weight after an explicit decrease, floored at zero
    pub fn decreased(weight: u64) -> u64 {
        weight.saturating_sub(VISIT_STEP)
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "weight={},\tpath={}", self.weight, self.path)
    }
}
