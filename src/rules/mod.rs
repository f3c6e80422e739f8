//! # Rules Module
//!
//! Fixed game tables: challenge ratings, their XP values, and per-party
//! encounter budgets for each difficulty tier.

pub mod xp;

pub use xp::*;

use crate::{WarbandError, WarbandResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encounter difficulty tier used to size an XP budget.
///
/// # Examples
///
/// ```
/// use warband::Difficulty;
///
/// let difficulty: Difficulty = "High".parse().unwrap();
/// assert_eq!(difficulty, Difficulty::High);
/// assert_eq!(difficulty.to_string(), "high");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    #[default]
    Moderate,
    High,
}

impl Difficulty {
    /// Returns all tiers from easiest to hardest.
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Low, Difficulty::Moderate, Difficulty::High]
    }

    /// Column of this tier in the budget table.
    pub(crate) fn column(self) -> usize {
        match self {
            Difficulty::Low => 0,
            Difficulty::Moderate => 1,
            Difficulty::High => 2,
        }
    }

    /// Lowercase label of this tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Moderate => "moderate",
            Difficulty::High => "high",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = WarbandError;

    fn from_str(s: &str) -> WarbandResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Difficulty::Low),
            "moderate" | "medium" => Ok(Difficulty::Moderate),
            "high" => Ok(Difficulty::High),
            other => Err(WarbandError::InvalidInput(format!(
                "unknown difficulty '{}' (expected low, moderate or high)",
                other
            ))),
        }
    }
}
