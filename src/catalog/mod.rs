//! # Catalog Module
//!
//! Creature records, catalog loading, and the filters that narrow a catalog
//! before combo generation.
//!
//! Catalogs are plain ordered slices of [`Creature`]. Order matters: the
//! generators scan catalogs front to back, so the same catalog always yields
//! the same suggestions.

pub mod filters;
pub mod loader;

pub use filters::*;
pub use loader::*;

use crate::{parse_cr, xp_for_cr, WarbandError, WarbandResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tactical archetype assigned to each creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatRole {
    /// High damage dealer, focuses on eliminating priority targets
    #[default]
    Striker,
    /// Manipulates the battlefield with crowd control and debuffs
    Controller,
    /// Mobile combatant using hit-and-run tactics
    Skirmisher,
    /// High HP/AC, absorbs damage and protects allies
    Tank,
    /// Long-range damage dealer that stays at distance
    Artillery,
    /// Buffs and heals allies or summons reinforcements
    Support,
    /// Stealth-based ambush specialist
    Infiltrator,
}

impl CombatRole {
    /// Returns all roles in declaration order.
    pub fn all() -> [CombatRole; 7] {
        [
            CombatRole::Striker,
            CombatRole::Controller,
            CombatRole::Skirmisher,
            CombatRole::Tank,
            CombatRole::Artillery,
            CombatRole::Support,
            CombatRole::Infiltrator,
        ]
    }

    /// Lowercase label of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            CombatRole::Striker => "striker",
            CombatRole::Controller => "controller",
            CombatRole::Skirmisher => "skirmisher",
            CombatRole::Tank => "tank",
            CombatRole::Artillery => "artillery",
            CombatRole::Support => "support",
            CombatRole::Infiltrator => "infiltrator",
        }
    }
}

impl fmt::Display for CombatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CombatRole {
    type Err = WarbandError;

    fn from_str(s: &str) -> WarbandResult<Self> {
        let wanted = s.trim().to_lowercase();
        CombatRole::all()
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| WarbandError::InvalidInput(format!("unknown combat role '{}'", s)))
    }
}

/// A creature from the catalog.
///
/// Records are produced upstream from stat-block markup and are read-only to
/// the engine. Field names match the monster metadata JSON.
///
/// # Examples
///
/// ```
/// use warband::{CombatRole, Creature};
///
/// let goblin = Creature::new("Goblin", "goblin.html", "1/4", CombatRole::Skirmisher)
///     .with_keywords(["humanoid", "ambush"]);
/// assert_eq!(goblin.xp(), 50);
/// assert_eq!(goblin.cr_value(), Some(0.25));
/// assert!(goblin.has_keyword("Ambush"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Display name
    pub name: String,
    /// Identifier of the catalog file this creature came from
    pub file: String,
    /// Challenge rating label ("0", "1/8", "1/4", "1/2", "1" .. "30")
    pub cr: String,
    /// One-line summary for display
    #[serde(default)]
    pub summary: String,
    /// Tactical archetype
    #[serde(default)]
    pub combat_role: CombatRole,
    /// Theme keywords used for thematic filtering
    #[serde(default)]
    pub theme_keywords: Vec<String>,
    /// Size, type and alignment line
    #[serde(default)]
    pub creature_type: String,
}

impl Creature {
    /// Creates a creature with no summary, keywords or type line.
    pub fn new(
        name: impl Into<String>,
        file: impl Into<String>,
        cr: impl Into<String>,
        combat_role: CombatRole,
    ) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            cr: cr.into(),
            summary: String::new(),
            combat_role,
            theme_keywords: Vec::new(),
            creature_type: String::new(),
        }
    }

    /// Replaces the theme keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.theme_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the one-line summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the size/type/alignment line.
    pub fn with_creature_type(mut self, creature_type: impl Into<String>) -> Self {
        self.creature_type = creature_type.into();
        self
    }

    /// XP value of this creature's challenge rating.
    pub fn xp(&self) -> u32 {
        xp_for_cr(&self.cr)
    }

    /// Numeric challenge rating, if the label is a number.
    pub fn cr_value(&self) -> Option<f64> {
        parse_cr(&self.cr)
    }

    /// Case-insensitive keyword check.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.theme_keywords
            .iter()
            .any(|own| own.trim().eq_ignore_ascii_case(keyword.trim()))
    }
}
