//! # Mix Profiles
//!
//! Compositional archetype labels for combos.

use crate::{parse_cr, ComboSuggestion};
use serde::{Deserialize, Serialize};
use std::fmt;

/// CR gap between the strongest and weakest entry that marks an elite.
pub const ELITE_CR_GAP: f64 = 2.0;

/// Largest count of the strongest entry that still reads as an elite.
pub const ELITE_MAX_COUNT: u32 = 2;

/// Compositional archetype of a combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MixProfile {
    /// A single creature
    Solo,
    /// Two different creatures
    Duo,
    /// Two to four creatures of at most two types
    Balanced,
    /// One or two strong creatures over much weaker support
    EliteWithMinions,
    /// Anything else
    SmallGroup,
}

impl MixProfile {
    /// Kebab-case label of this profile.
    pub fn as_str(self) -> &'static str {
        match self {
            MixProfile::Solo => "solo",
            MixProfile::Duo => "duo",
            MixProfile::Balanced => "balanced",
            MixProfile::EliteWithMinions => "elite-with-minions",
            MixProfile::SmallGroup => "small-group",
        }
    }
}

impl fmt::Display for MixProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a combo. Rules are checked in order and the first match wins.
///
/// # Examples
///
/// ```
/// use warband::{classify_profile, CombatRole, ComboConstraints, ComboSuggestion, Creature, CreatureInCombo, MixProfile};
///
/// let ogre = Creature::new("Ogre", "ogre.html", "2", CombatRole::Tank);
/// let constraints = ComboConstraints::new(450, 3, 4);
/// let combo = ComboSuggestion::new(vec![CreatureInCombo::new(ogre, 1)], &constraints);
/// assert_eq!(classify_profile(&combo), MixProfile::Solo);
/// ```
pub fn classify_profile(combo: &ComboSuggestion) -> MixProfile {
    let creatures = combo.total_creature_count();
    let stat_blocks = combo.stat_block_count();

    if creatures == 1 {
        return MixProfile::Solo;
    }
    if creatures == 2 && stat_blocks == 2 {
        return MixProfile::Duo;
    }
    if (2..=4).contains(&creatures) && stat_blocks <= 2 {
        return MixProfile::Balanced;
    }

    let mut by_cr: Vec<(f64, u32)> = combo
        .entries()
        .iter()
        .map(|e| (parse_cr(&e.creature.cr).unwrap_or(0.0), e.count))
        .collect();
    by_cr.sort_by(|a, b| b.0.total_cmp(&a.0));

    if let (Some(&(highest, elite_count)), Some(&(lowest, _))) = (by_cr.first(), by_cr.last()) {
        if highest - lowest >= ELITE_CR_GAP && elite_count <= ELITE_MAX_COUNT {
            return MixProfile::EliteWithMinions;
        }
    }

    MixProfile::SmallGroup
}
