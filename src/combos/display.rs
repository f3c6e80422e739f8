//! # Combo Display
//!
//! Human-readable descriptions and display-ready summaries.

use crate::ComboSuggestion;
use serde::Serialize;

/// Display-ready summary of an annotated combo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComboStats {
    /// One-line description, e.g. `2× Goblin (CR 1/4) + Bugbear Chief (CR 3)`
    pub description: String,
    /// Total XP
    pub total_xp: u32,
    /// Percent of budget, rounded
    pub percent_of_budget: u32,
    /// Number of individual creatures
    pub creature_count: u32,
    /// Number of distinct stat blocks
    pub stat_blocks: usize,
    /// Creatures per party member, one decimal
    pub ratio: f64,
    /// Profile label, empty before annotation
    pub profile: String,
    /// Caution strings
    pub warnings: Vec<String>,
    /// Score, rounded
    pub score: u32,
}

/// Formats a combo as a single line.
///
/// # Examples
///
/// ```
/// use warband::{format_description, CombatRole, ComboConstraints, ComboSuggestion, Creature, CreatureInCombo};
///
/// let constraints = ComboConstraints::new(800, 3, 4);
/// let combo = ComboSuggestion::new(
///     vec![
///         CreatureInCombo::new(Creature::new("Goblin", "goblin.html", "1/4", CombatRole::Skirmisher), 2),
///         CreatureInCombo::new(Creature::new("Bugbear Chief", "bugbear-chief.html", "3", CombatRole::Striker), 1),
///     ],
///     &constraints,
/// );
/// assert_eq!(format_description(&combo), "2× Goblin (CR 1/4) + Bugbear Chief (CR 3)");
/// ```
pub fn format_description(combo: &ComboSuggestion) -> String {
    combo
        .entries()
        .iter()
        .map(|e| {
            let cr = e.creature.cr.trim();
            if e.count > 1 {
                format!("{}× {} (CR {})", e.count, e.creature.name, cr)
            } else {
                format!("{} (CR {})", e.creature.name, cr)
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Builds the display summary of a combo.
pub fn combo_stats(combo: &ComboSuggestion) -> ComboStats {
    ComboStats {
        description: format_description(combo),
        total_xp: combo.total_xp(),
        percent_of_budget: combo.percent_of_budget().round().max(0.0) as u32,
        creature_count: combo.total_creature_count(),
        stat_blocks: combo.stat_block_count(),
        ratio: (combo.ratio() * 10.0).round() / 10.0,
        profile: combo
            .profile()
            .map(|p| p.as_str().to_string())
            .unwrap_or_default(),
        warnings: combo.warnings().to_vec(),
        score: combo.score().round().max(0.0) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CombatRole, ComboConstraints, Creature, CreatureInCombo};

    #[test]
    fn test_single_entry_description() {
        let constraints = ComboConstraints::new(450, 3, 4);
        let combo = ComboSuggestion::new(
            vec![CreatureInCombo::new(
                Creature::new("Ogre", "ogre.html", "2", CombatRole::Tank),
                1,
            )],
            &constraints,
        );
        assert_eq!(format_description(&combo), "Ogre (CR 2)");
    }

    #[test]
    fn test_stats_rounding() {
        let constraints = ComboConstraints::new(720, 3, 3);
        let mut combo = ComboSuggestion::new(
            vec![
                CreatureInCombo::new(
                    Creature::new("Orc", "orc.html", "1/2", CombatRole::Striker),
                    3,
                ),
                CreatureInCombo::new(
                    Creature::new("Orog", "orog.html", "2", CombatRole::Tank),
                    1,
                ),
            ],
            &constraints,
        );
        combo.annotate(&constraints);

        let stats = combo_stats(&combo);
        assert_eq!(stats.description, "3× Orc (CR 1/2) + Orog (CR 2)");
        assert_eq!(stats.total_xp, 750);
        // 750 / 720 = 104.17%
        assert_eq!(stats.percent_of_budget, 104);
        assert_eq!(stats.creature_count, 4);
        assert_eq!(stats.stat_blocks, 2);
        // 4 / 3 = 1.33
        assert_eq!(stats.ratio, 1.3);
        assert_eq!(stats.profile, "balanced");
        assert!(stats.warnings.is_empty());
        // 35 * 95.83 / 100 + 30 + 18 + 8 + 3 = 92.54
        assert_eq!(stats.score, 93);
    }

    #[test]
    fn test_stats_before_annotation() {
        let constraints = ComboConstraints::new(450, 3, 4);
        let combo = ComboSuggestion::new(
            vec![CreatureInCombo::new(
                Creature::new("Ogre", "ogre.html", "2", CombatRole::Tank),
                1,
            )],
            &constraints,
        );
        let stats = combo_stats(&combo);
        assert_eq!(stats.profile, "");
        assert_eq!(stats.score, 0);
        assert_eq!(stats.percent_of_budget, 100);
    }
}
