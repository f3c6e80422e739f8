//! # Combo Warnings
//!
//! Human-readable cautions for dangerous, oversized or fiddly combos. Each
//! check is independent; a combo may carry none or several.

use crate::{
    is_dangerous, is_zero_cr, ComboConstraints, ComboSuggestion, LOW_LEVEL_MAX, LOW_LEVEL_MAX_RATIO,
};

/// Ratio above which combat is expected to drag.
pub const SLOW_COMBAT_RATIO: f64 = 2.5;

/// Stat blocks above which a combo is considered complex.
pub const COMPLEX_STAT_BLOCKS: usize = 3;

/// CR 0 creatures above which swarm rules are suggested.
pub const SWARM_THRESHOLD: u32 = 3;

/// Generates the warnings for a combo.
///
/// # Examples
///
/// ```
/// use warband::{generate_warnings, CombatRole, ComboConstraints, ComboSuggestion, Creature, CreatureInCombo};
///
/// let troll = Creature::new("Troll", "troll.html", "5", CombatRole::Tank);
/// let constraints = ComboConstraints::new(1800, 3, 4);
/// let combo = ComboSuggestion::new(vec![CreatureInCombo::new(troll, 1)], &constraints);
///
/// let warnings = generate_warnings(&combo, &constraints);
/// assert_eq!(warnings.len(), 2);
/// assert!(warnings[0].contains("may deal massive damage"));
/// ```
pub fn generate_warnings(combo: &ComboSuggestion, constraints: &ComboConstraints) -> Vec<String> {
    let mut warnings = Vec::new();
    let level = constraints.party_level;
    let ratio = constraints.party_ratio(combo.total_creature_count());

    for entry in combo.entries() {
        if is_dangerous(&entry.creature, level) {
            warnings.push(format!(
                "{} (CR {}) is above party level {} and may deal massive damage or one-shot characters",
                entry.creature.name,
                entry.creature.cr.trim(),
                level
            ));
        }
    }

    if ratio > SLOW_COMBAT_RATIO {
        warnings.push(format!(
            "High creature-to-party ratio ({:.1}:1), combat may be slow",
            ratio
        ));
    }

    if level <= LOW_LEVEL_MAX && ratio > LOW_LEVEL_MAX_RATIO {
        warnings.push(format!(
            "{} creatures against a level {} party is very dangerous",
            combo.total_creature_count(),
            level
        ));
    }

    if combo.stat_block_count() > COMPLEX_STAT_BLOCKS {
        warnings.push(format!(
            "{} different stat blocks, complex to run",
            combo.stat_block_count()
        ));
    }

    let zero_cr_creatures: u32 = combo
        .entries()
        .iter()
        .filter(|e| is_zero_cr(&e.creature))
        .map(|e| e.count)
        .sum();
    if zero_cr_creatures > SWARM_THRESHOLD {
        warnings.push(format!(
            "{} CR 0 creatures, consider running them as swarms",
            zero_cr_creatures
        ));
    }

    if combo.total_creature_count() == 1 {
        warnings.push(
            "A single creature may end quickly, consider legendary actions or lair effects"
                .to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CombatRole, Creature, CreatureInCombo};

    fn creature(name: &str, cr: &str, role: CombatRole) -> Creature {
        Creature::new(name, format!("{}.html", name.to_lowercase()), cr, role)
    }

    fn combo(entries: Vec<(Creature, u32)>, constraints: &ComboConstraints) -> ComboSuggestion {
        let entries = entries
            .into_iter()
            .map(|(c, n)| CreatureInCombo::new(c, n))
            .collect();
        ComboSuggestion::new(entries, constraints)
    }

    #[test]
    fn test_clean_combo_has_no_warnings() {
        let constraints = ComboConstraints::new(150, 3, 4);
        let combo = combo(
            vec![
                (creature("Goblin", "1/4", CombatRole::Skirmisher), 2),
                (creature("Wolf", "1/4", CombatRole::Skirmisher), 1),
            ],
            &constraints,
        );
        assert!(generate_warnings(&combo, &constraints).is_empty());
    }

    #[test]
    fn test_dangerous_creature_warning_per_entry() {
        let constraints = ComboConstraints::new(3000, 2, 4);
        let combo = combo(
            vec![
                (creature("Troll", "5", CombatRole::Tank), 1),
                (creature("Wight", "3", CombatRole::Striker), 1),
                (creature("Goblin", "1/4", CombatRole::Skirmisher), 1),
            ],
            &constraints,
        );
        let warnings = generate_warnings(&combo, &constraints);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Troll (CR 5)"));
        assert!(warnings[1].starts_with("Wight (CR 3)"));
    }

    #[test]
    fn test_slow_and_low_level_warnings_stack() {
        let constraints = ComboConstraints::new(200, 1, 2);
        let combo = combo(vec![(creature("Kobold", "1/8", CombatRole::Skirmisher), 6)], &constraints);
        let warnings = generate_warnings(&combo, &constraints);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("(3.0:1), combat may be slow"));
        assert!(warnings[1].contains("very dangerous"));
    }

    #[test]
    fn test_low_level_warning_without_slow_combat() {
        // ratio 2.5 is swarming a level 1 party but not yet slow
        let constraints = ComboConstraints::new(125, 1, 2);
        let combo = combo(vec![(creature("Kobold", "1/8", CombatRole::Skirmisher), 5)], &constraints);
        let warnings = generate_warnings(&combo, &constraints);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("very dangerous"));
    }

    #[test]
    fn test_complexity_warning() {
        let constraints = ComboConstraints::new(400, 5, 4);
        let combo = combo(
            vec![
                (creature("A", "1/2", CombatRole::Striker), 1),
                (creature("B", "1/2", CombatRole::Tank), 1),
                (creature("C", "1/2", CombatRole::Support), 1),
                (creature("D", "1/2", CombatRole::Artillery), 1),
            ],
            &constraints,
        );
        let warnings = generate_warnings(&combo, &constraints);
        assert_eq!(warnings, vec!["4 different stat blocks, complex to run".to_string()]);
    }

    #[test]
    fn test_swarm_warning_counts_creatures() {
        let constraints = ComboConstraints::new(100, 5, 4);
        let combo = combo(
            vec![
                (creature("Rat", "0", CombatRole::Skirmisher), 2),
                (creature("Bat", "0", CombatRole::Skirmisher), 2),
                (creature("Goblin", "1/4", CombatRole::Skirmisher), 2),
            ],
            &constraints,
        );
        let warnings = generate_warnings(&combo, &constraints);
        assert!(warnings.contains(&"4 CR 0 creatures, consider running them as swarms".to_string()));
    }

    #[test]
    fn test_ratio_follows_new_party_size() {
        let built_for = ComboConstraints::new(150, 3, 4);
        let combo = combo(vec![(creature("Kobold", "1/8", CombatRole::Skirmisher), 3)], &built_for);
        assert!(generate_warnings(&combo, &built_for).is_empty());

        let lone_hero = ComboConstraints::new(150, 3, 1);
        let warnings = generate_warnings(&combo, &lone_hero);
        assert_eq!(warnings, vec!["High creature-to-party ratio (3.0:1), combat may be slow".to_string()]);
    }

    #[test]
    fn test_solo_warning() {
        let constraints = ComboConstraints::new(450, 3, 4);
        let combo = combo(vec![(creature("Ogre", "2", CombatRole::Tank), 1)], &constraints);
        let warnings = generate_warnings(&combo, &constraints);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("legendary actions"));
    }
}
