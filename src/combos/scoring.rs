//! # Combo Scoring
//!
//! Weighted heuristic that rates how pleasant a combo is to run. The score
//! is a ranking key in `[0, 100]`, not a probability.
//!
//! | Factor                   | Max |
//! |--------------------------|-----|
//! | Budget accuracy          | 35  |
//! | Creature count           | 30  |
//! | Stat-block simplicity    | 20  |
//! | Creature-to-party ratio  | 10  |
//! | Role diversity           | 5   |
//!
//! Low-level parties facing more than two creatures each lose 20 points.

use crate::{ComboConstraints, ComboSuggestion};
use std::collections::HashSet;

/// Weight of hitting the budget exactly.
pub const BUDGET_ACCURACY_WEIGHT: f64 = 35.0;

/// Penalty for swarming a low-level party.
pub const LOW_LEVEL_SWARM_PENALTY: f64 = 20.0;

/// Highest party level that counts as low level.
pub const LOW_LEVEL_MAX: u32 = 2;

/// Ratio above which low-level parties are considered swarmed.
pub const LOW_LEVEL_MAX_RATIO: f64 = 2.0;

/// Scores a combo against its constraints, clamped to `[0, 100]`.
///
/// Budget accuracy and ratio are measured against `constraints`, not the
/// figures the combo was built with, so edited combos can be re-scored.
///
/// # Examples
///
/// ```
/// use warband::{score_combo, CombatRole, ComboConstraints, ComboSuggestion, Creature, CreatureInCombo};
///
/// let ogre = Creature::new("Ogre", "ogre.html", "2", CombatRole::Tank);
/// let constraints = ComboConstraints::new(450, 3, 4);
/// let combo = ComboSuggestion::new(vec![CreatureInCombo::new(ogre, 1)], &constraints);
///
/// // 35 budget + 25 count + 20 simplicity + 10 ratio
/// assert_eq!(score_combo(&combo, &constraints), 90.0);
/// ```
pub fn score_combo(combo: &ComboSuggestion, constraints: &ComboConstraints) -> f64 {
    let ratio = constraints.party_ratio(combo.total_creature_count());

    let mut score = budget_accuracy_points(constraints.percent_of_budget(combo.total_xp()))
        + creature_count_points(combo.total_creature_count())
        + stat_block_points(combo.stat_block_count())
        + ratio_points(ratio)
        + role_diversity_points(combo);

    if constraints.party_level <= LOW_LEVEL_MAX && ratio > LOW_LEVEL_MAX_RATIO {
        score -= LOW_LEVEL_SWARM_PENALTY;
    }

    score.clamp(0.0, 100.0)
}

/// Up to 35 points, falling off linearly as the total drifts from the budget.
pub fn budget_accuracy_points(percent_of_budget: f64) -> f64 {
    BUDGET_ACCURACY_WEIGHT * (100.0 - (100.0 - percent_of_budget).abs()) / 100.0
}

/// Prefers two to four creatures.
pub fn creature_count_points(total_creatures: u32) -> f64 {
    match total_creatures {
        0 => 0.0,
        1 => 25.0,
        2..=4 => 30.0,
        5 => 20.0,
        6 => 15.0,
        7 | 8 => 10.0,
        _ => 5.0,
    }
}

/// Fewer distinct stat blocks are easier to run.
pub fn stat_block_points(stat_blocks: usize) -> f64 {
    match stat_blocks {
        0 | 1 => 20.0,
        2 => 18.0,
        3 => 12.0,
        4 => 5.0,
        _ => 0.0,
    }
}

/// Fewer creatures per character keeps turns moving.
pub fn ratio_points(ratio: f64) -> f64 {
    if ratio <= 1.0 {
        10.0
    } else if ratio <= 1.5 {
        8.0
    } else if ratio <= 2.0 {
        5.0
    } else if ratio <= 2.5 {
        2.0
    } else {
        0.0
    }
}

/// Bonus for mixing combat roles.
pub fn role_diversity_points(combo: &ComboSuggestion) -> f64 {
    let roles: HashSet<_> = combo
        .entries()
        .iter()
        .map(|e| e.creature.combat_role)
        .collect();
    match roles.len() {
        0 | 1 => 0.0,
        2 => 3.0,
        _ => 5.0,
    }
}
