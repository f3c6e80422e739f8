//! # Ranking and Diversity
//!
//! Orders scored combos best-first and collapses near-duplicates that share
//! the same multiset of (count, CR) pairs.

use crate::{ComboSuggestion, SearchLimits};
use std::collections::HashMap;

/// Canonical CR pattern of a combo: sorted `"<count>xCR<cr>"` tokens joined
/// by commas.
///
/// # Examples
///
/// ```
/// use warband::{cr_signature, CombatRole, ComboConstraints, ComboSuggestion, Creature, CreatureInCombo};
///
/// let constraints = ComboConstraints::new(550, 3, 4);
/// let combo = ComboSuggestion::new(
///     vec![
///         CreatureInCombo::new(Creature::new("Ogre", "ogre.html", "2", CombatRole::Tank), 1),
///         CreatureInCombo::new(Creature::new("Goblin", "goblin.html", "1/4", CombatRole::Skirmisher), 2),
///     ],
///     &constraints,
/// );
/// assert_eq!(cr_signature(&combo), "1xCR2,2xCR1/4");
/// ```
pub fn cr_signature(combo: &ComboSuggestion) -> String {
    let mut tokens: Vec<String> = combo
        .entries()
        .iter()
        .map(|e| format!("{}xCR{}", e.count, e.creature.cr.trim()))
        .collect();
    tokens.sort();
    tokens.join(",")
}

/// Sorts combos by descending score. Ties keep their generation order.
pub fn rank_combos(mut combos: Vec<ComboSuggestion>) -> Vec<ComboSuggestion> {
    combos.sort_by(|a, b| b.score().total_cmp(&a.score()));
    combos
}

/// Walks ranked combos and keeps at most `max_per_signature` per CR pattern,
/// stopping once `max_suggestions` are kept. Order is preserved.
pub fn diversify(ranked: Vec<ComboSuggestion>, limits: &SearchLimits) -> Vec<ComboSuggestion> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut kept = Vec::new();

    for combo in ranked {
        if kept.len() >= limits.max_suggestions {
            break;
        }
        let uses = seen.entry(cr_signature(&combo)).or_insert(0);
        if *uses < limits.max_per_signature {
            *uses += 1;
            kept.push(combo);
        }
    }

    kept
}
