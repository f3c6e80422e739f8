//! # Candidate Generators
//!
//! Five independent strategies that enumerate bounded creature/count
//! assignments and keep those landing inside the target XP band.
//!
//! Each strategy scans the catalog in order and returns unscored combos. The
//! scan caps in [`SearchLimits`] bound the leading dimension of every nested
//! loop, so large catalogs are searched partially rather than exhaustively.

use crate::{
    is_below_party_level, is_boss_candidate, ComboConstraints, ComboSuggestion, Creature,
    CreatureInCombo, SearchLimits,
};

/// Count pairs tried for every duo.
pub const DUO_COUNTS: [(u32, u32); 10] = [
    (1, 1),
    (1, 2),
    (2, 1),
    (2, 2),
    (1, 3),
    (3, 1),
    (2, 3),
    (3, 2),
    (1, 4),
    (4, 1),
];

/// Count triples tried for every trio.
pub const TRIO_COUNTS: [(u32, u32, u32); 4] = [(1, 1, 1), (2, 1, 1), (1, 2, 1), (1, 1, 2)];

/// Largest number of a single minion type beside an elite.
pub const MAX_MINIONS_PER_TYPE: u32 = 4;

/// Count pairs tried for two guard types beside an elite.
pub const GUARD_COUNTS: [(u32, u32); 4] = [(1, 1), (1, 2), (2, 1), (2, 2)];

/// Builds a combo from `(creature, count)` parts if it fits the band and the
/// creature cap. XP is checked before anything is cloned.
fn try_combo(
    parts: &[(&Creature, u32)],
    constraints: &ComboConstraints,
    max_creatures: u32,
) -> Option<ComboSuggestion> {
    let creature_count: u32 = parts.iter().map(|(_, count)| count).sum();
    if creature_count > max_creatures {
        return None;
    }

    let total_xp = parts
        .iter()
        .fold(0u32, |sum, (c, count)| sum.saturating_add(c.xp().saturating_mul(*count)));
    if !constraints.in_band(total_xp) {
        return None;
    }

    let entries = parts
        .iter()
        .map(|(creature, count)| CreatureInCombo::new((*creature).clone(), *count))
        .collect();
    Some(ComboSuggestion::new(entries, constraints))
}

/// A single creature whose own XP already lands in the band.
pub fn solo_boss_combos(
    catalog: &[Creature],
    constraints: &ComboConstraints,
    limits: &SearchLimits,
) -> Vec<ComboSuggestion> {
    let cap = constraints.creature_cap(limits.party_multiplier);
    catalog
        .iter()
        .filter_map(|creature| try_combo(&[(creature, 1)], constraints, cap))
        .collect()
}

/// Two distinct creatures from the front of the catalog, with small counts.
pub fn duo_combos(
    catalog: &[Creature],
    constraints: &ComboConstraints,
    limits: &SearchLimits,
) -> Vec<ComboSuggestion> {
    let cap = constraints
        .creature_cap(limits.party_multiplier)
        .min(limits.small_combo_max_creatures);
    let scan = &catalog[..catalog.len().min(limits.duo_scan_cap)];
    let mut combos = Vec::new();

    for (i, first) in scan.iter().enumerate() {
        for second in &scan[i + 1..] {
            if first.file == second.file {
                continue;
            }
            for (a, b) in DUO_COUNTS {
                combos.extend(try_combo(&[(first, a), (second, b)], constraints, cap));
            }
        }
    }

    combos
}

/// Three distinct creatures from the front of the catalog, one or two of each.
pub fn trio_combos(
    catalog: &[Creature],
    constraints: &ComboConstraints,
    limits: &SearchLimits,
) -> Vec<ComboSuggestion> {
    let cap = constraints
        .creature_cap(limits.party_multiplier)
        .min(limits.small_combo_max_creatures);
    let scan = &catalog[..catalog.len().min(limits.trio_scan_cap)];
    let mut combos = Vec::new();

    for (i, first) in scan.iter().enumerate() {
        for (j, second) in scan.iter().enumerate().skip(i + 1) {
            if second.file == first.file {
                continue;
            }
            for third in &scan[j + 1..] {
                if third.file == first.file || third.file == second.file {
                    continue;
                }
                for (a, b, c) in TRIO_COUNTS {
                    combos.extend(try_combo(
                        &[(first, a), (second, b), (third, c)],
                        constraints,
                        cap,
                    ));
                }
            }
        }
    }

    combos
}

/// A boss candidate backed by one or two types of lower-CR minions.
pub fn elite_with_minions_combos(
    catalog: &[Creature],
    constraints: &ComboConstraints,
    limits: &SearchLimits,
) -> Vec<ComboSuggestion> {
    let cap = constraints.creature_cap(limits.relaxed_party_multiplier);
    let level = constraints.party_level;
    let minions: Vec<&Creature> = catalog
        .iter()
        .filter(|c| is_below_party_level(c, level))
        .collect();
    let guard_scan = &minions[..minions.len().min(limits.minion_pair_scan_cap)];
    let mut combos = Vec::new();

    for boss in catalog.iter().filter(|c| is_boss_candidate(c, level)) {
        for minion in minions.iter().filter(|m| m.file != boss.file) {
            for count in 1..=MAX_MINIONS_PER_TYPE {
                combos.extend(try_combo(&[(boss, 1), (*minion, count)], constraints, cap));
            }
        }

        for (i, &first) in guard_scan.iter().enumerate() {
            if first.file == boss.file {
                continue;
            }
            for &second in &guard_scan[i + 1..] {
                if second.file == boss.file || second.file == first.file {
                    continue;
                }
                for (a, b) in GUARD_COUNTS {
                    combos.extend(try_combo(
                        &[(boss, 1), (first, a), (second, b)],
                        constraints,
                        cap,
                    ));
                }
            }
        }
    }

    combos
}

/// A group of identical creatures.
pub fn homogeneous_combos(
    catalog: &[Creature],
    constraints: &ComboConstraints,
    limits: &SearchLimits,
) -> Vec<ComboSuggestion> {
    let cap = constraints.creature_cap(limits.relaxed_party_multiplier);
    let mut combos = Vec::new();

    for creature in catalog {
        for count in limits.homogeneous_min_count..=limits.homogeneous_max_count {
            combos.extend(try_combo(&[(creature, count)], constraints, cap));
        }
    }

    combos
}
