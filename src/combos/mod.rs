//! # Combos Module
//!
//! Encounter combo generation, scoring and ranking.
//!
//! Generation runs in fixed stages:
//! 1. Five independent strategies enumerate bounded candidate sets
//! 2. Every candidate is scored, annotated with warnings and classified
//! 3. Candidates are ranked best-first and near-duplicates are collapsed
//!
//! All stages are pure functions over an in-memory catalog.

pub mod dedup;
pub mod display;
pub mod generators;
pub mod profile;
pub mod scoring;
pub mod warnings;

pub use dedup::*;
pub use display::*;
pub use generators::*;
pub use profile::*;
pub use scoring::*;
pub use warnings::*;

use crate::{
    config, prepare_catalog, xp_budget, Creature, Difficulty, ThemeFilter, WarbandError,
    WarbandResult, MAX_PARTY_LEVEL, MIN_PARTY_LEVEL,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Budget and party parameters a combo must satisfy.
///
/// Callers are expected to keep `target_xp_min <= budget <= target_xp_max`;
/// [`ComboConstraints::validate`] checks this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboConstraints {
    /// Total XP budget for the encounter
    pub budget: u32,
    /// Average party level (1-20)
    pub party_level: u32,
    /// Number of player characters
    pub party_size: u32,
    /// Smallest acceptable combo XP
    pub target_xp_min: u32,
    /// Largest acceptable combo XP
    pub target_xp_max: u32,
}

impl ComboConstraints {
    /// Creates constraints with the conventional ±5% band around the budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use warband::ComboConstraints;
    ///
    /// let constraints = ComboConstraints::new(450, 3, 4);
    /// assert_eq!(constraints.target_xp_min, 427);
    /// assert_eq!(constraints.target_xp_max, 473);
    /// ```
    pub fn new(budget: u32, party_level: u32, party_size: u32) -> Self {
        Self::with_band_percent(budget, party_level, party_size, config::BAND_PERCENT)
    }

    /// Creates constraints with a symmetric band of `percent` around the budget.
    ///
    /// The lower bound rounds down and the upper bound rounds up.
    pub fn with_band_percent(budget: u32, party_level: u32, party_size: u32, percent: u32) -> Self {
        let percent = u64::from(percent.min(100));
        let budget_wide = u64::from(budget);
        let min = budget_wide * (100 - percent) / 100;
        let max = (budget_wide * (100 + percent)).div_ceil(100);
        Self::with_band(
            budget,
            party_level,
            party_size,
            min as u32,
            max.min(u64::from(u32::MAX)) as u32,
        )
    }

    /// Creates constraints with an explicit target band.
    pub fn with_band(
        budget: u32,
        party_level: u32,
        party_size: u32,
        target_xp_min: u32,
        target_xp_max: u32,
    ) -> Self {
        Self {
            budget,
            party_level,
            party_size,
            target_xp_min,
            target_xp_max,
        }
    }

    /// Derives the budget from the party and a difficulty tier, then applies
    /// the conventional band.
    ///
    /// # Examples
    ///
    /// ```
    /// use warband::{ComboConstraints, Difficulty};
    ///
    /// let constraints = ComboConstraints::for_party(3, 4, Difficulty::Moderate);
    /// assert_eq!(constraints.budget, 900);
    /// ```
    pub fn for_party(party_level: u32, party_size: u32, difficulty: Difficulty) -> Self {
        Self::new(xp_budget(party_level, party_size, difficulty), party_level, party_size)
    }

    /// Checks the caller-side contract of these constraints.
    pub fn validate(&self) -> WarbandResult<()> {
        if !(MIN_PARTY_LEVEL..=MAX_PARTY_LEVEL).contains(&self.party_level) {
            return Err(WarbandError::InvalidConstraints(format!(
                "party level {} is outside {}-{}",
                self.party_level, MIN_PARTY_LEVEL, MAX_PARTY_LEVEL
            )));
        }
        if self.party_size == 0 {
            return Err(WarbandError::InvalidConstraints(
                "party size must be at least 1".to_string(),
            ));
        }
        if self.budget == 0 {
            return Err(WarbandError::InvalidConstraints(
                "budget must be at least 1 XP".to_string(),
            ));
        }
        if self.target_xp_min > self.budget || self.budget > self.target_xp_max {
            return Err(WarbandError::InvalidConstraints(format!(
                "target band {}-{} does not contain budget {}",
                self.target_xp_min, self.target_xp_max, self.budget
            )));
        }
        Ok(())
    }

    /// Whether a total XP value lies inside the target band.
    pub fn in_band(&self, total_xp: u32) -> bool {
        (self.target_xp_min..=self.target_xp_max).contains(&total_xp)
    }

    /// A total XP value as a percentage of the budget, 0 for a zero budget.
    pub fn percent_of_budget(&self, total_xp: u32) -> f64 {
        if self.budget == 0 {
            0.0
        } else {
            total_xp as f64 / self.budget as f64 * 100.0
        }
    }

    /// Creatures per party member, 0 for an empty party.
    pub fn party_ratio(&self, creatures: u32) -> f64 {
        if self.party_size == 0 {
            0.0
        } else {
            creatures as f64 / self.party_size as f64
        }
    }

    /// Largest creature count allowed for a party multiplier, rounded up.
    pub fn creature_cap(&self, multiplier: f64) -> u32 {
        (self.party_size as f64 * multiplier).ceil().max(0.0) as u32
    }
}

/// Tunable bounds for candidate search and ranking.
///
/// The scan caps bound the leading dimension of each nested enumeration so
/// worst-case work stays small no matter how large the catalog is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Leading catalog entries scanned for duos
    pub duo_scan_cap: usize,
    /// Leading catalog entries scanned for trios
    pub trio_scan_cap: usize,
    /// Leading minion candidates scanned for two guard types
    pub minion_pair_scan_cap: usize,
    /// Creatures per party member for most strategies
    pub party_multiplier: f64,
    /// Creatures per party member for elite and homogeneous groups
    pub relaxed_party_multiplier: f64,
    /// Largest creature count for duos and trios
    pub small_combo_max_creatures: u32,
    /// Smallest homogeneous group
    pub homogeneous_min_count: u32,
    /// Largest homogeneous group
    pub homogeneous_max_count: u32,
    /// Suggestions kept per CR pattern
    pub max_per_signature: usize,
    /// Suggestions returned per run
    pub max_suggestions: usize,
    /// Target band width around the budget, in percent
    pub band_percent: u32,
}

impl SearchLimits {
    /// Creates the default limits.
    pub fn new() -> Self {
        Self {
            duo_scan_cap: config::DUO_SCAN_CAP,
            trio_scan_cap: config::TRIO_SCAN_CAP,
            minion_pair_scan_cap: config::MINION_PAIR_SCAN_CAP,
            party_multiplier: config::PARTY_MULTIPLIER,
            relaxed_party_multiplier: config::RELAXED_PARTY_MULTIPLIER,
            small_combo_max_creatures: config::SMALL_COMBO_MAX_CREATURES,
            homogeneous_min_count: config::HOMOGENEOUS_MIN_COUNT,
            homogeneous_max_count: config::HOMOGENEOUS_MAX_COUNT,
            max_per_signature: config::MAX_PER_SIGNATURE,
            max_suggestions: config::MAX_SUGGESTIONS,
            band_percent: config::BAND_PERCENT,
        }
    }

    /// Creates limits with small scan caps for quick runs.
    pub fn for_testing() -> Self {
        Self {
            duo_scan_cap: 10,
            trio_scan_cap: 8,
            minion_pair_scan_cap: 5,
            ..Self::new()
        }
    }

    /// Loads limits from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> WarbandResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new()
    }
}

/// One creature type in a combo, with how many of it appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureInCombo {
    /// The catalog creature
    pub creature: Creature,
    /// Number of identical creatures (at least 1)
    pub count: u32,
}

impl CreatureInCombo {
    /// Creates an entry.
    pub fn new(creature: Creature, count: u32) -> Self {
        Self { creature, count }
    }

    /// XP contributed by this entry.
    pub fn total_xp(&self) -> u32 {
        self.creature.xp().saturating_mul(self.count)
    }
}

/// A candidate encounter: creatures plus the figures derived from them.
///
/// Derived fields are private and always recomputed together whenever the
/// entries change. Score, warnings and profile are filled in by
/// [`ComboSuggestion::annotate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComboSuggestion {
    entries: Vec<CreatureInCombo>,
    budget: u32,
    party_size: u32,
    total_xp: u32,
    percent_of_budget: f64,
    stat_block_count: usize,
    total_creature_count: u32,
    ratio: f64,
    profile: Option<MixProfile>,
    warnings: Vec<String>,
    score: f64,
}

impl ComboSuggestion {
    /// Creates an unscored combo from its entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use warband::{CombatRole, ComboConstraints, ComboSuggestion, Creature, CreatureInCombo};
    ///
    /// let goblin = Creature::new("Goblin", "goblin.html", "1/4", CombatRole::Skirmisher);
    /// let constraints = ComboConstraints::new(200, 1, 4);
    /// let combo = ComboSuggestion::new(vec![CreatureInCombo::new(goblin, 4)], &constraints);
    ///
    /// assert_eq!(combo.total_xp(), 200);
    /// assert_eq!(combo.percent_of_budget(), 100.0);
    /// assert_eq!(combo.ratio(), 1.0);
    /// assert_eq!(combo.score(), 0.0);
    /// ```
    pub fn new(entries: Vec<CreatureInCombo>, constraints: &ComboConstraints) -> Self {
        let mut combo = Self {
            entries: Vec::new(),
            budget: constraints.budget,
            party_size: constraints.party_size,
            total_xp: 0,
            percent_of_budget: 0.0,
            stat_block_count: 0,
            total_creature_count: 0,
            ratio: 0.0,
            profile: None,
            warnings: Vec::new(),
            score: 0.0,
        };
        combo.set_entries(entries, constraints);
        combo
    }

    /// Replaces the entries and recomputes every derived field.
    ///
    /// Zero-count entries are dropped. Score, warnings and profile are reset.
    pub fn set_entries(&mut self, entries: Vec<CreatureInCombo>, constraints: &ComboConstraints) {
        self.entries = entries.into_iter().filter(|e| e.count > 0).collect();
        self.budget = constraints.budget;
        self.party_size = constraints.party_size;
        self.recompute();
    }

    /// Adds creatures, merging with an existing entry from the same catalog file.
    pub fn add_creature(&mut self, creature: Creature, count: u32) {
        if count == 0 {
            return;
        }
        match self.entries.iter_mut().find(|e| e.creature.file == creature.file) {
            Some(entry) => entry.count = entry.count.saturating_add(count),
            None => self.entries.push(CreatureInCombo::new(creature, count)),
        }
        self.recompute();
    }

    /// Removes the entry for a catalog file. Returns whether anything was removed.
    pub fn remove_creature(&mut self, file: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.creature.file != file);
        let removed = self.entries.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Runs the scorer, warning generator and profile classifier.
    ///
    /// A combo annotated under a different budget or party size is
    /// re-targeted first so its derived figures match the new constraints.
    pub fn annotate(&mut self, constraints: &ComboConstraints) {
        if self.budget != constraints.budget || self.party_size != constraints.party_size {
            self.budget = constraints.budget;
            self.party_size = constraints.party_size;
            self.recompute();
        }
        self.score = score_combo(self, constraints);
        self.warnings = generate_warnings(self, constraints);
        self.profile = Some(classify_profile(self));
    }

    fn recompute(&mut self) {
        self.total_xp = self
            .entries
            .iter()
            .fold(0u32, |sum, e| sum.saturating_add(e.total_xp()));
        self.total_creature_count = self
            .entries
            .iter()
            .fold(0u32, |sum, e| sum.saturating_add(e.count));

        let mut files: Vec<&str> = self.entries.iter().map(|e| e.creature.file.as_str()).collect();
        files.sort_unstable();
        files.dedup();
        self.stat_block_count = files.len();

        let target = ComboConstraints::with_band(self.budget, 0, self.party_size, 0, 0);
        self.percent_of_budget = target.percent_of_budget(self.total_xp);
        self.ratio = target.party_ratio(self.total_creature_count);

        self.profile = None;
        self.warnings.clear();
        self.score = 0.0;
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[CreatureInCombo] {
        &self.entries
    }

    /// Sum of count × XP over all entries.
    pub fn total_xp(&self) -> u32 {
        self.total_xp
    }

    /// Total XP as a percentage of the budget.
    pub fn percent_of_budget(&self) -> f64 {
        self.percent_of_budget
    }

    /// Number of distinct creature types.
    pub fn stat_block_count(&self) -> usize {
        self.stat_block_count
    }

    /// Number of individual creatures.
    pub fn total_creature_count(&self) -> u32 {
        self.total_creature_count
    }

    /// Creatures per party member.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Compositional profile, once annotated.
    pub fn profile(&self) -> Option<MixProfile> {
        self.profile
    }

    /// Caution strings, once annotated.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Desirability score in `[0, 100]`, once annotated.
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Generates ranked, deduplicated combos with the default [`SearchLimits`].
///
/// The catalog should already be filtered (see [`prepare_catalog`]).
pub fn generate_combos(catalog: &[Creature], constraints: &ComboConstraints) -> Vec<ComboSuggestion> {
    generate_combos_with(catalog, constraints, &SearchLimits::default())
}

type Strategy = fn(&[Creature], &ComboConstraints, &SearchLimits) -> Vec<ComboSuggestion>;

/// Strategies in the order their candidates are concatenated.
const STRATEGIES: [(&str, Strategy); 5] = [
    ("solo boss", solo_boss_combos),
    ("duo", duo_combos),
    ("balanced trio", trio_combos),
    ("elite with minions", elite_with_minions_combos),
    ("homogeneous", homogeneous_combos),
];

/// Generates ranked, deduplicated combos with explicit limits.
///
/// Returns an empty list when the target band is inverted.
pub fn generate_combos_with(
    catalog: &[Creature],
    constraints: &ComboConstraints,
    limits: &SearchLimits,
) -> Vec<ComboSuggestion> {
    if constraints.target_xp_min > constraints.target_xp_max {
        log::warn!(
            "Target band {}-{} is inverted, no combos generated",
            constraints.target_xp_min,
            constraints.target_xp_max
        );
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for (name, strategy) in STRATEGIES {
        let found = strategy(catalog, constraints, limits);
        log::debug!("{} strategy produced {} candidates", name, found.len());
        candidates.extend(found);
    }

    for combo in &mut candidates {
        combo.annotate(constraints);
    }

    let candidate_count = candidates.len();
    let kept = diversify(rank_combos(candidates), limits);

    log::info!(
        "Generated {} candidates from {} creatures, kept {}",
        candidate_count,
        catalog.len(),
        kept.len()
    );

    kept
}

/// A caller's request, as picked in an encounter builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRequest {
    /// Average party level
    pub party_level: u32,
    /// Number of player characters
    pub party_size: u32,
    /// Difficulty tier used to size the budget
    pub difficulty: Difficulty,
    /// Optional thematic narrowing
    #[serde(default)]
    pub theme: ThemeFilter,
}

impl EncounterRequest {
    /// Creates a request with no thematic narrowing.
    pub fn new(party_level: u32, party_size: u32, difficulty: Difficulty) -> Self {
        Self {
            party_level,
            party_size,
            difficulty,
            theme: ThemeFilter::any(),
        }
    }

    /// Sets the thematic filter.
    pub fn with_theme(mut self, theme: ThemeFilter) -> Self {
        self.theme = theme;
        self
    }

    /// Constraints derived from this request and the band width in `limits`.
    pub fn constraints(&self, limits: &SearchLimits) -> ComboConstraints {
        let budget = xp_budget(self.party_level, self.party_size, self.difficulty);
        ComboConstraints::with_band_percent(
            budget,
            self.party_level,
            self.party_size,
            limits.band_percent,
        )
    }
}

/// Result of [`suggest_encounters`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncounterSuggestions {
    /// Constraints the suggestions were generated against
    pub constraints: ComboConstraints,
    /// Number of creatures left after catalog filtering
    pub eligible_creatures: usize,
    /// Ranked suggestions, best first
    pub suggestions: Vec<ComboSuggestion>,
}

/// Derives constraints, filters the catalog and generates combos.
pub fn suggest_encounters(
    catalog: &[Creature],
    request: &EncounterRequest,
    limits: &SearchLimits,
) -> EncounterSuggestions {
    let constraints = request.constraints(limits);
    let eligible = prepare_catalog(catalog, &constraints, &request.theme);
    let suggestions = generate_combos_with(&eligible, &constraints, limits);

    EncounterSuggestions {
        constraints,
        eligible_creatures: eligible.len(),
        suggestions,
    }
}
