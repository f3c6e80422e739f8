//! # Catalog Filters
//!
//! Pure predicates that narrow a catalog by challenge rating, XP ceiling and
//! theme, plus the role classifiers used by the generators and warnings.
//!
//! Every filter preserves catalog order.

use crate::{CombatRole, ComboConstraints, Creature, WarbandError, WarbandResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How far above the party level a creature's CR may go.
pub const CR_HEADROOM: f64 = 4.0;

/// Kind of encounter a caller is building, used for thematic filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncounterType {
    /// Surprise attack from hiding
    Ambush,
    /// One dominant foe, possibly with attendants
    BossFight,
    /// Many weak foes
    Horde,
    /// Entrenched defenders and ranged pressure
    Siege,
    /// Deception, manipulation and hidden threats
    Intrigue,
}

impl EncounterType {
    /// Returns all encounter types.
    pub fn all() -> [EncounterType; 5] {
        [
            EncounterType::Ambush,
            EncounterType::BossFight,
            EncounterType::Horde,
            EncounterType::Siege,
            EncounterType::Intrigue,
        ]
    }

    /// Kebab-case label of this encounter type.
    pub fn as_str(self) -> &'static str {
        match self {
            EncounterType::Ambush => "ambush",
            EncounterType::BossFight => "boss-fight",
            EncounterType::Horde => "horde",
            EncounterType::Siege => "siege",
            EncounterType::Intrigue => "intrigue",
        }
    }

    /// Combat roles that fit this kind of encounter.
    pub fn supporting_roles(self) -> &'static [CombatRole] {
        match self {
            EncounterType::Ambush => &[
                CombatRole::Infiltrator,
                CombatRole::Skirmisher,
                CombatRole::Striker,
            ],
            EncounterType::BossFight => &[
                CombatRole::Tank,
                CombatRole::Controller,
                CombatRole::Striker,
            ],
            EncounterType::Horde => &[CombatRole::Striker, CombatRole::Skirmisher],
            EncounterType::Siege => &[
                CombatRole::Artillery,
                CombatRole::Tank,
                CombatRole::Controller,
            ],
            EncounterType::Intrigue => &[
                CombatRole::Infiltrator,
                CombatRole::Support,
                CombatRole::Controller,
            ],
        }
    }

    /// Whether a combat role fits this kind of encounter.
    pub fn is_supported_by(self, role: CombatRole) -> bool {
        self.supporting_roles().contains(&role)
    }
}

impl fmt::Display for EncounterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncounterType {
    type Err = WarbandError;

    fn from_str(s: &str) -> WarbandResult<Self> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        let wanted = if wanted == "boss" { "boss-fight".to_string() } else { wanted };
        EncounterType::all()
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| WarbandError::InvalidInput(format!("unknown encounter type '{}'", s)))
    }
}

/// Thematic criteria for [`by_theme`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFilter {
    /// Requested encounter type, if any
    pub encounter_type: Option<EncounterType>,
    /// Requested theme keywords
    pub keywords: Vec<String>,
}

impl ThemeFilter {
    /// A filter that lets everything through.
    pub fn any() -> Self {
        Self::default()
    }

    /// True when no thematic criteria were given.
    pub fn is_empty(&self) -> bool {
        self.encounter_type.is_none() && self.keywords.iter().all(|k| k.trim().is_empty())
    }

    /// Whether a creature satisfies this filter.
    pub fn matches(&self, creature: &Creature) -> bool {
        if self.is_empty() {
            return true;
        }

        let keyword_hit = self
            .keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .any(|k| creature.has_keyword(k));
        let role_hit = self
            .encounter_type
            .is_some_and(|kind| kind.is_supported_by(creature.combat_role));

        keyword_hit || role_hit
    }
}

/// Keeps creatures whose CR lies in `[0, party_level + 4]`.
///
/// Creatures with a non-numeric CR are dropped.
pub fn by_cr_range(catalog: &[Creature], party_level: u32) -> Vec<Creature> {
    let ceiling = party_level as f64 + CR_HEADROOM;
    catalog
        .iter()
        .filter(|c| c.cr_value().is_some_and(|cr| (0.0..=ceiling).contains(&cr)))
        .cloned()
        .collect()
}

/// Keeps creatures whose individual XP does not exceed the budget.
pub fn by_budget_ceiling(catalog: &[Creature], budget: u32) -> Vec<Creature> {
    catalog.iter().filter(|c| c.xp() <= budget).cloned().collect()
}

/// Keeps creatures matching the theme filter; an empty filter keeps everything.
pub fn by_theme(catalog: &[Creature], theme: &ThemeFilter) -> Vec<Creature> {
    catalog.iter().filter(|c| theme.matches(c)).cloned().collect()
}

/// Standard filter chain run before generation: CR range, then budget
/// ceiling, then theme.
///
/// # Examples
///
/// ```
/// use warband::{prepare_catalog, CombatRole, ComboConstraints, Creature, ThemeFilter};
///
/// let catalog = vec![
///     Creature::new("Goblin", "goblin.html", "1/4", CombatRole::Skirmisher),
///     Creature::new("Young Dragon", "young-dragon.html", "9", CombatRole::Striker),
/// ];
/// let constraints = ComboConstraints::new(500, 1, 4);
///
/// let filtered = prepare_catalog(&catalog, &constraints, &ThemeFilter::any());
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].name, "Goblin");
/// ```
pub fn prepare_catalog(
    catalog: &[Creature],
    constraints: &ComboConstraints,
    theme: &ThemeFilter,
) -> Vec<Creature> {
    let in_range = by_cr_range(catalog, constraints.party_level);
    let affordable = by_budget_ceiling(&in_range, constraints.budget);
    let themed = by_theme(&affordable, theme);

    log::debug!(
        "Catalog narrowed from {} to {} creatures ({} in CR range, {} affordable)",
        catalog.len(),
        themed.len(),
        in_range.len(),
        affordable.len()
    );

    themed
}

/// True when the creature's CR exceeds the party level.
pub fn is_dangerous(creature: &Creature, party_level: u32) -> bool {
    creature
        .cr_value()
        .is_some_and(|cr| cr > party_level as f64)
}

/// True for creatures with CR "0".
pub fn is_zero_cr(creature: &Creature) -> bool {
    creature.cr.trim() == "0"
}

/// True for roles that trade durability for offence or mobility.
pub fn is_fragile(creature: &Creature) -> bool {
    matches!(
        creature.combat_role,
        CombatRole::Striker | CombatRole::Skirmisher | CombatRole::Artillery
    )
}

/// True when the creature's CR lies in `[party_level, party_level + 4]`.
pub fn is_boss_candidate(creature: &Creature, party_level: u32) -> bool {
    let floor = party_level as f64;
    creature
        .cr_value()
        .is_some_and(|cr| (floor..=floor + CR_HEADROOM).contains(&cr))
}

/// True when the creature's CR is below the party level.
pub fn is_below_party_level(creature: &Creature, party_level: u32) -> bool {
    creature
        .cr_value()
        .is_some_and(|cr| cr < party_level as f64)
}

/// True for fragile creatures whose CR is below the party level.
pub fn is_minion_candidate(creature: &Creature, party_level: u32) -> bool {
    is_below_party_level(creature, party_level) && is_fragile(creature)
}

/// Creatures strong enough to anchor an encounter on their own.
pub fn boss_candidates(catalog: &[Creature], party_level: u32) -> Vec<Creature> {
    catalog
        .iter()
        .filter(|c| is_boss_candidate(c, party_level))
        .cloned()
        .collect()
}

/// Weak, fragile creatures suited to fill out an encounter.
pub fn minion_candidates(catalog: &[Creature], party_level: u32) -> Vec<Creature> {
    catalog
        .iter()
        .filter(|c| is_minion_candidate(c, party_level))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(name: &str, cr: &str, role: CombatRole) -> Creature {
        Creature::new(name, format!("{}.html", name.to_lowercase()), cr, role)
    }

    fn sample_catalog() -> Vec<Creature> {
        vec![
            creature("Rat", "0", CombatRole::Skirmisher).with_keywords(["beast", "swarm"]),
            creature("Goblin", "1/4", CombatRole::Skirmisher).with_keywords(["humanoid"]),
            creature("Cultist", "1/8", CombatRole::Support).with_keywords(["cultist", "evil"]),
            creature("Ogre", "2", CombatRole::Tank).with_keywords(["giant"]),
            creature("Wraith", "5", CombatRole::Controller).with_keywords(["undead"]),
            creature("Young Dragon", "9", CombatRole::Striker).with_keywords(["dragon"]),
            creature("Mystery", "??", CombatRole::Infiltrator),
        ]
    }

    fn names(creatures: &[Creature]) -> Vec<&str> {
        creatures.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_by_cr_range() {
        let catalog = sample_catalog();
        let kept = by_cr_range(&catalog, 1);
        assert_eq!(names(&kept), vec!["Rat", "Goblin", "Cultist", "Ogre", "Wraith"]);

        let kept = by_cr_range(&catalog, 5);
        assert_eq!(
            names(&kept),
            vec!["Rat", "Goblin", "Cultist", "Ogre", "Wraith", "Young Dragon"]
        );
    }

    #[test]
    fn test_by_budget_ceiling() {
        let catalog = sample_catalog();
        let kept = by_budget_ceiling(&catalog, 450);
        // Unknown CR is worth 0 XP and passes the ceiling
        assert_eq!(names(&kept), vec!["Rat", "Goblin", "Cultist", "Ogre", "Mystery"]);
    }

    #[test]
    fn test_by_theme_passes_everything_without_criteria() {
        let catalog = sample_catalog();
        assert_eq!(by_theme(&catalog, &ThemeFilter::any()).len(), catalog.len());

        let blank = ThemeFilter {
            encounter_type: None,
            keywords: vec!["  ".to_string()],
        };
        assert_eq!(by_theme(&catalog, &blank).len(), catalog.len());
    }

    #[test]
    fn test_by_theme_keywords() {
        let catalog = sample_catalog();
        let theme = ThemeFilter {
            encounter_type: None,
            keywords: vec!["Undead".to_string(), "evil".to_string()],
        };
        assert_eq!(names(&by_theme(&catalog, &theme)), vec!["Cultist", "Wraith"]);
    }

    #[test]
    fn test_by_theme_encounter_type() {
        let catalog = sample_catalog();
        let theme = ThemeFilter {
            encounter_type: Some(EncounterType::Siege),
            keywords: vec!["swarm".to_string()],
        };
        assert_eq!(names(&by_theme(&catalog, &theme)), vec!["Rat", "Ogre", "Wraith"]);
    }

    #[test]
    fn test_role_classifiers() {
        let catalog = sample_catalog();
        let rat = &catalog[0];
        let ogre = &catalog[3];
        let dragon = &catalog[5];
        let mystery = &catalog[6];

        assert!(is_zero_cr(rat));
        assert!(!is_zero_cr(ogre));
        assert!(is_fragile(rat));
        assert!(!is_fragile(ogre));
        assert!(is_dangerous(dragon, 3));
        assert!(!is_dangerous(ogre, 2));
        assert!(!is_dangerous(mystery, 1));
    }

    #[test]
    fn test_boss_and_minion_candidates() {
        let catalog = sample_catalog();
        assert_eq!(names(&boss_candidates(&catalog, 2)), vec!["Ogre", "Wraith"]);
        assert_eq!(names(&minion_candidates(&catalog, 2)), vec!["Rat", "Goblin"]);
    }

    #[test]
    fn test_prepare_catalog_chain() {
        let catalog = sample_catalog();
        let constraints = ComboConstraints::new(500, 1, 4);
        let theme = ThemeFilter {
            encounter_type: Some(EncounterType::Ambush),
            keywords: Vec::new(),
        };
        let kept = prepare_catalog(&catalog, &constraints, &theme);
        assert_eq!(names(&kept), vec!["Rat", "Goblin"]);
    }

    #[test]
    fn test_encounter_type_parsing() {
        assert_eq!("boss".parse::<EncounterType>().unwrap(), EncounterType::BossFight);
        assert_eq!("Boss Fight".parse::<EncounterType>().unwrap(), EncounterType::BossFight);
        assert_eq!("horde".parse::<EncounterType>().unwrap(), EncounterType::Horde);
        assert!("picnic".parse::<EncounterType>().is_err());
    }
}
