//! # Catalog Loading
//!
//! Reads creature catalogs from monster metadata JSON and summarises them.

use crate::{parse_cr, CombatRole, Creature, WarbandResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Accepted catalog layouts: the full metadata document or a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Metadata { monsters: Vec<Creature> },
    List(Vec<Creature>),
}

/// Parses a catalog from JSON text, preserving creature order.
///
/// # Examples
///
/// ```
/// use warband::parse_catalog;
///
/// let json = r#"{"version": "1.0", "monsters": [
///     {"name": "Goblin", "file": "goblin.html", "cr": "1/4", "combat_role": "skirmisher"}
/// ]}"#;
/// let catalog = parse_catalog(json).unwrap();
/// assert_eq!(catalog[0].name, "Goblin");
/// ```
pub fn parse_catalog(json: &str) -> WarbandResult<Vec<Creature>> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    let creatures = match document {
        CatalogDocument::Metadata { monsters } => monsters,
        CatalogDocument::List(creatures) => creatures,
    };
    Ok(creatures)
}

/// Loads a catalog from a JSON file on disk.
pub fn load_catalog(path: impl AsRef<Path>) -> WarbandResult<Vec<Creature>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let catalog = parse_catalog(&text)?;
    log::info!("Loaded {} creatures from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Distribution statistics for a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    /// Number of creatures in the catalog
    pub total: usize,
    /// Creature count per CR label, ordered by numeric CR (unknown labels last)
    pub cr_distribution: Vec<(String, usize)>,
    /// Creature count per combat role, most common first
    pub role_distribution: Vec<(CombatRole, usize)>,
    /// Most common theme keywords, most common first
    pub top_keywords: Vec<(String, usize)>,
}

impl CatalogSummary {
    /// Number of keywords reported in `top_keywords`.
    pub const TOP_KEYWORDS: usize = 20;

    /// Builds the summary for a catalog.
    pub fn from_catalog(catalog: &[Creature]) -> Self {
        let mut cr_counts: HashMap<&str, usize> = HashMap::new();
        let mut role_counts: HashMap<CombatRole, usize> = HashMap::new();
        let mut keyword_counts: HashMap<String, usize> = HashMap::new();

        for creature in catalog {
            *cr_counts.entry(creature.cr.trim()).or_insert(0) += 1;
            *role_counts.entry(creature.combat_role).or_insert(0) += 1;
            for keyword in &creature.theme_keywords {
                *keyword_counts.entry(keyword.trim().to_lowercase()).or_insert(0) += 1;
            }
        }

        let mut cr_distribution: Vec<(String, usize)> = cr_counts
            .into_iter()
            .map(|(cr, count)| (cr.to_string(), count))
            .collect();
        cr_distribution.sort_by(|(a, _), (b, _)| compare_cr_labels(a, b));

        let mut role_distribution: Vec<(CombatRole, usize)> = role_counts.into_iter().collect();
        role_distribution.sort_by(|(role_a, a), (role_b, b)| b.cmp(a).then(role_a.cmp(role_b)));

        let mut top_keywords: Vec<(String, usize)> = keyword_counts.into_iter().collect();
        top_keywords.sort_by(|(kw_a, a), (kw_b, b)| b.cmp(a).then_with(|| kw_a.cmp(kw_b)));
        top_keywords.truncate(Self::TOP_KEYWORDS);

        Self {
            total: catalog.len(),
            cr_distribution,
            role_distribution,
            top_keywords,
        }
    }
}

/// Orders CR labels numerically, with unparseable labels last. Ties are
/// broken alphabetically.
fn compare_cr_labels(a: &str, b: &str) -> Ordering {
    match (parse_cr(a), parse_cr(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
