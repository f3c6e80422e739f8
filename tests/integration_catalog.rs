//! Integration tests for loading catalogs from disk and suggesting encounters.

use std::io::Write;
use tempfile::NamedTempFile;
use warband::{
    combo_stats, load_catalog, suggest_encounters, CatalogSummary, CombatRole, Difficulty,
    EncounterRequest, EncounterType, SearchLimits, ThemeFilter, WarbandError, WarbandResult,
};

const METADATA: &str = r#"{
  "version": "1.0",
  "generated": "2025-11-23",
  "description": "Monster metadata for D&D 5e creatures",
  "combat_roles": {"striker": "High damage dealer"},
  "theme_keywords": ["undead", "humanoid"],
  "monsters": [
    {"name": "Goblin Warrior", "file": "goblin-warrior.html", "cr": "1/4",
     "summary": "A small, cunning raider", "combat_role": "skirmisher",
     "theme_keywords": ["humanoid", "ambush"], "creature_type": "Small Fey (Goblinoid), Chaotic Neutral"},
    {"name": "Skeleton", "file": "skeleton.html", "cr": "1/4",
     "summary": "Animated bones", "combat_role": "artillery",
     "theme_keywords": ["undead", "dungeon"], "creature_type": "Medium Undead, Lawful Evil"},
    {"name": "Zombie", "file": "zombie.html", "cr": "1/4",
     "summary": "A shambling corpse", "combat_role": "tank",
     "theme_keywords": ["undead"], "creature_type": "Medium Undead, Neutral Evil"},
    {"name": "Ghoul", "file": "ghoul.html", "cr": "1",
     "summary": "A ravenous corpse-eater", "combat_role": "striker",
     "theme_keywords": ["undead", "dungeon"], "creature_type": "Medium Undead, Chaotic Evil"},
    {"name": "Bugbear Warrior", "file": "bugbear-warrior.html", "cr": "1",
     "summary": "A stealthy brute", "combat_role": "infiltrator",
     "theme_keywords": ["humanoid", "ambush"], "creature_type": "Medium Fey (Goblinoid), Chaotic Neutral"},
    {"name": "Wight", "file": "wight.html", "cr": "3",
     "summary": "A life-draining undead", "combat_role": "striker",
     "theme_keywords": ["undead", "evil"], "creature_type": "Medium Undead, Neutral Evil"},
    {"name": "Lich", "file": "lich.html", "cr": "21",
     "summary": "An undead archmage", "combat_role": "controller",
     "theme_keywords": ["undead", "spellcaster"], "creature_type": "Medium Undead, Neutral Evil"}
  ]
}"#;

fn write_temp(contents: &str) -> WarbandResult<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_metadata_file() -> WarbandResult<()> {
    let file = write_temp(METADATA)?;
    let catalog = load_catalog(file.path())?;

    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog[0].name, "Goblin Warrior");
    assert_eq!(catalog[2].combat_role, CombatRole::Tank);
    assert_eq!(catalog[6].xp(), 33000);

    let summary = CatalogSummary::from_catalog(&catalog);
    assert_eq!(summary.cr_distribution[0], ("1/4".to_string(), 3));
    assert_eq!(summary.top_keywords[0], ("undead".to_string(), 5));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_catalog("/definitely/not/a/catalog.json");
    assert!(matches!(result, Err(WarbandError::Io(_))));
}

#[test]
fn test_malformed_file_is_serde_error() -> WarbandResult<()> {
    let file = write_temp("{\"monsters\": [{\"name\": 3}]}")?;
    assert!(matches!(load_catalog(file.path()), Err(WarbandError::Serde(_))));
    Ok(())
}

#[test]
fn test_undead_themed_suggestions() -> WarbandResult<()> {
    let file = write_temp(METADATA)?;
    let catalog = load_catalog(file.path())?;

    let request = EncounterRequest::new(3, 4, Difficulty::Moderate).with_theme(ThemeFilter {
        encounter_type: None,
        keywords: vec!["undead".to_string()],
    });
    let result = suggest_encounters(&catalog, &request, &SearchLimits::default());

    assert_eq!(result.constraints.budget, 900);
    // Lich is out of CR range, goblins and bugbears are off theme
    assert_eq!(result.eligible_creatures, 4);
    assert!(!result.suggestions.is_empty());
    assert!(result.suggestions.len() <= 20);

    for combo in &result.suggestions {
        assert!(combo.entries().iter().all(|e| e.creature.has_keyword("undead")));
        let stats = combo_stats(combo);
        assert!(!stats.description.is_empty());
        assert!(!stats.profile.is_empty());
        assert!((95..=105).contains(&stats.percent_of_budget));
    }
    Ok(())
}

#[test]
fn test_ambush_suggestions_use_supporting_roles() -> WarbandResult<()> {
    let file = write_temp(METADATA)?;
    let catalog = load_catalog(file.path())?;

    let request = EncounterRequest::new(2, 4, Difficulty::High).with_theme(ThemeFilter {
        encounter_type: Some(EncounterType::Ambush),
        keywords: Vec::new(),
    });
    let result = suggest_encounters(&catalog, &request, &SearchLimits::default());

    assert_eq!(result.constraints.budget, 800);
    for combo in &result.suggestions {
        for entry in combo.entries() {
            assert!(EncounterType::Ambush.is_supported_by(entry.creature.combat_role));
        }
    }
    Ok(())
}

#[test]
fn test_limits_file_overrides() -> WarbandResult<()> {
    let file = write_temp(r#"{"max_suggestions": 3, "band_percent": 10}"#)?;
    let limits = SearchLimits::load(file.path())?;
    assert_eq!(limits.max_suggestions, 3);
    assert_eq!(limits.band_percent, 10);
    assert_eq!(limits.duo_scan_cap, SearchLimits::default().duo_scan_cap);

    let catalog = load_catalog(write_temp(METADATA)?.path())?;
    let request = EncounterRequest::new(3, 4, Difficulty::Moderate);
    let result = suggest_encounters(&catalog, &request, &limits);
    assert_eq!(result.constraints.target_xp_min, 810);
    assert_eq!(result.constraints.target_xp_max, 990);
    assert!(result.suggestions.len() <= 3);
    Ok(())
}
