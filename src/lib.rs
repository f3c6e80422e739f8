//! # Warband
//!
//! Encounter combo generation and scoring for tabletop combat.
//!
//! ## Architecture Overview
//!
//! Given a creature catalog, an XP budget and the party's shape, Warband
//! produces a ranked, diverse list of creature combinations. The pipeline is
//! split into a few small, pure modules:
//!
//! - **Rules**: challenge-rating to XP tables and party budgets
//! - **Catalog**: creature records, catalog loading and the filters that narrow
//!   a catalog before generation
//! - **Combos**: candidate generators, the scorer, warnings, profile
//!   classification and diversity-aware deduplication
//!
//! Every engine function is synchronous and side-effect free. Identical inputs
//! always produce identical output in identical order, so the engine can be
//! shared freely between callers working against the same catalog.
//!
//! ```
//! use warband::{generate_combos, ComboConstraints, CombatRole, Creature};
//!
//! let catalog = vec![Creature::new("Ogre", "ogre.html", "2", CombatRole::Tank)];
//! let constraints = ComboConstraints::new(450, 3, 4);
//!
//! let combos = generate_combos(&catalog, &constraints);
//! assert_eq!(combos[0].total_xp(), 450);
//! ```

pub mod catalog;
pub mod combos;
pub mod rules;

pub use catalog::*;
pub use combos::*;
pub use rules::*;

/// Core error type for Warband.
#[derive(thiserror::Error, Debug)]
pub enum WarbandError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A label or value supplied by the caller could not be understood
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Encounter constraints break their contract
    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),
}

/// Result type used throughout the Warband codebase.
pub type WarbandResult<T> = Result<T, WarbandError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default search and ranking constants.
pub mod config {
    /// Number of leading catalog entries scanned for duos
    pub const DUO_SCAN_CAP: usize = 50;

    /// Number of leading catalog entries scanned for trios
    pub const TRIO_SCAN_CAP: usize = 30;

    /// Number of leading minion candidates scanned for two guard types
    pub const MINION_PAIR_SCAN_CAP: usize = 20;

    /// Creatures allowed per party member for most strategies
    pub const PARTY_MULTIPLIER: f64 = 1.5;

    /// Creatures allowed per party member for elite and homogeneous groups
    pub const RELAXED_PARTY_MULTIPLIER: f64 = 2.0;

    /// Largest creature count for duos and trios
    pub const SMALL_COMBO_MAX_CREATURES: u32 = 4;

    /// Smallest group size tried by the homogeneous strategy
    pub const HOMOGENEOUS_MIN_COUNT: u32 = 2;

    /// Largest group size tried by the homogeneous strategy
    pub const HOMOGENEOUS_MAX_COUNT: u32 = 6;

    /// Suggestions kept per CR pattern
    pub const MAX_PER_SIGNATURE: usize = 2;

    /// Suggestions returned by a single generation run
    pub const MAX_SUGGESTIONS: usize = 20;

    /// Width of the conventional target band around the budget, in percent
    pub const BAND_PERCENT: u32 = 5;
}
