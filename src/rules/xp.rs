//! # Challenge Ratings and XP
//!
//! Lookup tables mapping challenge-rating labels to XP and party levels to
//! per-character encounter allowances.

use crate::Difficulty;

/// XP awarded per challenge rating label, in ascending CR order.
const CR_XP_TABLE: [(&str, u32); 34] = [
    ("0", 0),
    ("1/8", 25),
    ("1/4", 50),
    ("1/2", 100),
    ("1", 200),
    ("2", 450),
    ("3", 700),
    ("4", 1100),
    ("5", 1800),
    ("6", 2300),
    ("7", 2900),
    ("8", 3900),
    ("9", 5000),
    ("10", 5900),
    ("11", 7200),
    ("12", 8400),
    ("13", 10000),
    ("14", 11500),
    ("15", 13000),
    ("16", 15000),
    ("17", 18000),
    ("18", 20000),
    ("19", 22000),
    ("20", 25000),
    ("21", 33000),
    ("22", 41000),
    ("23", 50000),
    ("24", 62000),
    ("25", 75000),
    ("26", 90000),
    ("27", 105000),
    ("28", 120000),
    ("29", 135000),
    ("30", 155000),
];

/// Per-character XP allowance by party level (index is level - 1).
/// Columns are low, moderate and high difficulty.
const BUDGET_TABLE: [[u32; 3]; 20] = [
    [50, 75, 100],         // Level 1
    [100, 150, 200],       // Level 2
    [150, 225, 400],       // Level 3
    [250, 375, 500],       // Level 4
    [500, 750, 1100],      // Level 5
    [600, 1000, 1400],     // Level 6
    [750, 1300, 1700],     // Level 7
    [1000, 1700, 2100],    // Level 8
    [1300, 2000, 2600],    // Level 9
    [1600, 2300, 3100],    // Level 10
    [1900, 2900, 4100],    // Level 11
    [2200, 3700, 4700],    // Level 12
    [2600, 4200, 5400],    // Level 13
    [2900, 4900, 6200],    // Level 14
    [3300, 5400, 7800],    // Level 15
    [3800, 6100, 9800],    // Level 16
    [4500, 7200, 11700],   // Level 17
    [5000, 8700, 14200],   // Level 18
    [5500, 10700, 17200],  // Level 19
    [6400, 13200, 22000],  // Level 20
];

/// Lowest party level covered by the budget table.
pub const MIN_PARTY_LEVEL: u32 = 1;

/// Highest party level covered by the budget table.
pub const MAX_PARTY_LEVEL: u32 = 20;

/// Returns the XP value of a challenge rating label.
///
/// Unknown labels are worth 0 XP.
///
/// # Examples
///
/// ```
/// use warband::xp_for_cr;
///
/// assert_eq!(xp_for_cr("1/4"), 50);
/// assert_eq!(xp_for_cr("5"), 1800);
/// assert_eq!(xp_for_cr("legendary"), 0);
/// ```
pub fn xp_for_cr(cr: &str) -> u32 {
    let cr = cr.trim();
    CR_XP_TABLE
        .iter()
        .find(|(label, _)| *label == cr)
        .map(|(_, xp)| *xp)
        .unwrap_or(0)
}

/// Parses a challenge rating label into its numeric value.
///
/// Fractions 1/8, 1/4 and 1/2 are recognised; anything else is parsed as a
/// plain number. Returns `None` for labels that are not numbers.
///
/// # Examples
///
/// ```
/// use warband::parse_cr;
///
/// assert_eq!(parse_cr("1/8"), Some(0.125));
/// assert_eq!(parse_cr("12"), Some(12.0));
/// assert_eq!(parse_cr("?"), None);
/// ```
pub fn parse_cr(cr: &str) -> Option<f64> {
    match cr.trim() {
        "1/8" => Some(0.125),
        "1/4" => Some(0.25),
        "1/2" => Some(0.5),
        other => other.parse::<f64>().ok().filter(|value| value.is_finite()),
    }
}

/// Returns every challenge rating label the XP table recognises, ascending.
pub fn known_challenge_ratings() -> impl Iterator<Item = &'static str> {
    CR_XP_TABLE.iter().map(|(label, _)| *label)
}

/// Computes the total XP budget for a party.
///
/// The party level is clamped to 1..=20 before the lookup.
///
/// # Examples
///
/// ```
/// use warband::{xp_budget, Difficulty};
///
/// assert_eq!(xp_budget(3, 4, Difficulty::Moderate), 900);
/// assert_eq!(xp_budget(0, 4, Difficulty::Low), 200);
/// ```
pub fn xp_budget(party_level: u32, party_size: u32, difficulty: Difficulty) -> u32 {
    let level = party_level.clamp(MIN_PARTY_LEVEL, MAX_PARTY_LEVEL);
    let per_character = BUDGET_TABLE[(level - 1) as usize][difficulty.column()];
    per_character.saturating_mul(party_size)
}
