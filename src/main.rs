//! # Warband Command Line
//!
//! Loads a creature catalog, derives encounter constraints and prints ranked
//! combo suggestions.

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::path::PathBuf;
use warband::{
    combo_stats, load_catalog, suggest_encounters, CatalogSummary, ComboConstraints, Difficulty,
    EncounterRequest, EncounterType, SearchLimits, ThemeFilter, WarbandResult,
};

/// Command line arguments for Warband.
#[derive(Parser, Debug)]
#[command(name = "warband")]
#[command(about = "Encounter combo generation and scoring for tabletop combat")]
#[command(version)]
struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the XP budget and target band for a party
    Budget {
        /// Average party level
        #[arg(short, long)]
        level: u32,

        /// Number of player characters
        #[arg(short, long)]
        party_size: u32,

        /// Difficulty tier (low, moderate, high)
        #[arg(short, long, default_value = "moderate")]
        difficulty: Difficulty,
    },

    /// Print CR, role and keyword distributions for a catalog
    Catalog {
        /// Monster metadata JSON file
        #[arg(short, long)]
        catalog: PathBuf,
    },

    /// Suggest ranked creature combos for an encounter
    Suggest {
        /// Monster metadata JSON file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Average party level
        #[arg(short, long)]
        level: u32,

        /// Number of player characters
        #[arg(short, long)]
        party_size: u32,

        /// Difficulty tier (low, moderate, high)
        #[arg(short, long, default_value = "moderate")]
        difficulty: Difficulty,

        /// Encounter type used for thematic filtering
        #[arg(short, long)]
        encounter_type: Option<EncounterType>,

        /// Theme keyword used for thematic filtering (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// JSON file overriding search limits
        #[arg(long)]
        limits: Option<PathBuf>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> WarbandResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Warband v{}", warband::VERSION);

    match args.command {
        Command::Budget {
            level,
            party_size,
            difficulty,
        } => print_budget(level, party_size, difficulty),
        Command::Catalog { catalog } => print_catalog_summary(catalog),
        Command::Suggest {
            catalog,
            level,
            party_size,
            difficulty,
            encounter_type,
            keywords,
            limits,
            json,
        } => {
            let request = EncounterRequest::new(level, party_size, difficulty).with_theme(
                ThemeFilter {
                    encounter_type,
                    keywords,
                },
            );
            print_suggestions(catalog, &request, limits, json)
        }
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> WarbandResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();

    Ok(())
}

fn print_budget(level: u32, party_size: u32, difficulty: Difficulty) -> WarbandResult<()> {
    let constraints = ComboConstraints::for_party(level, party_size, difficulty);
    constraints.validate()?;

    println!(
        "{} encounter for {} level-{} characters: {} XP (target {}-{})",
        difficulty,
        party_size,
        level,
        constraints.budget,
        constraints.target_xp_min,
        constraints.target_xp_max
    );
    Ok(())
}

fn print_catalog_summary(path: PathBuf) -> WarbandResult<()> {
    let catalog = load_catalog(&path)?;
    let summary = CatalogSummary::from_catalog(&catalog);

    println!("Total creatures: {}", summary.total);
    println!("\nCR distribution:");
    for (cr, count) in &summary.cr_distribution {
        println!("  CR {}: {}", cr, count);
    }
    println!("\nCombat role distribution:");
    for (role, count) in &summary.role_distribution {
        println!("  {}: {}", role, count);
    }
    println!("\nTop theme keywords:");
    for (keyword, count) in &summary.top_keywords {
        println!("  {}: {}", keyword, count);
    }
    Ok(())
}

fn print_suggestions(
    path: PathBuf,
    request: &EncounterRequest,
    limits_path: Option<PathBuf>,
    json: bool,
) -> WarbandResult<()> {
    let catalog = load_catalog(&path)?;
    let limits = match limits_path {
        Some(limits_path) => SearchLimits::load(limits_path)?,
        None => SearchLimits::default(),
    };

    request.constraints(&limits).validate()?;

    let result = suggest_encounters(&catalog, request, &limits);
    let stats: Vec<_> = result.suggestions.iter().map(combo_stats).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "Budget {} XP (target {}-{}), {} eligible creatures",
        result.constraints.budget,
        result.constraints.target_xp_min,
        result.constraints.target_xp_max,
        result.eligible_creatures
    );

    if stats.is_empty() {
        println!("No combos fit this budget. Try another difficulty or widen the theme.");
        return Ok(());
    }

    for (rank, combo) in stats.iter().enumerate() {
        println!(
            "\n{:>2}. {}  [score {}]",
            rank + 1,
            combo.description,
            combo.score
        );
        println!(
            "    {} XP ({}% of budget), {} creatures, {} stat blocks, ratio {:.1}, {}",
            combo.total_xp,
            combo.percent_of_budget,
            combo.creature_count,
            combo.stat_blocks,
            combo.ratio,
            combo.profile
        );
        for warning in &combo.warnings {
            println!("    ! {}", warning);
        }
    }
    Ok(())
}
