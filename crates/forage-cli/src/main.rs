//! Command-line scenario runner for Forage.
//!
//! Loads a scenario (one consumer plus candidate items) and an optional
//! configuration file, runs food selection, and prints a JSON report with
//! the selected profile, every candidate's category, and the decision.
//!
//! # Startup Sequence
//!
//! 1. Parse arguments (clap)
//! 2. Load configuration (defaults when no file is given)
//! 3. Initialize structured logging (tracing)
//! 4. Load the scenario
//! 5. Classify and resolve
//! 6. Print the report

mod error;
mod scenario;

use std::path::{Path, PathBuf};

use clap::Parser;
use forage_core::{FoodSelector, ForageConfig, Profile};
use forage_types::{ClassifiedCandidate, ConsumerState, Decision};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::scenario::Scenario;

/// Run one food selection scenario and print the result as JSON.
#[derive(Parser)]
#[command(name = "forage-cli")]
#[command(version)]
#[command(about = "Run a Forage food selection scenario")]
struct Cli {
    /// Scenario file (YAML): one consumer and its candidates.
    scenario: PathBuf,

    /// Configuration file (YAML). Defaults apply when omitted.
    config: Option<PathBuf>,
}

/// The JSON document printed on success.
#[derive(Debug, Serialize)]
struct Report<'a> {
    consumer: ConsumerState,
    profile: Option<&'static str>,
    classified: &'a [ClassifiedCandidate],
    decision: &'a Decision,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration or the scenario are invalid, or if a
/// dispenser candidate has nothing to dispense.
fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        human_prefers_raw_tasty = config.settings.human_prefers_raw_tasty,
        ascetic_prefers_raw_tasty = config.settings.ascetic_prefers_raw_tasty,
        "configuration loaded"
    );

    let scenario = Scenario::from_file(&cli.scenario)?;
    let consumer = scenario.consumer.state();
    info!(
        scenario = %cli.scenario.display(),
        role = ?consumer.role,
        hunger = ?consumer.hunger,
        candidates = scenario.candidates.len(),
        "scenario loaded"
    );

    let selector = FoodSelector::new(config);
    let selection = scenario.evaluate(&selector)?;
    info!(
        intercept = selection.decision.should_intercept(),
        "selection complete"
    );

    let report = Report {
        consumer,
        profile: selection.profile.map(Profile::name),
        classified: &selection.classified,
        decision: &selection.decision,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Load configuration from `path`, or defaults with environment overrides.
fn load_config(path: Option<&Path>) -> Result<ForageConfig, CliError> {
    if let Some(path) = path {
        return Ok(ForageConfig::from_file(path)?);
    }
    let mut config = ForageConfig::default();
    config.logging.apply_env_overrides();
    Ok(config)
}
