//! Tournament simulator CLI.
//!
//! Loads group and exhibition data, runs one full tournament, and
//! prints the text report.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bt_core::{load_exhibitions, load_groups, Tournament, TournamentRules};

#[derive(Parser)]
#[command(name = "bt_cli")]
#[command(about = "Simulate a basketball tournament from group data", long_about = None)]
struct Cli {
    /// Path to the groups JSON file
    #[arg(long, default_value = "data/groups.json")]
    groups: PathBuf,

    /// Path to the exhibitions JSON file (loaded for context, not used
    /// by the simulation)
    #[arg(long)]
    exhibitions: Option<PathBuf>,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Teams per group
    #[arg(long, default_value = "4")]
    teams_per_group: usize,

    /// Number of groups
    #[arg(long, default_value = "4")]
    group_count: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rules = TournamentRules {
        teams_per_group: cli.teams_per_group,
        group_count: cli.group_count,
    };

    let (registry, groups) = load_groups(&cli.groups, &rules)
        .with_context(|| format!("loading groups from {}", cli.groups.display()))?;

    if let Some(path) = &cli.exhibitions {
        let exhibitions = load_exhibitions(path)
            .with_context(|| format!("loading exhibitions from {}", path.display()))?;
        log::info!(
            "loaded exhibition history for {} teams (not used by the simulation)",
            exhibitions.len()
        );
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let mut tournament = Tournament::new(registry, groups, rules, seed)?;
    let result = tournament.run()?;

    print!("{}", report::render(&result));
    Ok(())
}
