//! # bt_core - Deterministic Basketball Tournament Simulation Engine
//!
//! Simulates a FIBA-style tournament for a fixed field of national
//! teams: a round-robin group stage, standings with 3-key tie-breaks,
//! seeding pots, and a single-elimination knockout bracket down to the
//! medal matches.
//!
//! ## Features
//! - 100% deterministic simulation (same seed + same input = same report)
//! - Structured, serializable output for renderers and host applications
//! - JSON API for easy integration
//!
//! The bracket structure is fixed; only match outcomes are random, drawn
//! from one injected `ChaCha8Rng` stream.

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{simulate_tournament_json, TournamentRequest, TournamentResponse};
pub use data::{load_exhibitions, load_groups, parse_exhibitions, parse_groups};
pub use engine::{
    draw_quarterfinals, rank_all_groups, rank_for_draw, rank_group, run_knockout,
    seeding_pots, simulate_group_stage, simulate_match, win_probability, Tournament,
};
pub use error::{Result, SimError};
pub use models::{
    Exhibition, Group, GroupStageReport, GroupStandings, KnockoutReport, MatchOutcome,
    MatchRecord, Medals, Team, TeamId, TeamRegistry, TournamentReport, TournamentRules,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
