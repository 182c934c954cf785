//! Simulation output data structures.
//!
//! Everything the engine produces flows into [`TournamentReport`]; the
//! report is plain serializable data so that renderers (CLI, JSON API)
//! never need to touch the registry or the engine.

use serde::{Deserialize, Serialize};

use crate::models::TeamId;

/// Outcome of one simulated match. Immutable value; the winner/loser
/// statistics were already applied when this was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: TeamId,
    pub loser: TeamId,
    pub winner_score: u32,
    pub loser_score: u32,
}

/// Printable record of one match: team names plus a `"winner:loser"`
/// score string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: String,
    pub loser: String,
    pub score: String,
}

impl MatchRecord {
    pub fn from_outcome(winner: &str, loser: &str, outcome: &MatchOutcome) -> Self {
        Self {
            winner: winner.to_string(),
            loser: loser.to_string(),
            score: format!("{}:{}", outcome.winner_score, outcome.loser_score),
        }
    }
}

/// One group's matches within one round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRoundReport {
    pub group: String,
    pub matches: Vec<MatchRecord>,
}

/// One round of group-stage play across all groups, labelled "I", "II"
/// or "III".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub label: String,
    pub groups: Vec<GroupRoundReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupStageReport {
    pub rounds: Vec<RoundReport>,
}

/// One standings row, in ranked order within its group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    pub scored: u32,
    pub conceded: u32,
    pub goal_difference: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupStandings {
    pub group: String,
    pub rows: Vec<StandingsRow>,
}

/// One seeding pot for the knockout draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotReport {
    pub label: String,
    pub teams: Vec<PotEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotEntry {
    pub team: String,
    pub iso_code: String,
    pub fiba_ranking: i32,
}

/// A drawn pairing, by team name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingReport {
    pub home: String,
    pub away: String,
}

/// Medal table. Slots stay empty when the bracket degenerated and the
/// deciding match could not be played.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Medals {
    pub gold: Option<String>,
    pub silver: Option<String>,
    pub bronze: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnockoutReport {
    pub quarterfinal_pairings: Vec<PairingReport>,
    pub quarterfinals: Vec<MatchRecord>,
    pub semifinal_pairings: Vec<PairingReport>,
    pub semifinals: Vec<MatchRecord>,
    pub bronze_match: Option<MatchRecord>,
    pub final_match: Option<MatchRecord>,
    pub medals: Medals,
}

/// Everything one tournament run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    pub group_stage: GroupStageReport,
    pub standings: Vec<GroupStandings>,
    pub pots: Vec<PotReport>,
    pub knockout: KnockoutReport,
}
