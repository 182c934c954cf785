use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::Tournament;
use crate::models::{Group, Team, TeamRegistry, TournamentReport, TournamentRules};

pub const SCHEMA_VERSION: u8 = 1;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

pub mod error_codes {
    pub const INVALID_SCHEMA_VERSION: &str = "E_SCHEMA_VERSION";
    pub const INVALID_REQUEST: &str = "E_REQUEST";
    pub const INVALID_RULES: &str = "E_RULES";
    pub const SIMULATION_FAILED: &str = "E_SIMULATION";
}

#[derive(Debug, Deserialize)]
pub struct TournamentRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Group name to team rows, in the `groups.json` shape.
    pub groups: BTreeMap<String, Vec<Team>>,
    #[serde(default)]
    pub rules: Option<TournamentRules>,
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub schema_version: u8,
    pub seed: u64,
    #[serde(flatten)]
    pub report: TournamentReport,
}

/// Runs a full tournament from a JSON request and returns the report as
/// JSON. Errors are `code: message` strings suitable for surfacing to a
/// host application as-is.
pub fn simulate_tournament_json(request_json: &str) -> Result<String, String> {
    let request: TournamentRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::INVALID_SCHEMA_VERSION,
            format!("expected {}, got {}", SCHEMA_VERSION, request.schema_version),
        ));
    }

    let rules = request.rules.unwrap_or(TournamentRules {
        teams_per_group: 4,
        group_count: request.groups.len(),
    });
    rules.validate().map_err(|e| err_code(error_codes::INVALID_RULES, e))?;

    let mut registry = TeamRegistry::new();
    let mut groups = Vec::with_capacity(request.groups.len());
    for (group_name, teams) in request.groups {
        if teams.len() != rules.teams_per_group {
            return Err(err_code(
                error_codes::INVALID_RULES,
                format!(
                    "group {} has {} teams, rules require {}",
                    group_name,
                    teams.len(),
                    rules.teams_per_group
                ),
            ));
        }
        let ids = teams
            .into_iter()
            .map(|mut team| {
                team.group = group_name.clone();
                registry.add(team)
            })
            .collect();
        groups.push(Group::new(&group_name, ids));
    }

    let mut tournament = Tournament::new(registry, groups, rules, request.seed)
        .map_err(|e| err_code(error_codes::SIMULATION_FAILED, e))?;
    let report = tournament
        .run()
        .map_err(|e| err_code(error_codes::SIMULATION_FAILED, e))?;

    let response =
        TournamentResponse { schema_version: SCHEMA_VERSION, seed: request.seed, report };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SIMULATION_FAILED, e))
}
