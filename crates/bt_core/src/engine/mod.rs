//! Tournament simulation engine.
//!
//! [`Tournament`] drives the whole pipeline: group-stage round robin,
//! standings, knockout seeding, and the elimination bracket. All
//! randomness flows through one seeded `ChaCha8Rng`, so the same seed
//! over the same input replays the entire tournament bit-for-bit.

pub mod group_stage;
pub mod knockout;
pub mod match_sim;
pub mod standings;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SimError};
use crate::models::{
    Group, PotEntry, PotReport, TeamRegistry, TournamentReport, TournamentRules,
};

pub use group_stage::{simulate_group_stage, ROUND_LABELS};
pub use knockout::{draw_quarterfinals, run_knockout};
pub use match_sim::{simulate_match, win_probability};
pub use standings::{rank_all_groups, rank_for_draw, rank_group, seeding_pots};

/// Pot labels, following the original draw's naming.
const POT_LABELS: [&str; 4] = ["D", "E", "F", "G"];

/// One tournament run: registry, groups, rules and the RNG stream.
pub struct Tournament {
    registry: TeamRegistry,
    groups: Vec<Group>,
    rules: TournamentRules,
    rng: ChaCha8Rng,
}

impl Tournament {
    pub fn new(
        registry: TeamRegistry,
        groups: Vec<Group>,
        rules: TournamentRules,
        seed: u64,
    ) -> Result<Self> {
        rules.validate()?;
        if groups.is_empty() {
            return Err(SimError::EmptyInput("no groups to simulate".to_string()));
        }
        if groups.len() != rules.group_count {
            return Err(SimError::InvalidParameter(format!(
                "rules expect {} groups, got {}",
                rules.group_count,
                groups.len()
            )));
        }
        for group in &groups {
            if group.teams.len() != rules.teams_per_group {
                return Err(SimError::InvalidGroupSize {
                    group: group.name.clone(),
                    expected: rules.teams_per_group,
                    found: group.teams.len(),
                });
            }
        }
        Ok(Self { registry, groups, rules, rng: ChaCha8Rng::seed_from_u64(seed) })
    }

    /// Runs group stage, standings, seeding and knockout, consuming the
    /// run's RNG stream in one fixed order.
    pub fn run(&mut self) -> Result<TournamentReport> {
        log::info!(
            "simulating tournament: {} groups of {}",
            self.groups.len(),
            self.rules.teams_per_group
        );

        let group_stage =
            simulate_group_stage(&mut self.registry, &self.groups, &mut self.rng)?;
        let standings = rank_all_groups(&self.registry, &mut self.groups);

        let draw_order = rank_for_draw(&self.registry, &self.groups);
        let pots = seeding_pots(&draw_order, &self.rules);
        let pot_reports = pots
            .iter()
            .enumerate()
            .map(|(i, pot)| PotReport {
                label: POT_LABELS.get(i).copied().unwrap_or("?").to_string(),
                teams: pot
                    .iter()
                    .map(|&id| {
                        let team = self.registry.get(id);
                        PotEntry {
                            team: team.name.clone(),
                            iso_code: team.iso_code.clone(),
                            fiba_ranking: team.fiba_ranking,
                        }
                    })
                    .collect(),
            })
            .collect();

        let entrants: Vec<_> = pots.into_iter().flatten().collect();
        let knockout = run_knockout(&mut self.registry, &entrants, &mut self.rng)?;

        Ok(TournamentReport { group_stage, standings, pots: pot_reports, knockout })
    }

    /// Final team state, for callers that want raw statistics after a
    /// run.
    pub fn registry(&self) -> &TeamRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;

    fn build_registry(field: &[(&str, &[(&str, i32)])]) -> (TeamRegistry, Vec<Group>) {
        let mut registry = TeamRegistry::new();
        let groups = field
            .iter()
            .map(|&(group_name, teams)| {
                let ids = teams
                    .iter()
                    .map(|&(name, ranking)| {
                        let mut team = Team::new(name, "XXX", ranking);
                        team.group = group_name.to_string();
                        registry.add(team)
                    })
                    .collect();
                Group::new(group_name, ids)
            })
            .collect();
        (registry, groups)
    }

    #[test]
    fn rejects_wrongly_sized_groups() {
        let (registry, groups) =
            build_registry(&[("A", &[("Serbia", 1), ("France", 2), ("Canada", 3)])]);
        let rules = TournamentRules { teams_per_group: 4, group_count: 2 };

        assert!(Tournament::new(registry, groups, rules, 1).is_err());
    }

    #[test]
    fn rejects_empty_group_list() {
        let rules = TournamentRules::default();
        assert!(Tournament::new(TeamRegistry::new(), Vec::new(), rules, 1).is_err());
    }

    #[test]
    fn two_group_tournament_runs_to_completion() {
        let (registry, groups) = build_registry(&[
            ("A", &[("Serbia", 4), ("Germany", 3), ("France", 9), ("Japan", 26)]),
            ("B", &[("USA", 1), ("Canada", 7), ("Australia", 5), ("Greece", 14)]),
        ]);
        let rules = TournamentRules { teams_per_group: 4, group_count: 2 };

        let mut tournament = Tournament::new(registry, groups, rules, 77).unwrap();
        let report = tournament.run().unwrap();

        assert_eq!(report.group_stage.rounds.len(), 3);
        assert_eq!(report.standings.len(), 2);
        // Two groups advance 4 teams in 4 pots of 1.
        assert_eq!(report.pots.len(), 4);
        assert_eq!(report.knockout.quarterfinals.len(), 2);
    }
}
