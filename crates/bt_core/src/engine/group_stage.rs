//! Group-stage round-robin scheduling and simulation.

use rand_chacha::ChaCha8Rng;

use crate::engine::match_sim::simulate_match;
use crate::error::{Result, SimError};
use crate::models::{
    Group, GroupRoundReport, GroupStageReport, MatchRecord, RoundReport, TeamRegistry,
};

/// Positional round labels; the schedule below is indexed the same way.
pub const ROUND_LABELS: [&str; 3] = ["I", "II", "III"];

/// Fixed round-robin schedule for a 4-team group, as slot indices into
/// the group's current team order. Three rounds of two matches; every
/// pair meets exactly once.
const SCHEDULE: [[(usize, usize); 2]; 3] = [
    [(0, 1), (2, 3)],
    [(0, 2), (1, 3)],
    [(0, 3), (1, 2)],
];

/// Plays the full round-robin in every group, in round order then group
/// iteration order, and returns the per-round, per-group match records.
///
/// Team statistics are updated as a side effect of each simulated match.
pub fn simulate_group_stage(
    registry: &mut TeamRegistry,
    groups: &[Group],
    rng: &mut ChaCha8Rng,
) -> Result<GroupStageReport> {
    let mut rounds = Vec::with_capacity(SCHEDULE.len());

    for (round_index, pairings) in SCHEDULE.iter().enumerate() {
        let mut round = RoundReport {
            label: ROUND_LABELS[round_index].to_string(),
            groups: Vec::with_capacity(groups.len()),
        };

        for group in groups {
            if group.teams.len() != 4 {
                return Err(SimError::InvalidGroupSize {
                    group: group.name.clone(),
                    expected: 4,
                    found: group.teams.len(),
                });
            }

            let mut records = Vec::with_capacity(pairings.len());
            for &(home_slot, away_slot) in pairings {
                let home = group.teams[home_slot];
                let away = group.teams[away_slot];
                let outcome = simulate_match(registry, home, away, rng)?;
                records.push(MatchRecord::from_outcome(
                    &registry.get(outcome.winner).name,
                    &registry.get(outcome.loser).name,
                    &outcome,
                ));
            }
            round.groups.push(GroupRoundReport { group: group.name.clone(), matches: records });
        }

        rounds.push(round);
    }

    Ok(GroupStageReport { rounds })
}
