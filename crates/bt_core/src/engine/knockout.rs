//! Knockout bracket: quarterfinal draw, rounds, and medal resolution.
//!
//! The draw keeps teams from the same group apart when it can. The
//! original format retried blindly until the constraint happened to be
//! satisfiable, which can spin forever; here the constraint is relaxed
//! for a pick once no cross-group opponent remains, so the draw always
//! terminates.

use std::collections::HashMap;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::engine::match_sim::simulate_match;
use crate::error::Result;
use crate::models::{
    KnockoutReport, MatchRecord, Medals, PairingReport, TeamId, TeamRegistry,
};

/// A full bracket never has more than 4 quarterfinal pairings.
const MAX_QUARTERFINALS: usize = 4;

/// Draws quarterfinal pairings from the advancing field.
///
/// The first team of each pairing is drawn at random from among the
/// teams whose group has the most members still in the pool; its
/// opponent is drawn at random from the remaining teams of any other
/// group. Taking the first team out of a largest group keeps every
/// group at no more than half the pool, so a same-group pairing can
/// only ever be forced when the whole remaining pool is one group; in
/// that case the constraint is dropped for the pairing instead of
/// retrying forever. Stops after 4 pairings or when fewer than 2 teams
/// remain; with an odd field the last team is left out of the bracket.
pub fn draw_quarterfinals(
    registry: &TeamRegistry,
    entrants: &[TeamId],
    rng: &mut ChaCha8Rng,
) -> Vec<(TeamId, TeamId)> {
    let mut pool: Vec<TeamId> = entrants.to_vec();
    let mut pairings = Vec::with_capacity(MAX_QUARTERFINALS);

    while pairings.len() < MAX_QUARTERFINALS && pool.len() >= 2 {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &id in &pool {
            *counts.entry(registry.get(id).group.as_str()).or_insert(0) += 1;
        }
        let max_count = counts.values().copied().max().unwrap_or(0);

        let candidates: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, &id)| counts[registry.get(id).group.as_str()] == max_count)
            .map(|(i, _)| i)
            .collect();
        let first = pool.remove(candidates[rng.gen_range(0..candidates.len())]);
        let first_group = &registry.get(first).group;

        let eligible: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, &id)| &registry.get(id).group != first_group)
            .map(|(i, _)| i)
            .collect();

        let opponent_index = if eligible.is_empty() {
            log::warn!(
                "no cross-group opponent left for {}; relaxing the draw constraint",
                registry.get(first).name
            );
            rng.gen_range(0..pool.len())
        } else {
            eligible[rng.gen_range(0..eligible.len())]
        };

        let second = pool.remove(opponent_index);
        pairings.push((first, second));
    }

    pairings
}

/// Runs the whole elimination phase: draw, quarterfinals, semifinals,
/// bronze match and final.
///
/// Brackets that do not divide evenly are tolerated: rounds that lack
/// exactly two participants are skipped and the corresponding medal
/// slots stay unassigned.
pub fn run_knockout(
    registry: &mut TeamRegistry,
    entrants: &[TeamId],
    rng: &mut ChaCha8Rng,
) -> Result<KnockoutReport> {
    let quarterfinal_pairings = draw_quarterfinals(registry, entrants, rng);

    let pairing_reports = |pairings: &[(TeamId, TeamId)], registry: &TeamRegistry| {
        pairings
            .iter()
            .map(|&(home, away)| PairingReport {
                home: registry.get(home).name.clone(),
                away: registry.get(away).name.clone(),
            })
            .collect::<Vec<_>>()
    };
    let qf_pairing_reports = pairing_reports(&quarterfinal_pairings, registry);

    // Quarterfinals: winners advance in result order.
    let mut semifinalists = Vec::with_capacity(quarterfinal_pairings.len());
    let mut quarterfinals = Vec::with_capacity(quarterfinal_pairings.len());
    for &(home, away) in &quarterfinal_pairings {
        let outcome = simulate_match(registry, home, away, rng)?;
        quarterfinals.push(MatchRecord::from_outcome(
            &registry.get(outcome.winner).name,
            &registry.get(outcome.loser).name,
            &outcome,
        ));
        semifinalists.push(outcome.winner);
    }

    // Semifinals: first unpaired winner against the next.
    let semifinal_pairings: Vec<(TeamId, TeamId)> =
        semifinalists.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
    let sf_pairing_reports = pairing_reports(&semifinal_pairings, registry);

    let mut finalists = Vec::with_capacity(2);
    let mut bronze_contenders = Vec::with_capacity(2);
    let mut semifinals = Vec::with_capacity(semifinal_pairings.len());
    for &(home, away) in &semifinal_pairings {
        let outcome = simulate_match(registry, home, away, rng)?;
        semifinals.push(MatchRecord::from_outcome(
            &registry.get(outcome.winner).name,
            &registry.get(outcome.loser).name,
            &outcome,
        ));
        finalists.push(outcome.winner);
        bronze_contenders.push(outcome.loser);
    }
    finalists.truncate(2);

    let mut medals = Medals::default();

    let bronze_match = if bronze_contenders.len() == 2 {
        let outcome = simulate_match(registry, bronze_contenders[0], bronze_contenders[1], rng)?;
        medals.bronze = Some(registry.get(outcome.winner).name.clone());
        Some(MatchRecord::from_outcome(
            &registry.get(outcome.winner).name,
            &registry.get(outcome.loser).name,
            &outcome,
        ))
    } else {
        log::warn!(
            "bronze match skipped: {} contender(s) instead of 2",
            bronze_contenders.len()
        );
        None
    };

    let final_match = if finalists.len() == 2 {
        let outcome = simulate_match(registry, finalists[0], finalists[1], rng)?;
        medals.gold = Some(registry.get(outcome.winner).name.clone());
        medals.silver = Some(registry.get(outcome.loser).name.clone());
        Some(MatchRecord::from_outcome(
            &registry.get(outcome.winner).name,
            &registry.get(outcome.loser).name,
            &outcome,
        ))
    } else {
        log::warn!("final skipped: {} finalist(s) instead of 2", finalists.len());
        None
    };

    Ok(KnockoutReport {
        quarterfinal_pairings: qf_pairing_reports,
        quarterfinals,
        semifinal_pairings: sf_pairing_reports,
        semifinals,
        bronze_match,
        final_match,
        medals,
    })
}
