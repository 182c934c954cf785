//! Standings computation and knockout seeding.
//!
//! Ordering is the same everywhere: points, then goal difference, then
//! goals scored, all descending. Sorting is stable, so teams that tie on
//! all three keys keep their prior relative order.

use crate::models::{Group, GroupStandings, StandingsRow, TeamId, TeamRegistry, TournamentRules};

/// Sorts the ids descending by the 3-key standings order. Stable.
fn sort_by_standings(registry: &TeamRegistry, ids: &mut [TeamId]) {
    ids.sort_by(|&a, &b| {
        registry
            .get(b)
            .standings_key()
            .cmp(&registry.get(a).standings_key())
    });
}

/// Ranks the teams of one group, replacing the group's stored team order
/// with the ranked order, and returns that order.
pub fn rank_group(registry: &TeamRegistry, group: &mut Group) -> Vec<TeamId> {
    sort_by_standings(registry, &mut group.teams);
    group.teams.clone()
}

/// Ranks every group in place and builds the standings rows for the
/// report.
pub fn rank_all_groups(registry: &TeamRegistry, groups: &mut [Group]) -> Vec<GroupStandings> {
    groups
        .iter_mut()
        .map(|group| {
            let ranked = rank_group(registry, group);
            GroupStandings {
                group: group.name.clone(),
                rows: ranked
                    .iter()
                    .map(|&id| {
                        let team = registry.get(id);
                        StandingsRow {
                            team: team.name.clone(),
                            wins: team.wins,
                            losses: team.losses,
                            points: team.points,
                            scored: team.scored,
                            conceded: team.conceded,
                            goal_difference: team.goal_difference,
                        }
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Builds the combined draw order from already-ranked groups: all
/// first-place finishers (sorted), then all second-place, then all
/// third-place. Fourth-place finishers drop out of the tournament here.
///
/// Groups must have been ranked by [`rank_group`] first; each group's
/// stored order is read positionally.
pub fn rank_for_draw(registry: &TeamRegistry, groups: &[Group]) -> Vec<TeamId> {
    let mut combined = Vec::with_capacity(groups.len() * 3);

    for rank in 0..3 {
        let mut pot: Vec<TeamId> =
            groups.iter().filter_map(|g| g.teams.get(rank).copied()).collect();
        sort_by_standings(registry, &mut pot);
        combined.extend(pot);
    }

    combined
}

/// Slices the advancing field of the draw order into seeding pots,
/// labelled "D", "E", "F", "G" after the original draw. With 4 groups
/// this is four pots of 2 covering the 8 advancing teams.
pub fn seeding_pots(draw_order: &[TeamId], rules: &TournamentRules) -> Vec<Vec<TeamId>> {
    let advancing = draw_order.len().min(rules.advancing_count());
    let pot_size = rules.pot_size().max(1);
    draw_order[..advancing].chunks(pot_size).map(|chunk| chunk.to_vec()).collect()
}
