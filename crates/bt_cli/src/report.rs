//! Text rendering of a tournament report.
//!
//! Consumes only the structured [`TournamentReport`]; nothing here
//! touches the engine or the registry.

use std::fmt::Write;

use bt_core::models::{GroupStandings, KnockoutReport, MatchRecord, PotReport, TournamentReport};

pub fn render(report: &TournamentReport) -> String {
    let mut out = String::new();

    render_group_stage(&mut out, report);
    render_standings(&mut out, &report.standings);
    render_pots(&mut out, &report.pots);
    render_knockout(&mut out, &report.knockout);

    out
}

fn render_group_stage(out: &mut String, report: &TournamentReport) {
    let _ = writeln!(out, "Group Stage Results:");
    for round in &report.group_stage.rounds {
        let _ = writeln!(out, "\n{} Round:", round.label);
        for group in &round.groups {
            let _ = writeln!(out, "\n  Group {}:", group.group);
            for m in &group.matches {
                let _ = writeln!(out, "    {} - {} ({})", m.winner, m.loser, m.score);
            }
        }
    }
}

fn render_standings(out: &mut String, standings: &[GroupStandings]) {
    let _ = writeln!(out, "\nFinal Group Standings:");
    for group in standings {
        let _ = writeln!(
            out,
            "\n  Group {} (Team - Wins/Losses/Points/Scored/Conceded/Goal Difference):",
            group.group
        );
        for (i, row) in group.rows.iter().enumerate() {
            let sign = if row.goal_difference >= 0 { "+" } else { "" };
            let _ = writeln!(
                out,
                "    {}. {}  {} / {} / {} / {} / {} / {}{}",
                i + 1,
                row.team,
                row.wins,
                row.losses,
                row.points,
                row.scored,
                row.conceded,
                sign,
                row.goal_difference
            );
        }
    }
}

fn render_pots(out: &mut String, pots: &[PotReport]) {
    for pot in pots {
        let _ = writeln!(out, "\nPot {}:", pot.label);
        for entry in &pot.teams {
            let _ = writeln!(
                out,
                "  {} (ISO Code: {}, FIBA Ranking: {})",
                entry.team, entry.iso_code, entry.fiba_ranking
            );
        }
    }
}

fn render_match_list(out: &mut String, heading: &str, matches: &[MatchRecord]) {
    let _ = writeln!(out, "\n{}:", heading);
    for m in matches {
        let _ = writeln!(out, "  {} vs {} ({})", m.winner, m.loser, m.score);
    }
}

fn render_knockout(out: &mut String, knockout: &KnockoutReport) {
    let _ = writeln!(out, "\nQuarterfinals Draw:");
    for pairing in &knockout.quarterfinal_pairings {
        let _ = writeln!(out, "  {} vs {}", pairing.home, pairing.away);
    }

    render_match_list(out, "Quarterfinals Results", &knockout.quarterfinals);

    let _ = writeln!(out, "\nSemifinals Draw:");
    for pairing in &knockout.semifinal_pairings {
        let _ = writeln!(out, "  {} vs {}", pairing.home, pairing.away);
    }
    render_match_list(out, "Semifinals Results", &knockout.semifinals);

    let _ = writeln!(out, "\nBronze Medal Match:");
    match &knockout.bronze_match {
        Some(m) => {
            let _ = writeln!(out, "  {} vs {} ({})", m.winner, m.loser, m.score);
        }
        None => {
            let _ = writeln!(out, "  Not enough teams available for the bronze medal match.");
        }
    }

    let _ = writeln!(out, "\nFinal:");
    match &knockout.final_match {
        Some(m) => {
            let _ = writeln!(out, "  {} vs {} ({})", m.winner, m.loser, m.score);
        }
        None => {
            let _ = writeln!(out, "  Not enough teams available for the final.");
        }
    }

    let _ = writeln!(out, "\nMedal Winners:");
    let absent = "(not awarded)".to_string();
    let _ = writeln!(out, "  1. {} (Gold)", knockout.medals.gold.as_ref().unwrap_or(&absent));
    let _ = writeln!(out, "  2. {} (Silver)", knockout.medals.silver.as_ref().unwrap_or(&absent));
    let _ = writeln!(out, "  3. {} (Bronze)", knockout.medals.bronze.as_ref().unwrap_or(&absent));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bt_core::{parse_groups, Tournament, TournamentRules};

    #[test]
    fn renders_every_section() {
        let fixture = r#"{
            "A": [
                {"Team": "Serbia", "ISOCode": "SRB", "FIBARanking": 4},
                {"Team": "Germany", "ISOCode": "GER", "FIBARanking": 3},
                {"Team": "France", "ISOCode": "FRA", "FIBARanking": 9},
                {"Team": "Japan", "ISOCode": "JPN", "FIBARanking": 26}
            ],
            "B": [
                {"Team": "USA", "ISOCode": "USA", "FIBARanking": 1},
                {"Team": "Canada", "ISOCode": "CAN", "FIBARanking": 7},
                {"Team": "Australia", "ISOCode": "AUS", "FIBARanking": 5},
                {"Team": "Greece", "ISOCode": "GRE", "FIBARanking": 14}
            ]
        }"#;
        let rules = TournamentRules { teams_per_group: 4, group_count: 2 };
        let (registry, groups) = parse_groups(fixture, &rules).unwrap();
        let mut tournament = Tournament::new(registry, groups, rules, 5).unwrap();
        let report = tournament.run().unwrap();

        let text = render(&report);
        assert!(text.contains("Group Stage Results:"));
        assert!(text.contains("I Round:"));
        assert!(text.contains("Final Group Standings:"));
        assert!(text.contains("Quarterfinals Draw:"));
        assert!(text.contains("Medal Winners:"));
    }
}
