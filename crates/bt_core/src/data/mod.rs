//! Input data loading.
//!
//! Two files feed a tournament, in the shapes the original data set
//! uses: `groups.json`, a map from group name to team rows, and
//! `exhibitions.json`, a map from team name to warm-up match rows.
//! Malformed input fails fast with a descriptive error; nothing is
//! silently dropped or padded.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, SimError};
use crate::models::{Exhibition, Group, Team, TeamRegistry, TournamentRules};

/// Parses group data and builds the registry. Group names iterate in
/// sorted order, which keeps a seeded run deterministic regardless of
/// the JSON's key order. Each team gets its group name stamped on.
pub fn parse_groups(json: &str, rules: &TournamentRules) -> Result<(TeamRegistry, Vec<Group>)> {
    rules.validate()?;

    let raw: BTreeMap<String, Vec<Team>> = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(SimError::EmptyInput("group file contains no groups".to_string()));
    }
    if raw.len() != rules.group_count {
        return Err(SimError::InvalidParameter(format!(
            "rules expect {} groups, file contains {}",
            rules.group_count,
            raw.len()
        )));
    }

    let mut registry = TeamRegistry::new();
    let mut groups = Vec::with_capacity(raw.len());

    for (group_name, teams) in raw {
        if teams.len() != rules.teams_per_group {
            return Err(SimError::InvalidGroupSize {
                group: group_name,
                expected: rules.teams_per_group,
                found: teams.len(),
            });
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

    log::debug!("loaded {} groups, {} teams", groups.len(), registry.len());
    Ok((registry, groups))
}

pub fn load_groups(
    path: impl AsRef<Path>,
    rules: &TournamentRules,
) -> Result<(TeamRegistry, Vec<Group>)> {
    let json = fs::read_to_string(path)?;
    parse_groups(&json, rules)
}

/// Parses exhibition history. The engine does not consume this yet; it
/// is loaded and surfaced for future seeding logic.
pub fn parse_exhibitions(json: &str) -> Result<BTreeMap<String, Vec<Exhibition>>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_exhibitions(path: impl AsRef<Path>) -> Result<BTreeMap<String, Vec<Exhibition>>> {
    let json = fs::read_to_string(path)?;
    parse_exhibitions(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GROUPS_FIXTURE: &str = r#"{
        "B": [
            {"Team": "France", "ISOCode": "FRA", "FIBARanking": 9},
            {"Team": "Germany", "ISOCode": "GER", "FIBARanking": 3},
            {"Team": "Japan", "ISOCode": "JPN", "FIBARanking": 26},
            {"Team": "Brazil", "ISOCode": "BRA", "FIBARanking": 12}
        ],
        "A": [
            {"Team": "Canada", "ISOCode": "CAN", "FIBARanking": 7},
            {"Team": "Australia", "ISOCode": "AUS", "FIBARanking": 5},
            {"Team": "Greece", "ISOCode": "GRE", "FIBARanking": 14},
            {"Team": "Spain", "ISOCode": "ESP", "FIBARanking": 2}
        ]
    }"#;

    fn two_group_rules() -> TournamentRules {
        TournamentRules { teams_per_group: 4, group_count: 2 }
    }

    #[test]
    fn parses_groups_in_sorted_name_order() {
        let (registry, groups) = parse_groups(GROUPS_FIXTURE, &two_group_rules()).unwrap();

        assert_eq!(registry.len(), 8);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(registry.get(groups[0].teams[0]).name, "Canada");
    }

    #[test]
    fn stamps_group_name_onto_teams() {
        let (registry, groups) = parse_groups(GROUPS_FIXTURE, &two_group_rules()).unwrap();

        for group in &groups {
            for &id in &group.teams {
                assert_eq!(registry.get(id).group, group.name);
            }
        }
    }

    #[test]
    fn rejects_wrong_group_size() {
        let json = r#"{
            "A": [{"Team": "Spain", "ISOCode": "ESP", "FIBARanking": 2}],
            "B": [
                {"Team": "Germany", "ISOCode": "GER", "FIBARanking": 3},
                {"Team": "France", "ISOCode": "FRA", "FIBARanking": 9},
                {"Team": "Japan", "ISOCode": "JPN", "FIBARanking": 26},
                {"Team": "Brazil", "ISOCode": "BRA", "FIBARanking": 12}
            ]
        }"#;
        let err = parse_groups(json, &two_group_rules()).unwrap_err();
        assert!(err.to_string().contains("expected 4, found 1"));
    }

    #[test]
    fn rejects_group_count_mismatch() {
        let err = parse_groups(GROUPS_FIXTURE, &TournamentRules::default()).unwrap_err();
        assert!(err.to_string().contains("expect 4 groups"));
    }

    #[test]
    fn rejects_empty_group_map() {
        assert!(parse_groups("{}", &two_group_rules()).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_groups("not json", &two_group_rules()).is_err());
    }

    #[test]
    fn loads_groups_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GROUPS_FIXTURE.as_bytes()).unwrap();

        let (registry, groups) = load_groups(file.path(), &two_group_rules()).unwrap();
        assert_eq!(registry.len(), 8);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn parses_exhibitions_with_optional_date() {
        let json = r#"{
            "Serbia": [
                {"Date": "2024-07-15", "Opponent": "USA", "Result": "79:105"},
                {"Opponent": "Japan", "Result": "119:98"}
            ]
        }"#;

        let exhibitions = parse_exhibitions(json).unwrap();
        let serbia = &exhibitions["Serbia"];
        assert_eq!(serbia.len(), 2);
        assert_eq!(serbia[0].opponent, "USA");
        assert!(serbia[1].date.is_none());
    }
}
