use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Index into the [`TeamRegistry`]. Cheap to copy; valid for the lifetime
/// of the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub usize);

/// A national team with its cumulative tournament statistics.
///
/// Serde field names follow the source data files (`Team`, `ISOCode`,
/// `FIBARanking`); the statistics fields are populated during simulation
/// and default to zero when deserialized from group data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "Team")]
    pub name: String,
    #[serde(rename = "ISOCode")]
    pub iso_code: String,
    /// External strength ordinal; lower is stronger.
    #[serde(rename = "FIBARanking")]
    pub fiba_ranking: i32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub scored: u32,
    #[serde(default)]
    pub conceded: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub goal_difference: i32,
    /// Group label, stamped once when group data is loaded.
    #[serde(default)]
    pub group: String,
}

impl Team {
    pub fn new(name: &str, iso_code: &str, fiba_ranking: i32) -> Self {
        Self {
            name: name.to_string(),
            iso_code: iso_code.to_string(),
            fiba_ranking,
            points: 0,
            scored: 0,
            conceded: 0,
            wins: 0,
            losses: 0,
            goal_difference: 0,
            group: String::new(),
        }
    }

    /// A win is worth 2 points.
    pub fn record_win(&mut self, scored: u32, conceded: u32) {
        self.points += 2;
        self.wins += 1;
        self.scored += scored;
        self.conceded += conceded;
        self.goal_difference += scored as i32 - conceded as i32;
    }

    /// A loss still earns 1 point under FIBA group-stage scoring.
    pub fn record_loss(&mut self, scored: u32, conceded: u32) {
        self.points += 1;
        self.losses += 1;
        self.scored += scored;
        self.conceded += conceded;
        self.goal_difference += scored as i32 - conceded as i32;
    }

    /// The 3-key standings order: points, then goal difference, then
    /// goals scored, all descending. Callers sort descending on this key.
    pub fn standings_key(&self) -> (u32, i32, u32) {
        (self.points, self.goal_difference, self.scored)
    }
}

/// Owns every [`Team`] for the lifetime of a simulation run. All mutable
/// team state lives here; the rest of the engine passes [`TeamId`]s around.
#[derive(Debug, Default, Clone)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self { teams: Vec::new() }
    }

    pub fn add(&mut self, team: Team) -> TeamId {
        let id = TeamId(self.teams.len());
        self.teams.push(team);
        id
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    pub fn get_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.teams[id.0]
    }

    /// Disjoint mutable borrows of two distinct teams, for applying one
    /// match's side effects to both participants at once.
    pub fn pair_mut(&mut self, a: TeamId, b: TeamId) -> Result<(&mut Team, &mut Team)> {
        if a == b {
            return Err(SimError::InvalidParameter(format!(
                "a match needs two distinct teams, got {} twice",
                self.teams[a.0].name
            )));
        }
        if a.0 < b.0 {
            let (lo, hi) = self.teams.split_at_mut(b.0);
            Ok((&mut lo[a.0], &mut hi[0]))
        } else {
            let (lo, hi) = self.teams.split_at_mut(a.0);
            Ok((&mut hi[0], &mut lo[b.0]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        self.teams.iter().enumerate().map(|(i, t)| (TeamId(i), t))
    }
}
