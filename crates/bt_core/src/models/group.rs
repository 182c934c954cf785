use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::TeamId;

/// A group-stage pool. The team order is the one the group was loaded
/// with until standings are computed, after which it is the ranked order.
#[derive(Debug, Clone)]
pub struct Group {
    pub name: String,
    pub teams: Vec<TeamId>,
}

impl Group {
    pub fn new(name: &str, teams: Vec<TeamId>) -> Self {
        Self { name: name.to_string(), teams }
    }
}

/// Tournament shape parameters. The original format hard-codes 4 groups
/// of 4; here the shape is validated configuration instead of an implicit
/// constant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TournamentRules {
    pub teams_per_group: usize,
    pub group_count: usize,
}

impl Default for TournamentRules {
    fn default() -> Self {
        Self { teams_per_group: 4, group_count: 4 }
    }
}

impl TournamentRules {
    /// The fixed round-robin schedule only exists for 4-team groups, and
    /// seeding pots slice the advancing field into groups of
    /// `group_count / 2`, so the group count must be even.
    pub fn validate(&self) -> Result<()> {
        if self.teams_per_group != 4 {
            return Err(SimError::InvalidParameter(format!(
                "the round-robin schedule requires 4 teams per group, got {}",
                self.teams_per_group
            )));
        }
        if self.group_count == 0 || self.group_count % 2 != 0 {
            return Err(SimError::InvalidParameter(format!(
                "group count must be a positive even number, got {}",
                self.group_count
            )));
        }
        Ok(())
    }

    /// Number of teams that advance out of the group stage into the
    /// knockout draw: the first- and second-ranked pots.
    pub fn advancing_count(&self) -> usize {
        2 * self.group_count
    }

    /// Size of one seeding pot (2 when there are 4 groups).
    pub fn pot_size(&self) -> usize {
        self.group_count / 2
    }
}
