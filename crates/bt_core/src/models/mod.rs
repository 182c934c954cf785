pub mod exhibition;
pub mod group;
pub mod match_result;
pub mod team;

pub use exhibition::Exhibition;
pub use group::{Group, TournamentRules};
pub use match_result::{
    GroupRoundReport, GroupStageReport, GroupStandings, KnockoutReport, MatchOutcome, MatchRecord,
    Medals, PairingReport, PotEntry, PotReport, RoundReport, StandingsRow, TournamentReport,
};
pub use team::{Team, TeamId, TeamRegistry};
