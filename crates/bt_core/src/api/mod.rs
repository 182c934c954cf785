pub mod json_api;

pub use json_api::{
    simulate_tournament_json, TournamentRequest, TournamentResponse, SCHEMA_VERSION,
};
