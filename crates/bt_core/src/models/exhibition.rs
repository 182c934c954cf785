use serde::{Deserialize, Serialize};

/// One exhibition (friendly) match from a team's warm-up history.
///
/// Loaded alongside the group data but not consumed by any ranking or
/// probability computation yet; kept available for future seeding logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exhibition {
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "Opponent")]
    pub opponent: String,
    /// Score string such as `"92:84"`.
    #[serde(rename = "Result")]
    pub result: String,
}
