use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(rename = "teamId")]
    pub team_id: String,
    pub handicap: i32,
    /// Round history, newest first. Chronological order is the semantic
    /// order for handicap recomputation.
    #[serde(default)]
    pub history: Vec<RoundRecord>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    pub date: NaiveDate,
    #[serde(rename = "score")]
    pub gross_score: u32,
    #[serde(rename = "handicapAfter")]
    pub handicap_after: i32,
}
