use serde::{Deserialize, Serialize};
use std::fmt;

/// League night. Tuesday and Thursday run as two independent leagues
/// with no cross-league matches.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum,
)]
pub enum LeagueDay {
    Tuesday,
    Thursday,
}

impl fmt::Display for LeagueDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueDay::Tuesday => write!(f, "Tuesday"),
            LeagueDay::Thursday => write!(f, "Thursday"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub day: LeagueDay,
}
