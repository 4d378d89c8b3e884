use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::player::Player;
use crate::model::team::{LeagueDay, Team};

/// One side of a pairing during score entry: the player plus the gross
/// strokes recorded so far, keyed by hole number.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchPlayer {
    pub id: String,
    pub name: String,
    pub handicap: i32,
    #[serde(default)]
    pub scores: BTreeMap<u8, u32>,
}

impl MatchPlayer {
    #[must_use]
    pub fn from_player(player: &Player) -> Self {
        MatchPlayer {
            id: player.id.clone(),
            name: player.name.clone(),
            handicap: player.handicap,
            scores: BTreeMap::new(),
        }
    }

    /// Recorded gross strokes for a hole. A missing entry or a recorded
    /// zero both mean the hole has not been scored yet.
    #[must_use]
    pub fn gross(&self, hole_number: u8) -> Option<u32> {
        self.scores
            .get(&hole_number)
            .copied()
            .filter(|&g| g > 0)
    }

    pub fn record_score(&mut self, hole_number: u8, gross: u32) {
        if gross == 0 {
            self.scores.remove(&hole_number);
        } else {
            self.scores.insert(hole_number, gross);
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Pairing {
    pub player1: MatchPlayer,
    pub player2: MatchPlayer,
}

/// A head-to-head session between two teams. Lives only in working
/// memory while scores are entered.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchState {
    pub team1: Team,
    pub team2: Team,
    pub pairings: Vec<Pairing>,
}

/// Persisted match record. `completed == false` means scheduled; a
/// completed match with no `winner_id` is a tie.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchResult {
    pub id: String,
    pub date: NaiveDate,
    pub day: LeagueDay,
    #[serde(rename = "team1Id")]
    pub team1_id: String,
    #[serde(rename = "team2Id")]
    pub team2_id: String,
    pub completed: bool,
    #[serde(rename = "winnerId", default)]
    pub winner_id: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
}

/// Derived season row for one team. Recomputed on demand, never stored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Standing {
    pub team: Team,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points: u32,
}
