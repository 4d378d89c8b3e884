use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LeagueError;
use crate::model::{Course, LeagueDay, MatchResult, Player, Team};

/// Read-only league snapshot, the shape the storage collaborator hands
/// over. Engine inputs are always drawn from a snapshot and passed in
/// explicitly; there is no module-level reference data.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct League {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchResult>,
}

impl League {
    /// # Errors
    ///
    /// Will return `Err` if the JSON does not parse into a snapshot.
    pub fn from_json_str(raw: &str) -> Result<Self, LeagueError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the file cannot be read or does not parse.
    pub fn from_json_file(path: &Path) -> Result<Self, LeagueError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn players_for_team(&self, team_id: &str) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| p.team_id == team_id)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn teams_for_day(&self, day: LeagueDay) -> Vec<Team> {
        self.teams.iter().filter(|t| t.day == day).cloned().collect()
    }

    #[must_use]
    pub fn matches_for_day(&self, day: LeagueDay) -> Vec<MatchResult> {
        self.matches.iter().filter(|m| m.day == day).cloned().collect()
    }

    /// # Errors
    ///
    /// Will return `Err` if no team has the given id.
    pub fn team(&self, team_id: &str) -> Result<&Team, LeagueError> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .ok_or_else(|| LeagueError::NotFound(format!("team {team_id}")))
    }

    /// # Errors
    ///
    /// Will return `Err` if no course has the given id.
    pub fn course(&self, course_id: &str) -> Result<&Course, LeagueError> {
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .ok_or_else(|| LeagueError::NotFound(format!("course {course_id}")))
    }

    /// # Errors
    ///
    /// Will return `Err` if no match has the given id.
    pub fn match_result(&self, match_id: &str) -> Result<&MatchResult, LeagueError> {
        self.matches
            .iter()
            .find(|m| m.id == match_id)
            .ok_or_else(|| LeagueError::NotFound(format!("match {match_id}")))
    }
}
