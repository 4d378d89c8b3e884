use ahash::RandomState;
use std::collections::HashMap;

use crate::model::{MatchResult, Standing, Team};

#[derive(Default, Clone, Copy)]
struct Tally {
    played: u32,
    wins: u32,
    losses: u32,
}

/// Fold a season's match results into a ranked table for one league's
/// teams. Callers filter teams and matches to a single league day
/// first; nothing here crosses days.
///
/// A completed match with no winner counts as a tie for both sides.
/// Points are 2 per win and 1 per tie. The sort is stable, so teams
/// level on points and wins keep their input order.
#[must_use]
pub fn compute_standings(teams: &[Team], matches: &[MatchResult]) -> Vec<Standing> {
    let mut tallies: HashMap<&str, Tally, RandomState> = HashMap::default();
    for result in matches.iter().filter(|m| m.completed) {
        for team_id in [result.team1_id.as_str(), result.team2_id.as_str()] {
            let tally = tallies.entry(team_id).or_default();
            tally.played += 1;
            match result.winner_id.as_deref() {
                Some(winner) if winner == team_id => tally.wins += 1,
                Some(_) => tally.losses += 1,
                None => {}
            }
        }
    }

    let mut standings: Vec<Standing> = teams
        .iter()
        .map(|team| {
            let tally = tallies.get(team.id.as_str()).copied().unwrap_or_default();
            let ties = tally.played - tally.wins - tally.losses;
            Standing {
                team: team.clone(),
                played: tally.played,
                wins: tally.wins,
                losses: tally.losses,
                ties,
                points: tally.wins * 2 + ties,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.wins.cmp(&a.wins))
    });

    standings
}
