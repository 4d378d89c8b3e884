use crate::model::{MatchPlayer, Pairing, Player};

/// Greedy nearest-rank pairing: sort both rosters ascending by handicap
/// and zip by position. Not an optimal assignment; with unsorted inputs
/// another bijection can have a smaller total handicap gap, and the
/// league rules want the greedy result anyway.
///
/// Rosters of different length produce `min(len_a, len_b)` pairings;
/// trailing unmatched players are dropped without error. The sort is
/// stable, so equal handicaps keep roster order.
#[must_use]
pub fn pair_players(roster_a: &[Player], roster_b: &[Player]) -> Vec<Pairing> {
    let mut a: Vec<&Player> = roster_a.iter().collect();
    let mut b: Vec<&Player> = roster_b.iter().collect();
    a.sort_by_key(|p| p.handicap);
    b.sort_by_key(|p| p.handicap);

    a.iter()
        .zip(b.iter())
        .map(|(p1, p2)| Pairing {
            player1: MatchPlayer::from_player(p1),
            player2: MatchPlayer::from_player(p2),
        })
        .collect()
}
