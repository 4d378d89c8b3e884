//! Hole-by-hole match-play scoring for one pairing.
//!
//! Everything here recomputes from scratch on every call. There are no
//! cached running totals to invalidate; callers hand in the course and
//! the pairing's recorded scores and get a fresh scorecard back.

use crate::engine::allocation::{net_score_with_strokes, strokes_received};
use crate::model::{Course, Hole, MatchPlayer, MatchState, Pairing};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HolePoints {
    pub player1: u8,
    pub player2: u8,
}

/// Match-play points for one hole with both nets known: the lower net
/// takes 2, a halved hole splits 1 and 1.
#[must_use]
pub fn hole_points(p1_net: i32, p2_net: i32) -> HolePoints {
    if p1_net < p2_net {
        HolePoints { player1: 2, player2: 0 }
    } else if p2_net < p1_net {
        HolePoints { player1: 0, player2: 2 }
    } else {
        HolePoints { player1: 1, player2: 1 }
    }
}

/// One player's line on one hole. `gross` of `None` means the hole has
/// not been scored; net and points stay undefined rather than zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoleSide {
    pub gross: Option<u32>,
    pub strokes: u32,
    pub net: Option<i32>,
    pub points: Option<u8>,
}

#[derive(Clone, Copy, Debug)]
pub struct HoleResult {
    pub hole: Hole,
    pub player1: HoleSide,
    pub player2: HoleSide,
    /// Display flag: this hole is among the `diff` hardest of its half.
    /// Stays false while the half is entirely unscored.
    pub handicap_hole: bool,
}

/// Sums over the holes of a range that have a recorded gross score.
/// `has_all_scores` says whether the range is fully scored for both
/// players; partial sums are still reported either way.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeTotals {
    pub gross1: u32,
    pub gross2: u32,
    pub points1: u32,
    pub points2: u32,
    pub has_all_scores: bool,
}

#[derive(Clone, Debug)]
pub struct PairingScorecard {
    pub holes: Vec<HoleResult>,
    pub front: RangeTotals,
    pub back: RangeTotals,
    pub total: RangeTotals,
}

/// Score one pairing over a course under the head-to-head policy.
#[must_use]
pub fn score_pairing(course: &Course, pairing: &Pairing) -> PairingScorecard {
    let h1 = pairing.player1.handicap;
    let h2 = pairing.player2.handicap;
    let diff = h1.abs_diff(h2) as usize;

    let mut holes = Vec::with_capacity(course.holes.len());
    for half in [course.front_nine(), course.back_nine()] {
        let flagged = handicap_holes(half, diff);
        let half_scored = half.iter().any(|hole| {
            pairing.player1.gross(hole.number).is_some()
                || pairing.player2.gross(hole.number).is_some()
        });

        for hole in half {
            let mut side1 = side_for(&pairing.player1, h1, h2, hole);
            let mut side2 = side_for(&pairing.player2, h2, h1, hole);
            if let (Some(n1), Some(n2)) = (side1.net, side2.net) {
                let pts = hole_points(n1, n2);
                side1.points = Some(pts.player1);
                side2.points = Some(pts.player2);
            }
            holes.push(HoleResult {
                hole: *hole,
                player1: side1,
                player2: side2,
                handicap_hole: half_scored && flagged.contains(&hole.number),
            });
        }
    }

    let front_len = course.front_nine().len();
    let front = range_totals(&holes[..front_len]);
    let back = range_totals(&holes[front_len..]);
    let total = range_totals(&holes);

    PairingScorecard { holes, front, back, total }
}

/// Score every pairing of a match session.
#[must_use]
pub fn score_match(course: &Course, state: &MatchState) -> Vec<PairingScorecard> {
    state
        .pairings
        .iter()
        .map(|pairing| score_pairing(course, pairing))
        .collect()
}

/// Hole numbers of the `min(diff, len)` hardest holes within one half.
/// The selection is relative to the half being totalled, not the whole
/// course, so each nine is recomputed independently.
fn handicap_holes(half: &[Hole], diff: usize) -> Vec<u8> {
    let mut by_rank: Vec<&Hole> = half.iter().collect();
    by_rank.sort_by_key(|h| h.handicap_rank);
    by_rank
        .iter()
        .take(diff.min(half.len()))
        .map(|h| h.number)
        .collect()
}

fn side_for(player: &MatchPlayer, own_handicap: i32, opp_handicap: i32, hole: &Hole) -> HoleSide {
    let strokes = strokes_received(own_handicap, opp_handicap, hole.handicap_rank);
    let gross = player.gross(hole.number);
    HoleSide {
        gross,
        strokes,
        net: gross.map(|g| net_score_with_strokes(g, strokes)),
        points: None,
    }
}

// Points always accumulate from the pairing's fixed player1/player2
// orientation, whichever side a caller later renders.
fn range_totals(holes: &[HoleResult]) -> RangeTotals {
    let mut totals = RangeTotals {
        has_all_scores: !holes.is_empty(),
        ..RangeTotals::default()
    };
    for result in holes {
        match result.player1.gross {
            Some(g) => totals.gross1 += g,
            None => totals.has_all_scores = false,
        }
        match result.player2.gross {
            Some(g) => totals.gross2 += g,
            None => totals.has_all_scores = false,
        }
        if let Some(p) = result.player1.points {
            totals.points1 += u32::from(p);
        }
        if let Some(p) = result.player2.points {
            totals.points2 += u32::from(p);
        }
    }
    totals
}
