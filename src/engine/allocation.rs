//! Stroke allocation.
//!
//! Two allocation policies coexist in the league and are not
//! interchangeable. The course-handicap policy hands out strokes against
//! a hole's absolute difficulty rank, independent of any opponent. The
//! head-to-head policy gives strokes only to the higher-handicap player
//! in a pairing, on the hardest holes up to the handicap difference.
//! Which one is canonical for final standings is an open league-rules
//! question; callers pick the policy, nothing here merges them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokePolicy {
    /// Opponent-independent allocation against absolute hole rank.
    CourseHandicap,
    /// Handicap-difference allocation within a pairing.
    HeadToHead,
}

impl StrokePolicy {
    /// Net score for one hole under this policy. The opponent handicap
    /// only matters head-to-head; the course policy ignores it.
    #[must_use]
    pub fn net(
        self,
        gross: u32,
        player_handicap: i32,
        opponent_handicap: i32,
        hole_rank: u8,
    ) -> i32 {
        match self {
            StrokePolicy::CourseHandicap => net_score(gross, player_handicap, hole_rank),
            StrokePolicy::HeadToHead => net_score_with_strokes(
                gross,
                strokes_received(player_handicap, opponent_handicap, hole_rank),
            ),
        }
    }
}

/// Strokes a player is given on a hole under the course-handicap policy.
/// Handicap 20 gets a base stroke everywhere plus an extra on the two
/// hardest holes; handicap 0 gets nothing.
#[must_use]
pub fn strokes_given(player_handicap: i32, hole_rank: u8) -> i32 {
    let base = player_handicap.div_euclid(18);
    let remainder = player_handicap.rem_euclid(18);
    base + i32::from(i32::from(hole_rank) <= remainder)
}

/// Net score under the course-handicap policy.
#[must_use]
pub fn net_score(gross: u32, player_handicap: i32, hole_rank: u8) -> i32 {
    gross as i32 - strokes_given(player_handicap, hole_rank)
}

/// Strokes received on a hole under the head-to-head policy: 0 or 1.
/// Only the higher-handicap side ever receives, and only on holes
/// ranked within the handicap difference.
#[must_use]
pub fn strokes_received(player_handicap: i32, opponent_handicap: i32, hole_rank: u8) -> u32 {
    let diff = player_handicap - opponent_handicap;
    if diff <= 0 {
        return 0;
    }
    u32::from(i32::from(hole_rank) <= diff)
}

/// Net score once head-to-head strokes are known.
#[must_use]
pub fn net_score_with_strokes(gross: u32, strokes_received: u32) -> i32 {
    gross as i32 - strokes_received as i32
}
