use crate::model::RoundRecord;

/// Rolling-average handicap: mean of the most recent three gross scores
/// (all of them when fewer exist), rounded half-up. Empty history means
/// no handicap yet.
///
/// This describes how a handicap should evolve; nothing here writes the
/// result back to a player. Persisting a recomputed handicap is the
/// caller's job.
#[must_use]
pub fn calculate_handicap(history: &[RoundRecord]) -> i32 {
    if history.is_empty() {
        return 0;
    }
    // history is newest-first, so the recent window is the head
    let recent = &history[..history.len().min(3)];
    let sum: u32 = recent.iter().map(|r| r.gross_score).sum();
    (f64::from(sum) / recent.len() as f64).round() as i32
}
