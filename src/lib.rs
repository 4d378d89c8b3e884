pub mod args;
pub mod error;
pub mod league;
pub mod model;
pub mod engine {
    pub mod allocation;
    pub mod handicap;
    pub mod pairing;
    pub mod scoring;
    pub mod standings;
}
pub mod view {
    pub mod scorecard;
    pub mod standings;
}

// Re-export the flat engine surface for callers and tests
pub use engine::allocation::{net_score, net_score_with_strokes, strokes_received};
pub use engine::handicap::calculate_handicap;
pub use engine::pairing::pair_players;
pub use engine::scoring::hole_points;
pub use engine::standings::compute_standings;
