mod common;

use common::round;
use fairway_league::engine::handicap::calculate_handicap;

#[test]
fn averages_most_recent_three_rounds() {
    // history is newest-first
    let history = vec![
        round("2024-05-07", 85, 13),
        round("2024-04-30", 82, 13),
        round("2024-04-23", 88, 13),
    ];
    assert_eq!(calculate_handicap(&history), 85);
}

#[test]
fn older_rounds_fall_out_of_the_window() {
    let history = vec![
        round("2024-05-07", 80, 12),
        round("2024-04-30", 80, 12),
        round("2024-04-23", 80, 12),
        round("2024-04-16", 110, 15),
        round("2024-04-09", 120, 18),
    ];
    assert_eq!(calculate_handicap(&history), 80);
}

#[test]
fn short_history_uses_what_exists() {
    assert_eq!(calculate_handicap(&[round("2024-05-07", 91, 0)]), 91);
    assert_eq!(
        calculate_handicap(&[round("2024-05-07", 90, 0), round("2024-04-30", 85, 0)]),
        88 // 87.5 rounds half-up
    );
}

#[test]
fn empty_history_means_no_handicap() {
    assert_eq!(calculate_handicap(&[]), 0);
}

#[test]
fn rounds_half_up() {
    // (85 + 82 + 89) / 3 = 85.33 -> 85; (85 + 83 + 89) / 3 = 85.67 -> 86
    let low = vec![
        round("2024-05-07", 85, 0),
        round("2024-04-30", 82, 0),
        round("2024-04-23", 89, 0),
    ];
    let high = vec![
        round("2024-05-07", 85, 0),
        round("2024-04-30", 83, 0),
        round("2024-04-23", 89, 0),
    ];
    assert_eq!(calculate_handicap(&low), 85);
    assert_eq!(calculate_handicap(&high), 86);
}
