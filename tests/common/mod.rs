#![allow(dead_code)]

use chrono::NaiveDate;
use fairway_league::model::{
    Course, Hole, LeagueDay, MatchPlayer, MatchResult, Pairing, Player, RoundRecord, Team,
};

/// The demo course: par and difficulty ranks as used on league nights.
pub fn pine_valley() -> Course {
    let layout: [(u8, u8, u8); 18] = [
        (1, 4, 7),
        (2, 5, 1),
        (3, 3, 13),
        (4, 4, 5),
        (5, 4, 11),
        (6, 3, 17),
        (7, 5, 3),
        (8, 4, 9),
        (9, 4, 15),
        (10, 4, 8),
        (11, 3, 14),
        (12, 5, 2),
        (13, 4, 6),
        (14, 4, 12),
        (15, 3, 18),
        (16, 5, 4),
        (17, 4, 10),
        (18, 4, 16),
    ];

    Course {
        id: "c1".to_string(),
        name: "Pine Valley".to_string(),
        holes: layout
            .iter()
            .map(|&(number, par, handicap_rank)| Hole {
                number,
                par,
                handicap_rank,
            })
            .collect(),
    }
}

/// A course whose hole number equals its rank, handy when a test wants
/// rank arithmetic to read off directly.
pub fn ranked_course() -> Course {
    Course {
        id: "c2".to_string(),
        name: "Rank Ladder".to_string(),
        holes: (1..=18)
            .map(|n| Hole {
                number: n,
                par: 4,
                handicap_rank: n,
            })
            .collect(),
    }
}

pub fn player(id: &str, name: &str, team_id: &str, handicap: i32) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        team_id: team_id.to_string(),
        handicap,
        history: vec![],
    }
}

pub fn round(date: &str, gross_score: u32, handicap_after: i32) -> RoundRecord {
    RoundRecord {
        date: date.parse::<NaiveDate>().unwrap(),
        gross_score,
        handicap_after,
    }
}

pub fn team(id: &str, name: &str, day: LeagueDay) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        day,
    }
}

pub fn completed_match(id: &str, team1_id: &str, team2_id: &str, winner_id: Option<&str>) -> MatchResult {
    MatchResult {
        id: id.to_string(),
        date: "2024-05-07".parse().unwrap(),
        day: LeagueDay::Tuesday,
        team1_id: team1_id.to_string(),
        team2_id: team2_id.to_string(),
        completed: true,
        winner_id: winner_id.map(str::to_string),
        score: None,
    }
}

pub fn scheduled_match(id: &str, team1_id: &str, team2_id: &str) -> MatchResult {
    MatchResult {
        completed: false,
        winner_id: None,
        ..completed_match(id, team1_id, team2_id, None)
    }
}

/// Pairing with gross scores recorded hole-by-hole from the slices,
/// hole 1 first. Shorter slices leave the later holes unscored.
pub fn pairing_with_scores(h1: i32, grosses1: &[u32], h2: i32, grosses2: &[u32]) -> Pairing {
    let mut player1 = MatchPlayer::from_player(&player("p1", "John Doe", "t1", h1));
    let mut player2 = MatchPlayer::from_player(&player("p2", "Bob Johnson", "t2", h2));
    for (i, &g) in grosses1.iter().enumerate() {
        player1.record_score(i as u8 + 1, g);
    }
    for (i, &g) in grosses2.iter().enumerate() {
        player2.record_score(i as u8 + 1, g);
    }
    Pairing { player1, player2 }
}

pub fn empty_pairing(h1: i32, h2: i32) -> Pairing {
    pairing_with_scores(h1, &[], h2, &[])
}
