use chrono::Local;
use maud::{Markup, html};

use crate::engine::scoring::{HoleResult, HoleSide, PairingScorecard, score_match};
use crate::model::{Course, MatchPlayer, MatchState};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Player1,
    Player2,
}

impl Side {
    fn of(self, result: &HoleResult) -> HoleSide {
        match self {
            Side::Player1 => result.player1,
            Side::Player2 => result.player2,
        }
    }
}

const GRID_COLUMNS: usize = 22;

/// Render the paper-style scorecard for a match session: hole, par and
/// hcp header rows with Out/In/Tot columns, then two rows per pairing
/// showing gross scores with net superscripts. Unscored holes render a
/// dash and stay out of the totals.
#[must_use]
pub fn render_scorecard(course: &Course, state: &MatchState) -> Markup {
    let cards = score_match(course, state);
    html! {
        div class="scorecard" {
            (render_course_header(course, state))
            table class="scorecard-table" {
                thead { (render_header_rows(course)) }
                tbody {
                    @for (idx, card) in cards.iter().enumerate() {
                        (render_pairing_section(idx, &state.pairings[idx].player1, &state.pairings[idx].player2, card))
                    }
                }
            }
        }
    }
}

fn render_course_header(course: &Course, state: &MatchState) -> Markup {
    html! {
        div class="scorecard-header" {
            h2 class="course-name" { (course.name) }
            div class="matchup" {
                (Local::now().date_naive()) " \u{2022} " (state.team1.name) " vs " (state.team2.name)
            }
            div class="course-par" { "Par " (course.total_par()) }
        }
    }
}

fn render_header_rows(course: &Course) -> Markup {
    let front = course.front_nine();
    let back = course.back_nine();
    let front_par: u32 = front.iter().map(|h| u32::from(h.par)).sum();
    let back_par: u32 = back.iter().map(|h| u32::from(h.par)).sum();

    html! {
        tr class="hole-row" {
            th { "Hole" }
            @for hole in front { th { (hole.number) } }
            th class="nine-total" { "Out" }
            @for hole in back { th { (hole.number) } }
            th class="nine-total" { "In" }
            th class="grand-total" { "Tot" }
        }
        tr class="par-row" {
            th { "Par" }
            @for hole in front { th { (hole.par) } }
            th class="nine-total" { (front_par) }
            @for hole in back { th { (hole.par) } }
            th class="nine-total" { (back_par) }
            th class="grand-total" { (course.total_par()) }
        }
        tr class="hcp-row" {
            th { "HCP" }
            @for hole in front { th { (hole.handicap_rank) } }
            th class="nine-total" {}
            @for hole in back { th { (hole.handicap_rank) } }
            th class="nine-total" {}
            th class="grand-total" {}
        }
    }
}

fn render_pairing_section(
    idx: usize,
    player1: &MatchPlayer,
    player2: &MatchPlayer,
    card: &PairingScorecard,
) -> Markup {
    html! {
        tr class="match-separator" {
            td colspan=(GRID_COLUMNS) { "Match " (idx + 1) }
        }
        (render_player_row(player1, card, Side::Player1))
        (render_player_row(player2, card, Side::Player2))
        (render_points_row(card))
    }
}

fn render_player_row(player: &MatchPlayer, card: &PairingScorecard, side: Side) -> Markup {
    let front_len = card.holes.len().min(9);
    let (front_holes, back_holes) = card.holes.split_at(front_len);
    let (gross_out, gross_in, gross_total) = match side {
        Side::Player1 => (card.front.gross1, card.back.gross1, card.total.gross1),
        Side::Player2 => (card.front.gross2, card.back.gross2, card.total.gross2),
    };

    html! {
        tr class="player-row" {
            td class="player-name" {
                (player.name) " " span class="player-handicap" { "(" (player.handicap) ")" }
            }
            @for result in front_holes { (render_hole_cell(result, side)) }
            td class="nine-total" { (gross_out) }
            @for result in back_holes { (render_hole_cell(result, side)) }
            td class="nine-total" { (gross_in) }
            td class="grand-total" { (gross_total) }
        }
    }
}

fn render_hole_cell(result: &HoleResult, side: Side) -> Markup {
    let cell_class = if result.handicap_hole {
        "hole-cell handicap-hole"
    } else {
        "hole-cell"
    };
    let line = side.of(result);

    html! {
        td class=(cell_class) {
            @match (line.gross, line.net) {
                (Some(gross), Some(net)) => {
                    (gross) sup class="net" { (net) }
                }
                _ => { span class="unscored" { "-" } }
            }
        }
    }
}

fn render_points_row(card: &PairingScorecard) -> Markup {
    html! {
        tr class="points-row" {
            td colspan=(GRID_COLUMNS) {
                "Match points: front " (card.front.points1) " - " (card.front.points2)
                ", back " (card.back.points1) " - " (card.back.points2)
                ", total " (card.total.points1) " - " (card.total.points2)
            }
        }
    }
}
