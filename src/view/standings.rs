use maud::{Markup, html};

use crate::model::{LeagueDay, Standing};

/// Rows marked as holding a playoff spot. Display derivation only.
pub const PLAYOFF_SPOTS: usize = 4;

#[must_use]
pub fn render_standings_page(day: LeagueDay, standings: &[Standing]) -> Markup {
    html! {
        h2 class="standings-day" { (day) " Standings" }
        (render_standings(standings))
    }
}

#[must_use]
pub fn render_standings(standings: &[Standing]) -> Markup {
    html! {
        table class="standings-table" {
            thead {
                tr {
                    th { "Rank" }
                    th { "Team" }
                    th { "GP" }
                    th { "W" }
                    th { "L" }
                    th { "T" }
                    th { "PTS" }
                }
            }
            tbody {
                @if standings.is_empty() {
                    tr { td colspan="7" class="standings-empty" { "No standings data available yet." } }
                }
                @for (idx, row) in standings.iter().enumerate() {
                    (render_standing_row(idx, row))
                }
            }
        }
    }
}

fn render_standing_row(idx: usize, row: &Standing) -> Markup {
    let row_class = if idx < PLAYOFF_SPOTS {
        "standings-row playoff"
    } else {
        "standings-row"
    };

    html! {
        tr class=(row_class) {
            td class="rank" {
                (idx + 1)
                @if idx < PLAYOFF_SPOTS {
                    " " span class="playoff-spot" title="Playoff Spot" { "\u{25cf}" }
                }
            }
            td class="team-name" {
                @if idx == 0 { span class="trophy" { "\u{1f3c6} " } }
                (row.team.name)
            }
            td { (row.played) }
            td class="wins" { (row.wins) }
            td class="losses" { (row.losses) }
            td { (row.ties) }
            td class="points" { (row.points) }
        }
    }
}
