use fairway_league::args::{self, Report};
use fairway_league::engine::pairing::pair_players;
use fairway_league::engine::standings::compute_standings;
use fairway_league::error::LeagueError;
use fairway_league::league::League;
use fairway_league::model::{LeagueDay, MatchState};
use fairway_league::view;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    let league = match League::from_json_file(&args.league_data) {
        Ok(league) => league,
        Err(e) => {
            eprintln!("Error loading {}: {e}", args.league_data.display());
            std::process::exit(1);
        }
    };

    match args.report {
        Report::Standings => print_standings(&league, args.day),
        Report::Scorecard => {
            let match_id = args
                .match_id
                .ok_or_else(|| LeagueError::Other("scorecard report needs --match-id".into()))?;
            print_scorecard(&league, &match_id)?;
        }
    }

    Ok(())
}

fn print_standings(league: &League, day_filter: Option<LeagueDay>) {
    let days = match day_filter {
        Some(day) => vec![day],
        None => vec![LeagueDay::Tuesday, LeagueDay::Thursday],
    };

    for day in days {
        let teams = league.teams_for_day(day);
        let matches = league.matches_for_day(day);
        let standings = compute_standings(&teams, &matches);
        println!(
            "{}",
            view::standings::render_standings_page(day, &standings).into_string()
        );
    }
}

fn print_scorecard(league: &League, match_id: &str) -> Result<(), LeagueError> {
    let result = league.match_result(match_id)?;
    let course = league
        .courses
        .first()
        .ok_or_else(|| LeagueError::NotFound("no courses in snapshot".into()))?;
    let team1 = league.team(&result.team1_id)?.clone();
    let team2 = league.team(&result.team2_id)?.clone();

    let pairings = pair_players(
        &league.players_for_team(&team1.id),
        &league.players_for_team(&team2.id),
    );
    let state = MatchState { team1, team2, pairings };

    println!(
        "{}",
        view::scorecard::render_scorecard(course, &state).into_string()
    );
    Ok(())
}
