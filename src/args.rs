use clap::Parser;
use std::path::PathBuf;

use crate::model::LeagueDay;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Standings,
    Scorecard,
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the league snapshot JSON
    #[arg(short = 'l', long, value_name = "FILE")]
    pub league_data: PathBuf,

    /// Restrict output to one league day
    #[arg(short = 'd', long, value_enum)]
    pub day: Option<LeagueDay>,

    /// Which report to print
    #[arg(short = 'r', long, value_enum, default_value = "standings")]
    pub report: Report,

    /// Match id, required for the scorecard report
    #[arg(short = 'm', long)]
    pub match_id: Option<String>,
}
