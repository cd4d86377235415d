//! CLI argument definitions and parsing structures.

use std::fmt;

use clap::{Parser, ValueEnum};

/// Which side of the boxscore to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TeamSide {
    Away,
    Home,
}

impl TeamSide {
    /// Key under `liveData.boxscore.teams` in the feed document.
    pub fn key(self) -> &'static str {
        match self {
            TeamSide::Away => "away",
            TeamSide::Home => "home",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "mlb-boxscore",
    about = "Print box score lines from the MLB statsapi live feed"
)]
pub struct Cli {
    /// Game primary key, e.g. 786716.
    #[clap(long, short, default_value_t = 786716)]
    pub game_id: u64,

    /// Team side to summarize.
    #[clap(long, short, value_enum, default_value_t = TeamSide::Away)]
    pub team: TeamSide,

    /// Skip TLS certificate verification.
    #[clap(long)]
    pub insecure: bool,

    /// Corrected rendering: full at-bat counts and count-based runs/RBI
    /// elision instead of the historical quirks.
    #[clap(long)]
    pub no_legacy_quirks: bool,

    /// Print fetch progress to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}
