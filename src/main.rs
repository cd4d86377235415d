//! Entry point: parse CLI, fetch the live feed, print the demo lines.

use clap::Parser;
use mlb_boxscore::{
    boxscore::{nth, summarize, SummaryOptions},
    cli::Cli,
    statsapi::{http::FeedClient, types::team_players},
    Result,
};

// Demonstration picks: the second batting line and the fifth pitching line.
const DEMO_BATTER: usize = 1;
const DEMO_PITCHER: usize = 4;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = FeedClient::new(cli.insecure)?;
    if cli.verbose {
        eprintln!("Fetching live feed for game {}...", cli.game_id);
    }
    let feed = client.fetch_live_feed(cli.game_id).await?;
    let players = team_players(&feed, cli.team)?;
    let box_score = summarize(
        &players,
        &SummaryOptions {
            legacy_quirks: !cli.no_legacy_quirks,
        },
    )?;

    let batter = nth(&box_score.batting, DEMO_BATTER, "batting")?;
    println!("{}", batter.name);
    println!("{}", batter.summary);

    let pitcher = nth(&box_score.pitching, DEMO_PITCHER, "pitching")?;
    println!("{}", pitcher.name);
    println!("{}", pitcher.summary);
    println!("{}", pitcher.pitches);
    println!("{}", pitcher.strikes);

    Ok(())
}
