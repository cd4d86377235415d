//! MLB Box Score Library
//!
//! Fetches a game's live-feed document from the MLB stats API and condenses
//! one team's per-player statistics into short batting and pitching lines.
//!
//! ## Features
//!
//! - **Live-feed fetch**: one GET against the statsapi live endpoint with a
//!   fixed self-throttle pause
//! - **Typed feed models**: per-player batting/pitching blocks decoded with
//!   documented zero-defaults, failing fast on malformed documents
//! - **Summarization**: batting lines ordered by lineup slot, pitching lines
//!   in encounter order, with the tool's historical rendering quirks behind a
//!   compatibility flag
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_boxscore::{
//!     boxscore::{summarize, SummaryOptions},
//!     statsapi::{http::FeedClient, types::team_players},
//!     TeamSide,
//! };
//!
//! # async fn example() -> mlb_boxscore::Result<()> {
//! let client = FeedClient::new(false)?;
//! let feed = client.fetch_live_feed(786716).await?;
//! let players = team_players(&feed, TeamSide::Away)?;
//! let box_score = summarize(&players, &SummaryOptions::default())?;
//! for line in &box_score.batting {
//!     println!("{}: {}", line.name, line.summary);
//! }
//! # Ok(())
//! # }
//! ```

pub mod boxscore;
pub mod cli;
pub mod error;
pub mod statsapi;

// Re-export commonly used types
pub use boxscore::{BattingLine, BoxScore, PitchingLine, SummaryOptions};
pub use cli::TeamSide;
pub use error::{BoxscoreError, Result};
