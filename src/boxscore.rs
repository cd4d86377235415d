//! Box score summarization: per-player batting and pitching lines.
//!
//! This is the core of the tool. [`summarize`] turns one team's player map
//! into short display lines, e.g. `"2-for-4, HR, 2 RBI"` for a batter and
//! `"5.2 IP, 4 H, 2 ER, 1 BB, 6 K"` for a pitcher.

use std::collections::BTreeMap;

use crate::error::{BoxscoreError, Result};
use crate::statsapi::types::{BattingStats, PitchingStats, PlayerRecord};


/// Players outside the listed batting order sort after slot-9 hitters.
const UNLISTED_SLOT: u32 = 9;

/// One batter's line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattingLine {
    pub name: String,
    pub summary: String,
}

/// One pitcher's line plus raw pitch counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchingLine {
    pub name: String,
    pub summary: String,
    pub pitches: u32,
    pub strikes: u32,
}

/// Summarized team boxscore.
#[derive(Debug, Clone, Default)]
pub struct BoxScore {
    /// Batting lines, ascending by lineup slot. Ties keep the player map's
    /// iteration order.
    pub batting: Vec<BattingLine>,
    /// Pitching lines in the order the player map yields them.
    pub pitching: Vec<PitchingLine>,
}

/// Rendering options.
///
/// `legacy_quirks` reproduces two long-standing oddities of the summaries
/// this tool has always printed: the at-bats side of `"H-AB"` is cut to its
/// first character (so `"1-12"` renders as `"1-for-1"`), and the runs/RBI
/// redundancy elision compares the first character of the rendered stats
/// instead of the counts (runs end up always elided, RBI elided only on a
/// leading-character match with the home run stat). On by default so output
/// stays byte-compatible with existing consumers; turn it off for the
/// corrected rendering.
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    pub legacy_quirks: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self { legacy_quirks: true }
    }
}

/// Summarize one team's players into batting and pitching lines.
///
/// A player with a batting block contributes exactly one [`BattingLine`],
/// even if a pitching block is also present; a player with only a pitching
/// block contributes one [`PitchingLine`]; a player with neither contributes
/// nothing.
pub fn summarize(
    players: &BTreeMap<String, PlayerRecord>,
    opts: &SummaryOptions,
) -> Result<BoxScore> {
    let mut batting: Vec<(u32, BattingLine)> = Vec::new();
    let mut pitching: Vec<PitchingLine> = Vec::new();

    for player in players.values() {
        let name = &player.person.full_name;
        if let Some(stats) = &player.stats.batting {
            let slot = lineup_slot(player.batting_order.as_deref())?;
            let summary = batting_summary(stats, opts)?;
            batting.push((
                slot,
                BattingLine {
                    name: name.clone(),
                    summary,
                },
            ));
        } else if let Some(stats) = &player.stats.pitching {
            pitching.push(PitchingLine {
                name: name.clone(),
                summary: pitching_summary(stats),
                pitches: stats.pitches_thrown,
                strikes: stats.strikes,
            });
        }
    }

    // sort_by_key is stable, so equal slots keep their relative order
    batting.sort_by_key(|(slot, _)| *slot);
    let batting = batting.into_iter().map(|(_, line)| line).collect();

    Ok(BoxScore { batting, pitching })
}

/// Checked list indexing for display. Out of range is an
/// [`Index`](BoxscoreError::Index) error rather than a panic.
pub fn nth<'a, T>(items: &'a [T], index: usize, kind: &'static str) -> Result<&'a T> {
    items.get(index).ok_or(BoxscoreError::Index {
        kind,
        index,
        len: items.len(),
    })
}

/// Sort key from the first digit of `battingOrder`; absent or empty means
/// [`UNLISTED_SLOT`].
fn lineup_slot(batting_order: Option<&str>) -> Result<u32> {
    match batting_order.and_then(|order| order.chars().next()) {
        None => Ok(UNLISTED_SLOT),
        Some(digit) => digit.to_digit(10).ok_or_else(|| {
            BoxscoreError::Format(format!("battingOrder starts with non-digit {digit:?}"))
        }),
    }
}

/// Render a counting stat: omitted at zero, bare label at one, counted above.
fn counting_stat(count: u32, label: &str) -> Option<String> {
    match count {
        0 => None,
        1 => Some(label.to_owned()),
        n => Some(format!("{n} {label}")),
    }
}

fn batting_summary(batting: &BattingStats, opts: &SummaryOptions) -> Result<String> {
    let (hits, at_bats) = match batting.summary.split_once('-') {
        Some((hits, at_bats)) => (hits, at_bats),
        None => ("0", "0"),
    };

    let mut summary = if opts.legacy_quirks {
        // only the first character of the at-bats side
        let first = at_bats.chars().next().ok_or_else(|| {
            BoxscoreError::Format(format!("batting summary {:?} has no at-bats", batting.summary))
        })?;
        format!("{hits}-for-{first}")
    } else {
        format!("{hits}-for-{at_bats}")
    };

    let mut extras: Vec<String> = Vec::new();
    let mut homer_stat_head: Option<char> = None;
    for (count, label) in [
        (batting.doubles, "2B"),
        (batting.triples, "3B"),
        (batting.home_runs, "HR"),
        (batting.runs, "R"),
        (batting.rbi, "RBI"),
        (batting.base_on_balls, "BB"),
        (batting.strike_outs, "K"),
    ] {
        let Some(stat) = counting_stat(count, label) else {
            continue;
        };
        if label == "HR" {
            homer_stat_head = stat.chars().next();
        }
        let elide = if opts.legacy_quirks {
            // runs never survive; RBI drops on a leading-character match
            // with the rendered home run stat
            label == "R" || (label == "RBI" && stat.chars().next() == homer_stat_head)
        } else {
            (label == "R" || label == "RBI") && batting.home_runs > 0 && count == batting.home_runs
        };
        if elide {
            continue;
        }
        extras.push(stat);
    }

    if !extras.is_empty() {
        summary.push_str(", ");
        summary.push_str(&extras.join(", "));
    }
    Ok(summary)
}

fn pitching_summary(pitching: &PitchingStats) -> String {
    let mut summary = format!("{} IP", pitching.innings_pitched);

    // unlike batting, zero counts still render; runs drop only when fully
    // earned (equal to earnedRuns)
    let mut extras: Vec<String> = Vec::new();
    for (count, label) in [
        (pitching.hits, "H"),
        (pitching.runs, "R"),
        (pitching.earned_runs, "ER"),
        (pitching.base_on_balls, "BB"),
        (pitching.strike_outs, "K"),
    ] {
        if label == "R" && count == pitching.earned_runs {
            continue;
        }
        extras.push(format!("{count} {label}"));
    }

    if !extras.is_empty() {
        summary.push_str(", ");
        summary.push_str(&extras.join(", "));
    }
    summary
}
