// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the steamseek CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `STEAMSEEK_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals),
//! then defaults to dark because most developers live there.
//!
//! Scores are colored by tier so a glance at the output shows *why* a result
//! ranked where it did. Respects `NO_COLOR` for the purists and non-TTY
//! detection for pipelines.

use std::sync::OnceLock;
use steamseek::{ScoredEntry, ACRONYM_SCORE, EXACT_SCORE, PREFIX_SCORE, SUBSTRING_SCORE};

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via STEAMSEEK_THEME
    if let Ok(theme) = std::env::var("STEAMSEEK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg >= 7 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Should output be colored at all?
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Tier color for a score: green for exact, blue for prefix, yellow for
/// acronym/substring, plain for the fuzzy and overlap tiers.
fn score_color(score: i64) -> String {
    let dark = theme() == Theme::Dark;
    if score >= EXACT_SCORE {
        // green
        if dark { rgb(152, 195, 121) } else { rgb(80, 161, 79) }
    } else if score >= PREFIX_SCORE {
        // blue
        if dark { rgb(97, 175, 239) } else { rgb(64, 120, 242) }
    } else if score >= ACRONYM_SCORE || score >= SUBSTRING_SCORE {
        // yellow
        if dark { rgb(229, 192, 123) } else { rgb(193, 132, 1) }
    } else {
        String::new()
    }
}

/// Print ranked results as an aligned table.
pub fn print_results(query: &str, scored: &[ScoredEntry<'_>]) {
    if scored.is_empty() {
        println!("no matches for \"{}\"", query);
        return;
    }

    let colored = colors_enabled();
    println!("{} results for \"{}\"", scored.len(), query);
    println!();

    for (rank, result) in scored.iter().enumerate() {
        let line = format!(
            "{:>3}. {:<60} {:>8} {:>7}",
            rank + 1,
            truncate_name(&result.entry.name, 60),
            result.entry.appid,
            result.score,
        );
        if colored {
            let color = score_color(result.score);
            if color.is_empty() {
                println!("{}{}{}", DIM, line, RESET);
            } else {
                println!("{}{}{}", color, line, RESET);
            }
        } else {
            println!("{}", line);
        }
    }
}

/// Print catalog snapshot statistics for `inspect`.
pub fn print_stats(path: &str, total: usize, junk: usize, longest: Option<&str>) {
    println!("{}", path);
    println!("  entries: {}", total);
    if total > 0 {
        let share = junk as f64 / total as f64 * 100.0;
        println!("  junk:    {} ({:.1}%)", junk, share);
    }
    if let Some(name) = longest {
        println!("  longest: {:?} ({} chars)", name, name.chars().count());
    }
}

/// Cut a name to `max` characters, appending an ellipsis when cut.
fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
