// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the steamseek command-line interface.
//!
//! Two subcommands: `search` to rank a query against a catalog snapshot, and
//! `inspect` to summarize what's in a snapshot. The snapshot is a JSON file:
//! either a bare `[{appid, name}]` array or the raw applist envelope exactly
//! as the Steam endpoint returns it.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "steamseek",
    about = "Relevance-ranked search over the Steam app catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog snapshot and display ranked results
    Search {
        /// Path to a catalog snapshot (applist JSON)
        catalog: String,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "25")]
        limit: usize,

        /// Emit results as JSON (the shape the HTTP layer serves)
        #[arg(long)]
        json: bool,
    },

    /// Inspect a catalog snapshot: entry count, junk share, name lengths
    Inspect {
        /// Path to a catalog snapshot (applist JSON)
        catalog: String,
    },
}
