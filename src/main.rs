// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The steamseek binary: rank queries against a catalog snapshot file.
//!
//! The snapshot is whatever the applist endpoint handed you, saved to disk -
//! either the raw `{"applist": {"apps": [...]}}` envelope or a bare array of
//! `{appid, name}` objects. `search` ranks a query against it; `inspect`
//! summarizes it.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use steamseek::{is_likely_junk, search_scored, CatalogEntry};

mod cli;
use cli::{Cli, Commands};

/// The applist envelope as served by the Steam endpoint.
#[derive(Deserialize)]
struct AppListEnvelope {
    applist: AppList,
}

#[derive(Deserialize)]
struct AppList {
    apps: Vec<CatalogEntry>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            catalog,
            query,
            limit,
            json,
        } => run_search(&catalog, &query, limit, json),
        Commands::Inspect { catalog } => run_inspect(&catalog),
    }
}

fn run_search(catalog_path: &str, query: &str, limit: usize, json: bool) -> Result<()> {
    let catalog = load_catalog(Path::new(catalog_path))?;

    let mut scored = search_scored(query, &catalog);
    scored.truncate(limit);

    if json {
        // Same shape the HTTP layer serves: entries only, scores stay internal
        let entries: Vec<&CatalogEntry> = scored.iter().map(|result| result.entry).collect();
        println!("{}", serde_json::to_string(&entries)?);
    } else {
        cli::display::print_results(query, &scored);
    }

    Ok(())
}

fn run_inspect(catalog_path: &str) -> Result<()> {
    let catalog = load_catalog(Path::new(catalog_path))?;

    let junk = catalog
        .iter()
        .filter(|entry| is_likely_junk(&entry.name))
        .count();
    let longest = catalog
        .iter()
        .max_by_key(|entry| entry.name.chars().count())
        .map(|entry| entry.name.as_str());

    cli::display::print_stats(catalog_path, catalog.len(), junk, longest);
    Ok(())
}

/// Load a catalog snapshot from disk.
fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog snapshot {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse either catalog wire shape: bare array, or applist envelope.
fn parse_catalog(raw: &str) -> Result<Vec<CatalogEntry>> {
    if let Ok(entries) = serde_json::from_str::<Vec<CatalogEntry>>(raw) {
        return Ok(entries);
    }

    let envelope: AppListEnvelope = serde_json::from_str(raw)
        .context("expected a JSON array of {appid, name} or an applist envelope")?;
    Ok(envelope.applist.apps)
}
