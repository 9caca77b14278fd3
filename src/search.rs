// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search entry point: score, rank, truncate.
//!
//! `search` is a pure function of (query, catalog): no I/O, no shared state,
//! no suspension points, safe to call concurrently from any number of
//! request handlers. The catalog is scored entry by entry, sorted stably by
//! descending score, and cut to the top 25.
//!
//! The sort being *stable* is part of the contract: candidates with equal
//! scores keep their relative catalog order, so a given (query, catalog)
//! pair always produces the identical result list.

use crate::scoring::{score_entry, QueryContext};
use crate::types::{CatalogEntry, ScoredEntry};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Maximum number of results a search returns.
pub const RESULT_LIMIT: usize = 25;

/// Queries shorter than this (after trimming) return no results.
pub const MIN_QUERY_LEN: usize = 2;

/// Search the catalog, returning up to [`RESULT_LIMIT`] entries ordered by
/// descending relevance.
///
/// Returns an empty vec for short queries, empty catalogs, and queries
/// nothing matches. Never errors: "no match" is an empty result, not a
/// failure.
pub fn search(query: &str, catalog: &[CatalogEntry]) -> Vec<CatalogEntry> {
    search_scored(query, catalog)
        .into_iter()
        .map(|scored| scored.entry.clone())
        .collect()
}

/// Like [`search`], but keeps the scores attached.
///
/// The scores are what the CLI displays and what the ranking tests assert
/// against; the HTTP-facing caller only wants the entries.
pub fn search_scored<'a>(query: &str, catalog: &'a [CatalogEntry]) -> Vec<ScoredEntry<'a>> {
    if query.trim().chars().count() < MIN_QUERY_LEN || catalog.is_empty() {
        return Vec::new();
    }

    let ctx = QueryContext::new(query);
    let mut scored = score_catalog(&ctx, catalog);

    // Stable sort: ties retain relative catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(RESULT_LIMIT);
    scored
}

/// Score every catalog entry against the query, preserving catalog order.
#[cfg(feature = "rayon")]
fn score_catalog<'a>(ctx: &QueryContext, catalog: &'a [CatalogEntry]) -> Vec<ScoredEntry<'a>> {
    // map/flatten instead of filter_map: collect on the indexed iterator
    // keeps results in catalog order, which the stable sort depends on.
    catalog
        .par_iter()
        .map(|entry| {
            score_entry(ctx, &entry.name).map(|score| ScoredEntry { entry, score })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn score_catalog<'a>(ctx: &QueryContext, catalog: &'a [CatalogEntry]) -> Vec<ScoredEntry<'a>> {
    catalog
        .iter()
        .filter_map(|entry| {
            score_entry(ctx, &entry.name).map(|score| ScoredEntry { entry, score })
        })
        .collect()
}
