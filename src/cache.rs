// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog snapshot cache with stale-but-available fallback.
//!
//! The upstream app list is huge, slow to fetch, and changes maybe daily, so
//! the cache holds one snapshot and refreshes it on a time-based expiry
//! (24 hours by default, same window the upstream service uses). The failure
//! policy is deliberate: when a refresh fails, serve the last good snapshot
//! no matter how old it is. A day-stale catalog is a working search; an
//! error page is not. Only when no fetch has *ever* succeeded does the cache
//! return an empty list - still not an error, the ranker just finds nothing.
//!
//! Concurrency model: the snapshot lives behind an `RwLock<Option<...>>` and
//! is handed out as an `Arc`, so a search always computes against a whole
//! snapshot, old or new, never a torn one. Concurrent refreshes are allowed
//! to race (the fetch runs outside the lock); last writer wins.

use crate::types::CatalogEntry;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a fetched snapshot stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Why a catalog fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The upstream source could not produce a catalog.
    Unavailable { reason: String },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Unavailable { reason } => {
                write!(f, "catalog source unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for CacheError {}

/// Something that can produce a full catalog: an HTTP client against the
/// applist endpoint, a snapshot file, a test fixture.
///
/// Keeping the trait this small is the point - the cache and the ranker
/// never learn where entries come from.
pub trait CatalogSource {
    fn fetch(&self) -> Result<Vec<CatalogEntry>, CacheError>;
}

/// One successfully fetched catalog with its fetch time.
struct Snapshot {
    entries: Arc<Vec<CatalogEntry>>,
    fetched_at: Instant,
}

/// TTL-based catalog cache over a [`CatalogSource`].
///
/// Explicitly owned and injectable: handlers hold a reference to one of
/// these rather than reaching for process-wide state, which is also what
/// makes the ranker testable against fixture catalogs.
pub struct CatalogCache<S> {
    source: S,
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
}

impl<S: CatalogSource> CatalogCache<S> {
    /// Cache with the default 24-hour validity window.
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, DEFAULT_TTL)
    }

    /// Cache with an explicit validity window.
    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        CatalogCache {
            source,
            ttl,
            snapshot: RwLock::new(None),
        }
    }

    /// The current catalog: fresh if possible, stale if the source is down,
    /// empty only if no fetch has ever succeeded.
    ///
    /// Never returns an error; failure modes degrade in that order.
    pub fn catalog(&self) -> Arc<Vec<CatalogEntry>> {
        if let Some(entries) = self.fresh_snapshot() {
            return entries;
        }

        // Expired or never fetched. The fetch runs outside the lock so a
        // slow upstream never blocks readers; racing refreshes both store,
        // last writer wins.
        match self.source.fetch() {
            Ok(entries) => {
                let entries = Arc::new(entries);
                *self.snapshot.write() = Some(Snapshot {
                    entries: Arc::clone(&entries),
                    fetched_at: Instant::now(),
                });
                entries
            }
            Err(_) => self
                .snapshot
                .read()
                .as_ref()
                .map(|snap| Arc::clone(&snap.entries))
                .unwrap_or_default(),
        }
    }

    /// Force a fetch regardless of freshness. Returns the new entry count.
    ///
    /// On failure the previous snapshot (if any) is left untouched.
    pub fn refresh(&self) -> Result<usize, CacheError> {
        let entries = self.source.fetch()?;
        let count = entries.len();
        *self.snapshot.write() = Some(Snapshot {
            entries: Arc::new(entries),
            fetched_at: Instant::now(),
        });
        Ok(count)
    }

    /// Is there a snapshot younger than the TTL?
    pub fn is_fresh(&self) -> bool {
        self.fresh_snapshot().is_some()
    }

    fn fresh_snapshot(&self) -> Option<Arc<Vec<CatalogEntry>>> {
        let guard = self.snapshot.read();
        guard
            .as_ref()
            .filter(|snap| snap.fetched_at.elapsed() < self.ttl)
            .map(|snap| Arc::clone(&snap.entries))
    }
}
