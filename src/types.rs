// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! Two structs and a newtype. `CatalogEntry` is what the Steam app list gives
//! us: an externally assigned id and a display name. `ScoredEntry` is the
//! transient pairing the ranker produces while sorting; it borrows from the
//! catalog and is gone before the results are returned.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **AppId**: externally assigned, strictly positive. Zero is Valve's
//!   "no app" sentinel and never names a real product.
//! - **CatalogEntry**: immutable once fetched. The ranker only ever reads a
//!   snapshot and produces a derived ordering; nothing in this crate mutates
//!   an entry after deserialization.

use serde::{Deserialize, Serialize};

/// Type-safe Steam application identifier.
///
/// Prevents accidentally passing a score or an index where an app id is
/// expected. Wire format is a bare integer, hence `serde(transparent)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct AppId(pub u32);

impl AppId {
    /// Create a new AppId, validating it's a plausible Steam id (> 0).
    #[inline]
    pub fn new(id: u32) -> Option<Self> {
        if id > 0 {
            Some(AppId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Is this a plausible externally assigned id?
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<u32> for AppId {
    fn from(id: u32) -> Self {
        AppId(id)
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the app catalog, as served by the Steam app list endpoint.
///
/// Field names match the wire format (`appid`, `name`) so a raw applist
/// response deserializes without renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub appid: AppId,
    pub name: String,
}

impl CatalogEntry {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(appid: u32, name: impl Into<String>) -> Self {
        CatalogEntry {
            appid: AppId(appid),
            name: name.into(),
        }
    }
}

/// A catalog entry paired with its relevance score.
///
/// Created per search invocation, sorted, truncated, and discarded. Borrows
/// the entry rather than cloning ~100k names per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a CatalogEntry,
    pub score: i64,
}
