//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::CatalogEntry;

/// Build a catalog from bare names, assigning sequential app ids from 1.
///
/// This is the canonical fixture builder used across all tests.
pub fn make_catalog(names: &[&str]) -> Vec<CatalogEntry> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| CatalogEntry::new(index as u32 + 1, *name))
        .collect()
}

/// Single entry with an explicit id, for tests that assert on ids.
pub fn make_entry(appid: u32, name: &str) -> CatalogEntry {
    CatalogEntry::new(appid, name)
}
