//! Shared test utilities and fixtures.

#![allow(dead_code)]

use steamseek::CatalogEntry;

// Re-export canonical test utilities from steamseek::testing
pub use steamseek::testing::{make_catalog, make_entry};

/// A small but realistic slice of the app catalog: sequels, Roman numerals,
/// punctuation-heavy names, popular titles, and the junk that ships
/// alongside them.
pub fn fixture_catalog() -> Vec<CatalogEntry> {
    make_catalog(&[
        "Silent Hill",
        "Silent Hill 2",
        "Resident Evil",
        "Resident Evil 7",
        "Outlast",
        "Outlast 2",
        "Phasmophobia",
        "Amnesia: The Dark Descent",
        "Grand Theft Auto",
        "Portal",
        "Portal 2",
        "The Witcher 3: Wild Hunt",
        "Subnautica",
        "Celeste",
        "Hollow Knight",
        "Final Fantasy VII",
        "Metro 2033",
        "Dead Space",
        "Half-Life 2",
        "DOOM Eternal",
        "The Long Dark",
        // Junk that must never surface
        "Outlast Official Soundtrack",
        "Portal 2 OST",
        "test app 1007",
        "Dead Space Wallpaper Collection",
    ])
}

/// Names of the junk entries in [`fixture_catalog`].
pub const FIXTURE_JUNK: &[&str] = &[
    "Outlast Official Soundtrack",
    "Portal 2 OST",
    "test app 1007",
    "Dead Space Wallpaper Collection",
];

/// Assert that no junk fixture ever appears in a result list.
pub fn assert_no_junk(results: &[CatalogEntry]) {
    for entry in results {
        assert!(
            !FIXTURE_JUNK.contains(&entry.name.as_str()),
            "junk entry leaked into results: {:?}",
            entry.name
        );
    }
}
