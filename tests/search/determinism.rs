//! Search is a pure function: same inputs, same outputs, every time.

use super::common::fixture_catalog;
use steamseek::{search, search_scored};

const QUERIES: &[&str] = &[
    "silent hill",
    "outlast",
    "vii",
    "GTA",
    "phasmaphobia",
    "re",
    "xyzxyz123",
];

#[test]
fn repeated_searches_are_identical() {
    let catalog = fixture_catalog();

    for query in QUERIES {
        let first = search(query, &catalog);
        for _ in 0..5 {
            assert_eq!(first, search(query, &catalog), "query {:?} diverged", query);
        }
    }
}

#[test]
fn scores_are_stable_too() {
    let catalog = fixture_catalog();

    for query in QUERIES {
        let first: Vec<i64> = search_scored(query, &catalog)
            .iter()
            .map(|scored| scored.score)
            .collect();
        let second: Vec<i64> = search_scored(query, &catalog)
            .iter()
            .map(|scored| scored.score)
            .collect();
        assert_eq!(first, second);
    }
}

#[test]
fn catalog_is_never_mutated() {
    let catalog = fixture_catalog();
    let before = catalog.clone();

    for query in QUERIES {
        let _ = search(query, &catalog);
    }

    assert_eq!(catalog, before);
}
