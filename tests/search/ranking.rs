//! Does search order what it finds correctly?
//!
//! The base tiers are pinned by construction (10000 > 5000 > 2000 > 1000 >
//! 500 > 300); these tests pin the *adjustments* - the bonuses and penalties
//! that order candidates within a tier.

use super::common::{fixture_catalog, make_catalog};
use steamseek::{search, search_scored};

#[test]
fn tiers_order_the_portal_family() {
    let catalog = fixture_catalog();

    let results = search("portal", &catalog);
    assert_eq!(results[0].name, "Portal"); // exact
    assert_eq!(results[1].name, "Portal 2"); // prefix
    assert_eq!(results.len(), 2); // the OST stays out
}

#[test]
fn popular_titles_outrank_equal_matches() {
    // Both are prefix matches for the query; only one is on the popular list
    let catalog = make_catalog(&["Dead by Dawn", "Dead by Daylight"]);

    let results = search("dead by", &catalog);
    assert_eq!(results[0].name, "Dead by Daylight");
    assert_eq!(results[1].name, "Dead by Dawn");
}

#[test]
fn shorter_names_outrank_longer_ones() {
    let catalog = make_catalog(&["Metro 2033 Redux", "Metro 2033"]);

    let results = search("metro", &catalog);
    assert_eq!(results[0].name, "Metro 2033");
    assert_eq!(results[1].name, "Metro 2033 Redux");
}

#[test]
fn early_matches_outrank_late_matches() {
    // Catalog order deliberately reversed: the early-position bonus must
    // reorder them
    let catalog = make_catalog(&["The Towering Peaks of Hill", "Red Hill Valley"]);

    let results = search("hill", &catalog);
    assert_eq!(results[0].name, "Red Hill Valley");
    assert_eq!(results[1].name, "The Towering Peaks of Hill");
}

#[test]
fn oversized_names_are_penalized() {
    // Both match past the early-position window; only length separates them
    let plain = format!("{} celeste {}", "a".repeat(12), "b".repeat(10));
    let bloated = format!("{} celeste {}", "a".repeat(40), "b".repeat(40));
    let catalog = make_catalog(&[bloated.as_str(), plain.as_str()]);

    let results = search("celeste", &catalog);
    assert_eq!(results[0].name, plain);
    assert_eq!(results[1].name, bloated);
}

#[test]
fn equal_scores_keep_catalog_order() {
    // Same length, same tier, same adjustments: scores tie exactly
    let catalog = make_catalog(&["Alpha Portal Saga", "Omega Portal Saga"]);

    let scored = search_scored("portal", &catalog);
    assert_eq!(scored.len(), 2);
    assert_eq!(scored[0].score, scored[1].score);
    assert_eq!(scored[0].entry.name, "Alpha Portal Saga");
    assert_eq!(scored[1].entry.name, "Omega Portal Saga");
}

#[test]
fn adjustments_never_cross_tier_boundaries() {
    // A heavily boosted substring match (popular title, short name, early
    // position) still cannot reach an unboosted prefix match
    let catalog = make_catalog(&["Zzz Silent Hill", "Silent Hillside Chronicle Omnibus"]);

    let scored = search_scored("silent hill", &catalog);
    assert_eq!(scored[0].entry.name, "Silent Hillside Chronicle Omnibus");
    assert!(scored[0].score > scored[1].score);
}
