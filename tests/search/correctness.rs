//! Does search find what it should find?
//!
//! Each matching tier gets exercised against the fixture catalog: exact,
//! prefix, substring, fuzzy, Roman-numeral normalization, and acronyms.

use super::common::{assert_no_junk, fixture_catalog};
use steamseek::search;

#[test]
fn exact_name_is_found_first() {
    let catalog = fixture_catalog();

    let results = search("outlast", &catalog);
    assert!(!results.is_empty());
    assert_eq!(results[0].name, "Outlast");
    assert!(results.iter().any(|entry| entry.name == "Outlast 2"));
}

#[test]
fn prefix_query_finds_sequels() {
    let catalog = fixture_catalog();

    let results = search("silent hill", &catalog);
    assert_eq!(results[0].name, "Silent Hill");
    assert_eq!(results[1].name, "Silent Hill 2");
}

#[test]
fn substring_query_finds_mid_name_matches() {
    let catalog = fixture_catalog();

    let results = search("witcher", &catalog);
    assert!(results
        .iter()
        .any(|entry| entry.name == "The Witcher 3: Wild Hunt"));
}

#[test]
fn typo_is_tolerated_for_long_queries() {
    let catalog = fixture_catalog();

    // One substitution away from "phasmophobia"
    let results = search("phasmaphobia", &catalog);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Phasmophobia");
}

#[test]
fn typo_is_not_tolerated_for_short_queries() {
    let catalog = fixture_catalog();

    // "prtl" is two edits from "portal", but four characters is below the
    // five-char threshold the fuzzy tier requires
    let results = search("prtl", &catalog);
    assert!(results.is_empty());
}

#[test]
fn roman_numeral_query_finds_arabic_names() {
    let catalog = fixture_catalog();

    let results = search("vii", &catalog);
    let names: Vec<&str> = results.iter().map(|entry| entry.name.as_str()).collect();
    assert!(names.contains(&"Resident Evil 7"));
    assert!(names.contains(&"Final Fantasy VII"));
    // The popular-title boost puts Resident Evil 7 on top
    assert_eq!(names[0], "Resident Evil 7");
}

#[test]
fn arabic_query_finds_roman_names() {
    let catalog = fixture_catalog();

    let results = search("final fantasy 7", &catalog);
    assert_eq!(results[0].name, "Final Fantasy VII");
}

#[test]
fn uppercase_acronym_finds_initials() {
    let catalog = fixture_catalog();

    let results = search("GTA", &catalog);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Grand Theft Auto");
}

#[test]
fn lowercase_acronym_is_not_an_acronym() {
    let catalog = fixture_catalog();
    assert!(search("gta", &catalog).is_empty());
}

#[test]
fn punctuated_names_are_reachable() {
    let catalog = fixture_catalog();

    // The colon in "Amnesia: The Dark Descent" blocks raw containment; the
    // fuzzy tier carries the query across
    let results = search("amnesia dark descent", &catalog);
    assert_eq!(results[0].name, "Amnesia: The Dark Descent");
}

#[test]
fn junk_is_invisible_to_every_query() {
    let catalog = fixture_catalog();

    for query in [
        "outlast",
        "portal 2",
        "dead space",
        "outlast official soundtrack",
        "portal 2 ost",
        "test app 1007",
    ] {
        assert_no_junk(&search(query, &catalog));
    }

    // Even the junk entry's exact name finds only the real games around it
    let results = search("portal 2 ost", &catalog);
    assert!(results.iter().all(|entry| entry.name != "Portal 2 OST"));
}
