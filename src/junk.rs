// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Junk filtering: keep non-products out of the results.
//!
//! The Steam app list is not a list of games. It's a list of *apps*, which
//! includes soundtracks, artbooks, wallpaper packs, trailers, skin packs,
//! and the occasional literal "test app 276". None of these should ever
//! surface in a game search, no matter how well their name matches the
//! query - an exact-name hit on "Game X Soundtrack" is still a soundtrack.
//!
//! Filtering happens before scoring: a junk entry never receives a score.

use regex::RegexSet;
use std::sync::LazyLock;

/// Known non-product name patterns, matched case-insensitively.
///
/// Word-bounded where the token is a word ("ost" must not reject "Lost"),
/// anchored where the pattern is positional (leading "test ", "dlc:" prefix).
const JUNK_PATTERNS: &[&str] = &[
    r"^test\s",
    r"\bsoundtrack\b",
    r"\bost\b",
    r"\bartbook\b",
    r"\bwallpaper\b",
    r"\btrailer\b",
    r"\bpack\b.*\bdlc\b",
    r"^dlc:",
    r"\bskin pack\b",
    r"\bskins?\b.*\bonly\b",
];

static JUNK_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    regex::RegexSetBuilder::new(JUNK_PATTERNS)
        .case_insensitive(true)
        .build()
        .expect("junk patterns are valid regexes")
});

/// Does this catalog name match a known non-product pattern?
///
/// Junk-filtered candidates never receive a score and are never returned.
#[inline]
pub fn is_likely_junk(name: &str) -> bool {
    JUNK_SET.is_match(name)
}
