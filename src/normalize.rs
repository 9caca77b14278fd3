// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query and name normalization.
//!
//! Game naming is messy: "Final Fantasy VII" and "Final Fantasy 7" are the
//! same product, and half of every catalog name is glue words. Normalization
//! folds both sides of the comparison into one shape before any matching
//! happens: lowercase, collapse whitespace, and rewrite isolated Roman
//! numerals I–X to their Arabic equivalents so sequel naming conventions
//! unify.
//!
//! The Roman rewrite is deliberately token-bounded. "vii" as a whole word
//! becomes "7"; the "vi" inside "vivaldi" is left alone.

/// Glue words ignored during tokenization, on both the query and name side.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "of", "and", "or", "in", "on", "at", "to", "for",
];

/// Is this word one of the fixed stop words?
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Arabic equivalent for an isolated Roman numeral I–X, if the word is one.
///
/// Only the first ten numerals: beyond X the convention breaks down anyway
/// ("Final Fantasy XIII" is marketed with the numeral, never "13").
fn roman_to_arabic(word: &str) -> Option<&'static str> {
    match word {
        "i" => Some("1"),
        "ii" => Some("2"),
        "iii" => Some("3"),
        "iv" => Some("4"),
        "v" => Some("5"),
        "vi" => Some("6"),
        "vii" => Some("7"),
        "viii" => Some("8"),
        "ix" => Some("9"),
        "x" => Some("10"),
        _ => None,
    }
}

/// Normalize a string for matching: lowercase, collapse whitespace, and
/// rewrite whole-word Roman numerals I–X to digits.
///
/// - "Final Fantasy VII" → "final fantasy 7"
/// - "Rocky  II " → "rocky 2"
/// - "Vivaldi" → "vivaldi" (embedded numerals untouched)
pub fn normalize(value: &str) -> String {
    let lowered = value.to_lowercase();
    lowered
        .split_whitespace()
        .map(|word| roman_to_arabic(word).unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a normalized query into its significant tokens: words longer than
/// one character that are not stop words.
///
/// The length filter applies to the query side only. A one-letter query word
/// carries no signal, but a one-letter name word ("X", "V") still has to be
/// matchable against.
pub fn significant_tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() > 1 && !is_stop_word(word))
        .collect()
}

/// Split a normalized candidate name into tokens, dropping stop words.
pub fn name_tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .collect()
}

/// Compute a name's initials for acronym matching.
///
/// First letter, uppercased, of each word longer than 2 characters whose
/// lowercase form is not a stop word: "Resident Evil" → "RE",
/// "Vampire: The Masquerade" → "VM".
pub fn initials(raw_name: &str) -> String {
    raw_name
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !is_stop_word(&word.to_lowercase()))
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
