// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind catalog ranking.
//!
//! Scoring is a sequential chain: one base rule fires per candidate (exact,
//! prefix, substring, fuzzy, word overlap - first match wins), then the
//! additive adjustments stack on top. Rule order is load-bearing: the base
//! tiers are spaced an order of magnitude apart so that no pile of bonuses
//! can lift a substring match over a prefix match, and the adjustments only
//! reorder candidates *within* a tier.
//!
//! The acronym rule is the one exception to the chain: it applies
//! independently and can raise a lower base to its flat 2000, so "GTA" finds
//! "Grand Theft Auto" even though no substring relates them.
//!
//! # Score tiers
//!
//! | Rule                      | Base  |
//! |---------------------------|-------|
//! | Exact match               | 10000 |
//! | Prefix match              | 5000  |
//! | Acronym (initials)        | 2000  |
//! | Substring containment     | 1000  |
//! | Fuzzy (≤30% edits)        | 500 − 50×distance |
//! | All tokens overlap        | 300   |
//! | ≥60% tokens overlap       | ⌊200×fraction⌋ |
//! | Single-token containment  | 50    |

use crate::junk::is_likely_junk;
use crate::levenshtein::levenshtein_bounded;
use crate::normalize::{initials, name_tokens, normalize, significant_tokens};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// The base tiers are spaced so adjustments (≤ +700 in the best case) can
// never promote a candidate across tiers. Changing the spacing changes
// relative rankings; the tests in tests/search/ranking.rs pin the ordering.

/// Base score for an exact name match (raw or normalized).
pub const EXACT_SCORE: i64 = 10_000;

/// Base score for a prefix match.
pub const PREFIX_SCORE: i64 = 5_000;

/// Base score for an acronym match ("GTA" → "Grand Theft Auto").
pub const ACRONYM_SCORE: i64 = 2_000;

/// Base score for substring containment.
pub const SUBSTRING_SCORE: i64 = 1_000;

/// Starting score for a fuzzy match, before the per-edit penalty.
pub const FUZZY_BASE_SCORE: i64 = 500;

/// Penalty per edit of distance in the fuzzy tier.
pub const FUZZY_EDIT_PENALTY: i64 = 50;

/// Queries shorter than this skip the fuzzy tier entirely.
pub const MIN_FUZZY_QUERY_LEN: usize = 5;

/// Fraction of the query length tolerated as edit distance.
pub const FUZZY_DISTANCE_RATIO: f64 = 0.3;

/// Base score when every query token matches some name token.
pub const ALL_TOKENS_SCORE: i64 = 300;

/// Ceiling for the partial-overlap score, scaled by the match fraction.
pub const PARTIAL_TOKENS_SCORE: i64 = 200;

/// Minimum token match fraction for the partial-overlap rule.
pub const PARTIAL_TOKENS_MIN_FRACTION: f64 = 0.6;

/// Base score when a lone query token (> 3 chars) is contained in a name token.
pub const SINGLE_TOKEN_SCORE: i64 = 50;

/// Bonus for names containing a popular title.
pub const POPULAR_BOOST: i64 = 500;

/// Bonus when the query occurs within the first few characters of the name.
pub const EARLY_POSITION_BOOST: i64 = 200;

/// How close to the start a match must be for the early-position bonus.
pub const EARLY_POSITION_WINDOW: usize = 10;

/// Shorter names score up to this much higher (100 − name length).
pub const LENGTH_BONUS_CEILING: i64 = 100;

/// Penalty per character outside `[A-Za-z0-9]` and whitespace.
pub const SPECIAL_CHAR_PENALTY: i64 = 3;

/// Names longer than this are penalized (bundles, special editions).
pub const LONG_NAME_THRESHOLD: usize = 80;

/// Flat penalty for names over [`LONG_NAME_THRESHOLD`].
pub const LONG_NAME_PENALTY: i64 = 100;

/// Frequently requested titles, boosted toward the top of the results.
/// Matched by case-insensitive substring containment.
pub const POPULAR_TITLES: &[&str] = &[
    "resident evil",
    "silent hill",
    "outlast",
    "amnesia",
    "dead space",
    "phasmophobia",
    "alien isolation",
    "dying light",
    "until dawn",
    "soma",
    "layers of fear",
    "the evil within",
    "dead by daylight",
    "little nightmares",
    "five nights at freddy",
    "bioshock",
    "left 4 dead",
    "prey",
    "metro",
    "the forest",
    "subnautica",
    "grounded",
    "the long dark",
    "dont starve",
];

/// Everything derivable from the query alone, computed once per search
/// instead of once per candidate.
#[derive(Debug, Clone)]
pub struct QueryContext {
    /// Lowercased, trimmed query - the form used for raw matching.
    lower: String,
    /// Roman-numeral-normalized form of `lower`.
    normalized: String,
    /// Significant tokens of the normalized query (> 1 char, non-stop).
    tokens: Vec<String>,
    /// Edit budget for the fuzzy tier, when the query is long enough.
    fuzzy_budget: Option<usize>,
    /// The raw query, when it qualifies as an acronym (≤ 4 chars, all caps).
    acronym: Option<String>,
}

impl QueryContext {
    /// Precompute the per-query state for [`score_entry`].
    pub fn new(query: &str) -> Self {
        let lower = query.to_lowercase().trim().to_string();
        let normalized = normalize(&lower);
        let tokens: Vec<String> = significant_tokens(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect();

        let query_chars = query.chars().count();
        let fuzzy_budget = (query_chars >= MIN_FUZZY_QUERY_LEN)
            .then(|| (query_chars as f64 * FUZZY_DISTANCE_RATIO).floor() as usize);

        // The acronym form is the *raw* query: case is the signal here, so
        // this is the one rule that must not see the lowercased form.
        let acronym = (query_chars <= 4
            && !query.is_empty()
            && query == query.to_uppercase())
        .then(|| query.to_string());

        QueryContext {
            lower,
            normalized,
            tokens,
            fuzzy_budget,
            acronym,
        }
    }

    /// The lowercased, trimmed query.
    #[inline]
    pub fn lower(&self) -> &str {
        &self.lower
    }
}

/// Score one candidate name against the query.
///
/// Returns None for junk entries, for candidates no rule matches, and for
/// candidates whose adjusted score falls to zero or below - the caller never
/// sees a non-positive score. Pure function of its inputs.
pub fn score_entry(ctx: &QueryContext, name: &str) -> Option<i64> {
    if is_likely_junk(name) {
        return None;
    }

    let lower_name = name.to_lowercase();
    let normalized_name = normalize(&lower_name);

    // Base rules: first match wins.
    let mut score: i64 = if lower_name == ctx.lower || normalized_name == ctx.normalized {
        EXACT_SCORE
    } else if lower_name.starts_with(&ctx.lower) || normalized_name.starts_with(&ctx.normalized) {
        PREFIX_SCORE
    } else if lower_name.contains(&ctx.lower) || normalized_name.contains(&ctx.normalized) {
        SUBSTRING_SCORE
    } else if let Some(distance) = ctx
        .fuzzy_budget
        .and_then(|max| levenshtein_bounded(&ctx.lower, &lower_name, max))
    {
        (FUZZY_BASE_SCORE - FUZZY_EDIT_PENALTY * distance as i64).max(0)
    } else {
        0
    };

    // Word overlap: only when no whole-string rule fired.
    if score == 0 && !ctx.tokens.is_empty() {
        score = word_overlap_score(&ctx.tokens, &normalized_name);
    }

    // Acronym rule applies independently and can override a lower base.
    if let Some(acronym) = &ctx.acronym {
        if initials(name) == *acronym {
            score = score.max(ACRONYM_SCORE);
        }
    }

    if score == 0 {
        return None;
    }

    // Adjustments: applied only to matched candidates, order-preserving
    // within a tier.
    if POPULAR_TITLES.iter().any(|title| lower_name.contains(title)) {
        score += POPULAR_BOOST;
    }

    let name_chars = name.chars().count();
    score += (LENGTH_BONUS_CEILING - name_chars as i64).max(0);

    let special_chars = name
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
        .count();
    score -= special_chars as i64 * SPECIAL_CHAR_PENALTY;

    if name_chars > LONG_NAME_THRESHOLD {
        score -= LONG_NAME_PENALTY;
    }

    if let Some(position) = lower_name.find(&ctx.lower) {
        if position < EARLY_POSITION_WINDOW {
            score += EARLY_POSITION_BOOST;
        }
    }

    (score > 0).then_some(score)
}

/// Token-overlap scoring against the candidate's stop-word-stripped tokens.
///
/// Tokens match by mutual substring containment: "hill" matches "hills" and
/// "hills" matches "hill". Three rules, checked in order: all query tokens
/// match (300), ≥60% of a multi-token query matches (⌊200×fraction⌋), or a
/// lone token longer than 3 chars is contained in some name token (50).
fn word_overlap_score(tokens: &[String], normalized_name: &str) -> i64 {
    let name_words = name_tokens(normalized_name);

    let token_matches =
        |qw: &str| name_words.iter().any(|nw| nw.contains(qw) || qw.contains(nw));

    if tokens.iter().all(|qw| token_matches(qw)) {
        return ALL_TOKENS_SCORE;
    }

    if tokens.len() > 1 {
        let matched = tokens.iter().filter(|qw| token_matches(qw)).count();
        let fraction = matched as f64 / tokens.len() as f64;
        if fraction >= PARTIAL_TOKENS_MIN_FRACTION {
            return (PARTIAL_TOKENS_SCORE as f64 * fraction).floor() as i64;
        }
    } else if tokens.iter().any(|qw| {
        qw.chars().count() > 3 && name_words.iter().any(|nw| nw.contains(qw.as_str()))
    }) {
        return SINGLE_TOKEN_SCORE;
    }

    0
}
