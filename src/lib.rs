//! Relevance-ranked fuzzy search over the Steam app catalog.
//!
//! This crate ranks free-text queries against a large catalog of game names:
//! exact/prefix/substring matching, Roman-numeral normalization ("VII" = "7"),
//! Levenshtein typo tolerance, acronym detection ("GTA"), junk filtering, and
//! a weighted scoring scheme, truncated to the top 25 results.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ normalize.rs │────▶│  scoring.rs  │────▶│  search.rs  │
//! │ (romans,     │     │ (QueryContext│     │  (search)   │
//! │  stop words) │     │  score_entry)│     │             │
//! └──────────────┘     └──────────────┘     └─────────────┘
//!        ▲                   ▲                     ▲
//!        │             ┌─────┴────────┐     ┌──────┴──────┐
//!        │             │   junk.rs    │     │  cache.rs   │
//!        └─────────────│levenshtein.rs│     │(CatalogCache│
//!                      └──────────────┘     │  snapshots) │
//!                                           └─────────────┘
//! ```
//!
//! The ranker itself is a pure function: no I/O, no shared mutable state,
//! reentrant, deterministic. The catalog it reads comes from a
//! [`CatalogCache`] snapshot; the cache owns all the time-based refresh and
//! stale-fallback behavior so the ranker never has to know about upstream
//! failures.
//!
//! # Usage
//!
//! ```
//! use steamseek::{search, CatalogEntry};
//!
//! let catalog = vec![
//!     CatalogEntry::new(2280, "DOOM + DOOM II"),
//!     CatalogEntry::new(379720, "DOOM Eternal"),
//! ];
//!
//! let results = search("doom", &catalog);
//! assert!(!results.is_empty());
//! ```

// Module declarations
pub mod cache;
mod junk;
mod levenshtein;
mod normalize;
mod scoring;
mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use cache::{CacheError, CatalogCache, CatalogSource, DEFAULT_TTL};
pub use junk::is_likely_junk;
pub use levenshtein::levenshtein_bounded;
pub use normalize::{initials, normalize, significant_tokens, STOP_WORDS};
pub use scoring::{
    score_entry, QueryContext, ACRONYM_SCORE, EXACT_SCORE, POPULAR_TITLES, PREFIX_SCORE,
    SUBSTRING_SCORE,
};
pub use search::{search, search_scored, MIN_QUERY_LEN, RESULT_LIMIT};
pub use types::{AppId, CatalogEntry, ScoredEntry};
