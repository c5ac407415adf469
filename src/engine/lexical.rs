//! Deterministic keyword-based classifier — the guaranteed fallback.
//!
//! Pure function over the static keyword tables: no I/O, no randomness,
//! always returns an answer. Acts as the fallback when the remote path
//! yields nothing.

use crate::engine::keywords::{PRODUCTIVE_KEYWORDS, UNPRODUCTIVE_KEYWORDS};
use crate::engine::types::Category;

/// Base confidence for a keyword win.
const BASE_CONFIDENCE: usize = 60;

/// Confidence added per distinct matching keyword.
const PER_KEYWORD_BOOST: usize = 10;

/// Confidence ceiling for the lexical path.
const MAX_CONFIDENCE: usize = 95;

/// Flat confidence for ties.
const TIE_CONFIDENCE: f64 = 50.0;

/// Keyword-count classifier over the two category tables.
pub struct LexicalScorer {
    productive: &'static [&'static str],
    unproductive: &'static [&'static str],
}

impl LexicalScorer {
    /// Scorer over the built-in bilingual tables.
    pub fn default_keywords() -> Self {
        Self {
            productive: PRODUCTIVE_KEYWORDS,
            unproductive: UNPRODUCTIVE_KEYWORDS,
        }
    }

    /// Scorer over custom tables (for testing).
    pub fn with_keywords(
        productive: &'static [&'static str],
        unproductive: &'static [&'static str],
    ) -> Self {
        Self {
            productive,
            unproductive,
        }
    }

    /// Classify text into a category with a confidence percentage.
    ///
    /// Counts distinct matching keywords per set (repeated occurrences of
    /// one keyword count once — the count drives confidence scaling).
    /// A tie with matches leans Productive so real requests aren't dropped;
    /// a zero-zero tie defaults to Unproductive.
    /// The returned confidence is always within [50, 95].
    pub fn classify(&self, text: &str) -> (Category, f64) {
        let lowered = text.to_lowercase();
        let productive_count = count_distinct(&lowered, self.productive);
        let unproductive_count = count_distinct(&lowered, self.unproductive);

        use std::cmp::Ordering;
        match productive_count.cmp(&unproductive_count) {
            Ordering::Greater => (Category::Productive, scale(productive_count)),
            Ordering::Less => (Category::Unproductive, scale(unproductive_count)),
            Ordering::Equal if productive_count > 0 => (Category::Productive, TIE_CONFIDENCE),
            Ordering::Equal => (Category::Unproductive, TIE_CONFIDENCE),
        }
    }
}

/// Number of distinct keywords occurring as substrings of `lowered`.
fn count_distinct(lowered: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lowered.contains(**k)).count()
}

/// 60 + 10 per distinct match, capped at 95.
fn scale(count: usize) -> f64 {
    (BASE_CONFIDENCE + PER_KEYWORD_BOOST * count).min(MAX_CONFIDENCE) as f64
}
