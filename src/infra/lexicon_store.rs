// ============================================================
// Layer 6 — Lexicon Store
// ============================================================
// Loads the bundled word lists into in-memory membership sets.
//
// The lists are compiled into the binary with include_str!, so the
// tagger needs no runtime data directory and a deployment is a
// single file. Each list is one word per line; blank lines and
// '#' comment lines are skipped.
//
//   stopwords_en.txt — English function words
//   names.txt        — personal first names
//
// Case handling differs per store and is part of each store's
// contract — see the struct docs.
//
// Reference: Bird, Klein & Loper, the NLTK book, ch. 2
//            Rust Book §8 (HashSet)

use std::collections::HashSet;

use crate::domain::traits::Lexicon;

const STOPWORDS_EN: &str = include_str!("data/stopwords_en.txt");
const PERSON_NAMES: &str = include_str!("data/names.txt");

/// English stopword membership.
///
/// Lookups are EXACT and case-sensitive: "the" is a stopword,
/// sentence-initial "The" is not. The asymmetry is deliberate —
/// it lets the downstream feature double as a capitalisation cue.
pub struct StopwordStore {
    words: HashSet<String>,
}

impl StopwordStore {
    pub fn new() -> Self {
        let words = parse_word_list(STOPWORDS_EN);
        tracing::debug!("Stopword store ready: {} words", words.len());
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for StopwordStore {
    fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

/// Personal-name membership.
///
/// Lookups are case-insensitive: the list is lowercased at load
/// time and every query is lowercased before the set lookup, so
/// "emma", "Emma" and "EMMA" all hit.
pub struct NameStore {
    words: HashSet<String>,
}

impl NameStore {
    pub fn new() -> Self {
        let words = parse_word_list(PERSON_NAMES)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect::<HashSet<_>>();
        tracing::debug!("Name store ready: {} names", words.len());
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for NameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for NameStore {
    fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }
}

/// Parse a bundled one-word-per-line list, skipping blank lines
/// and '#' comments.
pub(crate) fn parse_word_list(raw: &str) -> HashSet<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
