// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// The pipeline stages depend on these traits, never on a
// concrete store or model, so implementations can be swapped
// without changing the code that uses them. For example:
//   - StopwordStore implements Lexicon
//   - A trie-backed or on-disk store could also implement Lexicon
//   - The lexical feature pass only sees Lexicon
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::record::{FeatureRecord, Label};

// ─── Lexicon ──────────────────────────────────────────────────────────────────
/// Any lookup oracle that can answer token-membership queries.
///
/// Implementations:
///   - StopwordStore  → English stopword list (exact match)
///   - NameStore      → personal first names (case-insensitive)
///   - GazetteerStore → city and country names
pub trait Lexicon {
    /// True when this lexicon contains the given token.
    /// Each implementation documents its own case sensitivity.
    fn contains(&self, token: &str) -> bool;
}

// ─── TokenClassifier ──────────────────────────────────────────────────────────
/// Any trained model that can tag a batch of feature records.
///
/// Implementations:
///   - MaxentModel → multinomial logistic regression over
///     binary indicator features
pub trait TokenClassifier {
    /// Classify every record, preserving order: the i-th label
    /// belongs to the i-th record.
    fn classify_many(&self, records: &[FeatureRecord]) -> Result<Vec<Label>>;
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    // A two-word lexicon standing in for the real stores.
    struct TinyLexicon;

    impl Lexicon for TinyLexicon {
        fn contains(&self, token: &str) -> bool {
            token == "the" || token == "of"
        }
    }

    // A classifier that tags everything "O".
    struct AllOutside;

    impl TokenClassifier for AllOutside {
        fn classify_many(&self, records: &[FeatureRecord]) -> Result<Vec<Label>> {
            Ok(vec!["O".to_string(); records.len()])
        }
    }

    #[test]
    fn test_lexicon_trait_objects() {
        let lexicon: &dyn Lexicon = &TinyLexicon;
        assert!(lexicon.contains("the"));
        assert!(!lexicon.contains("The"));
    }

    #[test]
    fn test_one_label_per_record() {
        let classifier: &dyn TokenClassifier = &AllOutside;
        let records = vec![FeatureRecord::new(), FeatureRecord::new()];

        let labels = classifier.classify_many(&records).unwrap();
        assert_eq!(labels, vec!["O", "O"]);
    }
}
