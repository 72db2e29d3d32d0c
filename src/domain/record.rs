// ============================================================
// Layer 3 — Feature Record Domain Types
// ============================================================
// The feature record is the unit of work for the whole pipeline:
// every stage takes records and returns records with more features
// attached, and the maxent layer consumes the finished records.
//
// A record is a map from feature NAME to feature VALUE. Values are
// heterogeneous — token strings, positions, boundary flags — and a
// windowed neighbour that falls outside the sentence is stored as
// an explicit Null so every record in a corpus carries the same
// key set.
//
// Reference: Rust Book §8 (Common Collections), §10 (Traits)

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A named-entity tag such as "I-PER", "I-LOC" or "O".
pub type Label = String;

/// Feature names shared by every pipeline stage.
///
/// All stages attach and read features through these constants so a
/// typo cannot silently split one feature into two.
pub mod keys {
    /// Surface form of the token, exactly as read
    pub const TOKEN: &str = "token";
    /// Part-of-speech tag, exactly as read
    pub const POS: &str = "pos";
    /// Chunk tag, trimmed of surrounding whitespace
    pub const CHUNK: &str = "chunk";
    /// Zero-based position of the token within its sentence
    pub const TOKEN_POSITION: &str = "token_position";
    /// True for the first token of a sentence
    pub const START_TOKEN: &str = "start_token";
    /// True for the last token of a sentence
    pub const END_TOKEN: &str = "end_token";
    /// "lower" when the token equals its lowercased form, else "upper"
    pub const CASE: &str = "case";
    /// Final character of the token
    pub const LAST_CHAR: &str = "last_char";
    /// True when the token is on the English stopword list
    pub const STOPWORD: &str = "nltk_stopword";
    /// True when the token names a known city or country
    pub const GEO_PLACE: &str = "is_geo_place";
    /// True when the token is a known personal first name
    pub const PERSON_NAME: &str = "is_nltk_name";

    /// Name of the neighbour feature `k` positions back, e.g. "prev_token_1"
    pub fn prev_token(k: usize) -> String {
        format!("prev_token_{k}")
    }

    /// Name of the neighbour feature `k` positions ahead, e.g. "next_token_1"
    pub fn next_token(k: usize) -> String {
        format!("next_token_{k}")
    }
}

/// The value of one named feature.
///
/// `Null` is a real value, not an absence: a missing neighbour is
/// recorded as Null so the key set stays uniform across a corpus.
/// The type is hashable because the maxent encoding uses
/// (name, value) pairs as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Token surface forms, tags, case classes, characters
    Str(String),
    /// Sentence positions
    Int(i64),
    /// Boundary flags and lexicon hits
    Bool(bool),
    /// A windowed neighbour that does not exist
    Null,
}

impl FeatureValue {
    /// Shorthand for building a string value from any string-ish input
    pub fn str(value: impl Into<String>) -> FeatureValue {
        FeatureValue::Str(value.into())
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Str(s) => write!(f, "{s}"),
            FeatureValue::Int(n) => write!(f, "{n}"),
            FeatureValue::Bool(b) => write!(f, "{b}"),
            FeatureValue::Null => write!(f, "null"),
        }
    }
}

/// One token's named features, plus its gold label when the token
/// came from labeled training data.
///
/// Records are immutable in spirit: stages consume a record and
/// return a new one via the `with` builders rather than mutating
/// in place. Keys are kept sorted so iteration order — and with it
/// feature encoding and trained weights — is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Feature name → feature value, ordered by name
    features: BTreeMap<String, FeatureValue>,

    /// Gold named-entity label; `None` for test-corpus records
    label: Option<Label>,
}

impl FeatureRecord {
    /// Create an empty record with no features and no label
    pub fn new() -> FeatureRecord {
        FeatureRecord::default()
    }

    /// Return this record with one more feature attached.
    /// Re-attaching an existing name replaces its value.
    pub fn with(mut self, name: impl Into<String>, value: FeatureValue) -> FeatureRecord {
        self.features.insert(name.into(), value);
        self
    }

    /// Return this record with its gold label set
    pub fn with_label(mut self, label: Label) -> FeatureRecord {
        self.label = Some(label);
        self
    }

    /// Look up a feature value by name
    pub fn value(&self, name: &str) -> Option<&FeatureValue> {
        self.features.get(name)
    }

    /// Look up a feature that must exist and must be a string
    pub fn str_value(&self, name: &str) -> Result<&str> {
        match self.value(name) {
            Some(FeatureValue::Str(s)) => Ok(s),
            other => Err(anyhow::anyhow!(
                "Feature '{}' should be a string, found {:?}",
                name,
                other
            )),
        }
    }

    /// Look up a feature that must exist and must be an integer
    pub fn int_value(&self, name: &str) -> Result<i64> {
        match self.value(name) {
            Some(FeatureValue::Int(n)) => Ok(*n),
            other => Err(anyhow::anyhow!(
                "Feature '{}' should be an integer, found {:?}",
                name,
                other
            )),
        }
    }

    /// Look up a feature that must exist and must be a boolean
    pub fn bool_value(&self, name: &str) -> Result<bool> {
        match self.value(name) {
            Some(FeatureValue::Bool(b)) => Ok(*b),
            other => Err(anyhow::anyhow!(
                "Feature '{}' should be a boolean, found {:?}",
                name,
                other
            )),
        }
    }

    /// Gold label, when the record came from training data
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Gold label that must exist — errors on test-corpus records
    pub fn require_label(&self) -> Result<&str> {
        self.label()
            .context("Record has no gold label — was it built from test data?")
    }

    /// Iterate features in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.features.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Feature names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    /// Number of features attached so far
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when no features are attached yet
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
