// ============================================================
// Layer 3 — Line-Level Domain Types
// ============================================================
// Represents the two kinds of line a column corpus contains.
//
// The corpus format is one token per line:
//
//   U.N.    NNP  I-NP  I-ORG
//   official NN  I-NP  O
//            ← a bare line separates sentences
//   Ekeus   NNP  I-NP  I-PER
//
// Each token line carries tab-separated columns:
//   token, part-of-speech tag, chunk tag, and — in training
//   data only — the gold named-entity label.
//
// Reference: CoNLL-2003 shared task (Tjong Kim Sang & De Meulder, 2003)
//            Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// The tab-split columns of one token line, in corpus order.
pub type Row = Vec<String>;

/// One line of a corpus file, before any feature extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawLine {
    /// A bare line — marks the boundary between two sentences
    Boundary,

    /// A token line split into its columns.
    /// Column count is 3 (test data) or 4 (training data);
    /// arity is NOT checked here — short rows fail later, at
    /// feature/label extraction time
    Row(Row),
}

impl RawLine {
    /// True if this line is a sentence boundary
    pub fn is_boundary(&self) -> bool {
        matches!(self, RawLine::Boundary)
    }
}

/// One entry of the original-order stream kept for output
/// reconstruction: every boundary, and the bare token of every
/// token line, exactly as they appeared in the input.
///
/// Only the token survives — the pos/chunk columns are not needed
/// to rebuild the annotated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrigEntry {
    /// A sentence boundary, reproduced verbatim as a blank line
    Boundary,

    /// The surface form of one token line
    Token(String),
}

impl OrigEntry {
    /// True if this entry is a sentence boundary
    pub fn is_boundary(&self) -> bool {
        matches!(self, OrigEntry::Boundary)
    }
}
