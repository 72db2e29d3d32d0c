// ============================================================
// Layer 4 — Corpus Reader
// ============================================================
// Turns raw corpus text into typed lines, then groups the token
// lines into sentences.
//
// How the corpus format works:
//   One token per line, tab-separated columns, and a bare line
//   between sentences:
//
//     West    NNP  I-NP  I-MISC
//     Indian  NNP  I-NP  I-MISC
//     all-rounder NN I-NP O
//              ← blank line = sentence boundary
//     London  NNP  I-NP  I-LOC
//
// The reader does two independent things with the same lines:
//   1. group_sentences — sentence-shaped rows for feature building
//   2. orig_entries    — the flat original-order stream (tokens and
//      boundaries) kept so the annotated output can be rebuilt with
//      the exact blank-line layout of the input
//
// Reference: CoNLL-2003 shared task (Tjong Kim Sang & De Meulder, 2003)
//            Rust Book §8 (Collections), §13 (Iterators)

use crate::domain::line::{OrigEntry, RawLine, Row};

/// Split corpus text into typed lines.
///
/// An empty line becomes a `Boundary`; anything else is split on
/// tabs into a `Row`. No arity check happens here — a row with too
/// few columns is caught later when features are extracted from it.
pub fn split_raw_lines(text: &str) -> Vec<RawLine> {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                RawLine::Boundary
            } else {
                RawLine::Row(line.split('\t').map(str::to_string).collect())
            }
        })
        .collect()
}

/// Group token rows into sentences.
///
/// A boundary closes the current sentence; consecutive boundaries
/// collapse into a single break, so leading, trailing or doubled
/// blank lines never produce an empty sentence. Every sentence in
/// the result holds at least one row.
pub fn group_sentences(lines: &[RawLine]) -> Vec<Vec<Row>> {
    let mut sentences: Vec<Vec<Row>> = Vec::new();
    let mut current: Vec<Row> = Vec::new();

    for line in lines {
        match line {
            RawLine::Boundary => {
                // Only a non-empty sentence is worth keeping — this is
                // what collapses runs of boundaries
                if !current.is_empty() {
                    sentences.push(std::mem::take(&mut current));
                }
            }
            RawLine::Row(row) => current.push(row.clone()),
        }
    }

    // A corpus that does not end in a blank line still closes
    // its final sentence
    if !current.is_empty() {
        sentences.push(current);
    }

    sentences
}

/// Flatten typed lines into the original-order stream used to
/// rebuild the annotated output: one entry per input line, with
/// only the token column kept from each row.
pub fn orig_entries(lines: &[RawLine]) -> Vec<OrigEntry> {
    lines
        .iter()
        .map(|line| match line {
            RawLine::Boundary => OrigEntry::Boundary,
            RawLine::Row(row) => {
                OrigEntry::Token(row.first().cloned().unwrap_or_default())
            }
        })
        .collect()
}
