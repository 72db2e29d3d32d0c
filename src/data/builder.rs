// ============================================================
// Layer 4 — Base Record Builder
// ============================================================
// Converts one corpus row into the base feature record that the
// later pipeline stages enrich.
//
// Column layout of a row:
//   0  token       — kept exactly as read (case matters later)
//   1  pos tag     — kept exactly as read
//   2  chunk tag   — trimmed, because the final column of a line
//                    tends to carry the line terminator
//   3  gold label  — training data only; trimmed for the same reason
//
// A row that is too short for its corpus kind is malformed input,
// and malformed input aborts the run — silently dropping a token
// here would desynchronise the label/output alignment at the end
// of the pipeline.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};

use crate::domain::line::Row;
use crate::domain::record::{keys, FeatureRecord, FeatureValue};

// Column indices of the corpus format
const TOKEN_COL: usize = 0;
const POS_COL:   usize = 1;
const CHUNK_COL: usize = 2;
const LABEL_COL: usize = 3;

/// Which corpus variant a file is read as.
///
/// The kind decides two things downstream:
///   - Training rows must carry the gold-label column
///   - Only test corpora keep the original-order stream for output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusKind {
    /// Labeled data: token, pos, chunk, gold label
    Training,
    /// Unlabeled data: token, pos, chunk
    Test,
}

/// Build the base feature record for one row.
///
/// Training rows additionally get their trimmed gold label embedded
/// in the record; test rows are built without one.
pub fn build_record(row: &Row, kind: CorpusKind) -> Result<FeatureRecord> {
    let token = column(row, TOKEN_COL, "token")?;
    let pos   = column(row, POS_COL, "pos tag")?;
    let chunk = column(row, CHUNK_COL, "chunk tag")?;

    let record = FeatureRecord::new()
        .with(keys::TOKEN, FeatureValue::str(token))
        .with(keys::POS, FeatureValue::str(pos))
        .with(keys::CHUNK, FeatureValue::str(chunk.trim()));

    match kind {
        CorpusKind::Training => {
            let label = column(row, LABEL_COL, "gold label")?;
            Ok(record.with_label(label.trim().to_string()))
        }
        CorpusKind::Test => Ok(record),
    }
}

/// Fetch one column of a row, failing with a message that shows the
/// whole offending row — corpus files are edited by hand, and "which
/// line was broken" is the first thing anyone asks.
fn column<'a>(row: &'a Row, idx: usize, name: &str) -> Result<&'a str> {
    row.get(idx).map(String::as_str).with_context(|| {
        format!(
            "Malformed corpus row {:?}: no {} column at index {}",
            row, name, idx
        )
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn row(cols: &[&str]) -> Row {
        cols.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_training_row() {
        let record =
            build_record(&row(&["Essex", "NNP", "I-NP", "I-ORG"]), CorpusKind::Training)
                .unwrap();

        assert_eq!(record.str_value(keys::TOKEN).unwrap(), "Essex");
        assert_eq!(record.str_value(keys::POS).unwrap(), "NNP");
        assert_eq!(record.str_value(keys::CHUNK).unwrap(), "I-NP");
        assert_eq!(record.label(), Some("I-ORG"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_unlabeled_test_row() {
        let record =
            build_record(&row(&["Essex", "NNP", "I-NP"]), CorpusKind::Test).unwrap();

        assert_eq!(record.label(), None);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_trimming_rules() {
        let record = build_record(
            &row(&[" Essex", "NNP ", "I-NP \n", " I-ORG\n"]),
            CorpusKind::Training,
        )
        .unwrap();

        assert_eq!(record.str_value(keys::TOKEN).unwrap(), " Essex");
        assert_eq!(record.str_value(keys::POS).unwrap(), "NNP ");
        assert_eq!(record.str_value(keys::CHUNK).unwrap(), "I-NP");
        assert_eq!(record.label(), Some("I-ORG"));
    }

    #[test]
    fn test_short_rows_fail() {
        // Two columns can never be enough
        let err = build_record(&row(&["Essex", "NNP"]), CorpusKind::Test).unwrap_err();
        assert!(err.to_string().contains("chunk tag"));

        // Three columns is fine for test data but short for training data
        let three = row(&["Essex", "NNP", "I-NP"]);
        assert!(build_record(&three, CorpusKind::Test).is_ok());
        let err = build_record(&three, CorpusKind::Training).unwrap_err();
        assert!(err.to_string().contains("gold label"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let record = build_record(
            &row(&["Essex", "NNP", "I-NP", "I-ORG", "spare"]),
            CorpusKind::Training,
        )
        .unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record.label(), Some("I-ORG"));
    }
}
