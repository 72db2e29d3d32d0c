// ============================================================
// Layer 4 — Context Augmenter
// ============================================================
// Adds the sentence-scoped features to a sentence's records, in a
// fixed order:
//
//   Pass 1: number_positions     → token_position
//   Pass 2: mark_boundaries      → start_token, end_token
//   Pass 3: add_neighbor_window  → prev_token_k / next_token_k
//
// The order matters: pass 2 reads token_position off the record
// (not from the enumeration index), so pass 1 must already have
// run. Pass 3 reads it too.
//
// Each pass consumes the sentence and returns a new one — records
// are built up functionally rather than mutated in place, the same
// style the record builders use.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;

use crate::domain::record::{keys, FeatureRecord, FeatureValue};

/// Run all three context passes over one sentence.
pub fn enrich_sentence(
    sentence: Vec<FeatureRecord>,
    max_distance: usize,
) -> Result<Vec<FeatureRecord>> {
    let sentence = number_positions(sentence);
    let sentence = mark_boundaries(sentence)?;
    add_neighbor_window(sentence, max_distance)
}

/// Pass 1 — attach each token's zero-based position in the sentence.
pub fn number_positions(sentence: Vec<FeatureRecord>) -> Vec<FeatureRecord> {
    sentence
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            record.with(keys::TOKEN_POSITION, FeatureValue::Int(idx as i64))
        })
        .collect()
}

/// Pass 2 — flag the first and last token of the sentence.
///
/// Reads token_position from the record itself, so it errors on a
/// sentence that has not been through `number_positions` yet. In a
/// one-token sentence, both flags are true.
pub fn mark_boundaries(sentence: Vec<FeatureRecord>) -> Result<Vec<FeatureRecord>> {
    let last = sentence.len() as i64 - 1;

    sentence
        .into_iter()
        .map(|record| {
            let position = record.int_value(keys::TOKEN_POSITION)?;
            Ok(record
                .with(keys::START_TOKEN, FeatureValue::Bool(position == 0))
                .with(keys::END_TOKEN, FeatureValue::Bool(position == last)))
        })
        .collect()
}

/// Pass 3 — attach windowed neighbour tokens.
///
/// For every distance k in 1..=max_distance, each record gets
/// prev_token_k and next_token_k: the surface form of the token k
/// positions away, or Null when the window leaves the sentence.
/// Every record gains exactly 2 × max_distance features, so the
/// corpus-wide key set stays uniform.
pub fn add_neighbor_window(
    sentence: Vec<FeatureRecord>,
    max_distance: usize,
) -> Result<Vec<FeatureRecord>> {
    // Surface forms in sentence order, for O(1) neighbour lookup
    let tokens: Vec<String> = sentence
        .iter()
        .map(|record| record.str_value(keys::TOKEN).map(str::to_string))
        .collect::<Result<_>>()?;
    let len = sentence.len();

    sentence
        .into_iter()
        .map(|record| {
            let position = record.int_value(keys::TOKEN_POSITION)? as usize;
            let mut record = record;

            for k in 1..=max_distance {
                let prev = if position >= k {
                    FeatureValue::str(tokens[position - k].as_str())
                } else {
                    FeatureValue::Null
                };

                // The forward existence check compares against the
                // MAXIMUM window distance, not the current k. A token
                // within max_distance of the sentence end therefore gets
                // Null for every next_token_k, including neighbours that
                // do exist. Trained models expect exactly this feature
                // pattern — keep the inequality as is.
                let next = if position + max_distance < len {
                    FeatureValue::str(tokens[position + k].as_str())
                } else {
                    FeatureValue::Null
                };

                record = record
                    .with(keys::prev_token(k), prev)
                    .with(keys::next_token(k), next);
            }

            Ok(record)
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(tokens: &[&str]) -> Vec<FeatureRecord> {
        tokens
            .iter()
            .map(|t| FeatureRecord::new().with(keys::TOKEN, FeatureValue::str(*t)))
            .collect()
    }

    fn value<'a>(records: &'a [FeatureRecord], idx: usize, name: &str) -> &'a FeatureValue {
        records[idx].value(name).unwrap()
    }

    #[test]
    fn test_positions_zero_based() {
        let records = number_positions(sentence(&["a", "b", "c"]));

        for (idx, record) in records.iter().enumerate() {
            assert_eq!(
                record.int_value(keys::TOKEN_POSITION).unwrap(),
                idx as i64
            );
        }
    }

    #[test]
    fn test_boundary_flags() {
        let records =
            mark_boundaries(number_positions(sentence(&["a", "b", "c"]))).unwrap();

        assert_eq!(value(&records, 0, keys::START_TOKEN), &FeatureValue::Bool(true));
        assert_eq!(value(&records, 0, keys::END_TOKEN), &FeatureValue::Bool(false));
        assert_eq!(value(&records, 1, keys::START_TOKEN), &FeatureValue::Bool(false));
        assert_eq!(value(&records, 1, keys::END_TOKEN), &FeatureValue::Bool(false));
        assert_eq!(value(&records, 2, keys::END_TOKEN), &FeatureValue::Bool(true));
    }

    #[test]
    fn test_single_token_sentence() {
        let records = mark_boundaries(number_positions(sentence(&["only"]))).unwrap();

        assert_eq!(value(&records, 0, keys::START_TOKEN), &FeatureValue::Bool(true));
        assert_eq!(value(&records, 0, keys::END_TOKEN), &FeatureValue::Bool(true));
    }

    #[test]
    fn test_boundaries_need_positions() {
        assert!(mark_boundaries(sentence(&["a", "b"])).is_err());
    }

    #[test]
    fn test_window_of_one() {
        let records =
            enrich_sentence(sentence(&["The", "quick", "fox"]), 1).unwrap();

        assert_eq!(value(&records, 0, "prev_token_1"), &FeatureValue::Null);
        assert_eq!(value(&records, 0, "next_token_1"), &FeatureValue::str("quick"));
        assert_eq!(value(&records, 1, "prev_token_1"), &FeatureValue::str("The"));
        assert_eq!(value(&records, 1, "next_token_1"), &FeatureValue::str("fox"));
        assert_eq!(value(&records, 2, "prev_token_1"), &FeatureValue::str("quick"));
        assert_eq!(value(&records, 2, "next_token_1"), &FeatureValue::Null);
    }

    #[test]
    fn test_forward_check_uses_max_distance() {
        // Five tokens, window 2. The token at position 3 sits one short
        // of the end: its next_token_1 neighbour exists, but because
        // 3 + 2 is not < 5, BOTH forward features must come out Null.
        let records = enrich_sentence(sentence(&["a", "b", "c", "d", "e"]), 2).unwrap();

        assert_eq!(value(&records, 3, "next_token_1"), &FeatureValue::Null);
        assert_eq!(value(&records, 3, "next_token_2"), &FeatureValue::Null);

        // The backward side has no such cutoff: position 1 is one past
        // the start, so prev_token_1 exists even though prev_token_2
        // does not
        assert_eq!(value(&records, 1, "prev_token_1"), &FeatureValue::str("a"));
        assert_eq!(value(&records, 1, "prev_token_2"), &FeatureValue::Null);

        // Position 2 is the last token with any forward context at all
        assert_eq!(value(&records, 2, "next_token_1"), &FeatureValue::str("d"));
        assert_eq!(value(&records, 2, "next_token_2"), &FeatureValue::str("e"));
    }

    #[test]
    fn test_uniform_window_keys() {
        let records = enrich_sentence(sentence(&["a", "b"]), 3).unwrap();

        for record in &records {
            for k in 1..=3 {
                assert!(record.value(&keys::prev_token(k)).is_some());
                assert!(record.value(&keys::next_token(k)).is_some());
            }
        }
        // In a two-token sentence with window 3, no forward neighbour
        // survives the max-distance check
        for record in &records {
            for k in 1..=3 {
                assert_eq!(
                    record.value(&keys::next_token(k)),
                    Some(&FeatureValue::Null)
                );
            }
        }
    }

    #[test]
    fn test_empty_sentence() {
        assert!(enrich_sentence(Vec::new(), 1).unwrap().is_empty());
    }
}
