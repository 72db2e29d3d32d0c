// ============================================================
// Layer 5 — Feature Encoding
// ============================================================
// Maps the symbolic feature space onto dense weight indices.
//
// The maxent model is linear over BINARY INDICATOR features: the
// record {case: "upper", token_position: 0} fires the indicators
// (case, "upper") and (token_position, 0), and nothing else. Every
// distinct (name, value) pair seen in training gets one feature id;
// every distinct gold label gets one label id; the weight vector
// has one cell per (feature id, label id) combination.
//
// Pairs never seen in training have no id and simply fire nothing
// at classification time — the classic open-vocabulary behaviour
// of indicator-feature models.
//
// Reference: Berger, Della Pietra & Della Pietra (1996),
//            "A Maximum Entropy Approach to NLP", §2

use std::collections::{BTreeSet, HashMap};

use crate::domain::record::{FeatureRecord, FeatureValue, Label};

/// Bidirectional mapping between the symbolic feature space and
/// dense indices, built once from the training corpus and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct FeatureEncoding {
    /// feature name → (feature value → feature id)
    feature_ids: HashMap<String, HashMap<FeatureValue, usize>>,

    /// Label inventory, sorted; the position is the label id
    labels: Vec<Label>,

    /// Total number of feature ids handed out
    feature_count: usize,
}

impl FeatureEncoding {
    /// Scan training pairs and assign ids to every (name, value)
    /// pair and every label. Ids follow first-encounter order over
    /// the (name-sorted) record iteration, so the same corpus always
    /// produces the same encoding.
    pub fn from_pairs(pairs: &[(&FeatureRecord, &str)]) -> FeatureEncoding {
        let mut feature_ids: HashMap<String, HashMap<FeatureValue, usize>> = HashMap::new();
        let mut labels: BTreeSet<Label> = BTreeSet::new();
        let mut feature_count = 0;

        for (record, label) in pairs {
            labels.insert((*label).to_string());

            for (name, value) in record.iter() {
                let by_value = feature_ids.entry(name.to_string()).or_default();
                if !by_value.contains_key(value) {
                    by_value.insert(value.clone(), feature_count);
                    feature_count += 1;
                }
            }
        }

        FeatureEncoding {
            feature_ids,
            labels: labels.into_iter().collect(),
            feature_count,
        }
    }

    /// The ids of the indicators a record fires. Unseen (name, value)
    /// pairs contribute nothing.
    pub fn encode(&self, record: &FeatureRecord) -> Vec<usize> {
        record
            .iter()
            .filter_map(|(name, value)| {
                self.feature_ids.get(name).and_then(|by_value| by_value.get(value)).copied()
            })
            .collect()
    }

    /// Label id of a known label
    pub fn label_id(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Label belonging to an id
    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// The sorted label inventory
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Cell of the flat weight vector holding w(feature, label)
    pub fn weight_index(&self, feature: usize, label: usize) -> usize {
        feature * self.labels.len() + label
    }

    /// Length of the flat weight vector
    pub fn weight_count(&self) -> usize {
        self.feature_count * self.labels.len()
    }

    /// The (name, value) pair behind a feature id. Linear scan —
    /// meant for inspection output, not hot paths.
    pub fn describe(&self, feature: usize) -> Option<(&str, &FeatureValue)> {
        self.feature_ids.iter().find_map(|(name, by_value)| {
            by_value
                .iter()
                .find(|(_, id)| **id == feature)
                .map(|(value, _)| (name.as_str(), value))
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::keys;

    fn record(token: &str, position: i64) -> FeatureRecord {
        FeatureRecord::new()
            .with(keys::TOKEN, FeatureValue::str(token))
            .with(keys::TOKEN_POSITION, FeatureValue::Int(position))
    }

    fn encoding() -> FeatureEncoding {
        let a = record("London", 0);
        let b = record("fell", 1);
        let pairs: Vec<(&FeatureRecord, &str)> = vec![(&a, "I-LOC"), (&b, "O")];
        FeatureEncoding::from_pairs(&pairs)
    }

    #[test]
    fn test_one_id_per_pair() {
        let enc = encoding();

        // token=London, token=fell, position=0, position=1
        assert_eq!(enc.feature_count(), 4);
        assert_eq!(enc.label_count(), 2);
        assert_eq!(enc.weight_count(), 8);
    }

    #[test]
    fn test_labels_sorted_and_invertible() {
        let enc = encoding();

        assert_eq!(enc.labels(), &["I-LOC".to_string(), "O".to_string()]);
        assert_eq!(enc.label_id("O"), Some(1));
        assert_eq!(enc.label(0), Some("I-LOC"));
        assert_eq!(enc.label_id("I-PER"), None);
    }

    #[test]
    fn test_unseen_pairs_fire_nothing() {
        let enc = encoding();

        let seen = record("London", 1);
        let ids = enc.encode(&seen);
        assert_eq!(ids.len(), 2);

        // Same name, unseen value: the position indicator cannot fire
        let unseen_value = record("London", 99);
        assert_eq!(enc.encode(&unseen_value).len(), 1);

        // Entirely unseen record fires nothing
        let unseen = record("Paris", 99);
        assert!(enc.encode(&unseen).is_empty());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = record("London", 0);
        let b = record("fell", 1);
        let pairs: Vec<(&FeatureRecord, &str)> = vec![(&a, "I-LOC"), (&b, "O")];

        let first = FeatureEncoding::from_pairs(&pairs);
        let second = FeatureEncoding::from_pairs(&pairs);

        assert_eq!(first.encode(&a), second.encode(&a));
        assert_eq!(first.encode(&b), second.encode(&b));
        assert_eq!(first.labels(), second.labels());
    }

    #[test]
    fn test_describe_inverts_ids() {
        let enc = encoding();
        let ids = enc.encode(&record("fell", 1));

        for id in ids {
            let (name, _) = enc.describe(id).unwrap();
            assert!(name == keys::TOKEN || name == keys::TOKEN_POSITION);
        }
        assert!(enc.describe(999).is_none());
    }

    #[test]
    fn test_weight_indexing_row_major() {
        let enc = encoding();

        assert_eq!(enc.weight_index(0, 0), 0);
        assert_eq!(enc.weight_index(0, 1), 1);
        assert_eq!(enc.weight_index(1, 0), 2);
        assert_eq!(enc.weight_index(3, 1), 7);
    }
}
