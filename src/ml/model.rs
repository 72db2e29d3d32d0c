use anyhow::{bail, Result};

use crate::domain::record::{FeatureRecord, Label};
use crate::domain::traits::TokenClassifier;
use crate::ml::encoding::FeatureEncoding;

// p(label | record) = exp(score) / Σ exp(score')
// score(label)      = Σ w(f, label) over the indicators f the record fires
//
// NOTE: weights are stored flat, one cell per (feature id, label id),
// indexed through FeatureEncoding::weight_index — keep the two in sync.
#[derive(Debug, Clone)]
pub struct MaxentModel {
    encoding: FeatureEncoding,
    weights:  Vec<f64>,
}

impl MaxentModel {
    /// Assemble a model from a finished encoding and weight vector.
    /// Only the trainer builds these.
    pub(crate) fn new(encoding: FeatureEncoding, weights: Vec<f64>) -> MaxentModel {
        MaxentModel { encoding, weights }
    }

    /// The label inventory this model can assign
    pub fn labels(&self) -> &[Label] {
        self.encoding.labels()
    }

    pub(crate) fn encoding(&self) -> &FeatureEncoding {
        &self.encoding
    }

    pub(crate) fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Classify one record: the label with the highest score. Ties go
    /// to the earlier label in the sorted inventory, so classification
    /// is deterministic.
    pub fn classify(&self, record: &FeatureRecord) -> Result<&str> {
        if self.encoding.label_count() == 0 {
            bail!("Model has an empty label inventory — was it trained on an empty corpus?");
        }

        let fired = self.encoding.encode(record);
        let scores = label_scores(&self.encoding, &self.weights, &fired);

        let mut best = 0;
        for (id, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = id;
            }
        }

        self.encoding
            .label(best)
            .ok_or_else(|| anyhow::anyhow!("Label id {} out of range", best))
    }

    /// The most informative indicators: the (feature, label) weights
    /// with the largest magnitude, formatted one per line for debug
    /// output. A heavy positive weight means the indicator pulls hard
    /// towards its label; a heavy negative weight pushes away.
    pub fn most_informative_features(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<(f64, String)> = Vec::new();

        for feature in 0..self.encoding.feature_count() {
            let (name, value) = match self.encoding.describe(feature) {
                Some(pair) => pair,
                None => continue,
            };
            for label_id in 0..self.encoding.label_count() {
                let weight = self.weights[self.encoding.weight_index(feature, label_id)];
                if weight == 0.0 {
                    continue;
                }
                let label = self.encoding.label(label_id).unwrap_or("?");
                ranked.push((
                    weight.abs(),
                    format!("{weight:+.3} {name}={value} with label {label}"),
                ));
            }
        }

        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().take(n).map(|(_, line)| line).collect()
    }
}

impl TokenClassifier for MaxentModel {
    fn classify_many(&self, records: &[FeatureRecord]) -> Result<Vec<Label>> {
        records
            .iter()
            .map(|record| self.classify(record).map(str::to_string))
            .collect()
    }
}

/// Per-label raw scores for a set of fired indicators
pub(crate) fn label_scores(
    encoding: &FeatureEncoding,
    weights:  &[f64],
    fired:    &[usize],
) -> Vec<f64> {
    (0..encoding.label_count())
        .map(|label_id| {
            fired
                .iter()
                .map(|&feature| weights[encoding.weight_index(feature, label_id)])
                .sum()
        })
        .collect()
}

/// Numerically stable softmax: subtract the max before exponentiating
/// so large scores cannot overflow to infinity
pub(crate) fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{keys, FeatureValue};

    fn token_record(token: &str) -> FeatureRecord {
        FeatureRecord::new().with(keys::TOKEN, FeatureValue::str(token))
    }

    /// Hand-built two-label model: token=London pulls to I-LOC,
    /// token=fell pulls to O.
    fn toy_model() -> MaxentModel {
        let a = token_record("London");
        let b = token_record("fell");
        let pairs: Vec<(&FeatureRecord, &str)> = vec![(&a, "I-LOC"), (&b, "O")];
        let encoding = FeatureEncoding::from_pairs(&pairs);

        let mut weights = vec![0.0; encoding.weight_count()];
        let london = encoding.encode(&a)[0];
        let fell = encoding.encode(&b)[0];
        let i_loc = encoding.label_id("I-LOC").unwrap();
        let o = encoding.label_id("O").unwrap();
        weights[encoding.weight_index(london, i_loc)] = 2.0;
        weights[encoding.weight_index(fell, o)] = 2.0;

        MaxentModel::new(encoding, weights)
    }

    #[test]
    fn test_classify_picks_argmax() {
        let model = toy_model();

        assert_eq!(model.classify(&token_record("London")).unwrap(), "I-LOC");
        assert_eq!(model.classify(&token_record("fell")).unwrap(), "O");
    }

    #[test]
    fn test_unseen_falls_back_to_first_label() {
        // Nothing fires, every score is zero, and the tie breaks to
        // the first label of the sorted inventory
        let model = toy_model();
        assert_eq!(model.classify(&token_record("Zanzibar")).unwrap(), "I-LOC");
    }

    #[test]
    fn test_classify_many_preserves_order() {
        let model = toy_model();
        let records = vec![
            token_record("fell"),
            token_record("London"),
            token_record("fell"),
        ];

        let labels = model.classify_many(&records).unwrap();
        assert_eq!(labels, vec!["O", "I-LOC", "O"]);
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 3.0, 2.0]);

        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(probs[1] > probs[2] && probs[2] > probs[0]);
    }

    #[test]
    fn test_softmax_extreme_scores() {
        let probs = softmax(&[1000.0, 999.0]);

        assert!(probs.iter().all(|p| p.is_finite()));
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_most_informative_ranking() {
        let model = toy_model();
        let lines = model.most_informative_features(10);

        // Two non-zero weights, both magnitude 2.0
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().any(|l| l.contains("token=London")));
        assert!(lines.iter().any(|l| l.contains("with label O")));
        assert!(lines[0].starts_with("+2.000"));
    }
}
