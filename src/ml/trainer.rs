// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Fits the maxent weights by stochastic gradient ascent on the
// conditional log-likelihood of the training corpus.
//
// Per example, with p = softmax of the per-label scores:
//   w(f, label) += lr * (target - p_label)   for every fired f
//   target = 1 when label is the gold label, else 0
//
// The visiting order is shuffled every iteration from a fixed seed,
// so training is stochastic but bit-for-bit repeatable: the same
// corpus and iteration count always produce the same weights.
//
// Reference: Berger, Della Pietra & Della Pietra (1996);
//            Bottou (2010), "Large-Scale ML with SGD"

use anyhow::{bail, Context, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::domain::record::FeatureRecord;
use crate::infra::metrics::{IterationMetrics, TrainingLog};
use crate::ml::encoding::FeatureEncoding;
use crate::ml::model::{label_scores, softmax, MaxentModel};

/// Step size of each gradient update
const LEARNING_RATE: f64 = 0.1;

/// Seed for the per-iteration shuffle — fixed so repeated runs
/// produce identical models
const SHUFFLE_SEED: u64 = 42;

/// Train a maxent model on (record, gold label) pairs.
pub fn train(pairs: &[(&FeatureRecord, &str)], iterations: usize) -> Result<MaxentModel> {
    if pairs.is_empty() {
        bail!("Cannot train on an empty corpus");
    }

    // ── Build the encoding and pre-encode every example ───────────────────────
    // Indicator ids never change during training, so encode once
    let encoding = FeatureEncoding::from_pairs(pairs);
    let examples: Vec<(Vec<usize>, usize)> = pairs
        .iter()
        .map(|(record, label)| {
            let fired = encoding.encode(record);
            let gold = encoding
                .label_id(label)
                .with_context(|| format!("Gold label '{}' missing from the inventory", label))?;
            Ok((fired, gold))
        })
        .collect::<Result<_>>()?;

    tracing::info!(
        "Training maxent model: {} examples, {} indicator features, {} labels",
        examples.len(),
        encoding.feature_count(),
        encoding.label_count()
    );

    let mut weights = vec![0.0; encoding.weight_count()];
    let mut order: Vec<usize> = (0..examples.len()).collect();
    let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
    let mut log = TrainingLog::new();

    // ── Iteration loop ────────────────────────────────────────────────────────
    for iteration in 1..=iterations {
        order.shuffle(&mut rng);

        for &idx in &order {
            let (fired, gold) = &examples[idx];
            let probs = softmax(&label_scores(&encoding, &weights, fired));

            for label_id in 0..encoding.label_count() {
                let target = if label_id == *gold { 1.0 } else { 0.0 };
                let step = LEARNING_RATE * (target - probs[label_id]);
                for &feature in fired {
                    weights[encoding.weight_index(feature, label_id)] += step;
                }
            }
        }

        // Trace pass over the training set with the updated weights
        let (log_likelihood, accuracy) = evaluate(&encoding, &weights, &examples);
        log.record(IterationMetrics::new(iteration, iterations, log_likelihood, accuracy));
    }

    if let Some(best) = log.best() {
        tracing::debug!(
            "Best iteration {} (log_likelihood={:.4})",
            best.iteration,
            best.log_likelihood
        );
    }
    tracing::info!("Training complete");

    Ok(MaxentModel::new(encoding, weights))
}

/// Average log-likelihood and accuracy of the gold labels under the
/// current weights.
fn evaluate(
    encoding: &FeatureEncoding,
    weights:  &[f64],
    examples: &[(Vec<usize>, usize)],
) -> (f64, f64) {
    let mut log_likelihood = 0.0;
    let mut correct = 0usize;

    for (fired, gold) in examples {
        let probs = softmax(&label_scores(encoding, weights, fired));
        log_likelihood += probs[*gold].max(f64::MIN_POSITIVE).ln();

        let mut best = 0;
        for (id, p) in probs.iter().enumerate() {
            if *p > probs[best] {
                best = id;
            }
        }
        if best == *gold {
            correct += 1;
        }
    }

    let n = examples.len() as f64;
    (log_likelihood / n, correct as f64 / n)
}
