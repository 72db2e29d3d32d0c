// ============================================================
// Layer 6 — Training Metrics
// ============================================================
// Records the per-iteration training trace and emits it on the
// log stream as it arrives.
//
// Metrics recorded per iteration:
//   - iteration:      the iteration number (1, 2, 3, ...)
//   - log_likelihood: average log p(gold label) on the training set
//   - accuracy:       fraction of training tokens tagged correctly
//
// How to read the trace:
//   - log_likelihood starts near -ln(label count) and should climb
//     towards 0.0 as the weights fit the corpus
//   - accuracy should climb with it; a likelihood that climbs while
//     accuracy stalls means the model is sharpening probabilities
//     it already gets right
//
// The trace goes to the log stream, never to stdout — stdout is
// reserved for the annotated corpus when no output file is given.
//
// Reference: Rust Book §9 (Error Handling)

use serde::{Deserialize, Serialize};

/// One row of the training trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationMetrics {
    /// The iteration number (starts at 1)
    pub iteration: usize,

    /// Total iterations requested for the run
    pub total: usize,

    /// Average log p(gold) over the training set.
    /// Range: (-inf, 0.0] — closer to zero is better
    pub log_likelihood: f64,

    /// Fraction of training tokens whose argmax label is the gold
    /// label. Range: [0.0, 1.0]
    pub accuracy: f64,
}

impl IterationMetrics {
    pub fn new(iteration: usize, total: usize, log_likelihood: f64, accuracy: f64) -> Self {
        Self {
            iteration,
            total,
            log_likelihood,
            accuracy,
        }
    }

    /// True if this iteration improved on the best likelihood so far
    pub fn is_improvement(&self, best_log_likelihood: f64) -> bool {
        self.log_likelihood > best_log_likelihood
    }
}

/// Collects the trace for a training run and emits each row as it
/// is recorded.
#[derive(Debug, Default)]
pub struct TrainingLog {
    history: Vec<IterationMetrics>,
}

impl TrainingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one iteration and emit its trace line
    pub fn record(&mut self, metrics: IterationMetrics) {
        tracing::info!(
            "Iteration {:>3}/{} | log_likelihood={:.4} | accuracy={:.1}%",
            metrics.iteration,
            metrics.total,
            metrics.log_likelihood,
            metrics.accuracy * 100.0,
        );
        self.history.push(metrics);
    }

    /// The iteration with the best log-likelihood so far
    pub fn best(&self) -> Option<&IterationMetrics> {
        self.history
            .iter()
            .max_by(|a, b| {
                a.log_likelihood
                    .partial_cmp(&b.log_likelihood)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// The most recent iteration
    pub fn last(&self) -> Option<&IterationMetrics> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
