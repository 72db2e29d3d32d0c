// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// This layer contains ALL classifier-specific code.
// No other layer touches weights or encodings — only this one.
//
// Why isolate the classifier here?
//   - The feature pipeline is testable with hand-built records
//   - The encoding scheme can change without touching Layer 4
//   - Model mathematics is clearly separated from data plumbing
//
// What's in this layer:
//
//   encoding.rs — The symbolic → dense mapping
//                 Assigns one id per (feature name, value) pair
//                 seen in training and one id per gold label;
//                 unseen pairs fire nothing at classify time
//
//   model.rs    — The maximum-entropy classifier
//                 Multinomial logistic regression over binary
//                 indicator features: per-label scores, stable
//                 softmax, argmax classification, and a
//                 most-informative-features inspection hook
//
//   trainer.rs  — The training loop
//                 Stochastic gradient ascent on conditional
//                 log-likelihood, seeded shuffles, per-iteration
//                 likelihood/accuracy trace
//
// Reference: Berger, Della Pietra & Della Pietra (1996)
//            Ratnaparkhi (1998), maxent for NLP

/// (feature name, value) ↔ dense indicator ids
pub mod encoding;

/// The maxent classifier itself
pub mod model;

/// SGD training loop with a per-iteration trace
pub mod trainer;
