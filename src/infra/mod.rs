// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   lexicon_store.rs   — Bundled word lists
//                        Compiles the stopword and first-name
//                        lists into the binary and serves them
//                        as membership sets behind the Lexicon
//                        trait.
//
//   gazetteer_store.rs — Place-name lookup
//                        City and country lists, also bundled,
//                        answering "is this token a place?".
//
//   embedding_store.rs — Trained word-vector file handling
//                        Reads and discards the vector file so a
//                        bad path fails the run early; no feature
//                        consumes the vectors.
//
//   metrics.rs         — Training trace
//                        Per-iteration log-likelihood/accuracy
//                        rows, emitted on the log stream.
//
// Why is this a separate layer?
//   These concerns are used by multiple other layers but
//   don't belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. swap bundled lists for an on-disk gazetteer)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Bundled stopword and first-name lists behind the Lexicon trait
pub mod lexicon_store;

/// Bundled city/country lists behind the Lexicon trait
pub mod gazetteer_store;

/// Opens, reads and discards the trained word-vector file
pub mod embedding_store;

/// Per-iteration training trace
pub mod metrics;
