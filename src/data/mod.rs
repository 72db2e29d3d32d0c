// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw corpus files
// all the way to classifier-ready feature records.
//
// The pipeline flows in this order:
//
//   corpus file
//       │
//       ▼
//   reader     → splits lines, groups sentences, keeps the
//       │        original-order stream for output
//       ▼
//   builder    → one base record per row (token/pos/chunk + label)
//       │
//       ▼
//   context    → sentence-scoped features (position, boundaries,
//       │        neighbour window)
//       ▼
//   lexical    → token-scoped features (case, last char, lexicons)
//       │
//       ▼
//   corpus     → owns the stages above for one input file
//       │
//       ▼
//   aligner    → welds predictions back onto the original stream
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Splits corpus text into typed lines and sentences
pub mod reader;

/// Builds the base feature record for one corpus row
pub mod builder;

/// Sentence-scoped feature passes (positions, boundaries, windows)
pub mod context;

/// Token-scoped lexical features backed by lookup oracles
pub mod lexical;

/// The corpus container — one input file through all stages
pub mod corpus;

/// Reconstructs annotated output in the original line layout
pub mod aligner;
