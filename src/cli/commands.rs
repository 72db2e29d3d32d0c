// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Defines the four positional arguments of a tagging run plus
// the optional output flag.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;

use crate::application::tag_use_case::TagConfig;

/// All arguments for a tagging run.
/// The first four are positional and must appear in this order.
#[derive(Args, Debug)]
pub struct TagArgs {
    /// Labeled training corpus (token, POS tag, chunk tag, NE label)
    pub training: String,

    /// Unlabeled test corpus (token, POS tag, chunk tag)
    pub test: String,

    /// Trained word-vector file — checked for readability, not used
    /// by any feature
    pub embeddings: String,

    /// Number of maxent training iterations
    pub iterations: usize,

    /// Write the annotated corpus here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Convert CLI TagArgs into the application-layer TagConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TagArgs> for TagConfig {
    fn from(a: TagArgs) -> Self {
        TagConfig {
            training_path:  a.training,
            test_path:      a.test,
            embedding_path: a.embeddings,
            iterations:     a.iterations,
            output_path:    a.output,
        }
    }
}
