// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// There is a single command:
//   nertagger <training> <test> <embeddings> <iterations> [-o FILE]
//
// The annotated corpus goes to stdout unless -o is given, so the
// tool can sit in a shell pipeline; logs go to stderr.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::TagArgs;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "nertagger",
    version = "0.1.0",
    about = "Train a maxent NE tagger on a labeled corpus, then tag a test corpus."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: TagArgs,
}

impl Cli {
    /// Convert the parsed arguments into a config and hand off to
    /// Layer 2. This keeps the CLI layer thin — it only routes,
    /// never computes.
    pub fn run(self) -> Result<()> {
        use crate::application::tag_use_case::TagUseCase;

        tracing::info!(
            "Tagging '{}' with a model trained on '{}'",
            self.args.test,
            self.args.training
        );

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = TagUseCase::new(self.args.into());
        use_case.execute()
    }
}
