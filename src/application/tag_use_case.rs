// ============================================================
// Layer 2 — TagUseCase
// ============================================================
// Orchestrates the full tagging run in order:
//
//   Step 1: Load + enrich the training corpus  (Layer 4 - data)
//   Step 2: Load + enrich the test corpus      (Layer 4 - data)
//   Step 3: Check the trained-vector file      (Layer 6 - infra)
//   Step 4: Train the maxent model             (Layer 5 - ml)
//   Step 5: Classify the test records          (Layer 5 - ml)
//   Step 6: Align + write the annotated output (Layer 4 - data)
//
// Both corpora go through the same enrichment with the same
// lexicon stores, so training and test records live in the same
// feature space — the one thing the whole pipeline depends on.
//
// Reference: Rust Book §12 (An I/O Project)

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    aligner::write_annotated,
    builder::CorpusKind,
    corpus::Corpus,
    lexical::LexicalOracles,
};
use crate::domain::traits::TokenClassifier;
use crate::infra::{
    embedding_store::EmbeddingStore,
    gazetteer_store::GazetteerStore,
    lexicon_store::{NameStore, StopwordStore},
};
use crate::ml::trainer::train;

/// Maximum neighbour distance for the windowed context features.
/// Both corpora must use the same value — the window size is part
/// of the feature space the model is trained in.
const CONTEXT_WINDOW: usize = 1;

/// How many of the heaviest-weighted indicators to show on the
/// debug log after training
const INFORMATIVE_FEATURES: usize = 10;

// ─── Tagging Configuration ────────────────────────────────────────────────────
// Everything a tagging run needs. Serialisable so a run can be
// recorded or replayed from JSON; the CLI layer builds it from
// the parsed arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagConfig {
    /// Labeled corpus: token, pos, chunk, gold label
    pub training_path: String,

    /// Unlabeled corpus: token, pos, chunk
    pub test_path: String,

    /// Trained word-vector file — read and discarded, see
    /// EmbeddingStore
    pub embedding_path: String,

    /// Maxent training iterations
    pub iterations: usize,

    /// Where to write the annotated output; stdout when None
    pub output_path: Option<String>,
}

// ─── TagUseCase ───────────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline.
pub struct TagUseCase {
    config: TagConfig,
}

impl TagUseCase {
    /// Create a new TagUseCase with the given configuration
    pub fn new(config: TagConfig) -> Self {
        Self { config }
    }

    /// Execute the full tagging pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // The lexicon stores are shared by both corpora so the
        // lexical features agree between training and test
        let stopwords = StopwordStore::new();
        let gazetteer = GazetteerStore::new();
        let names = NameStore::new();
        let oracles = LexicalOracles {
            stopwords: &stopwords,
            gazetteer: &gazetteer,
            names: &names,
        };

        // ── Step 1: Training corpus ───────────────────────────────────────────
        tracing::info!("Loading training corpus from '{}'", cfg.training_path);
        let training = Corpus::load(&cfg.training_path, CorpusKind::Training)?
            .enrich(CONTEXT_WINDOW, &oracles)?;

        // ── Step 2: Test corpus ───────────────────────────────────────────────
        tracing::info!("Loading test corpus from '{}'", cfg.test_path);
        let test = Corpus::load(&cfg.test_path, CorpusKind::Test)?
            .enrich(CONTEXT_WINDOW, &oracles)?;

        // ── Step 3: Trained-vector file ───────────────────────────────────────
        // Fails the run early on a bad path; the content is unused
        EmbeddingStore::new(&cfg.embedding_path).load()?;

        // ── Step 4: Train the model ───────────────────────────────────────────
        let pairs = training.training_pairs()?;
        let model = train(&pairs, cfg.iterations)?;
        for line in model.most_informative_features(INFORMATIVE_FEATURES) {
            tracing::debug!("{}", line);
        }

        // ── Step 5: Classify the test records ─────────────────────────────────
        let predicted = model.classify_many(test.features())?;
        tracing::info!("Classified {} test tokens", predicted.len());

        // ── Step 6: Write the annotated output ────────────────────────────────
        match &cfg.output_path {
            Some(path) => {
                let mut file = fs::File::create(path)
                    .with_context(|| format!("Cannot create output file '{}'", path))?;
                write_annotated(test.orig_data(), &predicted, &mut file)?;
                tracing::info!("Annotated corpus written to '{}'", path);
            }
            None => {
                // stdout is the data channel — all logging goes to
                // stderr so the two never interleave
                let stdout = io::stdout();
                let mut out = stdout.lock();
                write_annotated(test.orig_data(), &predicted, &mut out)?;
                out.flush()?;
            }
        }

        Ok(())
    }
}
