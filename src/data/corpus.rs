// ============================================================
// Layer 4 — Corpus Container
// ============================================================
// Owns one input file's journey through the pipeline:
//
//   load        → read the file, split lines, group sentences,
//                 build base records (and, for test corpora, keep
//                 the original-order stream for output)
//   enrich      → run the context passes per sentence, then the
//                 lexical pass per token, flattening sentences
//                 into one corpus-ordered record list
//
// After enrich(), every record carries the same key set — the
// uniform feature space the maxent encoding is built over.
//
// Reference: Rust Book §12 (An I/O Project)

use std::fs;

use anyhow::{Context, Result};

use crate::data::builder::{build_record, CorpusKind};
use crate::data::context::enrich_sentence;
use crate::data::lexical::{token_features, LexicalOracles};
use crate::data::reader::{group_sentences, orig_entries, split_raw_lines};
use crate::domain::line::OrigEntry;
use crate::domain::record::{FeatureRecord, Label};

/// One corpus, somewhere between "just read" and "fully enriched".
#[derive(Debug)]
pub struct Corpus {
    kind: CorpusKind,

    /// Base records grouped by sentence; drained by enrich()
    sentences: Vec<Vec<FeatureRecord>>,

    /// Enriched records in corpus order; filled by enrich()
    features: Vec<FeatureRecord>,

    /// Original-order stream for output reconstruction.
    /// Only test corpora keep this — training data is never echoed back.
    orig_data: Vec<OrigEntry>,
}

impl Corpus {
    /// Read a corpus file and build its base records.
    pub fn load(path: &str, kind: CorpusKind) -> Result<Corpus> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read corpus file '{}'", path))?;

        let corpus = Corpus::from_text(&text, kind)
            .with_context(|| format!("Corpus file '{}' is malformed", path))?;

        tracing::info!(
            "Read {} sentences ({} tokens) from '{}'",
            corpus.sentences.len(),
            corpus.token_count(),
            path
        );
        Ok(corpus)
    }

    /// Build base records from corpus text already in memory.
    pub fn from_text(text: &str, kind: CorpusKind) -> Result<Corpus> {
        let lines = split_raw_lines(text);

        let sentences = group_sentences(&lines)
            .iter()
            .map(|sentence| {
                sentence
                    .iter()
                    .map(|row| build_record(row, kind))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let orig_data = match kind {
            CorpusKind::Test => orig_entries(&lines),
            CorpusKind::Training => Vec::new(),
        };

        Ok(Corpus {
            kind,
            sentences,
            features: Vec::new(),
            orig_data,
        })
    }

    /// Run the context passes and the lexical pass, flattening the
    /// sentence structure into one corpus-ordered record list.
    ///
    /// Consumes and returns the corpus: an enriched corpus is a new
    /// value, not a mutation, matching how the passes themselves work.
    pub fn enrich(self, max_distance: usize, oracles: &LexicalOracles<'_>) -> Result<Corpus> {
        let mut features = Vec::with_capacity(self.token_count());

        for sentence in self.sentences {
            for record in enrich_sentence(sentence, max_distance)? {
                features.push(token_features(record, oracles)?);
            }
        }

        tracing::debug!(
            "Enriched {} records ({} features each)",
            features.len(),
            features.first().map(FeatureRecord::len).unwrap_or(0)
        );

        Ok(Corpus {
            kind: self.kind,
            sentences: Vec::new(),
            features,
            orig_data: self.orig_data,
        })
    }

    /// The enriched records, in corpus order. Empty before enrich().
    pub fn features(&self) -> &[FeatureRecord] {
        &self.features
    }

    /// (record, gold label) pairs for training. Errors when any
    /// record lacks a label — which is what happens if a test corpus
    /// is passed where a training corpus belongs.
    pub fn training_pairs(&self) -> Result<Vec<(&FeatureRecord, &str)>> {
        self.features
            .iter()
            .map(|record| Ok((record, record.require_label()?)))
            .collect()
    }

    /// The original-order stream; empty for training corpora.
    pub fn orig_data(&self) -> &[OrigEntry] {
        &self.orig_data
    }

    pub fn kind(&self) -> CorpusKind {
        self.kind
    }

    /// Token lines in this corpus, whichever stage it is at.
    pub fn token_count(&self) -> usize {
        if self.features.is_empty() {
            self.sentences.iter().map(Vec::len).sum()
        } else {
            self.features.len()
        }
    }

    /// Distinct gold labels, sorted — the label inventory of a
    /// training corpus.
    pub fn label_inventory(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self
            .features
            .iter()
            .chain(self.sentences.iter().flatten())
            .filter_map(|record| record.label().map(str::to_string))
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::keys;
    use crate::domain::traits::Lexicon;

    struct SetLexicon(Vec<&'static str>);

    impl Lexicon for SetLexicon {
        fn contains(&self, token: &str) -> bool {
            self.0.contains(&token)
        }
    }

    const TRAINING: &str = "CRICKET\tNNP\tI-NP\tO\n-\t:\tO\tO\n\nLondon\tNNP\tI-NP\tI-LOC\n1996-08-30\tCD\tI-NP\tO\n";
    const TEST: &str = "Essex\tNNP\tI-NP\nv\tIN\tI-PP\n\nSurrey\tNNP\tI-NP\n";

    fn oracles() -> (SetLexicon, SetLexicon, SetLexicon) {
        (
            SetLexicon(vec!["the", "of", "v"]),
            SetLexicon(vec!["London", "Surrey"]),
            SetLexicon(vec![]),
        )
    }

    fn enriched(text: &str, kind: CorpusKind) -> Corpus {
        let (stop, geo, names) = oracles();
        // The lexicons live long enough only inside this helper, so
        // enrich here and hand back the finished corpus
        Corpus::from_text(text, kind)
            .unwrap()
            .enrich(
                1,
                &LexicalOracles {
                    stopwords: &stop,
                    gazetteer: &geo,
                    names: &names,
                },
            )
            .unwrap()
    }

    #[test]
    fn test_load_builds_base_records() {
        let corpus = Corpus::from_text(TRAINING, CorpusKind::Training).unwrap();

        assert_eq!(corpus.token_count(), 4);
        assert!(corpus.features().is_empty());
        assert_eq!(corpus.label_inventory(), vec!["I-LOC", "O"]);
    }

    #[test]
    fn test_orig_data_only_for_test_corpora() {
        let training = Corpus::from_text(TRAINING, CorpusKind::Training).unwrap();
        let test = Corpus::from_text(TEST, CorpusKind::Test).unwrap();

        assert!(training.orig_data().is_empty());
        assert_eq!(test.orig_data().len(), 4); // 3 tokens + 1 boundary
    }

    #[test]
    fn test_enrich_flattens_uniformly() {
        let corpus = enriched(TRAINING, CorpusKind::Training);
        let records = corpus.features();

        assert_eq!(records.len(), 4);
        let tokens: Vec<&str> = records
            .iter()
            .map(|r| r.str_value(keys::TOKEN).unwrap())
            .collect();
        assert_eq!(tokens, vec!["CRICKET", "-", "London", "1996-08-30"]);

        // Every record ends up with the same key set
        let first: Vec<&str> = records[0].names().collect();
        for record in records {
            let names: Vec<&str> = record.names().collect();
            assert_eq!(names, first);
        }
    }

    #[test]
    fn test_enrichment_is_sentence_scoped() {
        let corpus = enriched(TRAINING, CorpusKind::Training);
        let records = corpus.features();

        // "London" starts the second sentence: fresh position, no
        // neighbour reaching back across the boundary
        assert_eq!(records[2].int_value(keys::TOKEN_POSITION).unwrap(), 0);
        assert_eq!(records[2].value("prev_token_1"), Some(&crate::domain::record::FeatureValue::Null));
        assert_eq!(records[2].bool_value(keys::START_TOKEN).unwrap(), true);
    }

    #[test]
    fn test_labels_survive_enrichment() {
        let corpus = enriched(TRAINING, CorpusKind::Training);

        let pairs = corpus.training_pairs().unwrap();
        let labels: Vec<&str> = pairs.iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, vec!["O", "O", "I-LOC", "O"]);
    }

    #[test]
    fn test_training_pairs_need_labels() {
        let corpus = enriched(TEST, CorpusKind::Test);
        assert!(corpus.training_pairs().is_err());
    }

    #[test]
    fn test_injected_oracles() {
        let corpus = enriched(TEST, CorpusKind::Test);
        let records = corpus.features();

        // "v" is on the toy stopword list, "Surrey" on the gazetteer
        assert_eq!(records[1].bool_value(keys::STOPWORD).unwrap(), true);
        assert_eq!(records[2].bool_value(keys::GEO_PLACE).unwrap(), true);
        assert_eq!(records[0].bool_value(keys::GEO_PLACE).unwrap(), false);
    }

    #[test]
    fn test_malformed_rows_fail() {
        let err = Corpus::from_text(TEST, CorpusKind::Training).unwrap_err();
        assert!(err.to_string().contains("gold label"));
    }

    #[test]
    fn test_missing_file_error() {
        let err = Corpus::load("/no/such/corpus.txt", CorpusKind::Training).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/corpus.txt"));
    }
}
