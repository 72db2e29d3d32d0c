// ============================================================
// Layer 6 — Embedding Store
// ============================================================
// Handles the trained word-vector file named on the command line.
//
// The vectors are NOT wired into feature extraction — no pipeline
// stage reads them. The path stays on the CLI for compatibility
// with runs driven by scripts that always pass one, and the store
// still opens and reads the file end to end so a missing or
// unreadable path fails the run up front instead of being
// silently ignored.
//
// Reference: Pennington, Socher & Manning (2014), GloVe

use std::fs;

use anyhow::{Context, Result};

/// Validates and consumes the trained word-vector file.
pub struct EmbeddingStore {
    path: String,
}

impl EmbeddingStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole file and discard its content. The only lasting
    /// effect is the error when the path cannot be read.
    pub fn load(&self) -> Result<()> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read trained vector file '{}'", self.path))?;

        tracing::debug!(
            "Read {} bytes of trained vectors from '{}' (vectors are not used by any feature)",
            raw.len(),
            self.path
        );
        Ok(())
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_readable_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the 0.418 0.24968 -0.41242").unwrap();

        let store = EmbeddingStore::new(file.path().to_string_lossy());
        assert!(store.load().is_ok());
    }

    #[test]
    fn test_missing_file_fails_with_its_path() {
        let store = EmbeddingStore::new("/no/such/vectors.txt");

        let err = store.load().unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/vectors.txt"));
    }

    #[test]
    fn test_empty_file_is_fine() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let store = EmbeddingStore::new(file.path().to_string_lossy());
        assert!(store.load().is_ok());
    }
}
