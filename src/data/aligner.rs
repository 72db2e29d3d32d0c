// ============================================================
// Layer 4 — Output Aligner
// ============================================================
// Welds the predicted labels back onto the original token stream:
//
//   input stream             labels        output
//   Token("Essex")     +     I-ORG    →    Essex\tI-ORG
//   Token("v")         +     O        →    v\tO
//   Boundary                          →    (blank line)
//   Token("Surrey")    +     I-ORG    →    Surrey\tI-ORG
//
// Boundaries pass through as blank lines, so the output has the
// same sentence layout as the input. The label count must match
// the token count exactly — a mismatch means some earlier stage
// dropped or invented a record, and the only safe response is to
// refuse to write anything.

use std::io::Write;

use anyhow::{bail, Context, Result};

use crate::domain::line::OrigEntry;
use crate::domain::record::Label;

/// Write the annotated token stream: one `token\tlabel` line per
/// token, blank lines where the input had sentence boundaries.
pub fn write_annotated<W: Write>(
    orig_data: &[OrigEntry],
    labels: &[Label],
    out: &mut W,
) -> Result<()> {
    let token_count = orig_data.iter().filter(|e| !e.is_boundary()).count();
    if labels.len() != token_count {
        bail!(
            "Alignment mismatch: {} predicted labels for {} token lines",
            labels.len(),
            token_count
        );
    }

    let mut next_label = labels.iter();
    for entry in orig_data {
        match entry {
            OrigEntry::Boundary => writeln!(out)?,
            OrigEntry::Token(token) => {
                // Guarded by the count check above, but keep this total
                let label = next_label
                    .next()
                    .context("Predicted labels ran out mid-reconstruction")?;
                writeln!(out, "{token}\t{label}")?;
            }
        }
    }

    Ok(())
}
