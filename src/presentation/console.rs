// Console reporting of per-file import outcomes
use crate::domain::import::ImportOutcome;
use std::io::Write;

/// Write the outcome lines for one file
pub fn write_outcome<W: Write>(out: &mut W, outcome: &ImportOutcome) -> std::io::Result<()> {
    match outcome {
        ImportOutcome::Imported { file } => writeln!(out, "✅ Imported: {}", file),
        ImportOutcome::Rejected { file, status, body } => {
            writeln!(out, "❌ Failed to import {} - {}", file, status)?;
            writeln!(out, "{}", body)
        }
        ImportOutcome::Failed { file, reason } => {
            writeln!(out, "❌ Failed to import {} - {}", file, reason)
        }
    }
}
