/*!
 * Run Summary
 * JSON rendering of a complete simulation outcome
 */

use crate::core::errors::ExportResult;
use crate::scheduler::SimulationOutcome;
use std::io::Write;

/// Pretty-printed JSON document of the whole outcome
pub fn write_summary<W: Write>(out: W, outcome: &SimulationOutcome) -> ExportResult<()> {
    serde_json::to_writer_pretty(out, outcome)?;
    Ok(())
}

/// Same document as a string
pub fn summary_json(outcome: &SimulationOutcome) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
