// Commands module - one command per scoring operation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

mod base;
mod command;
mod environmental;
mod router;
mod temporal;

pub use base::BaseCommand;
pub use command::Command;
pub use environmental::EnvironmentalCommand;
pub use router::CommandRouter;
pub use temporal::TemporalCommand;

use chrono::Utc;

use crate::cli::OutputArgs;
use crate::output::json::ScoreReport;
use crate::record::ScoreRecord;

/// Stamp the record with its provenance: who asked for the score and when
/// it was generated. Both fields are opaque to the engine.
fn stamp_provenance(record: &mut ScoreRecord, output: &OutputArgs) {
    if let Some(source) = &output.source {
        record.set_source(source);
    }
    record.set_generated(&Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string());
}

/// Export the report to a JSON file when requested
fn export_json(report: &ScoreReport<'_>, output: &OutputArgs) -> crate::Result<()> {
    if let Some(json_file) = &output.json {
        let json = report.to_json(output.json_pretty)?;
        std::fs::write(json_file, json)?;
        println!("✓ Results exported to JSON: {}", json_file.display());
    }
    Ok(())
}
