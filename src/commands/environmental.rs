// EnvironmentalCommand - calculate the environmental score from all three
// metric groups
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use tracing::debug;

use super::{export_json, stamp_provenance, Command};
use crate::cli::Args;
use crate::output::json::ScoreReport;
use crate::output::terminal;
use crate::record::ScoreRecord;
use crate::Result;

/// Calculates and displays the environmental score
pub struct EnvironmentalCommand {
    args: Args,
}

impl EnvironmentalCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

impl Command for EnvironmentalCommand {
    fn execute(&self) -> Result<()> {
        self.args.base.validate_complete()?;

        let mut record = ScoreRecord::new();
        self.args.base.apply(&mut record)?;
        self.args.temporal.apply(&mut record)?;
        self.args.environmental.apply(&mut record)?;
        stamp_provenance(&mut record, &self.args.output);

        // Base score for context alongside the environmental result
        record.evaluate_base()?;
        let score = record.evaluate_environmental()?;
        debug!(score, "environmental score computed");

        terminal::display_environmental_report(&record);
        export_json(&ScoreReport::environmental(&record), &self.args.output)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "EnvironmentalCommand"
    }
}
