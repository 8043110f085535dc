// BaseCommand - calculate the base score from the six base metrics
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use tracing::debug;

use super::{export_json, stamp_provenance, Command};
use crate::cli::Args;
use crate::output::json::ScoreReport;
use crate::output::terminal;
use crate::record::ScoreRecord;
use crate::Result;

/// Calculates and displays the base score
pub struct BaseCommand {
    args: Args,
}

impl BaseCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

impl Command for BaseCommand {
    fn execute(&self) -> Result<()> {
        self.args.base.validate_complete()?;

        let mut record = ScoreRecord::new();
        self.args.base.apply(&mut record)?;
        stamp_provenance(&mut record, &self.args.output);

        let scores = record.evaluate_base()?;
        debug!(score = scores.score, "base score computed");

        terminal::display_base_report(&record);
        export_json(&ScoreReport::base(&record), &self.args.output)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "BaseCommand"
    }
}
