// TemporalCommand - calculate the temporal score from a base score and the
// temporal metrics
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use tracing::debug;

use super::{export_json, stamp_provenance, Command};
use crate::cli::Args;
use crate::error::CvssError;
use crate::output::json::ScoreReport;
use crate::output::terminal;
use crate::record::ScoreRecord;
use crate::Result;

/// Calculates and displays the temporal score
pub struct TemporalCommand {
    args: Args,
}

impl TemporalCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

impl Command for TemporalCommand {
    fn execute(&self) -> Result<()> {
        if self.args.temporal.base_score.is_none() {
            return Err(CvssError::MissingMetric {
                dimension: "Base Score (--base)",
            }
            .into());
        }

        let mut record = ScoreRecord::new();
        self.args.temporal.apply(&mut record)?;
        stamp_provenance(&mut record, &self.args.output);

        let score = record.evaluate_temporal()?;
        debug!(score, "temporal score computed");

        terminal::display_temporal_report(&record);
        export_json(&ScoreReport::temporal(&record), &self.args.output)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "TemporalCommand"
    }
}
