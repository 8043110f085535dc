// Temporal metric group arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;

use crate::error::CvssError;
use crate::record::ScoreRecord;

/// Temporal metric flags and the externally supplied base score
#[derive(Args, Debug, Clone, Default)]
pub struct TemporalArgs {
    /// Exploitability [unproven|proof-of-concept|functional|high|not-defined]
    #[arg(long = "EX", value_name = "METRIC", default_value = "not-defined")]
    pub exploitability: String,

    /// Remediation Level [official-fix|temporary-fix|workaround|unavailable|not-defined]
    #[arg(long = "RL", value_name = "METRIC", default_value = "not-defined")]
    pub remediation_level: String,

    /// Report Confidence [unconfirmed|uncorroborated|confirmed|not-defined]
    #[arg(long = "RC", value_name = "METRIC", default_value = "not-defined")]
    pub report_confidence: String,

    /// Previously computed base score (required for the temporal operation)
    #[arg(long = "base", value_name = "SCORE")]
    pub base_score: Option<f64>,
}

impl TemporalArgs {
    /// Populate the record through its validating setters
    pub fn apply(&self, record: &mut ScoreRecord) -> Result<(), CvssError> {
        record.set_exploitability(&self.exploitability)?;
        record.set_remediation_level(&self.remediation_level)?;
        record.set_report_confidence(&self.report_confidence)?;
        if let Some(score) = self.base_score {
            record.set_base_score(score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_defined_tokens_are_neutral() {
        let args = TemporalArgs {
            exploitability: "not-defined".to_string(),
            remediation_level: "not-defined".to_string(),
            report_confidence: "not-defined".to_string(),
            base_score: None,
        };
        let mut record = ScoreRecord::new();
        args.apply(&mut record).unwrap();
        record.set_base_score(7.8).unwrap();
        assert_eq!(record.evaluate_temporal().unwrap(), 7.8);
    }

    #[test]
    fn test_apply_rejects_misspelled_token() {
        let args = TemporalArgs {
            exploitability: "functional".to_string(),
            remediation_level: "official fix".to_string(),
            report_confidence: "confirmed".to_string(),
            base_score: Some(7.8),
        };
        let mut record = ScoreRecord::new();
        let err = args.apply(&mut record).unwrap_err();
        assert!(err.to_string().contains("Remediation Level"));
    }
}
