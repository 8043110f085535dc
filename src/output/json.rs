// JSON rendering of a score report
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use serde::Serialize;

use crate::record::ScoreRecord;
use crate::scoring::Severity;

/// A score record annotated with the operation that produced it, the
/// qualitative severity of the headline score, and the base vector string
#[derive(Debug, Serialize)]
pub struct ScoreReport<'a> {
    pub operation: &'static str,
    #[serde(flatten)]
    pub record: &'a ScoreRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<String>,
}

impl<'a> ScoreReport<'a> {
    pub fn base(record: &'a ScoreRecord) -> Self {
        Self {
            operation: "base",
            record,
            severity: record.base_score().map(Severity::from_score),
            vector: record.base_vector(),
        }
    }

    pub fn temporal(record: &'a ScoreRecord) -> Self {
        Self {
            operation: "temporal",
            record,
            severity: record.temporal_score().map(Severity::from_score),
            vector: None,
        }
    }

    pub fn environmental(record: &'a ScoreRecord) -> Self {
        Self {
            operation: "environmental",
            record,
            severity: record.environmental_score().map(Severity::from_score),
            vector: record.base_vector(),
        }
    }

    /// Serialize the report, compact or pretty
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored_record() -> ScoreRecord {
        let mut record = ScoreRecord::new();
        record.set_access_vector("network").unwrap();
        record.set_access_complexity("low").unwrap();
        record.set_authentication("none").unwrap();
        record.set_conf_impact("complete").unwrap();
        record.set_integ_impact("none").unwrap();
        record.set_avail_impact("none").unwrap();
        record.evaluate_base().unwrap();
        record
    }

    #[test]
    fn test_base_report_json() {
        let record = scored_record();
        let json = ScoreReport::base(&record).to_json(false).unwrap();
        assert!(json.contains("\"operation\":\"base\""));
        assert!(json.contains("\"base_score\":7.8"));
        assert!(json.contains("\"severity\":\"High\""));
        assert!(json.contains("AV:N/AC:L/Au:N/C:C/I:N/A:N"));
    }

    #[test]
    fn test_temporal_report_omits_vector() {
        let mut record = ScoreRecord::new();
        record.set_base_score(7.8).unwrap();
        record.evaluate_temporal().unwrap();

        let json = ScoreReport::temporal(&record).to_json(false).unwrap();
        assert!(json.contains("\"operation\":\"temporal\""));
        assert!(json.contains("\"temporal_score\":7.8"));
        assert!(!json.contains("\"vector\""));
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let record = scored_record();
        let json = ScoreReport::base(&record).to_json(true).unwrap();
        assert!(json.lines().count() > 1);
    }
}
