// Temporal score equation - base score adjusted for exploit maturity,
// fix availability and report confidence

use serde::{Deserialize, Serialize};

use super::round1;
use crate::error::CvssError;
use crate::metrics::{Exploitability, RemediationLevel, ReportConfidence};

/// Inputs to the temporal score equation.
///
/// Deliberately does not carry the base metrics: the equation only needs a
/// previously computed (or externally supplied) base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemporalInputs {
    pub exploitability: Exploitability,
    pub remediation_level: RemediationLevel,
    pub report_confidence: ReportConfidence,
}

impl TemporalInputs {
    /// Combined temporal multiplier. 1.0 when every metric is NotDefined.
    pub(crate) fn factor(&self) -> f64 {
        self.exploitability.weight()
            * self.remediation_level.weight()
            * self.report_confidence.weight()
    }
}

/// Compute the temporal score from a base score in [0.0, 10.0].
///
/// An out-of-range or non-finite base score is a caller error, never
/// silently clamped: a clamped temporal score would misrepresent the inputs.
pub fn temporal_score(base_score: f64, inputs: &TemporalInputs) -> Result<f64, CvssError> {
    if !base_score.is_finite() {
        return Err(CvssError::NonFiniteScore);
    }
    if !(0.0..=10.0).contains(&base_score) {
        return Err(CvssError::ScoreOutOfRange { value: base_score });
    }

    Ok(round1(base_score * inputs.factor()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_example() {
        // round1(7.8 * 0.95 * 0.95 * 1.00) = round1(7.0395) = 7.0
        let inputs = TemporalInputs {
            exploitability: Exploitability::Functional,
            remediation_level: RemediationLevel::Workaround,
            report_confidence: ReportConfidence::Confirmed,
        };
        assert_eq!(temporal_score(7.8, &inputs).unwrap(), 7.0);
    }

    #[test]
    fn test_all_not_defined_reproduces_base_score() {
        let inputs = TemporalInputs::default();
        for base in [0.0, 0.1, 4.9, 7.8, 10.0] {
            assert_eq!(temporal_score(base, &inputs).unwrap(), base);
        }
    }

    #[test]
    fn test_out_of_range_base_is_rejected() {
        let inputs = TemporalInputs::default();
        assert_eq!(
            temporal_score(10.1, &inputs),
            Err(CvssError::ScoreOutOfRange { value: 10.1 })
        );
        assert_eq!(
            temporal_score(-0.1, &inputs),
            Err(CvssError::ScoreOutOfRange { value: -0.1 })
        );
    }

    #[test]
    fn test_non_finite_base_is_rejected() {
        let inputs = TemporalInputs::default();
        assert_eq!(temporal_score(f64::NAN, &inputs), Err(CvssError::NonFiniteScore));
        assert_eq!(
            temporal_score(f64::INFINITY, &inputs),
            Err(CvssError::NonFiniteScore)
        );
    }

    #[test]
    fn test_temporal_never_exceeds_base() {
        // Every temporal weight is at most 1.0
        let inputs = TemporalInputs {
            exploitability: Exploitability::Unproven,
            remediation_level: RemediationLevel::OfficialFix,
            report_confidence: ReportConfidence::Unconfirmed,
        };
        let score = temporal_score(10.0, &inputs).unwrap();
        assert!(score <= 10.0);
        assert_eq!(score, 6.7); // round1(10 * 0.85 * 0.87 * 0.90)
    }

    #[test]
    fn test_boundary_scores_accepted() {
        let inputs = TemporalInputs::default();
        assert_eq!(temporal_score(0.0, &inputs).unwrap(), 0.0);
        assert_eq!(temporal_score(10.0, &inputs).unwrap(), 10.0);
    }
}
