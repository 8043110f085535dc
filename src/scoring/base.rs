// Base score equation - intrinsic severity from the six base metrics

use serde::{Deserialize, Serialize};

use super::{impact_factor, round1};
use crate::metrics::{AccessComplexity, AccessVector, Authentication, Impact};

/// Inputs to the base score equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseInputs {
    pub access_vector: AccessVector,
    pub access_complexity: AccessComplexity,
    pub authentication: Authentication,
    pub conf_impact: Impact,
    pub integ_impact: Impact,
    pub avail_impact: Impact,
}

impl BaseInputs {
    /// Raw impact term, prior to rounding
    pub(crate) fn raw_impact(&self) -> f64 {
        10.41
            * (1.0
                - (1.0 - self.conf_impact.weight())
                    * (1.0 - self.integ_impact.weight())
                    * (1.0 - self.avail_impact.weight()))
    }

    /// Raw exploitability term, prior to rounding
    pub(crate) fn raw_exploitability(&self) -> f64 {
        20.0 * self.access_vector.weight()
            * self.access_complexity.weight()
            * self.authentication.weight()
    }

    /// CVSS v2 vector string for the base metric group,
    /// e.g. "AV:N/AC:L/Au:N/C:C/I:C/A:C"
    pub fn vector(&self) -> String {
        format!(
            "AV:{}/AC:{}/Au:{}/C:{}/I:{}/A:{}",
            self.access_vector.abbrev(),
            self.access_complexity.abbrev(),
            self.authentication.abbrev(),
            self.conf_impact.abbrev(),
            self.integ_impact.abbrev(),
            self.avail_impact.abbrev()
        )
    }
}

/// Base score with its two subscores, each rounded to one decimal for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseScore {
    pub score: f64,
    pub impact: f64,
    pub exploitability: f64,
}

/// Compute the base score.
///
/// Total over its inputs: every valid metric combination produces a score
/// in [0.0, 10.0]. The composition uses the unrounded impact and
/// exploitability terms; only the returned subscores are rounded.
pub fn base_score(inputs: &BaseInputs) -> BaseScore {
    let impact = inputs.raw_impact();
    let exploitability = inputs.raw_exploitability();

    let score = round1((0.6 * impact + 0.4 * exploitability - 1.5) * impact_factor(impact));
    debug_assert!((0.0..=10.0).contains(&score));

    BaseScore {
        score,
        impact: round1(impact),
        exploitability: round1(exploitability),
    }
}
