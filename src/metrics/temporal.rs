// Temporal metric group - factors that change over the life of a vulnerability
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::error::CvssError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exploitability (E) - current state of exploit techniques or code availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exploitability {
    Unproven,
    ProofOfConcept,
    Functional,
    High,
    #[default]
    NotDefined,
}

impl Exploitability {
    pub fn weight(&self) -> f64 {
        match self {
            Exploitability::Unproven => 0.85,
            Exploitability::ProofOfConcept => 0.9,
            Exploitability::Functional => 0.95,
            Exploitability::High => 1.0,
            Exploitability::NotDefined => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Exploitability::Unproven => "unproven",
            Exploitability::ProofOfConcept => "proof-of-concept",
            Exploitability::Functional => "functional",
            Exploitability::High => "high",
            Exploitability::NotDefined => "not-defined",
        }
    }
}

impl FromStr for Exploitability {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unproven" => Ok(Exploitability::Unproven),
            "proof-of-concept" => Ok(Exploitability::ProofOfConcept),
            "functional" => Ok(Exploitability::Functional),
            "high" => Ok(Exploitability::High),
            "not-defined" => Ok(Exploitability::NotDefined),
            _ => Err(CvssError::InvalidMetric {
                dimension: "Exploitability",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Exploitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remediation Level (RL) - availability of a fix or workaround
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemediationLevel {
    OfficialFix,
    TemporaryFix,
    Workaround,
    Unavailable,
    #[default]
    NotDefined,
}

impl RemediationLevel {
    pub fn weight(&self) -> f64 {
        match self {
            RemediationLevel::OfficialFix => 0.87,
            RemediationLevel::TemporaryFix => 0.90,
            RemediationLevel::Workaround => 0.95,
            RemediationLevel::Unavailable => 1.00,
            RemediationLevel::NotDefined => 1.00,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RemediationLevel::OfficialFix => "official-fix",
            RemediationLevel::TemporaryFix => "temporary-fix",
            RemediationLevel::Workaround => "workaround",
            RemediationLevel::Unavailable => "unavailable",
            RemediationLevel::NotDefined => "not-defined",
        }
    }
}

impl FromStr for RemediationLevel {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "official-fix" => Ok(RemediationLevel::OfficialFix),
            "temporary-fix" => Ok(RemediationLevel::TemporaryFix),
            "workaround" => Ok(RemediationLevel::Workaround),
            "unavailable" => Ok(RemediationLevel::Unavailable),
            "not-defined" => Ok(RemediationLevel::NotDefined),
            _ => Err(CvssError::InvalidMetric {
                dimension: "Remediation Level",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RemediationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report Confidence (RC) - confidence in the existence of the vulnerability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportConfidence {
    Unconfirmed,
    Uncorroborated,
    Confirmed,
    #[default]
    NotDefined,
}

impl ReportConfidence {
    pub fn weight(&self) -> f64 {
        match self {
            ReportConfidence::Unconfirmed => 0.90,
            ReportConfidence::Uncorroborated => 0.95,
            ReportConfidence::Confirmed => 1.00,
            ReportConfidence::NotDefined => 1.00,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportConfidence::Unconfirmed => "unconfirmed",
            ReportConfidence::Uncorroborated => "uncorroborated",
            ReportConfidence::Confirmed => "confirmed",
            ReportConfidence::NotDefined => "not-defined",
        }
    }
}

impl FromStr for ReportConfidence {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unconfirmed" => Ok(ReportConfidence::Unconfirmed),
            "uncorroborated" => Ok(ReportConfidence::Uncorroborated),
            "confirmed" => Ok(ReportConfidence::Confirmed),
            "not-defined" => Ok(ReportConfidence::NotDefined),
            _ => Err(CvssError::InvalidMetric {
                dimension: "Report Confidence",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReportConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_defined_weights_are_neutral() {
        assert_eq!(Exploitability::NotDefined.weight(), 1.0);
        assert_eq!(RemediationLevel::NotDefined.weight(), 1.0);
        assert_eq!(ReportConfidence::NotDefined.weight(), 1.0);
    }

    #[test]
    fn test_defaults_are_not_defined() {
        assert_eq!(Exploitability::default(), Exploitability::NotDefined);
        assert_eq!(RemediationLevel::default(), RemediationLevel::NotDefined);
        assert_eq!(ReportConfidence::default(), ReportConfidence::NotDefined);
    }

    #[test]
    fn test_exploitability_weights() {
        assert_eq!(Exploitability::Unproven.weight(), 0.85);
        assert_eq!(Exploitability::ProofOfConcept.weight(), 0.9);
        assert_eq!(Exploitability::Functional.weight(), 0.95);
        assert_eq!(Exploitability::High.weight(), 1.0);
    }

    #[test]
    fn test_report_confidence_parse() {
        assert_eq!(
            "uncorroborated".parse::<ReportConfidence>().unwrap(),
            ReportConfidence::Uncorroborated
        );
        assert!("uncorrporated".parse::<ReportConfidence>().is_err());
    }

    #[test]
    fn test_token_round_trip() {
        for rl in [
            RemediationLevel::OfficialFix,
            RemediationLevel::TemporaryFix,
            RemediationLevel::Workaround,
            RemediationLevel::Unavailable,
            RemediationLevel::NotDefined,
        ] {
            assert_eq!(rl.as_str().parse::<RemediationLevel>().unwrap(), rl);
        }
    }
}
