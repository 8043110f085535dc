// Environmental metric group - deployment-specific exposure and asset importance
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::error::CvssError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collateral Damage Potential (CDP) - potential for loss of life or
/// physical assets
///
/// NotDefined carries weight 0, identical to None. The published v2
/// formula makes the two indistinguishable in the environmental score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollateralDamagePotential {
    None,
    Low,
    LowMedium,
    MediumHigh,
    High,
    #[default]
    NotDefined,
}

impl CollateralDamagePotential {
    pub fn weight(&self) -> f64 {
        match self {
            CollateralDamagePotential::None => 0.0,
            CollateralDamagePotential::Low => 0.1,
            CollateralDamagePotential::LowMedium => 0.3,
            CollateralDamagePotential::MediumHigh => 0.4,
            CollateralDamagePotential::High => 0.5,
            CollateralDamagePotential::NotDefined => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollateralDamagePotential::None => "none",
            CollateralDamagePotential::Low => "low",
            CollateralDamagePotential::LowMedium => "low-medium",
            CollateralDamagePotential::MediumHigh => "medium-high",
            CollateralDamagePotential::High => "high",
            CollateralDamagePotential::NotDefined => "not-defined",
        }
    }
}

impl FromStr for CollateralDamagePotential {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(CollateralDamagePotential::None),
            "low" => Ok(CollateralDamagePotential::Low),
            "low-medium" => Ok(CollateralDamagePotential::LowMedium),
            "medium-high" => Ok(CollateralDamagePotential::MediumHigh),
            "high" => Ok(CollateralDamagePotential::High),
            "not-defined" => Ok(CollateralDamagePotential::NotDefined),
            _ => Err(CvssError::InvalidMetric {
                dimension: "Collateral Damage Potential",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CollateralDamagePotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target Distribution (TD) - proportion of vulnerable systems in the
/// environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetDistribution {
    None,
    Low,
    Medium,
    High,
    #[default]
    NotDefined,
}

impl TargetDistribution {
    pub fn weight(&self) -> f64 {
        match self {
            TargetDistribution::None => 0.0,
            TargetDistribution::Low => 0.25,
            TargetDistribution::Medium => 0.75,
            TargetDistribution::High => 1.0,
            TargetDistribution::NotDefined => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetDistribution::None => "none",
            TargetDistribution::Low => "low",
            TargetDistribution::Medium => "medium",
            TargetDistribution::High => "high",
            TargetDistribution::NotDefined => "not-defined",
        }
    }
}

impl FromStr for TargetDistribution {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TargetDistribution::None),
            "low" => Ok(TargetDistribution::Low),
            "medium" => Ok(TargetDistribution::Medium),
            "high" => Ok(TargetDistribution::High),
            "not-defined" => Ok(TargetDistribution::NotDefined),
            _ => Err(CvssError::InvalidMetric {
                dimension: "Target Distribution",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TargetDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Security requirement, shared by the confidentiality, integrity and
/// availability requirement dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Requirement {
    Low,
    Medium,
    High,
    #[default]
    NotDefined,
}

impl Requirement {
    pub fn weight(&self) -> f64 {
        match self {
            Requirement::Low => 0.5,
            Requirement::Medium => 1.0,
            Requirement::High => 1.51,
            Requirement::NotDefined => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Requirement::Low => "low",
            Requirement::Medium => "medium",
            Requirement::High => "high",
            Requirement::NotDefined => "not-defined",
        }
    }

    /// Parse with the concrete dimension name so rejections identify
    /// which of the three requirement flags was wrong
    pub fn parse(dimension: &'static str, s: &str) -> Result<Self, CvssError> {
        match s {
            "low" => Ok(Requirement::Low),
            "medium" => Ok(Requirement::Medium),
            "high" => Ok(Requirement::High),
            "not-defined" => Ok(Requirement::NotDefined),
            _ => Err(CvssError::InvalidMetric {
                dimension,
                token: s.to_string(),
            }),
        }
    }
}

impl FromStr for Requirement {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Requirement::parse("Requirement", s)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
