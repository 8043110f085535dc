// Base metric group - intrinsic, time-invariant characteristics of a vulnerability
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// Weights are fixed by the CVSS v2 specification and never derived at runtime.
// Reference: https://www.first.org/cvss/v2/guide

use crate::error::CvssError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access Vector (AV) - how the vulnerability is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessVector {
    /// Requires local access
    Local,
    /// Adjacent network accessible
    AdjacentNetwork,
    /// Network accessible
    Network,
}

impl AccessVector {
    pub fn weight(&self) -> f64 {
        match self {
            AccessVector::Local => 0.395,
            AccessVector::AdjacentNetwork => 0.646,
            AccessVector::Network => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessVector::Local => "local",
            AccessVector::AdjacentNetwork => "adjacent-network",
            AccessVector::Network => "network",
        }
    }

    /// Short code used in the v2 vector string
    pub fn abbrev(&self) -> &'static str {
        match self {
            AccessVector::Local => "L",
            AccessVector::AdjacentNetwork => "A",
            AccessVector::Network => "N",
        }
    }
}

impl FromStr for AccessVector {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(AccessVector::Local),
            "adjacent-network" => Ok(AccessVector::AdjacentNetwork),
            "network" => Ok(AccessVector::Network),
            _ => Err(CvssError::InvalidMetric {
                dimension: "Access Vector",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AccessVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access Complexity (AC) - complexity of the attack once access is gained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessComplexity {
    High,
    Medium,
    Low,
}

impl AccessComplexity {
    pub fn weight(&self) -> f64 {
        match self {
            AccessComplexity::High => 0.35,
            AccessComplexity::Medium => 0.61,
            AccessComplexity::Low => 0.71,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessComplexity::High => "high",
            AccessComplexity::Medium => "medium",
            AccessComplexity::Low => "low",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            AccessComplexity::High => "H",
            AccessComplexity::Medium => "M",
            AccessComplexity::Low => "L",
        }
    }
}

impl FromStr for AccessComplexity {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(AccessComplexity::High),
            "medium" => Ok(AccessComplexity::Medium),
            "low" => Ok(AccessComplexity::Low),
            _ => Err(CvssError::InvalidMetric {
                dimension: "Access Complexity",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AccessComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication (Au) - number of authentication instances required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Authentication {
    Multiple,
    Single,
    None,
}

impl Authentication {
    pub fn weight(&self) -> f64 {
        match self {
            Authentication::Multiple => 0.45,
            Authentication::Single => 0.56,
            Authentication::None => 0.704,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Authentication::Multiple => "multiple",
            Authentication::Single => "single",
            Authentication::None => "none",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Authentication::Multiple => "M",
            Authentication::Single => "S",
            Authentication::None => "N",
        }
    }
}

impl FromStr for Authentication {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiple" => Ok(Authentication::Multiple),
            "single" => Ok(Authentication::Single),
            "none" => Ok(Authentication::None),
            _ => Err(CvssError::InvalidMetric {
                dimension: "Authentication",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Impact magnitude, shared by the confidentiality, integrity and
/// availability dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Impact {
    None,
    Partial,
    Complete,
}

impl Impact {
    pub fn weight(&self) -> f64 {
        match self {
            Impact::None => 0.0,
            Impact::Partial => 0.275,
            Impact::Complete => 0.660,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::None => "none",
            Impact::Partial => "partial",
            Impact::Complete => "complete",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Impact::None => "N",
            Impact::Partial => "P",
            Impact::Complete => "C",
        }
    }

    /// Parse with the concrete dimension name so rejections identify
    /// which of the three impact flags was wrong
    pub fn parse(dimension: &'static str, s: &str) -> Result<Self, CvssError> {
        match s {
            "none" => Ok(Impact::None),
            "partial" => Ok(Impact::Partial),
            "complete" => Ok(Impact::Complete),
            _ => Err(CvssError::InvalidMetric {
                dimension,
                token: s.to_string(),
            }),
        }
    }
}

impl FromStr for Impact {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Impact::parse("Impact", s)
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
