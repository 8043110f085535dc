// CvssRun - CVSS v2 vulnerability severity calculator
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! CvssRun computes Common Vulnerability Scoring System version 2 scores
//! from analyst-supplied metric selections. The scoring engine is a faithful
//! implementation of the published v2 equations: weight tables, the base,
//! temporal and environmental formulas, and round-half-away-from-zero to one
//! decimal digit.

pub mod cli;
pub mod commands;
pub mod error;
pub mod metrics;
pub mod output;
pub mod record;
pub mod scoring;

// Re-export commonly used types
pub use crate::cli::{Args, Operation};
pub use crate::error::CvssError;
pub use crate::record::ScoreRecord;
pub use crate::scoring::{
    base_score, environmental_score, temporal_score, BaseInputs, BaseScore, EnvironmentalInputs,
    Severity, TemporalInputs,
};

/// Result type for CvssRun operations
pub type Result<T> = anyhow::Result<T>;
