// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::{Parser, ValueEnum};

// Sub-modules for organized CLI arguments
mod base_args;
mod environmental_args;
mod output_args;
mod temporal_args;

// Re-export sub-structs
pub use base_args::BaseArgs;
pub use environmental_args::EnvironmentalArgs;
pub use output_args::OutputArgs;
pub use temporal_args::TemporalArgs;

/// Which score to calculate
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Calculate the base score from the base metrics
    #[default]
    Base,
    /// Calculate the temporal score from the temporal metrics and a base score
    Temporal,
    /// Calculate the environmental score from all metric groups
    Environmental,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Base => "base",
            Operation::Temporal => "temporal",
            Operation::Environmental => "environmental",
        }
    }
}

/// CvssRun - CVSS v2 vulnerability severity calculator
///
/// This is the main CLI arguments struct that composes the per-metric-group
/// configuration sub-structs using clap's #[command(flatten)] attribute:
/// - Base metric flags (BaseArgs)
/// - Temporal metric flags and the supplied base score (TemporalArgs)
/// - Environmental metric flags (EnvironmentalArgs)
/// - Output formats and provenance (OutputArgs)
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "cvssrun")]
#[command(about = "CVSS v2 vulnerability severity calculator", long_about = None)]
pub struct Args {
    /// Score to calculate
    #[arg(value_enum, value_name = "OPERATION")]
    pub operation: Operation,

    // ============ Base Metric Group ============
    #[command(flatten)]
    pub base: BaseArgs,

    // ============ Temporal Metric Group ============
    #[command(flatten)]
    pub temporal: TemporalArgs,

    // ============ Environmental Metric Group ============
    #[command(flatten)]
    pub environmental: EnvironmentalArgs,

    // ============ Output Formats and Provenance ============
    #[command(flatten)]
    pub output: OutputArgs,
}
