// Error types for CvssRun
//
// This module provides structured error types using thiserror so callers can
// match on the failure instead of inspecting strings.

use thiserror::Error;

/// Main error type for CvssRun operations
#[derive(Debug, Error, PartialEq)]
pub enum CvssError {
    /// A metric token outside the dimension's closed enumeration
    #[error("Invalid value for {dimension}: '{token}'")]
    InvalidMetric {
        dimension: &'static str,
        token: String,
    },

    /// A required metric was not set before evaluation
    #[error("Required metric not set: {dimension}")]
    MissingMetric { dimension: &'static str },

    /// The temporal formula was given a base score outside [0.0, 10.0]
    #[error("Base score {value} is outside the valid range 0.0-10.0")]
    ScoreOutOfRange { value: f64 },

    /// A numeric input that is not representable as a real number
    #[error("Score must be a finite number")]
    NonFiniteScore,

    /// Invalid input from the command line
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}
