// Base metric group arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;

use crate::error::CvssError;
use crate::record::ScoreRecord;

/// Base metric flags
///
/// Raw tokens from the command line; validation against the closed
/// enumerations happens in the score record's setters.
#[derive(Args, Debug, Clone, Default)]
pub struct BaseArgs {
    /// Access Vector [local|adjacent-network|network]
    #[arg(long = "AV", value_name = "METRIC")]
    pub access_vector: Option<String>,

    /// Access Complexity [low|medium|high]
    #[arg(long = "AC", value_name = "METRIC")]
    pub access_complexity: Option<String>,

    /// Authentication [none|single|multiple]
    #[arg(long = "AU", value_name = "METRIC")]
    pub authentication: Option<String>,

    /// Confidentiality Impact [none|partial|complete]
    #[arg(long = "CI", value_name = "METRIC")]
    pub conf_impact: Option<String>,

    /// Integrity Impact [none|partial|complete]
    #[arg(long = "II", value_name = "METRIC")]
    pub integ_impact: Option<String>,

    /// Availability Impact [none|partial|complete]
    #[arg(long = "AI", value_name = "METRIC")]
    pub avail_impact: Option<String>,
}

impl BaseArgs {
    /// Check that all six base metrics were given on the command line
    pub fn validate_complete(&self) -> Result<(), CvssError> {
        for (flag, dimension) in [
            (&self.access_vector, "Access Vector (--AV)"),
            (&self.access_complexity, "Access Complexity (--AC)"),
            (&self.authentication, "Authentication (--AU)"),
            (&self.conf_impact, "Confidentiality Impact (--CI)"),
            (&self.integ_impact, "Integrity Impact (--II)"),
            (&self.avail_impact, "Availability Impact (--AI)"),
        ] {
            if flag.is_none() {
                return Err(CvssError::MissingMetric { dimension });
            }
        }
        Ok(())
    }

    /// Populate the record through its validating setters
    pub fn apply(&self, record: &mut ScoreRecord) -> Result<(), CvssError> {
        if let Some(token) = &self.access_vector {
            record.set_access_vector(token)?;
        }
        if let Some(token) = &self.access_complexity {
            record.set_access_complexity(token)?;
        }
        if let Some(token) = &self.authentication {
            record.set_authentication(token)?;
        }
        if let Some(token) = &self.conf_impact {
            record.set_conf_impact(token)?;
        }
        if let Some(token) = &self.integ_impact {
            record.set_integ_impact(token)?;
        }
        if let Some(token) = &self.avail_impact {
            record.set_avail_impact(token)?;
        }
        Ok(())
    }
}
