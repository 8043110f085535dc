// Environmental metric group arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;

use crate::error::CvssError;
use crate::record::ScoreRecord;

/// Environmental metric flags
#[derive(Args, Debug, Clone, Default)]
pub struct EnvironmentalArgs {
    /// Collateral Damage Potential [none|low|low-medium|medium-high|high|not-defined]
    #[arg(long = "CD", value_name = "METRIC", default_value = "not-defined")]
    pub collateral_damage: String,

    /// Target Distribution [none|low|medium|high|not-defined]
    #[arg(long = "TD", value_name = "METRIC", default_value = "not-defined")]
    pub target_distribution: String,

    /// Confidentiality Requirement [low|medium|high|not-defined]
    #[arg(long = "CR", value_name = "METRIC", default_value = "not-defined")]
    pub conf_requirement: String,

    /// Integrity Requirement [low|medium|high|not-defined]
    #[arg(long = "IR", value_name = "METRIC", default_value = "not-defined")]
    pub integ_requirement: String,

    /// Availability Requirement [low|medium|high|not-defined]
    #[arg(long = "AR", value_name = "METRIC", default_value = "not-defined")]
    pub avail_requirement: String,
}

impl EnvironmentalArgs {
    /// Populate the record through its validating setters
    pub fn apply(&self, record: &mut ScoreRecord) -> Result<(), CvssError> {
        record.set_collateral_damage(&self.collateral_damage)?;
        record.set_target_distribution(&self.target_distribution)?;
        record.set_conf_requirement(&self.conf_requirement)?;
        record.set_integ_requirement(&self.integ_requirement)?;
        record.set_avail_requirement(&self.avail_requirement)?;
        Ok(())
    }
}
