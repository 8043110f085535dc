// Environmental score equation - temporal score adjusted for the deploying
// organization's asset importance and exposure

use serde::{Deserialize, Serialize};

use super::{impact_factor, round1};
use crate::metrics::{CollateralDamagePotential, Requirement, TargetDistribution};
use crate::scoring::{BaseInputs, TemporalInputs};

/// Inputs to the environmental score equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalInputs {
    pub base: BaseInputs,
    pub temporal: TemporalInputs,
    pub collateral_damage: CollateralDamagePotential,
    pub target_distribution: TargetDistribution,
    pub conf_requirement: Requirement,
    pub integ_requirement: Requirement,
    pub avail_requirement: Requirement,
}

/// Requirement-weighted impact, clamped at 10. The requirement multipliers
/// can push the raw term past the base equation's ceiling; this min() is the
/// only clamp in the v2 equations.
fn adjusted_impact(inputs: &EnvironmentalInputs) -> f64 {
    let raw = 10.41
        * (1.0
            - (1.0 - inputs.base.conf_impact.weight() * inputs.conf_requirement.weight())
                * (1.0 - inputs.base.integ_impact.weight() * inputs.integ_requirement.weight())
                * (1.0 - inputs.base.avail_impact.weight() * inputs.avail_requirement.weight()));
    raw.min(10.0)
}

/// Compute the environmental score.
///
/// Recomputes the base and temporal equations with the adjusted impact, then
/// folds in collateral damage potential and target distribution. Total over
/// its inputs; the adjusted base can land fractionally below zero for
/// low-requirement corner combinations, which the published equations do not
/// clamp.
pub fn environmental_score(inputs: &EnvironmentalInputs) -> f64 {
    let adj_impact = adjusted_impact(inputs);
    let exploitability = inputs.base.raw_exploitability();

    let adj_base =
        round1((0.6 * adj_impact + 0.4 * exploitability - 1.5) * impact_factor(adj_impact));
    let adj_temporal = round1(adj_base * inputs.temporal.factor());

    round1(
        (adj_temporal + (10.0 - adj_temporal) * inputs.collateral_damage.weight())
            * inputs.target_distribution.weight(),
    )
}
