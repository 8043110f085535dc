// Score record - one scored vulnerability: metric selections, computed
// scores, and provenance
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use serde::{Deserialize, Serialize};

use crate::error::CvssError;
use crate::metrics::{
    AccessComplexity, AccessVector, Authentication, CollateralDamagePotential, Exploitability,
    Impact, RemediationLevel, ReportConfidence, Requirement, TargetDistribution,
};
use crate::scoring::{
    base_score, environmental_score, temporal_score, BaseInputs, BaseScore, EnvironmentalInputs,
    TemporalInputs,
};

/// Aggregate for a single scored vulnerability.
///
/// Created empty, populated field by field through validating setters, then
/// passed into the evaluation methods which fill the derived score fields.
/// Setters reject invalid tokens without mutating the record. The two
/// provenance strings are opaque to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_vector: Option<AccessVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_complexity: Option<AccessComplexity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authentication: Option<Authentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conf_impact: Option<Impact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    integ_impact: Option<Impact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avail_impact: Option<Impact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    exploitability: Option<Exploitability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remediation_level: Option<RemediationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_confidence: Option<ReportConfidence>,

    #[serde(skip_serializing_if = "Option::is_none")]
    collateral_damage: Option<CollateralDamagePotential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_distribution: Option<TargetDistribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conf_requirement: Option<Requirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    integ_requirement: Option<Requirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avail_requirement: Option<Requirement>,

    /// Base score supplied from outside, for temporal computation without
    /// the base metrics. Range-checked at evaluation time, not here.
    #[serde(rename = "supplied_base_score", skip_serializing_if = "Option::is_none")]
    given_base: Option<f64>,

    #[serde(rename = "base_score", skip_serializing_if = "Option::is_none")]
    base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    impact_subscore: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exploitability_subscore: Option<f64>,
    #[serde(rename = "temporal_score", skip_serializing_if = "Option::is_none")]
    temporal: Option<f64>,
    #[serde(rename = "environmental_score", skip_serializing_if = "Option::is_none")]
    environmental: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated: Option<String>,
}

impl ScoreRecord {
    /// Create a record with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Metric setters (token-validating) ----

    pub fn set_access_vector(&mut self, token: &str) -> Result<(), CvssError> {
        self.access_vector = Some(token.parse()?);
        Ok(())
    }

    pub fn set_access_complexity(&mut self, token: &str) -> Result<(), CvssError> {
        self.access_complexity = Some(token.parse()?);
        Ok(())
    }

    pub fn set_authentication(&mut self, token: &str) -> Result<(), CvssError> {
        self.authentication = Some(token.parse()?);
        Ok(())
    }

    pub fn set_conf_impact(&mut self, token: &str) -> Result<(), CvssError> {
        self.conf_impact = Some(Impact::parse("Confidentiality Impact", token)?);
        Ok(())
    }

    pub fn set_integ_impact(&mut self, token: &str) -> Result<(), CvssError> {
        self.integ_impact = Some(Impact::parse("Integrity Impact", token)?);
        Ok(())
    }

    pub fn set_avail_impact(&mut self, token: &str) -> Result<(), CvssError> {
        self.avail_impact = Some(Impact::parse("Availability Impact", token)?);
        Ok(())
    }

    pub fn set_exploitability(&mut self, token: &str) -> Result<(), CvssError> {
        self.exploitability = Some(token.parse()?);
        Ok(())
    }

    pub fn set_remediation_level(&mut self, token: &str) -> Result<(), CvssError> {
        self.remediation_level = Some(token.parse()?);
        Ok(())
    }

    pub fn set_report_confidence(&mut self, token: &str) -> Result<(), CvssError> {
        self.report_confidence = Some(token.parse()?);
        Ok(())
    }

    pub fn set_collateral_damage(&mut self, token: &str) -> Result<(), CvssError> {
        self.collateral_damage = Some(token.parse()?);
        Ok(())
    }

    pub fn set_target_distribution(&mut self, token: &str) -> Result<(), CvssError> {
        self.target_distribution = Some(token.parse()?);
        Ok(())
    }

    pub fn set_conf_requirement(&mut self, token: &str) -> Result<(), CvssError> {
        self.conf_requirement = Some(Requirement::parse("Confidentiality Requirement", token)?);
        Ok(())
    }

    pub fn set_integ_requirement(&mut self, token: &str) -> Result<(), CvssError> {
        self.integ_requirement = Some(Requirement::parse("Integrity Requirement", token)?);
        Ok(())
    }

    pub fn set_avail_requirement(&mut self, token: &str) -> Result<(), CvssError> {
        self.avail_requirement = Some(Requirement::parse("Availability Requirement", token)?);
        Ok(())
    }

    /// Set an externally supplied base score. Must be representable as a
    /// real number; the [0.0, 10.0] range is enforced at temporal
    /// evaluation time.
    pub fn set_base_score(&mut self, value: f64) -> Result<(), CvssError> {
        if !value.is_finite() {
            return Err(CvssError::NonFiniteScore);
        }
        self.given_base = Some(value);
        Ok(())
    }

    // ---- Provenance (opaque to the engine) ----

    pub fn set_source(&mut self, source: &str) {
        self.source = Some(source.to_string());
    }

    pub fn set_generated(&mut self, generated: &str) {
        self.generated = Some(generated.to_string());
    }

    // ---- Getters ----

    pub fn access_vector(&self) -> Option<AccessVector> {
        self.access_vector
    }

    pub fn access_complexity(&self) -> Option<AccessComplexity> {
        self.access_complexity
    }

    pub fn authentication(&self) -> Option<Authentication> {
        self.authentication
    }

    pub fn conf_impact(&self) -> Option<Impact> {
        self.conf_impact
    }

    pub fn integ_impact(&self) -> Option<Impact> {
        self.integ_impact
    }

    pub fn avail_impact(&self) -> Option<Impact> {
        self.avail_impact
    }

    pub fn exploitability(&self) -> Option<Exploitability> {
        self.exploitability
    }

    pub fn remediation_level(&self) -> Option<RemediationLevel> {
        self.remediation_level
    }

    pub fn report_confidence(&self) -> Option<ReportConfidence> {
        self.report_confidence
    }

    pub fn collateral_damage(&self) -> Option<CollateralDamagePotential> {
        self.collateral_damage
    }

    pub fn target_distribution(&self) -> Option<TargetDistribution> {
        self.target_distribution
    }

    pub fn conf_requirement(&self) -> Option<Requirement> {
        self.conf_requirement
    }

    pub fn integ_requirement(&self) -> Option<Requirement> {
        self.integ_requirement
    }

    pub fn avail_requirement(&self) -> Option<Requirement> {
        self.avail_requirement
    }

    /// The externally supplied base score, if any
    pub fn supplied_base_score(&self) -> Option<f64> {
        self.given_base
    }

    /// The computed base score, if evaluated
    pub fn base_score(&self) -> Option<f64> {
        self.base
    }

    pub fn impact_subscore(&self) -> Option<f64> {
        self.impact_subscore
    }

    pub fn exploitability_subscore(&self) -> Option<f64> {
        self.exploitability_subscore
    }

    pub fn temporal_score(&self) -> Option<f64> {
        self.temporal
    }

    pub fn environmental_score(&self) -> Option<f64> {
        self.environmental
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    /// Vector string for the base metric group, once all six are set
    pub fn base_vector(&self) -> Option<String> {
        self.base_inputs().ok().map(|inputs| inputs.vector())
    }

    // ---- Input assembly ----

    /// Assemble the base equation inputs; fails on the first unset metric
    pub fn base_inputs(&self) -> Result<BaseInputs, CvssError> {
        Ok(BaseInputs {
            access_vector: self.require(self.access_vector, "Access Vector")?,
            access_complexity: self.require(self.access_complexity, "Access Complexity")?,
            authentication: self.require(self.authentication, "Authentication")?,
            conf_impact: self.require(self.conf_impact, "Confidentiality Impact")?,
            integ_impact: self.require(self.integ_impact, "Integrity Impact")?,
            avail_impact: self.require(self.avail_impact, "Availability Impact")?,
        })
    }

    /// Assemble the temporal equation inputs. Unset selections take their
    /// NotDefined sentinel, per the metric defaults.
    pub fn temporal_inputs(&self) -> TemporalInputs {
        TemporalInputs {
            exploitability: self.exploitability.unwrap_or_default(),
            remediation_level: self.remediation_level.unwrap_or_default(),
            report_confidence: self.report_confidence.unwrap_or_default(),
        }
    }

    /// Assemble the environmental equation inputs; requires the six base
    /// metrics, defaults everything else to NotDefined
    pub fn environmental_inputs(&self) -> Result<EnvironmentalInputs, CvssError> {
        Ok(EnvironmentalInputs {
            base: self.base_inputs()?,
            temporal: self.temporal_inputs(),
            collateral_damage: self.collateral_damage.unwrap_or_default(),
            target_distribution: self.target_distribution.unwrap_or_default(),
            conf_requirement: self.conf_requirement.unwrap_or_default(),
            integ_requirement: self.integ_requirement.unwrap_or_default(),
            avail_requirement: self.avail_requirement.unwrap_or_default(),
        })
    }

    fn require<T: Copy>(&self, field: Option<T>, dimension: &'static str) -> Result<T, CvssError> {
        field.ok_or(CvssError::MissingMetric { dimension })
    }

    // ---- Evaluation ----

    /// Compute the base score and fill the derived base fields.
    /// No field is touched on a precondition failure.
    pub fn evaluate_base(&mut self) -> Result<BaseScore, CvssError> {
        let inputs = self.base_inputs()?;
        let result = base_score(&inputs);

        self.base = Some(result.score);
        self.impact_subscore = Some(result.impact);
        self.exploitability_subscore = Some(result.exploitability);
        Ok(result)
    }

    /// Compute the temporal score from the supplied base score (or the
    /// computed one when no score was supplied) and fill the derived field
    pub fn evaluate_temporal(&mut self) -> Result<f64, CvssError> {
        let base = self
            .given_base
            .or(self.base)
            .ok_or(CvssError::MissingMetric {
                dimension: "Base Score",
            })?;

        let score = temporal_score(base, &self.temporal_inputs())?;
        self.temporal = Some(score);
        Ok(score)
    }

    /// Compute the environmental score and fill the derived field
    pub fn evaluate_environmental(&mut self) -> Result<f64, CvssError> {
        let inputs = self.environmental_inputs()?;
        let score = environmental_score(&inputs);
        self.environmental = Some(score);
        Ok(score)
    }
}
