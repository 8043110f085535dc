// Scoring module - the CVSS v2 equations
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// Reference: https://www.first.org/cvss/v2/guide (section 3.2, "Equations").
// Scores from these functions are archived and compared across tools, so the
// constants, combination order and rounding here must match the published
// equations to one decimal place.

pub mod base;
pub mod environmental;
pub mod severity;
pub mod temporal;

pub use base::{base_score, BaseInputs, BaseScore};
pub use environmental::{environmental_score, EnvironmentalInputs};
pub use severity::Severity;
pub use temporal::{temporal_score, TemporalInputs};

/// Round half away from zero to one decimal digit.
///
/// Applied to final composed values only, never to intermediate terms.
/// Collapses IEEE negative zero so a zero score always renders as "0.0".
pub fn round1(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// The two-branch impact factor from the v2 equations: drops the whole
/// score to zero when there is no impact at all
pub(crate) fn impact_factor(impact: f64) -> f64 {
    if impact == 0.0 {
        0.0
    } else {
        1.176
    }
}
