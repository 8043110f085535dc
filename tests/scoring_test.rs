// Copyright (c) 2025 Marc Rivero López
// Licensed under GPLv3. See LICENSE file for details.
// This test suite validates real equation behavior without mocks or stubs.

//! Scoring Engine Integration Tests
//!
//! Exercises the three v2 equations through the public library API:
//! - Range invariants across every base metric combination
//! - Neutrality of the NotDefined sentinels
//! - The adjusted-impact clamp and its interaction with rounding
//! - Published worked examples

use cvssrun::metrics::{
    AccessComplexity, AccessVector, Authentication, CollateralDamagePotential, Exploitability,
    Impact, RemediationLevel, ReportConfidence, Requirement, TargetDistribution,
};
use cvssrun::{
    base_score, environmental_score, temporal_score, BaseInputs, EnvironmentalInputs,
    TemporalInputs,
};

const ACCESS_VECTORS: [AccessVector; 3] = [
    AccessVector::Local,
    AccessVector::AdjacentNetwork,
    AccessVector::Network,
];
const ACCESS_COMPLEXITIES: [AccessComplexity; 3] = [
    AccessComplexity::High,
    AccessComplexity::Medium,
    AccessComplexity::Low,
];
const AUTHENTICATIONS: [Authentication; 3] = [
    Authentication::Multiple,
    Authentication::Single,
    Authentication::None,
];
const IMPACTS: [Impact; 3] = [Impact::None, Impact::Partial, Impact::Complete];

fn all_base_combinations() -> Vec<BaseInputs> {
    let mut combos = Vec::with_capacity(729);
    for av in ACCESS_VECTORS {
        for ac in ACCESS_COMPLEXITIES {
            for au in AUTHENTICATIONS {
                for ci in IMPACTS {
                    for ii in IMPACTS {
                        for ai in IMPACTS {
                            combos.push(BaseInputs {
                                access_vector: av,
                                access_complexity: ac,
                                authentication: au,
                                conf_impact: ci,
                                integ_impact: ii,
                                avail_impact: ai,
                            });
                        }
                    }
                }
            }
        }
    }
    combos
}

fn neutral_environment(base: BaseInputs, temporal: TemporalInputs) -> EnvironmentalInputs {
    EnvironmentalInputs {
        base,
        temporal,
        collateral_damage: CollateralDamagePotential::NotDefined,
        target_distribution: TargetDistribution::NotDefined,
        conf_requirement: Requirement::NotDefined,
        integ_requirement: Requirement::NotDefined,
        avail_requirement: Requirement::NotDefined,
    }
}

// ============================================================================
// Range Invariants
// ============================================================================

#[test]
fn test_base_score_range_invariant_all_combinations() {
    for inputs in all_base_combinations() {
        let result = base_score(&inputs);
        assert!(
            (0.0..=10.0).contains(&result.score),
            "base score {} out of range for {:?}",
            result.score,
            inputs
        );
        assert!((0.0..=10.0).contains(&result.impact));
        assert!((0.0..=10.0).contains(&result.exploitability));
    }
}

#[test]
fn test_temporal_score_range_invariant() {
    let worst = TemporalInputs {
        exploitability: Exploitability::High,
        remediation_level: RemediationLevel::Unavailable,
        report_confidence: ReportConfidence::Confirmed,
    };
    let best = TemporalInputs {
        exploitability: Exploitability::Unproven,
        remediation_level: RemediationLevel::OfficialFix,
        report_confidence: ReportConfidence::Unconfirmed,
    };
    for base in [0.0, 2.5, 5.0, 7.5, 10.0] {
        for inputs in [worst, best] {
            let score = temporal_score(base, &inputs).unwrap();
            assert!((0.0..=10.0).contains(&score));
        }
    }
}

// ============================================================================
// NotDefined Neutrality
// ============================================================================

#[test]
fn test_temporal_not_defined_reproduces_base() {
    for inputs in all_base_combinations() {
        let base = base_score(&inputs).score;
        let temporal = temporal_score(base, &TemporalInputs::default()).unwrap();
        assert_eq!(temporal, base);
    }
}

#[test]
fn test_environmental_neutral_metrics_reproduce_temporal() {
    // Holds wherever the raw impact term stays at or below the adjusted
    // impact clamp, i.e. every combination short of triple complete impact
    let temporal_variants = [
        TemporalInputs::default(),
        TemporalInputs {
            exploitability: Exploitability::Functional,
            remediation_level: RemediationLevel::Workaround,
            report_confidence: ReportConfidence::Confirmed,
        },
    ];

    for inputs in all_base_combinations() {
        if inputs.conf_impact == Impact::Complete
            && inputs.integ_impact == Impact::Complete
            && inputs.avail_impact == Impact::Complete
        {
            continue;
        }
        let base = base_score(&inputs).score;
        for temporal in temporal_variants {
            let expected = temporal_score(base, &temporal).unwrap();
            let environmental = environmental_score(&neutral_environment(inputs, temporal));
            assert_eq!(
                environmental, expected,
                "environmental != temporal for {:?} / {:?}",
                inputs, temporal
            );
        }
    }
}

#[test]
fn test_triple_complete_impact_meets_the_clamp() {
    // With every impact complete the raw impact term is 10.0008..., which
    // the base equation uses as-is while the environmental equation clamps
    // it to 10. For a local/low/none vector that lands one rounding step
    // apart: base 7.2, environmental 7.1.
    let inputs = BaseInputs {
        access_vector: AccessVector::Local,
        access_complexity: AccessComplexity::Low,
        authentication: Authentication::None,
        conf_impact: Impact::Complete,
        integ_impact: Impact::Complete,
        avail_impact: Impact::Complete,
    };
    assert_eq!(base_score(&inputs).score, 7.2);
    assert_eq!(
        environmental_score(&neutral_environment(inputs, TemporalInputs::default())),
        7.1
    );
}

// ============================================================================
// Clamp and Rounding Boundaries
// ============================================================================

#[test]
fn test_adjusted_impact_clamp_boundary() {
    let mut inputs = neutral_environment(
        BaseInputs {
            access_vector: AccessVector::Network,
            access_complexity: AccessComplexity::Low,
            authentication: Authentication::None,
            conf_impact: Impact::Complete,
            integ_impact: Impact::Complete,
            avail_impact: Impact::Complete,
        },
        TemporalInputs::default(),
    );
    inputs.conf_requirement = Requirement::High;
    inputs.integ_requirement = Requirement::High;
    inputs.avail_requirement = Requirement::High;

    assert_eq!(environmental_score(&inputs), 10.0);
}

#[test]
fn test_half_way_value_rounds_away_from_zero() {
    // 5.0 * 0.85 composes to exactly 4.25, which must round to 4.3
    let inputs = TemporalInputs {
        exploitability: Exploitability::Unproven,
        remediation_level: RemediationLevel::NotDefined,
        report_confidence: ReportConfidence::NotDefined,
    };
    assert_eq!(temporal_score(5.0, &inputs).unwrap(), 4.3);
}

// ============================================================================
// Worked Examples
// ============================================================================

#[test]
fn test_maximum_severity_base_score() {
    let inputs = BaseInputs {
        access_vector: AccessVector::Network,
        access_complexity: AccessComplexity::Low,
        authentication: Authentication::None,
        conf_impact: Impact::Complete,
        integ_impact: Impact::Complete,
        avail_impact: Impact::Complete,
    };
    assert_eq!(base_score(&inputs).score, 10.0);
}

#[test]
fn test_minimum_severity_base_score() {
    let inputs = BaseInputs {
        access_vector: AccessVector::Local,
        access_complexity: AccessComplexity::High,
        authentication: Authentication::Multiple,
        conf_impact: Impact::None,
        integ_impact: Impact::None,
        avail_impact: Impact::None,
    };
    let result = base_score(&inputs);
    assert_eq!(result.score, 0.0);
    assert_eq!(format!("{:.1}", result.score), "0.0");
}

#[test]
fn test_published_temporal_example() {
    let inputs = TemporalInputs {
        exploitability: Exploitability::Functional,
        remediation_level: RemediationLevel::Workaround,
        report_confidence: ReportConfidence::Confirmed,
    };
    assert_eq!(temporal_score(7.8, &inputs).unwrap(), 7.0);
}

#[test]
fn test_partial_impacts_mid_range_example() {
    let inputs = BaseInputs {
        access_vector: AccessVector::AdjacentNetwork,
        access_complexity: AccessComplexity::Medium,
        authentication: Authentication::Single,
        conf_impact: Impact::Partial,
        integ_impact: Impact::Partial,
        avail_impact: Impact::Partial,
    };
    let result = base_score(&inputs);
    assert_eq!(result.score, 4.9);
    assert_eq!(result.impact, 6.4);
    assert_eq!(result.exploitability, 4.4);
}

#[test]
fn test_environmental_worked_example() {
    let inputs = EnvironmentalInputs {
        base: BaseInputs {
            access_vector: AccessVector::Network,
            access_complexity: AccessComplexity::Low,
            authentication: Authentication::None,
            conf_impact: Impact::Complete,
            integ_impact: Impact::None,
            avail_impact: Impact::None,
        },
        temporal: TemporalInputs {
            exploitability: Exploitability::Functional,
            remediation_level: RemediationLevel::OfficialFix,
            report_confidence: ReportConfidence::Confirmed,
        },
        collateral_damage: CollateralDamagePotential::LowMedium,
        target_distribution: TargetDistribution::High,
        conf_requirement: Requirement::High,
        integ_requirement: Requirement::Medium,
        avail_requirement: Requirement::Low,
    };
    assert_eq!(environmental_score(&inputs), 8.8);
}
