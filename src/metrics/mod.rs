// Metrics module - the CVSS v2 metric dimensions and their weight tables

pub mod base;
pub mod environmental;
pub mod temporal;

pub use base::{AccessComplexity, AccessVector, Authentication, Impact};
pub use environmental::{CollateralDamagePotential, Requirement, TargetDistribution};
pub use temporal::{Exploitability, RemediationLevel, ReportConfidence};
