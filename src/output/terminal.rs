// Terminal rendering of score reports
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use colored::{ColoredString, Colorize};

use crate::record::ScoreRecord;
use crate::scoring::Severity;

/// Format a score with exactly one fractional digit, tinted by severity
fn paint_score(score: f64) -> ColoredString {
    let text = format!("{:.1}", score);
    match Severity::from_score(score) {
        Severity::Low => text.green(),
        Severity::Medium => text.yellow(),
        Severity::High => text.red().bold(),
    }
}

fn print_header(title: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", "=".repeat(title.len()));
}

fn print_base_metrics(record: &ScoreRecord) {
    if let Some(av) = record.access_vector() {
        println!("  Access Vector:          {}", av);
    }
    if let Some(ac) = record.access_complexity() {
        println!("  Access Complexity:      {}", ac);
    }
    if let Some(au) = record.authentication() {
        println!("  Authentication:         {}", au);
    }
    if let Some(ci) = record.conf_impact() {
        println!("  Confidentiality Impact: {}", ci);
    }
    if let Some(ii) = record.integ_impact() {
        println!("  Integrity Impact:       {}", ii);
    }
    if let Some(ai) = record.avail_impact() {
        println!("  Availability Impact:    {}", ai);
    }
    if let Some(vector) = record.base_vector() {
        println!("  Vector:                 {}", vector.dimmed());
    }
}

fn print_temporal_metrics(record: &ScoreRecord) {
    if let Some(ex) = record.exploitability() {
        println!("  Exploitability:         {}", ex);
    }
    if let Some(rl) = record.remediation_level() {
        println!("  Remediation Level:      {}", rl);
    }
    if let Some(rc) = record.report_confidence() {
        println!("  Report Confidence:      {}", rc);
    }
}

fn print_environmental_metrics(record: &ScoreRecord) {
    if let Some(cd) = record.collateral_damage() {
        println!("  Collateral Damage:      {}", cd);
    }
    if let Some(td) = record.target_distribution() {
        println!("  Target Distribution:    {}", td);
    }
    if let Some(cr) = record.conf_requirement() {
        println!("  Conf. Requirement:      {}", cr);
    }
    if let Some(ir) = record.integ_requirement() {
        println!("  Integ. Requirement:     {}", ir);
    }
    if let Some(ar) = record.avail_requirement() {
        println!("  Avail. Requirement:     {}", ar);
    }
}

fn print_score_line(label: &str, score: f64) {
    println!(
        "  {:<23} {} ({})",
        label,
        paint_score(score),
        Severity::from_score(score)
    );
}

pub fn display_base_report(record: &ScoreRecord) {
    print_header("CVSS v2 Base Score");
    print_base_metrics(record);
    println!();
    if let Some(impact) = record.impact_subscore() {
        println!("  Impact subscore:        {:.1}", impact);
    }
    if let Some(exploitability) = record.exploitability_subscore() {
        println!("  Exploitability subscore: {:.1}", exploitability);
    }
    if let Some(score) = record.base_score() {
        print_score_line("Base score:", score);
    }
    println!();
}

pub fn display_temporal_report(record: &ScoreRecord) {
    print_header("CVSS v2 Temporal Score");
    if let Some(base) = record.supplied_base_score() {
        println!("  Base score:             {:.1}", base);
    }
    print_temporal_metrics(record);
    println!();
    if let Some(score) = record.temporal_score() {
        print_score_line("Temporal score:", score);
    }
    println!();
}

pub fn display_environmental_report(record: &ScoreRecord) {
    print_header("CVSS v2 Environmental Score");
    print_base_metrics(record);
    print_temporal_metrics(record);
    print_environmental_metrics(record);
    println!();
    if let Some(base) = record.base_score() {
        print_score_line("Base score:", base);
    }
    if let Some(score) = record.environmental_score() {
        print_score_line("Environmental score:", score);
    }
    println!();
}
