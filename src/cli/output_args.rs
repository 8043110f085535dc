// Output format configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Output format and display options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output to JSON file
    #[arg(long = "json", value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long = "json-pretty")]
    pub json_pretty: bool,

    /// Quiet mode (no banner)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-colour")]
    pub no_colour: bool,

    /// Disable colored output (US spelling)
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Source identifier recorded with the score (e.g. an advisory URL)
    #[arg(long = "source", value_name = "ID")]
    pub source: Option<String>,
}

impl OutputArgs {
    /// Check whether colored output should be suppressed
    pub fn colors_disabled(&self) -> bool {
        self.no_colour || self.no_color
    }
}
