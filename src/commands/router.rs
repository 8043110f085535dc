// CommandRouter - Routes CLI arguments to the appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{BaseCommand, Command, EnvironmentalCommand, TemporalCommand};
use crate::cli::{Args, Operation};

/// CommandRouter determines which Command to execute from the parsed
/// operation selector
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    pub fn route(args: Args) -> Box<dyn Command> {
        match args.operation {
            Operation::Base => Box::new(BaseCommand::new(args)),
            Operation::Temporal => Box::new(TemporalCommand::new(args)),
            Operation::Environmental => Box::new(EnvironmentalCommand::new(args)),
        }
    }
}
