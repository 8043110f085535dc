// Command trait - Defines the interface for all command implementations
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;

/// Command trait - Defines the interface for all command implementations
///
/// This trait follows the Command Pattern to encapsulate the calculator's
/// operations as independent, testable command objects.
///
/// Each command is responsible for:
/// - Validating its own preconditions
/// - Populating a score record from the parsed arguments
/// - Invoking the formula evaluator
/// - Rendering the results
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// - `Ok(())` if the command executed successfully
    /// - `Err(anyhow::Error)` if validation or evaluation failed
    fn execute(&self) -> Result<()>;

    /// Get a human-readable name for this command (for logging/debugging)
    fn name(&self) -> &'static str;
}
