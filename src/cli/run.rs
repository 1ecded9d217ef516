use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, dump::dump, init::init},
};

/// Dispatches to the handler of the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with issues, error counts and exit behavior
/// - `Err` if the command fails (e.g., invalid config file)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Dump(cmd)) => dump(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
