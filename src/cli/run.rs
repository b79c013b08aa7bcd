/// Dispatch parsed arguments to the matching command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary and any issues found
/// - `Err` if the command fails (e.g., unreadable document, unknown topic)
use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, find::find, init::init, missing::missing, remove::remove,
        rename::rename, show::show, sync::sync, trans::trans,
    },
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Show(cmd)) => show(cmd),
        Some(Command::Find(cmd)) => find(cmd),
        Some(Command::Trans(cmd)) => trans(cmd),
        Some(Command::Remove(cmd)) => remove(cmd),
        Some(Command::Rename(cmd)) => rename(cmd),
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Missing(cmd)) => missing(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
