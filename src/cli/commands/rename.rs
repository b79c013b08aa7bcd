use anyhow::{Result, bail};

use super::super::args::RenameCommand;
use super::context::{CommandContext, parse_reference};
use super::helper::done;
use super::{CommandResult, CommandSummary, RenameSummary};

pub fn rename(cmd: RenameCommand) -> Result<CommandResult> {
    let (topic, key) = parse_reference(&cmd.reference)?;
    let new_name = cmd.new_name.trim();
    if new_name.is_empty() || new_name.contains('.') {
        bail!(
            "Invalid new name \"{}\": give the last key segment only, without dots",
            cmd.new_name
        );
    }

    let ctx = CommandContext::new(&cmd.common)?;
    ctx.require_topic(&topic)?;

    let languages = ctx.catalog.rename_key(&topic, &key, new_name)?;
    if languages.is_empty() {
        bail!("Key \"{}\" not found", cmd.reference);
    }

    let to = match cmd.reference.rsplit_once('.') {
        Some((parent, _)) => format!("{}.{}", parent, new_name),
        None => new_name.to_string(),
    };
    Ok(done(CommandSummary::Rename(RenameSummary {
        from: cmd.reference,
        to,
        languages,
    })))
}
