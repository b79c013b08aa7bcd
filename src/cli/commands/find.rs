use anyhow::Result;

use super::super::args::FindCommand;
use super::context::CommandContext;
use super::helper::done;
use super::{CommandResult, CommandSummary, FindSummary};

pub fn find(cmd: FindCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let matches = ctx.catalog.find(&cmd.keyword)?;

    Ok(done(CommandSummary::Find(FindSummary {
        keyword: cmd.keyword,
        languages: ctx.catalog.list_languages(),
        matches,
    })))
}
