use anyhow::Result;
use tracing::debug;

use super::super::args::SyncCommand;
use super::context::CommandContext;
use super::helper::done;
use super::{CommandResult, CommandSummary, SyncSummary};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let filter = ctx.source_filter()?;
    let extractor = ctx.extractor()?;

    let extracted = ctx
        .catalog
        .collect_from_sources(&ctx.source_roots(), &filter, &extractor);
    debug!(
        topics = extracted.len(),
        keys = extracted.values().map(|keys| keys.len()).sum::<usize>(),
        "collected keys from sources"
    );

    let plan = ctx.catalog.plan_sync(&extracted)?;
    if cmd.apply {
        ctx.catalog.apply_sync(&plan)?;
    }

    Ok(done(CommandSummary::Sync(SyncSummary {
        plan,
        is_apply: cmd.apply,
    })))
}
