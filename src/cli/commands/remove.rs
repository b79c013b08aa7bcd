use anyhow::Result;

use super::super::args::RemoveCommand;
use super::context::{CommandContext, parse_reference};
use super::helper::done;
use super::{CommandResult, CommandSummary, RemoveSummary};
use crate::core::{FileStore, Topic, TranslationCatalog};

pub fn remove(cmd: RemoveCommand) -> Result<CommandResult> {
    let (topic, key) = parse_reference(&cmd.reference)?;
    let ctx = CommandContext::new(&cmd.common)?;
    ctx.require_topic(&topic)?;

    if cmd.apply {
        let languages = ctx.catalog.remove_key(&topic, &key)?;
        return Ok(done(CommandSummary::Remove(RemoveSummary {
            reference: cmd.reference,
            languages,
            missing_documents: Vec::new(),
            is_apply: true,
        })));
    }

    let documents = ctx.catalog.read_topic(&topic)?;
    let languages = documents
        .iter()
        .filter(|(_, translations)| translations.contains_path(&key))
        .map(|(language, _)| language.clone())
        .collect();
    let missing_documents = missing_documents(&ctx.catalog, &topic);

    Ok(done(CommandSummary::Remove(RemoveSummary {
        reference: cmd.reference,
        languages,
        missing_documents,
        is_apply: false,
    })))
}

/// Languages without a document for `topic`; removing with `--apply` fails
/// on these.
fn missing_documents<S: FileStore>(catalog: &TranslationCatalog<S>, topic: &Topic) -> Vec<String> {
    catalog
        .list_languages()
        .into_iter()
        .filter(|language| !catalog.store().exists(&catalog.locate(topic, language).path()))
        .collect()
}
