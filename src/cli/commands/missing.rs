use anyhow::Result;

use super::super::args::MissingCommand;
use super::context::CommandContext;
use super::helper::finish;
use super::{CommandResult, CommandSummary};
use crate::{
    core::{CatalogError, FileStore, Topic, TranslationCatalog},
    issues::{EmptyValueIssue, Issue, MissingKeyIssue, UnreadableDocumentIssue},
};

pub fn missing(cmd: MissingCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    let topics: Vec<Topic> = match &cmd.topic {
        Some(name) => {
            let topic = ctx.catalog.qualify(&Topic::parse(name));
            ctx.require_topic(&topic)?;
            vec![topic]
        }
        None => ctx
            .catalog
            .list_topics()
            .keys()
            .map(|name| Topic::parse(name))
            .collect(),
    };

    let mut issues = Vec::new();
    let mut documents_checked = 0;
    for topic in &topics {
        documents_checked += count_documents(&ctx.catalog, topic);
        check_topic(&ctx.catalog, topic, &mut issues)?;
    }

    Ok(finish(CommandSummary::Missing, issues, documents_checked, true))
}

fn count_documents<S: FileStore>(catalog: &TranslationCatalog<S>, topic: &Topic) -> usize {
    catalog
        .list_languages()
        .iter()
        .filter(|language| catalog.store().exists(&catalog.locate(topic, language).path()))
        .count()
}

/// Collect missing-key and empty-value issues for one topic. An unreadable
/// document becomes an issue instead of aborting the whole check.
fn check_topic<S: FileStore>(
    catalog: &TranslationCatalog<S>,
    topic: &Topic,
    issues: &mut Vec<Issue>,
) -> Result<()> {
    let missing = match catalog.missing_keys(topic) {
        Ok(missing) => missing,
        Err(CatalogError::DocumentUnreadable { path, source }) => {
            issues.push(Issue::UnreadableDocument(UnreadableDocumentIssue {
                path: path.display().to_string(),
                error: source.to_string(),
            }));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    issues.extend(
        missing
            .into_iter()
            .map(|m| Issue::MissingKey(MissingKeyIssue::new(topic, m))),
    );

    issues.extend(
        catalog
            .empty_values(topic)?
            .into_iter()
            .map(|e| Issue::EmptyValue(EmptyValueIssue::new(topic, e))),
    );
    Ok(())
}
