use anyhow::{Result, bail};
use indexmap::{IndexMap, IndexSet};

use super::super::args::ShowCommand;
use super::context::CommandContext;
use super::helper::done;
use super::{CommandResult, CommandSummary, ShowRow, ShowSummary};
use crate::core::{
    catalog::leaf_value,
    data::{Topic, Translations},
};

pub fn show(cmd: ShowCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    let (topic, key) = match Topic::split_reference(&cmd.reference) {
        Some((topic, key)) => (topic, Some(key.to_string())),
        None => (Topic::parse(&cmd.reference), None),
    };
    let topic = ctx.catalog.qualify(&topic);
    ctx.require_topic(&topic)?;

    let documents = ctx.catalog.read_topic(&topic)?;
    let languages = if cmd.lang.is_empty() {
        ctx.catalog.list_languages()
    } else {
        cmd.lang.clone()
    };

    let rows = build_rows(&documents, &languages, key.as_deref(), cmd.close);
    if let Some(key) = &key
        && rows.is_empty()
    {
        bail!("Key \"{}.{}\" not found", topic, key);
    }

    Ok(done(CommandSummary::Show(ShowSummary {
        topic: topic.to_string(),
        languages,
        rows,
    })))
}

/// Every key of the topic (union over languages) with its value per language.
///
/// With a filter, only the key itself and its subtree are kept, or with
/// `close` any key containing the filter (case-insensitive).
fn build_rows(
    documents: &IndexMap<String, Translations>,
    languages: &[String],
    filter: Option<&str>,
    close: bool,
) -> Vec<ShowRow> {
    let keys: IndexSet<String> = documents
        .values()
        .flat_map(|translations| translations.flatten().into_iter().map(|(key, _)| key))
        .collect();

    keys.into_iter()
        .filter(|key| match filter {
            None => true,
            Some(filter) if close => key.to_lowercase().contains(&filter.to_lowercase()),
            Some(filter) => key == filter || key.starts_with(&format!("{}.", filter)),
        })
        .map(|key| {
            let values = languages
                .iter()
                .map(|language| {
                    documents
                        .get(language)
                        .and_then(|translations| leaf_value(translations, &key))
                        .map(str::to_string)
                })
                .collect();
            ShowRow { key, values }
        })
        .collect()
}
