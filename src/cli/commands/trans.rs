use anyhow::{Result, bail};
use indexmap::IndexMap;

use super::super::args::TransCommand;
use super::context::{CommandContext, parse_reference};
use super::helper::done;
use super::{CommandResult, CommandSummary, TransSummary};
use crate::core::FillRequest;

pub fn trans(cmd: TransCommand) -> Result<CommandResult> {
    let (topic, key) = parse_reference(&cmd.reference)?;
    let values = parse_values(&cmd.values)?;

    let ctx = CommandContext::new(&cmd.common)?;
    let languages = ctx.catalog.list_languages();
    for language in values.keys() {
        if !languages.contains(language) {
            bail!(
                "Unknown language \"{}\" (available: {})",
                language,
                languages.join(", ")
            );
        }
    }

    let mut request = FillRequest::new();
    request.insert(key, values.clone());
    ctx.catalog.fill_keys(&topic, &request)?;

    Ok(done(CommandSummary::Trans(TransSummary {
        reference: cmd.reference,
        values,
    })))
}

/// Parse `--value <lang>=<text>` entries. The text may be empty or contain `=`.
fn parse_values(raw: &[String]) -> Result<IndexMap<String, String>> {
    if raw.is_empty() {
        bail!("No values given: use --value <lang>=<text>");
    }

    let mut values = IndexMap::new();
    for entry in raw {
        let Some((language, text)) = entry.split_once('=') else {
            bail!("Invalid value \"{}\": expected <lang>=<text>", entry);
        };
        let language = language.trim();
        if language.is_empty() {
            bail!("Invalid value \"{}\": missing language", entry);
        }
        values.insert(language.to_string(), text.to_string());
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_values() {
        let values = parse_values(&strings(&["en=Hello", "fr=a=b", "nl="])).unwrap();

        assert_eq!(values["en"], "Hello");
        assert_eq!(values["fr"], "a=b");
        assert_eq!(values["nl"], "");
    }

    #[test]
    fn test_parse_values_errors() {
        assert!(parse_values(&[]).is_err());

        let err = parse_values(&strings(&["Hello"])).unwrap_err();
        assert!(err.to_string().contains("expected <lang>=<text>"));

        let err = parse_values(&strings(&["=Hello"])).unwrap_err();
        assert!(err.to_string().contains("missing language"));
    }
}
