use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "\u{2713} Created .langsyncrc.json\n");

    let content = test.read_file(".langsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["langPath"], "resources/lang");
    assert!(parsed["callForms"].as_array().is_some_and(|forms| !forms.is_empty()));
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsyncrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains(".langsyncrc.json already exists"));
    assert_eq!(test.read_file(".langsyncrc.json")?, "{}");

    Ok(())
}
