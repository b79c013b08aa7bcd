use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("lang/en/user.php", "<?php return ['name' => 'Name'];"),
        ("lang/fr/user.php", "<?php return ['name' => 'Nom'];"),
    ])
}

#[test]
fn test_trans_sets_values() -> Result<()> {
    let test = project()?;

    let output = test.run(&[
        "trans",
        "user.home.title",
        "--value",
        "en=Home",
        "--value",
        "fr=L'accueil",
    ])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "\u{2713} Updated user.home.title in en, fr\n");

    assert_eq!(
        test.read_file("lang/fr/user.php")?,
        "<?php\n\nreturn [\n    'name' => 'Nom',\n    'home' => [\n        'title' => 'L\\'accueil',\n    ],\n];\n"
    );
    Ok(())
}

#[test]
fn test_trans_creates_missing_document() -> Result<()> {
    let test = project()?;

    let output = test.run(&["trans", "auth.failed", "--value", "fr=Erreur"])?;
    assert_eq!(output.code, 0);
    assert_eq!(
        test.read_file("lang/fr/auth.php")?,
        "<?php\n\nreturn [\n    'failed' => 'Erreur',\n];\n"
    );
    Ok(())
}

#[test]
fn test_trans_unknown_language() -> Result<()> {
    let test = project()?;

    let output = test.run(&["trans", "user.name", "--value", "de=Name"])?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Unknown language \"de\""));
    assert!(!test.root().join("lang/de").exists());
    Ok(())
}

#[test]
fn test_trans_requires_key() -> Result<()> {
    let test = project()?;

    let output = test.run(&["trans", "user", "--value", "en=User"])?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("expected <topic>.<key>"));
    Ok(())
}
