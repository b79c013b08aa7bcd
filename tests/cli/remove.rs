use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const EN_USER: &str = "<?php\n\nreturn [\n    'name' => 'Name',\n    'form' => [\n        'submit' => 'Send',\n    ],\n];\n";

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("lang/en/user.php", EN_USER),
        ("lang/fr/user.php", "<?php\n\nreturn [\n    'name' => 'Nom',\n];\n"),
    ])
}

#[test]
fn test_remove_dry_run() -> Result<()> {
    let test = project()?;

    let output = test.run(&["remove", "user.form.submit"])?;
    assert_eq!(output.code, 0);
    assert!(
        output
            .stdout
            .contains("Would remove user.form.submit from 1 file (en).")
    );
    assert!(output.stdout.contains("Run with --apply to remove it."));
    assert_eq!(test.read_file("lang/en/user.php")?, EN_USER);
    Ok(())
}

#[test]
fn test_remove_apply() -> Result<()> {
    let test = project()?;

    let output = test.run(&["remove", "user.form.submit", "--apply"])?;
    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "Removed user.form.submit from 1 file (en).\n"
    );
    assert_eq!(
        test.read_file("lang/en/user.php")?,
        "<?php\n\nreturn [\n    'name' => 'Name',\n    'form' => [],\n];\n"
    );
    Ok(())
}

#[test]
fn test_remove_from_every_language() -> Result<()> {
    let test = project()?;

    let output = test.run(&["remove", "user.name", "--apply"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("from 2 files (en, fr)"));
    assert_eq!(test.read_file("lang/fr/user.php")?, "<?php\n\nreturn [];\n");
    Ok(())
}

#[test]
fn test_remove_unknown_key() -> Result<()> {
    let test = project()?;

    let output = test.run(&["remove", "user.nope"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("Key \"user.nope\" not found"));
    Ok(())
}

#[test]
fn test_remove_dry_run_warns_about_missing_documents() -> Result<()> {
    let test = CliTest::with_files(&[
        ("lang/en/user.php", EN_USER),
        ("lang/fr/auth.php", "<?php return [];"),
    ])?;

    let output = test.run(&["remove", "user.name"])?;
    assert_eq!(output.code, 0);
    assert!(
        output
            .stdout
            .contains("warning: no translation file in 1 language (fr); --apply will fail there")
    );
    assert!(output.stdout.contains("Would remove user.name from 1 file (en)."));
    Ok(())
}
