use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        (
            "lang/en/user.php",
            "<?php\n\nreturn [\n    'name' => 'Name',\n    'form' => [\n        'submit' => 'Send',\n    ],\n];\n",
        ),
        ("lang/fr/user.php", "<?php return ['name' => 'Nom'];"),
    ])
}

#[test]
fn test_show_topic_table() -> Result<()> {
    let test = project()?;

    let output = test.run(&["show", "user"])?;
    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "key               en    fr\n\
         user.name         Name  Nom\n\
         user.form.submit  Send  MISSING\n"
    );
    Ok(())
}

#[test]
fn test_show_single_key_and_language() -> Result<()> {
    let test = project()?;

    let output = test.run(&["show", "user.name", "--lang", "fr"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "key        fr\nuser.name  Nom\n");
    Ok(())
}

#[test]
fn test_show_subtree() -> Result<()> {
    let test = project()?;

    let output = test.run(&["show", "user.form"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("user.form.submit"));
    assert!(!output.stdout.contains("user.name"));
    Ok(())
}

#[test]
fn test_show_close_match() -> Result<()> {
    let test = project()?;

    let output = test.run(&["show", "user.SUB", "--close"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("user.form.submit"));
    Ok(())
}

#[test]
fn test_show_unknown_key() -> Result<()> {
    let test = project()?;

    let output = test.run(&["show", "user.nope"])?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Key \"user.nope\" not found"));
    Ok(())
}

#[test]
fn test_show_unknown_topic() -> Result<()> {
    let test = project()?;

    let output = test.run(&["show", "billing"])?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("No translation files found for 'billing'"));
    Ok(())
}

#[test]
fn test_show_vendor_package() -> Result<()> {
    let test = CliTest::with_files(&[
        ("lang/en/user.php", "<?php return ['name' => 'Name'];"),
        (
            "lang/vendor/courier/en/mail.php",
            "<?php return ['subject' => 'Hello'];",
        ),
    ])?;

    let output = test.run(&["show", "mail", "--package", "courier"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("courier::mail.subject"));
    assert!(output.stdout.contains("Hello"));
    Ok(())
}
