use anyhow::Result;

use crate::CliTest;

#[test]
fn test_missing_reports_issues() -> Result<()> {
    let test = CliTest::with_files(&[
        ("lang/en/user.php", "<?php return ['name' => 'Name', 'bio' => ''];"),
        ("lang/fr/user.php", "<?php return ['bio' => 'Bio'];"),
    ])?;

    let output = test.run(&["missing"])?;
    assert_eq!(output.code, 1);
    assert!(output.stdout.contains("error: \"user.name\"  missing-key"));
    assert!(output.stdout.contains("= note: missing in 'fr'"));
    assert!(output.stdout.contains("warning: \"user.bio\"  empty-value"));
    assert!(output.stdout.contains("2 problems (1 error, 1 warning)"));
    Ok(())
}

#[test]
fn test_missing_clean_catalog() -> Result<()> {
    let test = CliTest::with_files(&[
        ("lang/en/user.php", "<?php return ['name' => 'Name'];"),
        ("lang/fr/user.php", "<?php return ['name' => 'Nom'];"),
    ])?;

    let output = test.run(&["missing"])?;
    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 2 translation files - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_missing_single_topic() -> Result<()> {
    let test = CliTest::with_files(&[
        ("lang/en/user.php", "<?php return ['name' => 'Name'];"),
        ("lang/fr/user.php", "<?php return ['name' => 'Nom'];"),
        ("lang/en/auth.php", "<?php return ['failed' => 'Failed'];"),
    ])?;

    let output = test.run(&["missing", "user"])?;
    assert_eq!(output.code, 0);

    let output = test.run(&["missing", "auth"])?;
    assert_eq!(output.code, 1);
    assert!(output.stdout.contains("\"auth.failed\""));
    Ok(())
}

#[test]
fn test_missing_unreadable_document() -> Result<()> {
    let test = CliTest::with_files(&[("lang/en/user.php", "<?php return [")])?;

    let output = test.run(&["missing"])?;
    assert_eq!(output.code, 1);
    assert!(output.stdout.contains("unreadable-document"));
    Ok(())
}
