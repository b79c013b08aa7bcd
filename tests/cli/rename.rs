use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        (
            "lang/en/user.php",
            "<?php return ['first' => 'First', 'name' => 'Name', 'last' => 'Last'];",
        ),
        ("lang/fr/user.php", "<?php return ['name' => 'Nom'];"),
    ])
}

#[test]
fn test_rename_keeps_position() -> Result<()> {
    let test = project()?;

    let output = test.run(&["rename", "user.name", "title"])?;
    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "\u{2713} Renamed user.name to user.title in en, fr\n"
    );
    assert_eq!(
        test.read_file("lang/en/user.php")?,
        "<?php\n\nreturn [\n    'first' => 'First',\n    'title' => 'Name',\n    'last' => 'Last',\n];\n"
    );
    Ok(())
}

#[test]
fn test_rename_conflict() -> Result<()> {
    let test = project()?;

    let output = test.run(&["rename", "user.name", "last"])?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("last"));
    assert_eq!(
        test.read_file("lang/fr/user.php")?,
        "<?php return ['name' => 'Nom'];"
    );
    Ok(())
}

#[test]
fn test_rename_rejects_dotted_name() -> Result<()> {
    let test = project()?;

    let output = test.run(&["rename", "user.name", "profile.name"])?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("without dots"));
    Ok(())
}
