use anyhow::Result;

use crate::CliTest;

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("lang/en/user.php", "<?php return ['name' => 'Name', 'city' => 'City'];"),
        ("lang/fr/user.php", "<?php return ['name' => 'Nom', 'city' => 'Ville'];"),
        ("lang/en/auth.php", "<?php return ['failed' => 'Wrong name or password'];"),
    ])
}

#[test]
fn test_find_by_value() -> Result<()> {
    let test = project()?;

    let output = test.run(&["find", "ville"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("user.city"));
    assert!(output.stdout.contains("Ville"));
    assert!(!output.stdout.contains("user.name"));
    Ok(())
}

#[test]
fn test_find_by_key_and_value() -> Result<()> {
    let test = project()?;

    let output = test.run(&["find", "name"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("user.name"));
    assert!(output.stdout.contains("auth.failed"));
    Ok(())
}

#[test]
fn test_find_nothing() -> Result<()> {
    let test = project()?;

    let output = test.run(&["find", "zebra"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "No keys or values matching \"zebra\"\n");
    Ok(())
}
