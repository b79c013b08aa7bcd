use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const CONTROLLER: &str = r#"<?php

class LoginController
{
    public function failed()
    {
        return back()->withErrors(__('auth.failed'));
    }

    public function show()
    {
        return trans("user.name");
    }
}
"#;

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("app/Http/LoginController.php", CONTROLLER),
        ("lang/en/user.php", "<?php return ['name' => 'Name'];"),
        ("lang/fr/user.php", "<?php return [];"),
    ])
}

#[test]
fn test_sync_dry_run() -> Result<()> {
    let test = project()?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("+ auth.failed (en)"));
    assert!(output.stdout.contains("+ auth.failed (fr)"));
    assert!(output.stdout.contains("+ user.name (fr)"));
    assert!(output.stdout.contains("Would add 3 keys and create 2 files."));
    assert!(!test.root().join("lang/en/auth.php").exists());
    Ok(())
}

#[test]
fn test_sync_apply() -> Result<()> {
    let test = project()?;

    let output = test.run(&["sync", "--apply"])?;
    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "Added 3 keys, created 2 files.\n");

    assert_eq!(
        test.read_file("lang/fr/auth.php")?,
        "<?php\n\nreturn [\n    'failed' => '',\n];\n"
    );
    assert_eq!(
        test.read_file("lang/fr/user.php")?,
        "<?php\n\nreturn [\n    'name' => '',\n];\n"
    );
    assert_eq!(
        test.read_file("lang/en/user.php")?,
        "<?php return ['name' => 'Name'];"
    );

    let output = test.run(&["sync"])?;
    assert!(output.stdout.contains("All translation files are in sync"));
    Ok(())
}

#[test]
fn test_sync_dry_run_counts_documents_for_language_gaps() -> Result<()> {
    let test = CliTest::with_files(&[
        ("lang/en/user.php", "<?php return ['name' => 'Name'];"),
        ("lang/fr/auth.php", "<?php return [];"),
    ])?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("fr/user.php"));
    assert!(output.stdout.contains("Would add 1 key and create 1 file."));
    assert!(!test.root().join("lang/fr/user.php").exists());

    let output = test.run(&["sync", "--apply", "-v"])?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("+ user.name (fr)"));
    assert!(output.stdout.contains("Added 1 key, created 1 file."));
    assert_eq!(
        test.read_file("lang/fr/user.php")?,
        "<?php\n\nreturn [\n    'name' => '',\n];\n"
    );
    Ok(())
}
