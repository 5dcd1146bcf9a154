use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_duplicate_values_grouped() -> Result<()> {
    let test = CliTest::with_file(
        "translations.json",
        "{\n  \"a\": { \"save\": \"Save\" },\n  \"b\": { \"save\": \"Save\" },\n  \"c\": \"Cancel\"\n}\n",
    )?;

    assert_cmd_snapshot!(test.command().arg("check-duplicates"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: "Save"  duplicate-value
      --> translations.json:2:1
      = note: shared by a.save, b.save

    ✘ 1 problem (0 errors, 1 warning)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_duplicate_keys_reported_with_lines() -> Result<()> {
    let test = CliTest::with_file(
        "en.json",
        "{\n  \"home\": {\n    \"title\": \"Welcome\",\n    \"title\": \"Hello\"\n  }\n}\n",
    )?;

    assert_cmd_snapshot!(
        test.command()
            .args(["check-duplicates", "--baseline", "en.json", "--fail-on-issues"]),
        @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "home.title"  duplicate-key
      --> en.json:3:1
      = note: defined 2 times, on lines 3, 4
      = hint: only the last definition is kept when the file is loaded

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_dotted_key_collides_with_nested_path() -> Result<()> {
    let test = CliTest::with_file(
        "translations.json",
        "{\n  \"home.title\": \"Welcome\",\n  \"home\": { \"title\": \"Hello\" }\n}\n",
    )?;

    let output = test.run(&["check-duplicates"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"home.title\"  duplicate-key"));
    Ok(())
}

#[test]
fn test_no_duplicates() -> Result<()> {
    let test = CliTest::with_file(
        "translations.json",
        r#"{ "home": { "title": "Welcome", "subtitle": "Hello" } }"#,
    )?;

    let output = test.run(&["check-duplicates", "--fail-on-issues"])?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Checked 2 keys in translations.json - no duplicates found")
    );
    Ok(())
}

#[test]
fn test_empty_translation_file_is_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file("translations.json", "{}")?;

    let output = test.run(&["check-duplicates", "--fail-on-issues"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("nothing to do"));
    Ok(())
}
