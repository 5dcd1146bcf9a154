use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, WELCOME_SCREEN};

#[test]
fn test_scan_reports_hardcoded_strings() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    assert_cmd_snapshot!(test.command().arg("scan"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    error: "Welcome to the App"  hardcoded
      --> src/screens/Welcome.tsx:6:11
      |
    6 |     <Text>Welcome to the App</Text>
      |           ^
      = note: text in Text

    error: "Click Me"  hardcoded
      --> src/screens/Welcome.tsx:7:19
      |
    7 |     <Button title="Click Me" onPress={() => {}} />
      |                   ^
      = note: attribute in Button.title

    ✘ 2 problems (2 errors, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_scan_is_default_command() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"Welcome to the App\""));
    Ok(())
}

#[test]
fn test_scan_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        "export const App = () => <Text>{t('welcome.title')}</Text>;\n",
    )?;

    let output = test.run(&["scan", "--fail-on-issues"])?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Scanned 1 source file - no hardcoded strings found")
    );
    Ok(())
}

#[test]
fn test_scan_fail_on_issues() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["scan", "--fail-on-issues"])?;

    assert_eq!(output.code, Some(1));
    Ok(())
}

#[test]
fn test_scan_exports_report() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["scan", "--output", "report/scan.json"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    let report = test.read_json("report/scan.json")?;
    assert!(report["timestamp"].as_str().is_some());
    assert_eq!(report["stats"]["filesScanned"], 1);
    assert_eq!(report["stats"]["filesWithIssues"], 1);
    assert_eq!(report["stats"]["totalStrings"], 2);
    assert_eq!(report["stats"]["stringsByType"]["TextNode"], 1);
    assert_eq!(report["stats"]["stringsByType"]["AttributeLiteral"], 1);
    assert_eq!(report["results"][0]["rawValue"], "Welcome to the App");
    assert_eq!(report["results"][0]["kind"], "TextNode");
    assert_eq!(report["results"][0]["context"], "Text");
    assert_eq!(report["results"][1]["rawValue"], "Click Me");
    assert_eq!(report["results"][1]["context"], "Button.title");
    Ok(())
}

#[test]
fn test_scan_continues_after_parse_failure() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;
    test.write_file("src/Broken.tsx", "export const = <div")?;

    let output = test.run(&["scan"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> src/Broken.tsx"));
    assert!(output.stdout.contains("\"Welcome to the App\""));
    Ok(())
}

#[test]
fn test_scan_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;
    test.write_file(".glossarc.json", r#"{ "skipAttributes": ["title"] }"#)?;

    let output = test.run(&["scan"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"Welcome to the App\""));
    assert!(!output.stdout.contains("\"Click Me\""));
    Ok(())
}

#[test]
fn test_scan_with_root_flag() -> Result<()> {
    let test = CliTest::with_file("app/src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["scan", "--root", "app"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("--> src/screens/Welcome.tsx:6:11"));
    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;
    test.write_file(".glossarc.json", r#"{ "unknownOption": true }"#)?;

    let output = test.run(&["scan"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: invalid configuration in"));
    assert!(output.stderr.contains(".glossarc.json"));
    Ok(())
}

#[test]
fn test_missing_config_override_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["scan", "--config", "rules.json"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("rules.json"));
    Ok(())
}

#[test]
fn test_scan_project_inside_build_directory() -> Result<()> {
    let test = CliTest::with_file("build/app/src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["scan", "--root", "build/app"])?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("--> src/screens/Welcome.tsx:6:11"));
    assert!(output.stdout.contains("2 problems (2 errors, 0 warnings)"));
    Ok(())
}
