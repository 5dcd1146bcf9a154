use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const PROFILE_SCREEN: &str = r#"export function ProfileScreen() {
  return (
    <View>
      <Text>{t('profile.title')}</Text>
      <Text>{t('profile.bio')}</Text>
    </View>
  );
}
"#;

#[test]
fn test_validate_clean() -> Result<()> {
    let test = CliTest::with_file("src/ProfileScreen.tsx", PROFILE_SCREEN)?;
    test.write_file(
        "translations.json",
        r#"{ "profile": { "title": "Profile", "bio": "Bio" } }"#,
    )?;

    let output = test.run(&["validate", "--fail-on-issues"])?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(output.stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_validate_reports_missing_and_unused() -> Result<()> {
    let test = CliTest::with_file("src/ProfileScreen.tsx", PROFILE_SCREEN)?;
    test.write_file(
        "locales/en.json",
        "{\n  \"profile\": {\n    \"title\": \"Profile\",\n    \"avatar\": \"Avatar\"\n  }\n}\n",
    )?;

    assert_cmd_snapshot!(
        test.command().args(["validate", "--baseline", "locales/en.json"]),
        @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: "profile.avatar"  unused-key
      --> locales/en.json:4:1
      = note: ("Avatar")

    error: "profile.bio"  missing-key
      --> src/ProfileScreen.tsx:5:14
      = note: t() uses a key not defined in locales/en.json

    ✘ 2 problems (1 error, 1 warning)

    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_validate_fail_on_issues() -> Result<()> {
    let test = CliTest::with_file("src/ProfileScreen.tsx", PROFILE_SCREEN)?;
    test.write_file("translations.json", r#"{ "profile": { "title": "Profile" } }"#)?;

    let output = test.run(&["validate", "--fail-on-issues"])?;

    assert_eq!(output.code, Some(1));
    Ok(())
}

#[test]
fn test_validate_value_sentinel_defines_parent() -> Result<()> {
    let test = CliTest::with_file(
        "src/Home.tsx",
        "export const Home = () => <Text>{t('home')}{t('home.title')}</Text>;\n",
    )?;
    test.write_file(
        "translations.json",
        r#"{ "home": { "_value": "Home", "title": "Welcome" } }"#,
    )?;

    let output = test.run(&["validate", "--fail-on-issues"])?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    Ok(())
}

#[test]
fn test_validate_missing_baseline() -> Result<()> {
    let test = CliTest::with_file("src/ProfileScreen.tsx", PROFILE_SCREEN)?;

    let output = test.run(&["validate"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("cannot read translation file"));
    assert!(output.stderr.contains("translations.json"));
    Ok(())
}

#[test]
fn test_validate_malformed_baseline() -> Result<()> {
    let test = CliTest::with_file("src/ProfileScreen.tsx", PROFILE_SCREEN)?;
    test.write_file("translations.json", "{ \"profile\": ")?;

    let output = test.run(&["validate"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("cannot read translation file"));
    Ok(())
}

#[test]
fn test_unused_repeated_key_points_at_last_definition() -> Result<()> {
    let test = CliTest::with_file("src/ProfileScreen.tsx", PROFILE_SCREEN)?;
    test.write_file(
        "translations.json",
        "{\n  \"profile\": {\n    \"title\": \"Profile\",\n    \"bio\": \"Bio\",\n    \"avatar\": \"Avatar\",\n    \"avatar\": \"Photo\"\n  }\n}\n",
    )?;

    let output = test.run(&["validate"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"profile.avatar\"  unused-key"));
    assert!(output.stdout.contains("--> translations.json:6:1"));
    assert!(output.stdout.contains("(\"Photo\")"));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));
    Ok(())
}
