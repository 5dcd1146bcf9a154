use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, WELCOME_SCREEN};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Created .glossarc.json"));

    let content = test.read_file(".glossarc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["minLength"], 2);
    assert_eq!(parsed["defaultNamespace"], "common");
    assert!(parsed["translationFunctions"].as_array().is_some());
    assert!(parsed["skipAttributes"].as_array().is_some());
    assert!(content.contains("\n  \"includes\""), "2-space indentation");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".glossarc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: .glossarc.json already exists"));
    assert_eq!(test.read_file(".glossarc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    test.run(&["init"])?;
    let output = test.run(&["scan"])?;

    assert_eq!(
        output.code,
        Some(0),
        "scan should work with the initialized config. stderr: {}",
        output.stderr
    );
    assert!(output.stdout.contains("\"Welcome to the App\""));
    Ok(())
}
