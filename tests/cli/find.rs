use anyhow::Result;

use crate::{CliTest, WELCOME_SCREEN};

#[test]
fn test_find_string_case_insensitive() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["find", "welcome"])?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(
        output
            .stdout
            .contains("Found 1 string and 0 key usages for 'welcome':")
    );
    assert!(
        output
            .stdout
            .contains("--> src/screens/Welcome.tsx:6:11  \"Welcome to the App\"  (text)")
    );
    Ok(())
}

#[test]
fn test_find_key_by_prefix() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        "export const App = () => (\n  <View>\n    <Text>{t('home.title')}</Text>\n    <Text>{t('homepage.title')}</Text>\n  </View>\n);\n",
    )?;

    let output = test.run(&["find", "home"])?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("--> src/App.tsx:3:12  t(\"home.title\")"));
    assert!(!output.stdout.contains("homepage.title"));
    Ok(())
}

#[test]
fn test_find_nothing() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["find", "Goodbye"])?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("nothing to do: no strings or keys match 'Goodbye'")
    );
    Ok(())
}
