use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, WELCOME_SCREEN};

#[test]
fn test_generate_nested_translation_file() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Generated 2 keys in"));

    let content = test.read_file("translations.json")?;
    assert_eq!(
        content,
        "{\n  \"welcome\": {\n    \"welcome_to_the_app\": \"Welcome to the App\",\n    \"click_me\": \"Click Me\"\n  }\n}\n"
    );
    Ok(())
}

#[test]
fn test_generate_flat_with_keymap() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&[
        "generate",
        "--flat",
        "--output",
        "locales/en.json",
        "--keymap",
        "keys.json",
    ])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    assert_eq!(
        test.read_json("locales/en.json")?,
        json!({
            "welcome_to_the_app": "Welcome to the App",
            "click_me": "Click Me"
        })
    );
    assert_eq!(
        test.read_json("keys.json")?,
        json!({
            "welcome_to_the_app": {
                "value": "Welcome to the App",
                "source": "hardcoded",
                "locations": [{ "file": "src/screens/Welcome.tsx", "line": 6 }]
            },
            "click_me": {
                "value": "Click Me",
                "source": "hardcoded",
                "locations": [{ "file": "src/screens/Welcome.tsx", "line": 7 }]
            }
        })
    );
    Ok(())
}

#[test]
fn test_generate_repeated_text_gets_suffix() -> Result<()> {
    let test = CliTest::with_file(
        "src/Home.tsx",
        "export const Home = () => (\n  <View>\n    <Text>Save</Text>\n    <Button title=\"Save\" />\n  </View>\n);\n",
    )?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    assert_eq!(
        test.read_json("translations.json")?,
        json!({ "home": { "save": "Save", "save_1": "Save" } })
    );
    Ok(())
}

#[test]
fn test_generate_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        "export const App = () => <Text>{t('welcome.title')}</Text>;\n",
    )?;

    let output = test.run(&["generate"])?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("note: nothing to do: no hardcoded strings found")
    );
    assert!(!test.root().join("translations.json").exists());
    Ok(())
}

#[test]
fn test_generate_keeps_baseline_values() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;
    test.write_file(
        "translations.json",
        r#"{ "welcome": { "click_me": "Tap here" }, "legacy": "Old text" }"#,
    )?;

    let output = test.run(&["generate", "--baseline", "translations.json"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("1 added, 1 kept"));

    assert_eq!(
        test.read_json("translations.json")?,
        json!({
            "welcome": {
                "click_me": "Tap here",
                "welcome_to_the_app": "Welcome to the App"
            },
            "legacy": "Old text"
        })
    );
    Ok(())
}

#[test]
fn test_generate_preserves_leaf_under_value() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;
    test.write_file("en.json", r#"{ "welcome": "Hello" }"#)?;

    let output = test.run(&[
        "generate",
        "--baseline",
        "en.json",
        "--output",
        "out.json",
    ])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(
        output
            .stdout
            .contains("kept under _value to add 'welcome.welcome_to_the_app'")
    );

    let tree = test.read_json("out.json")?;
    assert_eq!(tree["welcome"]["_value"], "Hello");
    assert_eq!(tree["welcome"]["welcome_to_the_app"], "Welcome to the App");
    assert_eq!(tree["welcome"]["click_me"], "Click Me");
    // the baseline itself is left alone
    assert_eq!(test.read_json("en.json")?, json!({ "welcome": "Hello" }));
    Ok(())
}

#[test]
fn test_generate_again_keeps_edited_translations() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    test.write_file(
        "translations.json",
        r#"{ "welcome": { "welcome_to_the_app": "Welcome aboard", "click_me": "Click Me" }, "legal": "Terms" }"#,
    )?;
    let output = test.run(&["generate"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(
        output
            .stdout
            .contains("merged with translations.json: 0 added, 2 kept")
    );

    assert_eq!(
        test.read_json("translations.json")?,
        json!({
            "welcome": {
                "welcome_to_the_app": "Welcome aboard",
                "click_me": "Click Me"
            },
            "legal": "Terms"
        })
    );
    Ok(())
}

#[test]
fn test_failed_keymap_write_leaves_translation_file_alone() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;
    let original = "{ \"welcome\": { \"click_me\": \"Tap here\" } }";
    test.write_file("translations.json", original)?;
    test.write_file("not_a_dir", "")?;

    let output = test.run(&["generate", "--keymap", "not_a_dir/keys.json"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("cannot write"));
    assert_eq!(test.read_file("translations.json")?, original);
    Ok(())
}

#[test]
fn test_generate_invalid_baseline_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;
    test.write_file("en.json", r#"{ "welcome": { "count": 3 } }"#)?;

    let output = test.run(&["generate", "--baseline", "en.json"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("cannot read translation file en.json"));
    assert!(output.stderr.contains("welcome.count"));
    assert!(!test.root().join("translations.json").exists());
    Ok(())
}

#[test]
fn test_extract_placeholders_from_calls() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        "export const App = () => (\n  <View>\n    <Text>{t('home.title')}</Text>\n    <Text>{i18n.t(`home.subtitle`)}</Text>\n    <Text>{t(dynamicKey)}</Text>\n  </View>\n);\n",
    )?;
    test.write_file("src/Other.tsx", "export const O = () => <Text>{t('home.title')}</Text>;\n")?;

    let output = test.run(&["extract", "--keymap", "keys.json"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Extracted 2 keys in"));

    assert_eq!(
        test.read_json("translations.json")?,
        json!({ "home": { "title": "", "subtitle": "" } })
    );
    let keymap = test.read_json("keys.json")?;
    assert_eq!(keymap["home.title"]["source"], "existing");
    assert_eq!(
        keymap["home.title"]["locations"],
        json!([
            { "file": "src/App.tsx", "line": 3 },
            { "file": "src/Other.tsx", "line": 1 }
        ])
    );
    Ok(())
}

#[test]
fn test_extract_keeps_existing_translations() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        "export const App = () => <Text>{t('home.title')}{t('home.subtitle')}</Text>;\n",
    )?;
    test.write_file("translations.json", r#"{ "home": { "title": "Home" } }"#)?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    assert_eq!(
        test.read_json("translations.json")?,
        json!({ "home": { "title": "Home", "subtitle": "" } })
    );
    Ok(())
}

#[test]
fn test_extract_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file("src/screens/Welcome.tsx", WELCOME_SCREEN)?;

    let output = test.run(&["extract"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("nothing to do"));
    Ok(())
}

#[test]
fn test_complete_unions_extracted_and_generated() -> Result<()> {
    let test = CliTest::with_file(
        "src/Profile.tsx",
        "export const Profile = () => (\n  <View>\n    <Text>{t('profile.title')}</Text>\n    <Text>Edit profile</Text>\n  </View>\n);\n",
    )?;

    let output = test.run(&["complete"])?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Completed 2 keys in"));

    assert_eq!(
        test.read_json("translations.json")?,
        json!({ "profile": { "title": "", "edit_profile": "Edit profile" } })
    );
    Ok(())
}
