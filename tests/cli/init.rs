use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["originLocale"], "en_us");
    assert_eq!(parsed["targetLocale"], "zh_cn");
    let mods = parsed["mods"].as_array().context("'mods' should be an array")?;
    assert!(!mods.is_empty(), "Config should contain an example mod");
    assert!(mods[0].get("langPaths").is_some());

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created source_mods.json

    ----- stderr -----
    ");

    let content = test.read_file("source_mods.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file("source_mods.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("source_mods.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    // The example mod is not present locally; the run still succeeds.
    let output = test.update_command().output()?;
    assert!(
        output.status.success(),
        "update should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("Report.md").exists());

    Ok(())
}
