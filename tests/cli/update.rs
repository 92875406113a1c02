use std::fs;

use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const CONFIG: &str = r#"{
    "mods": [
        {
            "repo": "owner/gears",
            "branch": "1.20",
            "langPaths": ["assets/gears/lang"],
            "modid": "gears",
            "curseforge": 1001
        },
        {
            "repo": "owner/legacy",
            "branch": "1.12.2",
            "langPaths": ["src/main/resources/assets/legacy/lang"],
            "modid": "legacy",
            "curseforge": "1002"
        },
        {
            "repo": "owner/missing",
            "branch": "1.20",
            "langPaths": ["lang"],
            "modid": "missing",
            "curseforge": 1003
        }
    ]
}"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("source_mods.json", CONFIG)?;
    test.write_file(
        "repos/owner/gears/assets/gears/lang/en_us.json",
        r#"{"item.gears.cog": "Cog", "item.gears.iron_gear": "Iron Gear", "gears.tooltip": "RF"}"#,
    )?;
    test.write_file(
        "repos/owner/gears/assets/gears/lang/zh_cn.json",
        r#"{"item.gears.cog": "齿轮", "item.gears.iron_gear": "铁齿轮", "gears.tooltip": "RF"}"#,
    )?;
    test.write_file(
        "repos/owner/legacy/src/main/resources/assets/legacy/lang/en_US.lang",
        "# Legacy\nitem.cog.name=Cog\n",
    )?;
    test.write_file(
        "repos/owner/legacy/src/main/resources/assets/legacy/lang/zh_CN.lang",
        "item.cog.name=小齿轮\n",
    )?;
    Ok(test)
}

#[test]
fn test_update_builds_release_files() -> Result<()> {
    let test = project()?;

    let output = test.update_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let full: Vec<Value> = serde_json::from_str(&test.read_file("Dict.json")?)?;
    assert_eq!(full.len(), 4);
    assert_eq!(full[0]["origin_name"], "Cog");
    assert_eq!(full[0]["curseforge"], "1001");
    assert_eq!(full[3]["version"], "1.12");

    assert_eq!(
        test.read_file("Dict-Mini.json")?,
        r#"{"Cog":["齿轮","小齿轮"],"Iron Gear":["铁齿轮"]}"#
    );

    let diff: Vec<Value> = serde_json::from_str(&test.read_file("Dict-Diff.json")?)?;
    assert_eq!(diff.len(), 4);

    let report = test.read_file("Report.md")?;
    assert!(report.contains("| owner/gears | 1.20 | 1.20 | 3 | 0 | 0 | OK |"));
    assert!(report.contains("| owner/missing | 1.20 | 1.20 | 0 | 0 | 0 | FAILED (FetchError)"));

    let stdout = stdout(&output);
    assert!(stdout.contains("Processed 3 sources (1 failed), 4 entries touched"));

    Ok(())
}

#[test]
fn test_second_update_only_updates() -> Result<()> {
    let test = project()?;
    test.update_command().output()?;

    test.write_file(
        "repos/owner/gears/assets/gears/lang/zh_cn.json",
        r#"{"item.gears.cog": "齿轮组", "item.gears.iron_gear": "铁齿轮", "gears.tooltip": "RF"}"#,
    )?;
    let output = test.update_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let full: Vec<Value> = serde_json::from_str(&test.read_file("Dict.json")?)?;
    assert_eq!(full.len(), 4);
    assert_eq!(full[0]["trans_name"], "齿轮组");

    let report = test.read_file("Report.md")?;
    assert!(report.contains("| owner/gears | 1.20 | 1.20 | 0 | 3 | 0 | OK |"));

    Ok(())
}

#[test]
fn test_missing_credentials_fail_fast() -> Result<()> {
    let test = project()?;

    let output = test.command().arg("update").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("GITHUB_TOKEN"));
    assert!(!test.root().join("Dict-Sqlite.db").exists());
    assert!(!test.root().join("Report.md").exists());

    let output = test
        .command()
        .arg("update")
        .env("GITHUB_TOKEN", "secret")
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("GITHUB_REPOSITORY"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("source_mods.json", r#"{"mods": [{"repo": ""}]}"#)?;

    let output = test.update_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_out_dir_option() -> Result<()> {
    let test = project()?;

    let output = test
        .update_command()
        .args(["--out-dir", "release", "--store", "data/dict.db"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.root().join("release/Dict.json").exists());
    assert!(test.root().join("release/Report.md").exists());
    assert!(test.root().join("data/dict.db").exists());

    Ok(())
}

#[test]
fn test_update_without_changes_removes_stale_diff() -> Result<()> {
    let test = project()?;
    let output = test.update_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("Dict-Diff.json").exists());

    fs::remove_dir_all(test.root().join("repos"))?;
    let output = test.update_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(!test.root().join("Dict-Diff.json").exists());
    assert!(stdout(&output).contains("Processed 3 sources (3 failed), 0 entries touched"));
    let full: Vec<Value> = serde_json::from_str(&test.read_file("Dict.json")?)?;
    assert_eq!(full.len(), 4);

    Ok(())
}

#[test]
fn test_update_reads_yaml_config() -> Result<()> {
    let test = project()?;
    test.write_file(
        "config/source_mods.yml",
        r#"mods:
  - repo: owner/gears
    branch: "1.20"
    lang_paths:
      - assets/gears/lang
    modid: gears
    curseforge: 1001
"#,
    )?;

    let output = test
        .update_command()
        .args(["--config", "config/source_mods.yml"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let full: Vec<Value> = serde_json::from_str(&test.read_file("Dict.json")?)?;
    assert_eq!(full.len(), 2);
    assert_eq!(full[0]["curseforge"], "1001");

    Ok(())
}
