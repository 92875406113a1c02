use anyhow::Result;

use crate::{CliTest, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "source_mods.json",
        r#"{"mods": [
            {"repo": "o/a", "branch": "1.20", "langPaths": ["lang"], "modid": "a", "curseforge": 1},
            {"repo": "o/b", "branch": "1.20", "langPaths": ["lang"], "modid": "b", "curseforge": 2}
        ]}"#,
    )?;
    test.write_file("repos/o/a/lang/en_us.json", r#"{"x": "Copper", "y": "Copper"}"#)?;
    test.write_file("repos/o/a/lang/zh_cn.json", r#"{"x": "铜", "y": "铜锭"}"#)?;
    test.write_file("repos/o/b/lang/en_us.json", r#"{"x": "Copper"}"#)?;
    test.write_file("repos/o/b/lang/zh_cn.json", r#"{"x": "铜锭"}"#)?;
    test.update_command().output()?;
    Ok(test)
}

#[test]
fn test_lookup_ranks_by_count() -> Result<()> {
    let test = project()?;

    let output = test.lookup_command("Copper").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Copper\n  铜锭 (2)\n  铜 (1)\n");

    Ok(())
}

#[test]
fn test_lookup_without_match() -> Result<()> {
    let test = project()?;

    let output = test.lookup_command("Tin").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No translations found for \"Tin\""));

    Ok(())
}
