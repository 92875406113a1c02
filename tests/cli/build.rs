use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_build_regenerates_release_files() -> Result<()> {
    let test = CliTest::with_file(
        "source_mods.json",
        r#"{"mods": [{"repo": "o/m", "branch": "1.19", "langPaths": ["lang"], "modid": "m", "curseforge": 7}]}"#,
    )?;
    test.write_file("repos/o/m/lang/en_us.json", r#"{"a": "Stone"}"#)?;
    test.write_file("repos/o/m/lang/zh_cn.json", r#"{"a": "石头"}"#)?;
    test.update_command().output()?;

    std::fs::remove_file(test.root().join("Dict.json"))?;
    std::fs::remove_file(test.root().join("Dict-Mini.json"))?;

    let output = test.build_command().args(["--out-dir", "dist"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Built release files from 1 store entry"));

    assert_eq!(test.read_file("dist/Dict-Mini.json")?, r#"{"Stone":["石头"]}"#);
    assert!(test.root().join("dist/Dict.json").exists());
    assert!(!test.root().join("dist/Report.md").exists());

    Ok(())
}

#[test]
fn test_build_without_store() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Store not found"));
    assert!(!test.root().join("Dict-Sqlite.db").exists());

    Ok(())
}
