use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Created .emberdepsrc.json\n");
    assert!(test.root().join(".emberdepsrc.json").exists());

    let content = test.read_file(".emberdepsrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["includes"], serde_json::json!(["app"]));
    assert_eq!(parsed["scriptExtensions"], serde_json::json!(["js", "ts"]));
    assert_eq!(
        parsed["templateExtensions"],
        serde_json::json!(["hbs", "handlebars"])
    );
    assert_eq!(parsed["sourceRoot"], "./");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".emberdepsrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stderr, "Error: .emberdepsrc.json already exists\n");
    assert_eq!(test.read_file(".emberdepsrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run(test.command().arg("init"))?;
    test.write_file("app/templates/index.hbs", r#"{{view "hero"}}"#)?;

    let output = run(&mut test.scan_command())?;
    assert_eq!(
        output.code,
        Some(0),
        "Scan should work with initialized config. stderr: {}",
        output.stderr
    );
    assert!(output.stdout.contains("view:hero"));
    Ok(())
}
