use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_extract_template_by_extension() -> Result<()> {
    let test = CliTest::with_file(
        "app/templates/post.hbs",
        r#"{{render "author" model.author}}{{partial "footer"}}"#,
    )?;

    let output = run(&mut test.extract_command("app/templates/post.hbs"))?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_snapshot!(output.stdout, @r"
    app/templates/post.hbs
      controller:author
      template:author
      template:footer
    ✓ 3 references found in app/templates/post.hbs
    ");
    Ok(())
}

#[test]
fn test_extract_unknown_extension_defaults_to_script() -> Result<()> {
    let test = CliTest::with_file(
        "app/controllers/post.es6",
        "export default Ember.Controller.extend({ needs: 'application' });",
    )?;

    let output = run(&mut test.extract_command("app/controllers/post.es6"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("  controller:application\n"));
    Ok(())
}

#[test]
fn test_extract_kind_flag_overrides_extension() -> Result<()> {
    let test = CliTest::with_file("partials/nav.txt", r#"{{partial "menu"}}"#)?;

    let output = run(
        test.extract_command("partials/nav.txt")
            .args(["--kind", "template"]),
    )?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("  template:menu\n"));
    Ok(())
}

#[test]
fn test_extract_rejects_unknown_kind() -> Result<()> {
    let test = CliTest::with_file("app/post.js", "")?;

    let output = run(test.extract_command("app/post.js").args(["--kind", "coffee"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("coffee"));
    Ok(())
}

#[test]
fn test_extract_json_output() -> Result<()> {
    let test = CliTest::with_file(
        "app/routes/post.js",
        r#"
export default class PostRoute extends Route {
  renderTemplate() {
    this.render('post', { into: 'application', controller: 'post' });
  }
}
"#,
    )?;

    let output = run(
        test.extract_command("app/routes/post.js")
            .args(["--format", "json"]),
    )?;

    assert_eq!(output.code, Some(0));
    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["kind"], "script");
    assert_eq!(
        report["orderedNames"],
        serde_json::json!(["controller:post", "template:post", "template:application"])
    );
    Ok(())
}

#[test]
fn test_extract_syntax_error() -> Result<()> {
    let test = CliTest::with_file("app/routes/post.js", "export default {\n  model() {\n")?;

    let output = run(&mut test.extract_command("app/routes/post.js"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: script syntax error:"));
    assert!(output.stdout.contains("--> app/routes/post.js:"));
    assert!(output.stdout.contains("app/routes/post.js could not be parsed"));
    Ok(())
}

#[test]
fn test_extract_syntax_error_json() -> Result<()> {
    let test = CliTest::with_file("app/templates/post.hbs", "{{#each posts}}\n{{/if}}")?;

    let output = run(
        test.extract_command("app/templates/post.hbs")
            .args(["--format", "json"]),
    )?;

    assert_eq!(output.code, Some(1));
    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["kind"], "template");
    assert_eq!(report["line"], 2);
    assert_eq!(report["column"], 1);
    Ok(())
}

#[test]
fn test_extract_missing_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.extract_command("app/missing.js"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Cannot read app/missing.js"));
    Ok(())
}
