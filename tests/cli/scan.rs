use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

const ROUTE: &str = r#"
export default Ember.Route.extend({
  renderTemplate: function() {
    this.render('favoritePost', { into: 'posts', controller: 'blogPost' });
  },
  setupController: function() {
    this.controllerFor('application');
  }
});
"#;

const TEMPLATE: &str = r#"
<h1>{{title}}</h1>
{{partial "post-header"}}
{{#each comments as |comment|}}
  {{view "comment" content=comment}}
{{/each}}
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("app/routes/posts.js", ROUTE)?;
    test.write_file("app/templates/posts.hbs", TEMPLATE)?;
    test.write_file("app/styles/app.css", "h1 { color: red; }")?;
    Ok(test)
}

#[test]
fn test_scan_reports_each_file() -> Result<()> {
    let test = project()?;

    let output = run(&mut test.scan_command())?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_snapshot!(output.stdout, @r"
    ./app/routes/posts.js
      controller:blogPost
      template:favoritePost
      template:posts
      controller:application (lookup)
    ./app/templates/posts.hbs
      template:post-header
      view:comment
      template:comment
    ✓ Scanned 2 files in ./ - 7 references found
    ");
    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let test = project()?;

    let output = run(test.scan_command().args(["--format", "json"]))?;
    assert_eq!(output.code, Some(0));

    let report: Value = serde_json::from_str(&output.stdout)?;
    let files = report["files"].as_array().expect("files array");
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["path"], "./app/routes/posts.js");
    assert_eq!(files[0]["kind"], "script");
    assert_eq!(
        files[0]["controllers"]["application"],
        "controller:application"
    );
    assert_eq!(files[1]["kind"], "template");
    assert_eq!(files[1]["views"]["comment"], "view:comment");
    assert_eq!(report["errors"], Value::Array(vec![]));
    Ok(())
}

#[test]
fn test_scan_parse_failure_exits_with_failure() -> Result<()> {
    let test = project()?;
    test.write_file(
        "app/templates/broken.hbs",
        "<div>\n  {{#if ok}}\n  {{/each}}\n</div>\n",
    )?;

    let output = run(&mut test.scan_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("./app/routes/posts.js"));
    assert!(output.stdout.contains(
        r#"error: template syntax error: helper "if" was opened, but "each" is closing"#
    ));
    assert!(output.stdout.contains("--> ./app/templates/broken.hbs:3:3"));
    assert!(output.stdout.contains("✘ 1 of 3 files could not be parsed"));
    Ok(())
}

#[test]
fn test_scan_respects_config() -> Result<()> {
    let test = project()?;
    test.write_file(
        "frontend/app/controllers/post.js",
        "export default Ember.Controller.extend({ needs: ['posts'] });",
    )?;
    test.write_file("frontend/app/ignored/skip.js", "this.render(")?;
    test.write_file(
        ".emberdepsrc.json",
        r#"{ "sourceRoot": "./frontend", "ignores": ["app/ignored"] }"#,
    )?;

    let output = run(&mut test.scan_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(output.stdout.contains("controller:posts"));
    assert!(!output.stdout.contains("./app/routes/posts.js"));
    Ok(())
}

#[test]
fn test_scan_source_root_flag_overrides_config() -> Result<()> {
    let test = project()?;
    test.write_file("other/app/templates/index.hbs", r#"{{render "sidebar"}}"#)?;

    let output = run(test.scan_command().args(["--source-root", "other"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("other/app/templates/index.hbs"));
    assert!(output.stdout.contains("controller:sidebar"));
    assert!(!output.stdout.contains("posts.js"));
    Ok(())
}

#[test]
fn test_scan_invalid_config_is_an_error() -> Result<()> {
    let test = project()?;
    test.write_file(".emberdepsrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = run(&mut test.scan_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid glob pattern in 'ignores'"));
    Ok(())
}

#[test]
fn test_scan_verbose_logs_to_stderr() -> Result<()> {
    let test = project()?;

    let output = run(test.scan_command().arg("-v"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("extracted dependencies"));
    assert!(!output.stdout.contains("extracted dependencies"));
    Ok(())
}
