//! End-to-end tests for YAML-defined suites
//!
//! These write a suite file to disk, load and build it, and run it on the
//! sequential harness, exercising the whole stack down to the shell.

use std::io::Write;

use stagehand::{suite, SequentialHarness};
use tempfile::NamedTempFile;

fn write_suite(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write suite");
    file
}

#[tokio::test]
async fn runs_a_passing_and_a_failing_scenario() {
    let file = write_suite(
        r#"
name: shell smoke
scenarios:
  - name: greet
    shell: echo 'hello world!'
    verify:
      - comparison: "hello world!"
  - name: grumble
    shell: echo 'hello world!'
    verify:
      - comparison: "hello world2!"
        message: greeting drifted
"#,
    );

    let config = suite::load(file.path()).unwrap();
    let runner = suite::build(&config).unwrap();
    let reports = runner.run(&SequentialHarness::new()).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports[0].passed());
    let err = reports[1].outcome.as_ref().unwrap_err().to_string();
    assert!(err.contains("hello world2!"), "got: {err}");
    assert!(err.contains("greeting drifted"), "got: {err}");
}

#[tokio::test]
async fn sequence_suite_runs_children_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("steps.log");
    let file = write_suite(&format!(
        r#"
name: journey
scenarios:
  - name: two steps
    sequence:
      - name: first
        shell: echo first >> {log} && cat {log}
        verify:
          - comparison: first
      - name: second
        shell: echo second >> {log} && cat {log}
        verify:
          - comparison: "first\nsecond"
"#,
        log = log.display()
    ));

    let config = suite::load(file.path()).unwrap();
    let runner = suite::build(&config).unwrap();
    let reports = runner.run(&SequentialHarness::new()).await.unwrap();

    assert_eq!(reports.len(), 1);
    assert!(
        reports[0].passed(),
        "sequence failed: {:?}",
        reports[0].outcome
    );
}

#[tokio::test]
async fn failing_command_surfaces_its_exit_status() {
    let file = write_suite(
        r#"
name: exit codes
scenarios:
  - name: crash
    shell: exit 7
"#,
    );

    let config = suite::load(file.path()).unwrap();
    let runner = suite::build(&config).unwrap();
    let reports = runner.run(&SequentialHarness::new()).await.unwrap();

    let err = reports[0].outcome.as_ref().unwrap_err().to_string();
    assert!(err.contains("7"), "got: {err}");
}

#[test]
fn load_rejects_missing_files_with_context() {
    let err = suite::load(std::path::Path::new("/nonexistent/suite.yaml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/suite.yaml"));
}
