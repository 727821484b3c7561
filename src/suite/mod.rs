//! Declarative scenario suites
//!
//! A YAML suite declares a named runner and a tree of scenarios; leaf
//! scenarios run a shell command and capture trimmed stdout as their string
//! result, checked by string verifiers. `sequence` entries nest children and
//! may nest further sequences.

mod config;

pub use config::{ScenarioConfig, SuiteConfig, VerifyConfig};

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;

use crate::common::{Error, Result};
use crate::runner::Runner;
use crate::scenario::{LeafScenario, Scenario, SequenceScenario};
use crate::verify::StringVerifier;

/// Load a suite definition from a YAML file.
pub fn load(path: &Path) -> Result<SuiteConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Suite(format!("failed to read '{}': {e}", path.display()))
    })?;
    let config: SuiteConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Build a runnable [`Runner`] from a parsed suite.
pub fn build(config: &SuiteConfig) -> Result<Runner<String>> {
    let scenarios = config
        .scenarios
        .iter()
        .map(build_scenario)
        .collect::<Result<Vec<_>>>()?;
    Ok(Runner::new(config.name.clone(), scenarios).with_params(config.params.clone()))
}

fn build_scenario(config: &ScenarioConfig) -> Result<Scenario<String>> {
    match (&config.shell, &config.sequence) {
        (Some(shell), None) => {
            let command = shell.clone();
            let mut leaf = LeafScenario::new(config.name.clone(), move || {
                run_shell(command.clone())
            });
            for entry in &config.verify {
                let mut verifier =
                    StringVerifier::new(entry.comparison.clone()).with_mode(entry.mode);
                if entry.negate {
                    verifier = verifier.negated();
                }
                if let Some(message) = &entry.message {
                    verifier = verifier.with_message(message.clone());
                }
                leaf = leaf.with_verifier(Arc::new(verifier));
            }
            Ok(Scenario::Leaf(leaf))
        }
        (None, Some(children)) => {
            if !config.verify.is_empty() {
                return Err(Error::Suite(format!(
                    "scenario '{}': sequences carry no verifiers; attach them to the children",
                    config.name
                )));
            }
            let children = children
                .iter()
                .map(build_scenario)
                .collect::<Result<Vec<_>>>()?;
            Ok(Scenario::Sequence(SequenceScenario::new(
                config.name.clone(),
                children,
            )))
        }
        _ => Err(Error::Suite(format!(
            "scenario '{}' must define exactly one of 'shell' or 'sequence'",
            config.name
        ))),
    }
}

async fn run_shell(command: String) -> Result<String> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(&command)
        .stdin(Stdio::null())
        .output()
        .await?;
    if !output.status.success() {
        return Err(Error::CommandFailed {
            command,
            code: output.status.code(),
        });
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim_end_matches('\n').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::ComparisonMode;

    fn parse(yaml: &str) -> SuiteConfig {
        serde_yaml::from_str(yaml).expect("suite should parse")
    }

    #[test]
    fn parses_a_nested_suite() {
        let config = parse(
            r#"
name: smoke
params:
  region: local
scenarios:
  - name: greet
    shell: echo 'hello world!'
    verify:
      - comparison: "hello world!"
  - name: journey
    sequence:
      - name: first
        shell: echo one
        verify:
          - comparison: one
            mode: contains
      - name: second
        shell: echo two
"#,
        );
        assert_eq!(config.name, "smoke");
        assert_eq!(config.params["region"], "local");
        assert_eq!(config.scenarios.len(), 2);
        assert_eq!(config.scenarios[0].verify[0].mode, ComparisonMode::Equals);
        let children = config.scenarios[1].sequence.as_ref().unwrap();
        assert_eq!(children[0].verify[0].mode, ComparisonMode::Contains);
    }

    #[test]
    fn rejects_scenario_with_both_shell_and_sequence() {
        let config = parse(
            r#"
name: bad
scenarios:
  - name: confused
    shell: echo hi
    sequence:
      - name: child
        shell: echo hi
"#,
        );
        let err = build(&config).unwrap_err();
        assert!(err.to_string().contains("exactly one"));
    }

    #[test]
    fn rejects_verifiers_on_a_sequence() {
        let config = parse(
            r#"
name: bad
scenarios:
  - name: journey
    sequence:
      - name: child
        shell: echo hi
    verify:
      - comparison: hi
"#,
        );
        let err = build(&config).unwrap_err();
        assert!(err.to_string().contains("no verifiers"));
    }

    #[tokio::test]
    async fn shell_result_is_trimmed_stdout() {
        let result = run_shell("printf 'plain\\n'".to_string()).await.unwrap();
        assert_eq!(result, "plain");
    }

    #[tokio::test]
    async fn failing_shell_command_is_an_execute_failure() {
        let err = run_shell("exit 3".to_string()).await.unwrap_err();
        match err {
            Error::CommandFailed { code, .. } => assert_eq!(code, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
