//! stagehand CLI - runs YAML scenario suites on the sequential harness

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use stagehand::common::logging;
use stagehand::{suite, SequentialHarness};

#[derive(Parser)]
#[command(name = "stagehand", about = "Scenario-orchestration engine for e2e test suites")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a YAML suite
    Run {
        /// Path to the suite file
        suite: PathBuf,
        /// Repeat each case's inner cycle N times
        #[arg(long, default_value_t = 1)]
        iterations: usize,
        /// Only log errors
        #[arg(short, long)]
        quiet: bool,
    },
    /// Parse and validate a suite file without running it
    Check {
        /// Path to the suite file
        suite: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            suite,
            iterations,
            quiet,
        } => {
            logging::init_cli(quiet);
            run(&suite, iterations).await
        }
        Commands::Check { suite } => {
            logging::init_cli(false);
            check(&suite)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &Path, iterations: usize) -> stagehand::Result<bool> {
    let config = suite::load(path)?;
    let runner = suite::build(&config)?;

    println!(
        "\n{} {}",
        "Running Suite:".blue().bold(),
        config.name.white().bold()
    );

    let harness = SequentialHarness::new().with_iterations(iterations);
    let reports = runner.run(&harness).await?;

    let mut passed = 0usize;
    for report in &reports {
        match &report.outcome {
            Ok(()) => {
                println!("  {} {}", "✓".green(), report.name);
                passed += 1;
            }
            Err(err) => println!("  {} {}: {}", "✗".red(), report.name, err),
        }
    }

    let all_passed = passed == reports.len();
    let verdict = if all_passed {
        "PASS".green().bold()
    } else {
        "FAIL".red().bold()
    };
    println!("\n{} {}/{} scenarios passed", verdict, passed, reports.len());

    Ok(all_passed)
}

fn check(path: &Path) -> stagehand::Result<bool> {
    let config = suite::load(path)?;
    // surfaces structural problems (shell/sequence exclusivity, verifiers
    // on sequences) without running anything
    suite::build(&config)?;
    println!(
        "{} {} ({} scenarios)",
        "OK".green().bold(),
        config.name,
        config.scenarios.len()
    );
    Ok(true)
}
