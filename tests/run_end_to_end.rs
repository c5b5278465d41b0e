use std::error::Error;
use std::io::Write;
use std::path::Path;

use stepplan::cli::CliArgs;
use stepplan::errors::StepplanError;
use stepplan_test_utils::builders::sample_edges;

type TestResult = Result<(), Box<dyn Error>>;

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{contents}")
}

fn args(input: &str) -> CliArgs {
    CliArgs {
        input: input.to_string(),
        config: None,
        workers: None,
        base_cost: None,
        dry_run: false,
        log_level: None,
    }
}

#[test]
fn runs_the_worked_example_end_to_end() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("steps.txt");
    write_file(&input, &sample_edges().to_input())?;

    let mut cli = args(input.to_str().unwrap());
    cli.workers = Some(2);
    cli.base_cost = Some(0);

    stepplan::run(cli)?;

    Ok(())
}

#[test]
fn honours_a_config_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("steps.txt");
    write_file(&input, &sample_edges().to_input())?;

    let config = dir.path().join("Stepplan.toml");
    write_file(&config, "[schedule]\nworkers = 2\nbase_cost = 0\n")?;

    let mut cli = args(input.to_str().unwrap());
    cli.config = Some(config.to_str().unwrap().to_string());

    stepplan::run(cli)?;

    Ok(())
}

#[test]
fn dry_run_stops_before_simulating() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("steps.txt");
    write_file(&input, &sample_edges().to_input())?;

    let mut cli = args(input.to_str().unwrap());
    cli.dry_run = true;

    stepplan::run(cli)?;

    Ok(())
}

#[test]
fn a_malformed_instruction_file_aborts() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("steps.txt");
    write_file(&input, "Step A must be finished before step B can begin.\ngarbage\n")?;

    assert!(matches!(
        stepplan::run(args(input.to_str().unwrap())),
        Err(StepplanError::MalformedLine(_))
    ));

    Ok(())
}

#[test]
fn a_cyclic_instruction_file_aborts() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("steps.txt");
    write_file(
        &input,
        "Step A must be finished before step B can begin.\n\
         Step B must be finished before step A can begin.\n",
    )?;

    assert!(matches!(
        stepplan::run(args(input.to_str().unwrap())),
        Err(StepplanError::CyclicDependency(_))
    ));

    Ok(())
}
