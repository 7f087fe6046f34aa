// SPDX-License-Identifier: MIT
// spooler: process-wide print spooler demo
//
// - Two workstations share the one spooler instance and submit concurrently.
// - Every processing pass reports the whole queue, then a completion line.
//
// Author: Johannes Leupolz <dev@leupolz.eu>

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use spooler::global_config::{self, ProcessMode};
use spooler::workstation::{SubmissionDispatcher, Workstation};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// What a processing pass does with the reported jobs
    #[arg(long, value_enum, default_value_t)]
    process_mode: ProcessMode,

    /// Batch to submit (JSON encoded), e.g. {"workstation":"PC3","documents":["a","b"]}.
    /// May be repeated. Replaces the sample workstations.
    #[arg(long = "batch", value_name = "JSON")]
    batches: Vec<String>,

    /// File containing a batch (JSON encoded). May be repeated.
    #[arg(long = "batch-file", value_name = "PATH")]
    batch_files: Vec<PathBuf>,
}

fn validate_args(args: &Args) -> Result<(), String> {
    if let Some(empty) = args.batches.iter().find(|b| b.trim().is_empty()) {
        return Err(format!("--batch must not be empty (got {:?})", empty));
    }
    if let Some(missing) = args.batch_files.iter().find(|p| !p.is_file()) {
        return Err(format!(
            "--batch-file {} does not exist or is not a file",
            missing.display()
        ));
    }
    Ok(())
}

fn load_workstations(args: &Args) -> anyhow::Result<Vec<Workstation>> {
    let mut workstations = args
        .batches
        .iter()
        .map(|json| Workstation::from_json(json))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for path in &args.batch_files {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read batch file {}", path.display()))?;
        workstations.push(Workstation::from_json(&json)?);
    }

    if workstations.is_empty() {
        workstations = Workstation::samples();
    }
    Ok(workstations)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {e}");
        std::process::exit(2);
    }

    global_config::initialize_global_config(&args.process_mode)?;
    let workstations = load_workstations(&args)?;

    let print_spooler1 = spooler::get_instance();
    let print_spooler2 = spooler::get_instance();
    if std::ptr::eq(print_spooler1, print_spooler2) {
        info!("Both accessor calls returned the same spooler instance");
    } else {
        anyhow::bail!("accessor returned two different spooler instances");
    }

    let mut dispatcher = SubmissionDispatcher::new();
    for (i, workstation) in workstations.into_iter().enumerate() {
        let handle = if i % 2 == 0 {
            print_spooler1
        } else {
            print_spooler2
        };
        dispatcher.dispatch(handle, workstation)?;
    }
    dispatcher.wait_until_finished()?;

    print_spooler1.process_jobs();
    print_spooler2.process_jobs();

    info!("Stopping spooler");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("spooler").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_observe_and_sample_workstations() {
        let args = parse(&[]);
        assert_eq!(args.process_mode, ProcessMode::Observe);
        assert!(validate_args(&args).is_ok());
        assert_eq!(load_workstations(&args).unwrap(), Workstation::samples());
    }

    #[test]
    fn batches_replace_the_samples() {
        let args = parse(&[
            "--process-mode",
            "drain",
            "--batch",
            r#"{"workstation":"PC3","documents":["x"]}"#,
        ]);
        assert_eq!(args.process_mode, ProcessMode::Drain);
        assert_eq!(
            load_workstations(&args).unwrap(),
            vec![Workstation::new("PC3", vec!["x".into()])]
        );
    }

    #[test]
    fn empty_batch_argument_is_rejected() {
        let args = parse(&["--batch", "  "]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn missing_batch_file_is_rejected() {
        let args = parse(&["--batch-file", "/nonexistent/spooler-batch.json"]);
        assert!(validate_args(&args)
            .unwrap_err()
            .contains("/nonexistent/spooler-batch.json"));
    }

    #[test]
    fn unknown_process_mode_is_rejected() {
        assert!(Args::try_parse_from(["spooler", "--process-mode", "shred"]).is_err());
    }
}
