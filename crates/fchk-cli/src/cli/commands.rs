use super::CliError;
use anyhow::Context;
use fchk_core::{CheckpointSummary, ParseOutcome, parse_checkpoint_file, render_human_summary};
use globset::Glob;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(clap::Args)]
pub(super) struct SummaryArgs {
    /// Checkpoint file to parse
    file: PathBuf,
}

#[derive(clap::Args)]
pub(super) struct DumpArgs {
    /// Checkpoint file to parse
    file: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Write the JSON to this path instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct CheckArgs {
    /// Checkpoint files to validate
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON report output path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct ScanArgs {
    /// Directory to scan (one level, no recursion)
    dir: PathBuf,

    /// File-name glob to match
    #[arg(long, default_value = "*.fchk")]
    pattern: String,
}

#[derive(Serialize)]
struct CheckReport {
    passed: bool,
    files: Vec<CheckReportEntry>,
}

#[derive(Serialize)]
struct CheckReportEntry {
    file: String,
    readable: bool,
    success: bool,
    errors: usize,
    warnings: usize,
}

pub(super) fn run_summary_command(args: SummaryArgs) -> Result<i32, CliError> {
    let outcome = parse_outcome(&args.file)?;
    let summary = CheckpointSummary::from_outcome(&outcome);
    println!("{}", render_human_summary(&summary));

    if summary.success { Ok(0) } else { Ok(1) }
}

pub(super) fn run_dump_command(args: DumpArgs) -> Result<i32, CliError> {
    let outcome = parse_outcome(&args.file)?;
    let summary = CheckpointSummary::from_outcome(&outcome);
    let json = summary.to_json(args.pretty)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json.as_bytes())
                .with_context(|| format!("failed to write JSON summary to '{}'", path.display()))?;
            println!("JSON summary: {}", path.display());
        }
        None => println!("{json}"),
    }

    if summary.success { Ok(0) } else { Ok(1) }
}

pub(super) fn run_check_command(args: CheckArgs) -> Result<i32, CliError> {
    let mut entries = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let entry = match parse_outcome(file) {
            Ok(outcome) => {
                let verdict = if outcome.success() { "PASS" } else { "FAIL" };
                println!("{verdict} {}", file.display());
                for line in outcome.diagnostics.render_lines() {
                    println!("  {line}");
                }
                CheckReportEntry {
                    file: file.display().to_string(),
                    readable: true,
                    success: outcome.success(),
                    errors: outcome.diagnostics.errors().count(),
                    warnings: outcome.diagnostics.warnings().count(),
                }
            }
            Err(error) => {
                // An unreadable file fails its own check without aborting
                // the rest of the batch.
                println!("FAIL {}", file.display());
                println!("  {error}");
                CheckReportEntry {
                    file: file.display().to_string(),
                    readable: false,
                    success: false,
                    errors: 0,
                    warnings: 0,
                }
            }
        };
        entries.push(entry);
    }

    let report = CheckReport {
        passed: entries.iter().all(|entry| entry.success),
        files: entries,
    };
    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report)
            .context("failed to serialize check report")?;
        std::fs::write(path, json.as_bytes())
            .with_context(|| format!("failed to write check report to '{}'", path.display()))?;
        println!("JSON report: {}", path.display());
    }

    if report.passed { Ok(0) } else { Ok(1) }
}

pub(super) fn run_scan_command(args: ScanArgs) -> Result<i32, CliError> {
    let matcher = Glob::new(&args.pattern)
        .map_err(|error| CliError::Usage(format!("invalid --pattern '{}': {error}", args.pattern)))?
        .compile_matcher();

    let entries = std::fs::read_dir(&args.dir)
        .with_context(|| format!("failed to read directory '{}'", args.dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read directory '{}'", args.dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if matcher.is_match(name) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        println!(
            "no files matching '{}' under {}",
            args.pattern,
            args.dir.display()
        );
        return Ok(0);
    }

    info!(dir = %args.dir.display(), files = files.len(), "scanning checkpoint files");
    let mut all_passed = true;
    for path in &files {
        match parse_outcome(path) {
            Ok(outcome) => {
                println!("{}", scan_line(path, &outcome));
                all_passed &= outcome.success();
            }
            Err(error) => {
                println!("{}: unreadable ({error})", path.display());
                all_passed = false;
            }
        }
    }

    if all_passed { Ok(0) } else { Ok(1) }
}

fn parse_outcome(path: &Path) -> Result<ParseOutcome, CliError> {
    info!(file = %path.display(), "parsing checkpoint");
    let outcome = parse_checkpoint_file(path)?;
    if !outcome.success() {
        warn!(
            file = %path.display(),
            errors = outcome.diagnostics.errors().count(),
            "checkpoint parse failed"
        );
    }
    Ok(outcome)
}

fn scan_line(path: &Path, outcome: &ParseOutcome) -> String {
    let summary = CheckpointSummary::from_outcome(outcome);
    let status = if summary.success { "ok" } else { "failed" };
    let formula = summary
        .geometries
        .last()
        .map(|geometry| geometry.formula.clone())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{}: {status}, formula {formula}, geometries {}, orbital-sets {}, diagnostics {}",
        path.display(),
        summary.geometries.len(),
        summary.orbital_sets.len(),
        summary.diagnostics.len()
    )
}
