mod commands;

use clap::Parser;
use fchk_core::domain::FchkError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error}");
            2
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("fchk-rs".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "fchk-rs", about = "Formatted checkpoint parser and inspector")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Parse one checkpoint file and print a human-readable summary
    Summary(commands::SummaryArgs),
    /// Parse one checkpoint file and emit the JSON summary
    Dump(commands::DumpArgs),
    /// Validate checkpoint files and report PASS/FAIL per file
    Check(commands::CheckArgs),
    /// Scan one directory level for checkpoint files and summarize each
    Scan(commands::ScanArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Summary(args) => commands::run_summary_command(args),
        CliCommand::Dump(args) => commands::run_dump_command(args),
        CliCommand::Check(args) => commands::run_check_command(args),
        CliCommand::Scan(args) => commands::run_scan_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Parse(#[from] FchkError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
