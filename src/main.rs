use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{Level, Log, Metadata, Record};

use arcgrid::bench::{run, RunConfig};
use arcgrid::solutions;

#[derive(Debug, Parser)]
#[command(name = "arcgrid", about = "Run hand-written ARC solutions against their case files")]
struct Cli {
    /// Directory holding `<case>.json` files.
    #[arg(long, env = "ARC_DATA_DIR", default_value = "ARC-AGI-2/data/training")]
    data_dir: PathBuf,

    /// Only evaluate this case.
    #[arg(long)]
    case: Option<String>,

    /// Print input/output/expected for every failed sample.
    #[arg(long)]
    detail: bool,

    /// Log per-sample progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::Debug } else { Level::Warn };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level.to_level_filter());
    }

    if let Some(name) = cli.case.as_deref() {
        if solutions::lookup(name).is_none() {
            eprintln!("no registered solution for case {}", name);
            return ExitCode::FAILURE;
        }
    }

    let config = RunConfig { data_dir: cli.data_dir, only: cli.case };
    let report = run(&config, &solutions::registry());

    if cli.detail {
        report.print_detail();
    } else {
        report.print_summary();
    }

    if report.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_flag_checks_registry() {
        let cli = Cli::try_parse_from(["arcgrid", "--case", "ffffffff"]).unwrap();
        assert!(solutions::lookup(cli.case.as_deref().unwrap()).is_none());

        let cli = Cli::try_parse_from(["arcgrid", "--case", "00576224"]).unwrap();
        assert!(solutions::lookup(cli.case.as_deref().unwrap()).is_some());
    }
}
