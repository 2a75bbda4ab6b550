use crate::cli::CliArgs;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use tracing_subscriber::filter::LevelFilter as TracingLevel;

/// Install log backends for this run.
///
/// Headless games log to stderr: `env_logger` for `log` records and a `fmt`
/// subscriber for the engine's `tracing` events. Interactive games own the
/// terminal, so they log only to `--log-file`; with no subscriber installed the
/// engine's `tracing` events arrive there as `log` records.
pub fn init(args: &CliArgs) -> anyhow::Result<()> {
  if args.headless {
    env_logger::Builder::new().filter_level(args.log_level).init();
    let subscriber = tracing_subscriber::fmt()
      .with_max_level(tracing_level(args.log_level))
      .with_writer(std::io::stderr)
      .finish();
    tracing::subscriber::set_global_default(subscriber)?;
  } else if let Some(path) = &args.log_file {
    WriteLogger::init(args.log_level, Config::default(), File::create(path)?)?;
  }
  Ok(())
}

fn tracing_level(level: LevelFilter) -> TracingLevel {
  match level {
    LevelFilter::Off => TracingLevel::OFF,
    LevelFilter::Error => TracingLevel::ERROR,
    LevelFilter::Warn => TracingLevel::WARN,
    LevelFilter::Info => TracingLevel::INFO,
    LevelFilter::Debug => TracingLevel::DEBUG,
    LevelFilter::Trace => TracingLevel::TRACE,
  }
}
