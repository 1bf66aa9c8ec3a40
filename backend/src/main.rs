mod error;
mod inspect;
mod process;

use std::path::PathBuf;

use clap::{self, Parser};
use tokio::io::BufReader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use inspect::InspectHandler;
use process::ProcessOptions;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Newline-delimited request records, stdin if not set
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report requests equal to an earlier one as duplicates
    #[arg(short, long)]
    dedup: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

/// Builds the log filter; a level that does not parse falls back to `warn`
/// and is handed back so it can be reported once logging is up.
fn log_filter(level: Option<&str>) -> (EnvFilter, Option<String>) {
    match level.map(|l| EnvFilter::try_new(l).map_err(|e| format!("{:?}: {}", l, e))) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(rejected)) => (EnvFilter::new("warn"), Some(rejected)),
        None => (EnvFilter::new("warn"), None),
    }
}

fn init_logging(level: Option<&str>, format: LogFormat) {
    let (filter, rejected) = log_filter(level);
    let registry = tracing_subscriber::registry().with(filter);
    // logs go to stderr, summaries own stdout
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
    if let Some(rejected) = rejected {
        log::warn!("invalid log level {}, using warn", rejected);
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref(), args.log_format);

    let options = ProcessOptions { dedup: args.dedup };
    let mut out = tokio::io::stdout();

    let stats = match &args.input {
        Some(path) => {
            log::info!("reading requests from {}", path.display());
            let file = tokio::fs::File::open(path).await?;
            process::process(BufReader::new(file), &mut out, &InspectHandler, options).await?
        }
        None => {
            let stdin = tokio::io::stdin();
            process::process(BufReader::new(stdin), &mut out, &InspectHandler, options).await?
        }
    };

    if stats.failed > 0 {
        anyhow::bail!("{} of {} requests failed", stats.failed, stats.total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter() {
        assert!(log_filter(None).1.is_none());
        assert!(log_filter(Some("debug")).1.is_none());
        assert!(log_filter(Some("process=trace,warn")).1.is_none());

        let (filter, rejected) = log_filter(Some("process=loud"));
        assert!(rejected.unwrap().starts_with("\"process=loud\""));
        assert_eq!(filter.to_string(), "warn");
    }
}
