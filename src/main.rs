use clap::Parser;
use statement_summary::args::Args;
use statement_summary::{report, RuleSet, StatementBuilder, SummaryResult};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::{Level, debug, error, info, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // The error has to reach the user even when logging is filtered out.
            if tracing::enabled!(Level::ERROR) {
                error!("Exiting with error: {e}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: Args) -> SummaryResult<()> {
    trace!("{args:?}");

    let rules = match args.rules() {
        Some(path) => {
            info!("Loading category rules from {}", path.display());
            RuleSet::load(path)?
        }
        None => RuleSet::builtin()?,
    };

    let collection = StatementBuilder::new()
        .filename(args.file())
        .has_headers(args.has_headers())
        .rules(rules)
        .build()?;
    info!(
        "Loaded {} transaction(s) from {}",
        collection.len(),
        args.file().display()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.category() {
        Some(category) => report::write_category(&mut out, &collection, category)?,
        None => report::write_full_report(&mut out, &collection)?,
    }
    out.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // RUST_LOG does not exist; use the requested level for this crate only.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
