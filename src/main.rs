//! litterwatch - cat health alert engine
//!
//! A command-line tool that evaluates a litter-box visit history for
//! weight and visit-frequency alerts.

use clap::Parser;
use litterwatch::cli::args::{generate_completions, Cli, Commands};
use litterwatch::commands::{run_evaluate, run_thresholds};
use litterwatch::config::ConfigBuilder;
use litterwatch::error::{AppError, SourceError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration before logging so the file can raise verbosity
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())
        .with_verbose(cli.verbose.then_some(true));

    // Initialize logging
    let default_filter = config.config().general.log_filter();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    if let Some(e) = config.load_error() {
        log::warn!("Ignoring configuration file: {}", e);
    }
    if let Some(path) = config.loaded_from() {
        log::info!("Loaded config from {}", path.display());
    }

    // Run the appropriate command
    let result = run(&cli, config);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: ConfigBuilder) -> Result<(), AppError> {
    match &cli.command {
        Commands::Evaluate(args) => run_evaluate(args, cli.format, config),

        Commands::Thresholds(args) => run_thresholds(args, cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::NoVisitsPath => {
            eprintln!();
            eprintln!("Hint: Pass --visits <FILE> or set visits_path under [monitor]");
            eprintln!("      in litterwatch.toml.");
        }
        AppError::Source(SourceError::Parse(_)) => {
            eprintln!();
            eprintln!("Hint: The file must hold a JSON array of visits, each with");
            eprintln!("      'id', 'entryTime' (RFC 3339) and 'weightIn' (kg).");
        }
        _ => {}
    }
}
