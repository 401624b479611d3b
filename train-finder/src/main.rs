use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use train_finder::config::AppConfig;
use train_finder::dataset::Dataset;
use train_finder::finder::find_trains;
use train_finder::prompt::{read_query, write_results};

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with query results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::from_env();

    // Load the dataset once, before asking anything (fail fast if unavailable)
    let dataset = match Dataset::load(&config.dataset_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let query = match read_query(&mut input, &mut output) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("Error reading input: {e}");
            return ExitCode::FAILURE;
        }
    };

    let written = match find_trains(
        &query.departure_station,
        &query.arrival_station,
        &query.criteria,
        &dataset,
    ) {
        Ok(trains) => write_results(&mut output, &trains),
        // A rejected query is reported, not treated as a crash
        Err(e) => writeln!(output, "{e}"),
    };

    if let Err(e) = written {
        eprintln!("Error writing results: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
