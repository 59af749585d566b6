//! Coordinate field checker CLI - entry point.

mod cli;
mod compute;
mod data;
mod error;
mod output;

use error::CliError;
use fieldcheck::MoveGate;

fn run(source: data::DataSource, params: data::Parameters) -> Result<usize, CliError> {
    let single = source.is_single();
    let flush_each = source.uses_stdin();
    let gate = MoveGate::with_span(params.span, params.span)?;
    let pairs = source.into_stream()?;
    let results = compute::check_stream(pairs, gate);
    output::dispatch_output(results, &params, single, flush_each)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (source, params) = match cli::parse_cli(args) {
        Ok(parsed) => parsed,
        Err(CliError::Exit(message)) => {
            println!("{}", message);
            std::process::exit(0);
        }
        Err(CliError::Message(message)) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    let start = if params.perf {
        Some(std::time::Instant::now())
    } else {
        None
    };

    let record_count = match run(source, params) {
        Ok(count) => count,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if let Some(start_time) = start {
        let elapsed = start_time.elapsed();
        eprintln!(
            "Processed {} pairs in {:.3}s ({:.0} pairs/sec)",
            record_count,
            elapsed.as_secs_f64(),
            record_count as f64 / elapsed.as_secs_f64()
        );
    }
}
