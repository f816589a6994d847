//! One-shot batch entry point.
//!
//! Reads a single JSON payload from stdin, resolves every request, and
//! writes a single JSON payload to stdout. Logs go to stderr so stdout
//! stays a clean protocol channel.

use std::io::{Read, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use damage_calc::{run_batch, BatchPayload, CalcOracle};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read input: {err}");
        return ExitCode::FAILURE;
    }

    // An empty stream is a valid empty batch
    let payload: BatchPayload = if input.trim().is_empty() {
        BatchPayload::default()
    } else {
        match serde_json::from_str(&input) {
            Ok(payload) => payload,
            Err(err) => {
                eprintln!("malformed payload: {err}");
                return ExitCode::FAILURE;
            }
        }
    };

    let output = run_batch(&CalcOracle, &payload);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = serde_json::to_writer(&mut handle, &output) {
        eprintln!("failed to write output: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = writeln!(handle) {
        eprintln!("failed to write output: {err}");
        return ExitCode::FAILURE;
    }

    // Per-request failures are reported in their result slots, not here
    ExitCode::SUCCESS
}
