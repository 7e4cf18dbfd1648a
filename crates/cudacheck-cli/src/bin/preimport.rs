//! Pre-init configurator entry point.
//!
//! Sets `CUDA_VISIBLE_DEVICES` before the tensor backend's first device
//! enumeration, then re-runs the availability and allocation checks.
//! Failures propagate: anyhow prints the error chain and the process
//! exits non-zero.

use clap::Parser;
use cudacheck_cli::handlers;
use cudacheck_runtime::CandleRuntime;

/// Probe CUDA after forcing a device-visibility value at startup.
#[derive(Parser)]
#[command(name = "cudacheck-preimport", version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let Cli {} = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    handlers::preimport::execute(&mut stdout, CandleRuntime::init)
}
