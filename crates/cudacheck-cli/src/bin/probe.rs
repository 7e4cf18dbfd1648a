//! Environment prober entry point.
//!
//! Prints CUDA-related environment variables, initializes the tensor
//! backend, and runs the guarded diagnostic steps. Exit code 1 only when
//! the backend fails to initialize.

use clap::Parser;
use cudacheck_cli::handlers;
use cudacheck_core::EnvReport;
use cudacheck_runtime::CandleRuntime;

/// Print CUDA environment diagnostics and probe tensor allocation.
#[derive(Parser)]
#[command(name = "cudacheck-probe", version)]
struct Cli {}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();
    let Cli {} = Cli::parse();

    // Capture before anything else touches the environment.
    let report = EnvReport::capture();

    let code = {
        let mut stdout = std::io::stdout().lock();
        handlers::probe::execute(&mut stdout, &report, CandleRuntime::init)?
    };
    std::process::exit(code)
}
