use std::process::ExitCode;

use clap::Parser;
use radix_calc::app::init_logging;
use radix_calc::cli::{Cli, run};

fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting radix-calc");

    run(Cli::parse())
}
