//! Main entrypoint
// (c) 2025 Ross Younger

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    rtty::cli()
}
