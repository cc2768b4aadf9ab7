// Main CLI entrypoint
// (c) 2025 Ross Younger

use std::process::ExitCode;

use super::args::CliArgs;

use crate::{
    config::ssh::{Preferences, SshConfig},
    os::{AbstractPlatform as _, Platform},
    session,
    terminal::{self, DesktopEnvironment, WindowOptions},
    util::setup_tracing,
};
use anyhow::Context as _;
use clap::Parser;

/// Main CLI entrypoint
pub fn cli() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    let trace_level = if args.debug {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    setup_tracing(trace_level, &args.log_file).inspect_err(|e| eprintln!("{e:?}"))?;

    run(&args).or_else(|e| {
        tracing::error!("{e:#}");
        Ok(ExitCode::FAILURE)
    })
}

fn run(args: &CliArgs) -> anyhow::Result<ExitCode> {
    let environment = DesktopEnvironment::capture();
    let emulator = terminal::select(&environment, args.terminal);
    tracing::debug!("using terminal emulator {emulator:?}");

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Platform::user_ssh_config()?,
    };
    let config = SshConfig::load(&config_path)?;
    let host = session::host_part(&args.destination);
    let effective = config.resolve(Some(host));
    let preferences = Preferences::new(&effective, emulator.kind());

    let window = WindowOptions {
        // Configuration wins over the command line; -g is the fallback for
        // hosts with no Geometry directive.
        geometry: preferences.geometry()?.or(args.geometry),
        colour_scheme: preferences.colour_scheme().map(ToOwned::to_owned),
    };

    let ssh_command = session::build_ssh_command(
        &args.ssh,
        &args.ssh_opt,
        &args.destination,
        &args.remote_command,
    );
    let argv = emulator.command(&window, &ssh_command);

    if args.dry_run {
        anstream::println!("{}", argv.join(" "));
        return Ok(ExitCode::SUCCESS);
    }

    let (program, program_args) = argv.split_first().context("empty emulator command")?;
    // Spawn and do not wait; the window outlives us.
    let child = std::process::Command::new(program)
        .args(program_args)
        .spawn()
        .with_context(|| format!("failed to launch {program}"))?;
    tracing::debug!("launched {program} as pid {}", child.id());
    Ok(ExitCode::SUCCESS)
}
