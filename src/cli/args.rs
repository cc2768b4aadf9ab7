// rtty top-level command-line arguments
// (c) 2025 Ross Younger

use std::path::PathBuf;

use crate::{config::ssh::Geometry, terminal::TerminalKind};
use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    author,
    version,
    about,
    before_help = "e.g.   rtty admin@my-server",
    infer_long_args(true)
)]
#[command(help_template(
    "\
{name} version {version}
{about-with-newline}
{usage-heading} {usage}
{before-help}
{all-args}{after-help}
"
))]
#[command(styles=super::styles::CLAP_STYLES)]
pub(crate) struct CliArgs {
    // WINDOW OPTIONS ======================================================================
    /// Sets the window geometry, overriding any configuration file default.
    ///
    /// Specify as WIDTHxHEIGHT or WIDTHxHEIGHT+X+Y (offsets may be negative).
    /// A Geometry directive for the host in the configuration file takes precedence.
    #[arg(short, long, value_name("WxH[+X+Y]"), help_heading("Window"))]
    pub geometry: Option<Geometry>,

    /// Forces a particular terminal emulator instead of autodetecting one
    #[arg(short, long, value_name("TERMINAL"), help_heading("Window"))]
    pub terminal: Option<TerminalKind>,

    // CONNECTION OPTIONS ==================================================================
    /// Reads configuration from the given file instead of ~/.ssh/config
    #[arg(short = 'F', long, value_name("FILE"), help_heading("Connection"))]
    pub config: Option<PathBuf>,

    /// Specifies the ssh client program to use
    #[arg(long, default_value("ssh"), help_heading("Connection"))]
    pub ssh: String,

    /// Provides an additional option or argument to pass to the ssh client.
    ///
    /// Note that you must repeat `-S` for each.
    /// For example, to pass `-i /dev/null` to ssh, specify: `-S -i -S /dev/null`
    #[arg(
        short = 'S',
        action,
        value_name("ssh-option"),
        allow_hyphen_values(true),
        help_heading("Connection")
    )]
    pub ssh_opt: Vec<String>,

    // DEBUG OPTIONS =======================================================================
    /// Prints the terminal emulator command line instead of running it
    #[arg(long, action, help_heading("Debug"))]
    pub dry_run: bool,

    /// Enables detailed debug output
    ///
    /// This has the same effect as setting `RUST_LOG=rtty=debug` in the environment.
    /// If present, `RUST_LOG` overrides this option.
    #[arg(short, long, action, help_heading("Debug"), conflicts_with("quiet"))]
    pub debug: bool,

    /// Quiet mode; reports only errors
    #[arg(short, long, action, conflicts_with("debug"))]
    pub quiet: bool,

    /// Log to a file
    ///
    /// By default the log receives everything printed to stderr.
    /// To override this behaviour, set the environment variable `RUST_LOG_FILE_DETAIL` (same semantics as `RUST_LOG`).
    #[arg(short('l'), long, action, help_heading("Debug"), value_name("FILE"))]
    pub log_file: Option<String>,

    // POSITIONAL ARGUMENTS ================================================================
    /// The remote machine to connect to, specified as HOST or USER@HOST
    #[arg(required = true, value_name = "DESTINATION")]
    pub destination: String,

    /// Command to run on the remote machine, instead of an interactive shell
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg(true),
        allow_hyphen_values(true)
    )]
    pub remote_command: Vec<String>,
}
