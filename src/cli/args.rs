//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--verbose` / `-v`: Detailed output
//! - `--endpoint <host:port>`: Runtime address override

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// LodeTime - A living development companion
#[derive(Parser, Debug)]
#[command(name = "lode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if lode was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; suppresses warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runtime endpoint (host:port); overrides LODE_RUNTIME_ENDPOINT and config
    #[arg(long, global = true, value_name = "HOST:PORT")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show project status
    #[command(
        name = "status",
        long_about = "Show the current status of your LodeTime project.\n\n\
            By default status asks the running runtime and, if nothing is listening, \
            falls back to reading .lodetime/ directly. A runtime that answers but \
            misbehaves is reported as an error, never silently replaced with offline data.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Live status if the runtime is up, offline otherwise
    lode status

    # Fail unless the runtime answers
    lode status --connected

    # Never touch the network
    lode status --offline

    # Everything, as JSON
    lode status -v --json"
    )]
    Status {
        /// Require a runtime connection
        #[arg(long)]
        connected: bool,

        /// Read .lodetime/ directly
        #[arg(long)]
        offline: bool,

        /// Auto-detect mode (default)
        #[arg(
            long,
            action = ArgAction::Set,
            default_value_t = true,
            num_args = 0..=1,
            default_missing_value = "true",
            value_name = "BOOL"
        )]
        auto: bool,

        /// Output JSON only
        #[arg(long)]
        json: bool,

        /// Exchange deadline in milliseconds
        #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout_ms: Option<u64>,
    },

    /// Check runtime health
    #[command(name = "check")]
    Check {
        /// Exchange deadline in milliseconds
        #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout_ms: Option<u64>,
    },

    /// Show component details
    #[command(name = "component")]
    Component {
        /// Component id (the document name under .lodetime/components/, without .yaml)
        id: String,
    },

    /// Initialize a new LodeTime project in the working directory
    #[command(name = "init")]
    Init,

    /// Print version information
    #[command(name = "version")]
    Version,

    /// Generate shell completion script
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash (add to ~/.bashrc)
    eval \"$(lode completion bash)\"

    # Zsh (add to ~/.zshrc)
    eval \"$(lode completion zsh)\"

    # Fish
    lode completion fish > ~/.config/fish/completions/lode.fish

    # PowerShell
    lode completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
