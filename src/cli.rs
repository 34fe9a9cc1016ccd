//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render man pages from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version with build date, e.g. `0.1.0 (2026-10-19)`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ARBITER_DEMO_BUILD_DATE"),
    ")"
);

/// Git commit the binary was built from, absent in release builds.
pub fn git_sha() -> Option<&'static str> {
    option_env!("VERGEN_GIT_SHA").filter(|sha| !sha.is_empty() && *sha != "unknown")
}

#[derive(Debug, Parser)]
#[command(
    name = "arbiter-demo",
    version,
    long_version = LONG_VERSION,
    about = "Arbiter: verified documentation for the Python ecosystem",
    long_about = "Terminal rendition of the Arbiter landing page and investor walkthrough.\n\n\
                  Run without a command to open the landing page."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the landing page
    Landing,

    /// Open the investor walkthrough
    Demo {
        /// Step to open on (1-4)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=4))]
        step: u8,

        /// Function to select (1-based); defaults to the configured one
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        function: Option<u16>,
    },

    /// Play a line sequence to stdout as if typed live
    Play {
        /// JSON array of lines; defaults to the landing page sequence
        file: Option<PathBuf>,

        /// Print everything immediately
        #[arg(long)]
        skip: bool,

        /// Milliseconds between lines
        #[arg(long, value_name = "MS")]
        line_delay: Option<u64>,

        /// Milliseconds per typed character
        #[arg(long, value_name = "MS")]
        char_delay: Option<u64>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Open the config file in $EDITOR
    Edit,

    /// Add missing fields to the config file
    Migrate {
        /// Apply without asking
        #[arg(long, short)]
        yes: bool,
    },
}
