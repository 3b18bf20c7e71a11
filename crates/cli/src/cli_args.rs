//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;

/// Command-line arguments for the rust-launch CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_launch_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rl", "--dry-run"]);
/// assert!(args.dry_run);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the preferences YAML file.
    ///
    /// If not provided, defaults to `~/.rust-launch/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Directory holding the catalog and usage history.
    ///
    /// If not provided, `RUST_LAUNCH_CACHE_DIR` is used, then `~/.cache/rust-launch`.
    #[arg(long, short = 'C')]
    pub cache_dir: Option<String>,

    /// Rescan binaries and files even if a catalog already exists.
    #[arg(long, short = 'r', action)]
    pub rebuild_cache: bool,

    /// Print the command that would be launched instead of launching it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Copy the chosen item to the clipboard instead of launching it.
    #[arg(long = "copy", short = 'y', action)]
    pub copy: bool,

    /// Print the menu items, most used first, and exit.
    #[arg(long, short = 'l', action)]
    pub list: bool,

    /// Do not count this launch in the usage history.
    #[arg(long, short = 'n', action)]
    pub no_record: bool,

    /// Wait for the launched program and report its exit status.
    #[arg(long, short = 'w', action)]
    pub wait: bool,
}
