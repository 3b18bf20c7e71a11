//! Rust Launch CLI Library
//!
//! This crate provides the command-line interface for rust-launch. It builds
//! the menu from the usage history and the catalog, hands it to the external
//! menu program and launches whatever comes back.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`selection`]: Menu assembly and resolution of the chosen line
//!
//! # Examples
//!
//! ```bash
//! # Show the menu and launch the choice
//! rl
//!
//! # Rescan PATH before showing the menu
//! rl --rebuild-cache
//!
//! # Copy the chosen item instead of launching it
//! rl --copy
//!
//! # Show what would run
//! rl --dry-run
//! ```

pub mod cli_args;
pub mod selection;
