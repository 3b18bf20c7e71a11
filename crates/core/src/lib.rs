//! Rust Launch Core Library
//!
//! This crate provides the core functionality for rust-launch, an application
//! launcher that shows binaries, files and custom entries in an external menu
//! (dmenu, rofi, ...) and runs the chosen one.
//!
//! # Key Features
//!
//! - **Tokenizer**: Split command lines into argument vectors with double-quote handling
//! - **Usage Ranking**: Count launches and list the most used items first
//! - **Catalog**: Build and read the list of currently selectable items
//! - **Atomic Artifacts**: Cache files are replaced by rename, never partially written
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Reconciling usage history with the catalog:
//!
//! ```no_run
//! use rust_launch_core::config::CachePaths;
//! use rust_launch_core::usage::UsageRanker;
//!
//! let ranker = UsageRanker::new(CachePaths::resolve(&None));
//! ranker.clean_frequently_used_items()?;
//! for item in ranker.ordered_items()? {
//!     println!("{}", item);
//! }
//! # Ok::<(), rust_launch_core::error::Error>(())
//! ```

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod entries;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod selector;
pub mod tokenizer;
pub mod usage;
