//! Configuration path utilities for rust-launch.
//!
//! This module resolves where the preferences file and the cache artifacts
//! live, expanding shell variables like `~` in paths.

use std::env;
use std::path::Path;

/// Default path for the preferences file
const DEFAULT_CONFIG_PATH: &str = "~/.rust-launch/config.yml";
/// Default directory holding the catalog and usage artifacts
const DEFAULT_CACHE_DIR: &str = "~/.cache/rust-launch";

/// Environment variable that overrides the cache directory
pub const CACHE_DIR_ENV: &str = "RUST_LAUNCH_CACHE_DIR";

const CATALOG_FILE_NAME: &str = "all_items.txt";
const FREQUENCY_FILE_NAME: &str = "frequently_used_frequency.json";
const ORDERED_FILE_NAME: &str = "frequently_used_ordered.txt";

/// Resolves the preferences file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_launch_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    expand_path(config_path)
}

/// Resolves the cache directory.
///
/// Precedence is the explicit argument, then the `RUST_LAUNCH_CACHE_DIR`
/// environment variable, then `~/.cache/rust-launch`.
pub fn get_cache_dir(cache_dir_arg: &Option<String>) -> String {
    let from_env = env::var(CACHE_DIR_ENV).ok().filter(|dir| !dir.is_empty());
    resolve_cache_dir(cache_dir_arg.as_deref(), from_env.as_deref())
}

fn resolve_cache_dir(cache_dir_arg: Option<&str>, from_env: Option<&str>) -> String {
    let cache_dir = cache_dir_arg.or(from_env).unwrap_or(DEFAULT_CACHE_DIR);

    expand_path(cache_dir)
}

/// Expands shell variables like `~` in a path typed into the menu.
///
/// # Examples
///
/// ```
/// use rust_launch_core::config::expand_path;
///
/// assert!(!expand_path("~/notes.txt").starts_with('~'));
/// assert_eq!(expand_path("/absolute/path"), "/absolute/path");
/// ```
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Locations of the persisted artifacts, resolved once at start up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePaths {
    /// Newline-delimited list of every currently selectable item.
    pub catalog: String,
    /// JSON object of item to usage count.
    pub frequency: String,
    /// Newline-delimited items, most used first.
    pub ordered: String,
}

impl CachePaths {
    pub fn new(cache_dir: &str) -> Self {
        let join = |file_name: &str| {
            Path::new(cache_dir)
                .join(file_name)
                .to_string_lossy()
                .into_owned()
        };

        Self {
            catalog: join(CATALOG_FILE_NAME),
            frequency: join(FREQUENCY_FILE_NAME),
            ordered: join(ORDERED_FILE_NAME),
        }
    }

    /// Resolves the cache directory (see [`get_cache_dir`]) and builds the paths.
    pub fn resolve(cache_dir_arg: &Option<String>) -> Self {
        Self::new(&get_cache_dir(cache_dir_arg))
    }
}
