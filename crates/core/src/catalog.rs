//! The catalog: every item that can currently be selected.
//!
//! The catalog artifact is plain text with one item per line. It is rebuilt
//! from the custom entries, the executables on `PATH` and any extra
//! directories listed in the preferences.

use std::collections::BTreeSet;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::{debug, info};

use crate::entries::Preferences;
use crate::error::{Error, Result};
use crate::file_handling::{read_optional_text, write_lines_atomically};

const FILE_DESCRIPTION: &str = "catalog";

/// Reads the catalog, returning `None` when the artifact does not exist.
///
/// Blank lines are ignored. Line order is kept.
///
/// # Errors
///
/// Returns [`Error::MalformedCatalog`] if the file is not valid UTF-8, or an
/// I/O error if it exists but cannot be read.
pub fn read_catalog(path: &str) -> Result<Option<IndexSet<String>>> {
    let content = match read_optional_text(FILE_DESCRIPTION, path) {
        Ok(content) => content,
        Err(Error::Io { original, .. }) if original.kind() == ErrorKind::InvalidData => {
            return Err(Error::MalformedCatalog {
                path: path.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    Ok(content.map(|content| {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToString::to_string)
            .collect()
    }))
}

/// Writes the catalog atomically, one item per line.
///
/// # Errors
///
/// Returns an error if the artifact cannot be written.
pub fn write_catalog(path: &str, items: &IndexSet<String>) -> Result<()> {
    let items: Vec<&String> = items.iter().collect();
    write_lines_atomically(FILE_DESCRIPTION, path, &items)
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(metadata: &fs::Metadata) -> bool {
    metadata.is_file()
}

/// Whether `path` is an executable regular file. Symlinks are followed.
pub fn is_executable_path(path: &Path) -> bool {
    fs::metadata(path)
        .map(|metadata| is_executable(&metadata))
        .unwrap_or(false)
}

fn read_dir_paths(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|e| e.ok().map(|e| e.path())).collect(),
        Err(e) => {
            debug!("Skipping directory `{}`: {}", dir.display(), e);
            Vec::new()
        }
    }
}

/// Splits a `PATH`-style value into directories.
pub fn path_dirs(path_var: &OsStr) -> Vec<PathBuf> {
    env::split_paths(path_var).collect()
}

/// Names of the executable files found directly in `dirs`, sorted and
/// without duplicates. Symlinks are followed.
pub fn scan_binaries(dirs: &[PathBuf]) -> Vec<String> {
    let mut binaries = BTreeSet::new();

    for dir in dirs {
        for path in read_dir_paths(dir) {
            if !is_executable_path(&path) {
                continue;
            }

            if let Some(name) = path.file_name().and_then(OsStr::to_str) {
                binaries.insert(name.to_string());
            }
        }
    }

    binaries.into_iter().collect()
}

/// Full paths of the regular files found directly in `dirs`, sorted per
/// directory. `~` is expanded in the directory names.
pub fn scan_files<S: AsRef<str>>(dirs: &[S]) -> Vec<String> {
    let mut files = Vec::new();

    for dir in dirs {
        let expanded = shellexpand::tilde(dir.as_ref()).to_string();
        let mut found: Vec<String> = read_dir_paths(Path::new(&expanded))
            .into_iter()
            .filter(|path| path.is_file())
            .filter_map(|path| path.to_str().map(ToString::to_string))
            .collect();
        found.sort();
        files.extend(found);
    }

    files
}

/// Assembles the catalog: custom entry names, then binaries on `path_var`
/// (when enabled), then files from the extra directories.
pub fn build_catalog(preferences: &Preferences, path_var: Option<&OsStr>) -> IndexSet<String> {
    let mut items: IndexSet<String> = preferences
        .entries
        .iter()
        .map(|entry| entry.name.clone())
        .collect();

    if preferences.include_binaries {
        if let Some(path_var) = path_var {
            items.extend(scan_binaries(&path_dirs(path_var)));
        }
    }

    items.extend(scan_files(&preferences.extra_paths));

    // Names with line breaks would corrupt the line-delimited artifact
    items.retain(|item| !item.contains(['\n', '\r']));

    info!("Built catalog with {} items", items.len());
    items
}

/// Builds the catalog from the current `PATH` and writes it.
///
/// # Errors
///
/// Returns an error if the artifact cannot be written.
pub fn rebuild_catalog(path: &str, preferences: &Preferences) -> Result<IndexSet<String>> {
    let path_var = env::var_os("PATH");
    let items = build_catalog(preferences, path_var.as_deref());
    write_catalog(path, &items)?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::CustomEntry;
    use crate::tokenizer::RawCommand;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, executable: bool) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = if executable { 0o755 } else { 0o644 };
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        }
        path
    }

    #[test]
    fn test_read_catalog_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("all_items.txt");
        assert!(read_catalog(path.to_str().unwrap()).unwrap().is_none());
    }

    #[test]
    fn test_read_catalog_ignores_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("all_items.txt");
        fs::write(&path, "firefox\n\n/home/user/aö file.txt\nHtop\n\n").unwrap();

        let catalog = read_catalog(path.to_str().unwrap()).unwrap().unwrap();
        let items: Vec<&str> = catalog.iter().map(String::as_str).collect();
        assert_eq!(items, vec!["firefox", "/home/user/aö file.txt", "Htop"]);
    }

    #[test]
    fn test_read_catalog_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("all_items.txt");
        fs::write(&path, [b'o', b'k', b'\n', 0xff, 0xfe, b'\n']).unwrap();

        let result = read_catalog(path.to_str().unwrap());
        assert!(matches!(result, Err(Error::MalformedCatalog { .. })));
    }

    #[test]
    fn test_write_then_read_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache/all_items.txt");
        let path = path.to_str().unwrap();
        let items: IndexSet<String> = ["b", "a"].iter().map(ToString::to_string).collect();

        write_catalog(path, &items).unwrap();
        assert_eq!(read_catalog(path).unwrap(), Some(items));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_binaries_only_executables() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        touch(first.path(), "zeta", true);
        touch(first.path(), "notes.txt", false);
        touch(second.path(), "alpha", true);
        touch(second.path(), "zeta", true);
        fs::create_dir(first.path().join("subdir")).unwrap();

        let dirs = vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
            PathBuf::from("/this/path/does/not/exist"),
        ];
        assert_eq!(scan_binaries(&dirs), vec!["alpha", "zeta"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_is_executable_path() {
        let dir = TempDir::new().unwrap();
        let script = touch(dir.path(), "script", true);
        let text = touch(dir.path(), "text", false);

        assert!(is_executable_path(&script));
        assert!(!is_executable_path(&text));
        assert!(!is_executable_path(dir.path()));
        assert!(!is_executable_path(&dir.path().join("missing")));
    }

    #[test]
    fn test_scan_files() {
        let dir = TempDir::new().unwrap();
        let b = touch(dir.path(), "b.pdf", false);
        let a = touch(dir.path(), "a.txt", false);
        fs::create_dir(dir.path().join("folder")).unwrap();

        let files = scan_files(&[dir.path().to_str().unwrap()]);
        assert_eq!(
            files,
            vec![
                a.to_str().unwrap().to_string(),
                b.to_str().unwrap().to_string()
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_build_catalog_order_and_dedup() {
        let bin_dir = TempDir::new().unwrap();
        touch(bin_dir.path(), "htop", true);
        touch(bin_dir.path(), "firefox", true);

        let preferences = Preferences {
            entries: vec![CustomEntry {
                name: "firefox".to_string(),
                command: RawCommand::from("firefox --private-window"),
                terminal: false,
            }],
            ..Preferences::default()
        };

        let path_var = env::join_paths([bin_dir.path()]).unwrap();
        let catalog = build_catalog(&preferences, Some(path_var.as_os_str()));
        let items: Vec<&str> = catalog.iter().map(String::as_str).collect();
        assert_eq!(items, vec!["firefox", "htop"]);
    }

    #[test]
    fn test_build_catalog_without_binaries() {
        let preferences = Preferences {
            include_binaries: false,
            ..Preferences::default()
        };
        let catalog = build_catalog(&preferences, Some(OsStr::new("/usr/bin")));
        assert!(catalog.is_empty());
    }
}
