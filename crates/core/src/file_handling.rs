//! Reading and writing of the launcher's on-disk artifacts.
//!
//! Every write goes to a temporary file in the target's directory which is
//! then renamed over the target, so another invocation reading at the same
//! time sees either the old or the new content, never a partial file.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::entries::{CustomEntry, Preferences};
use crate::error::Error::{EmptyEntryName, EntryNameWithNewline, NonUniqueEntryName};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn get_optional_reader(file_description: &str, path: &str) -> Result<Option<File>> {
    if !Path::exists(Path::new(path)) {
        debug!("No {file_description} file at `{path}`");
        return Ok(None);
    }

    get_reader(file_description, path).map(Some)
}

/// Reads a whole text artifact, returning `None` when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read. Content that is not
/// valid UTF-8 is reported as an [`Error::Io`] with kind `InvalidData`.
pub fn read_optional_text(file_description: &str, path: &str) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No {file_description} file at `{path}`");
            Ok(None)
        }
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads and deserializes a JSON artifact, returning `None` when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or does not hold
/// JSON of the expected shape.
pub fn read_optional_json<T: serde::de::DeserializeOwned>(
    file_description: &str,
    path: &str,
) -> Result<Option<T>> {
    let Some(reader) = get_optional_reader(file_description, path)? else {
        return Ok(None);
    };

    serde_json::from_reader(std::io::BufReader::new(reader))
        .map(Some)
        .map_err(|e| {
            Error::json_error(
                "reading".to_string(),
                file_description.to_string(),
                path.to_string(),
                e,
            )
        })
}

/// Replaces the content of `path` with `content` atomically.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the directory or temporary file cannot be created,
/// written or renamed into place.
pub fn write_atomically(file_description: &str, path: &str, content: &[u8]) -> Result<()> {
    let io_error = |e: std::io::Error| {
        Error::io_error(file_description.to_string(), path.to_string(), e)
    };

    let parent_dir = match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(io_error)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(io_error)?;
    temp_file.write_all(content).map_err(io_error)?;
    temp_file.flush().map_err(io_error)?;

    temp_file.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

/// Serializes `value` as pretty-printed JSON and writes it atomically.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json_atomically<T: serde::Serialize>(
    file_description: &str,
    path: &str,
    value: &T,
) -> Result<()> {
    let mut content = serde_json::to_vec_pretty(value).map_err(|e| {
        Error::json_error(
            "writing".to_string(),
            file_description.to_string(),
            path.to_string(),
            e,
        )
    })?;
    content.push(b'\n');

    write_atomically(file_description, path, &content)
}

/// Writes one item per line, atomically.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn write_lines_atomically<S: AsRef<str>>(
    file_description: &str,
    path: &str,
    lines: &[S],
) -> Result<()> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }

    write_atomically(file_description, path, content.as_bytes())
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(EmptyEntryName);
    }

    if name.contains(['\n', '\r']) {
        return Err(EntryNameWithNewline(name.to_string()));
    }

    Ok(())
}

fn validate_entries(entries: &[CustomEntry]) -> Result<()> {
    let mut names = HashSet::new();

    for entry in entries.iter() {
        validate_name(&entry.name)?;

        if !names.insert(entry.name.clone()) {
            // Found a duplicate name
            return Err(NonUniqueEntryName(entry.name.clone()));
        }
    }

    Ok(())
}

/// Loads and validates the launcher preferences.
///
/// A missing file is not an error: the built-in defaults are returned.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - A custom entry name is empty, spans lines or is not unique
///
/// # Examples
///
/// ```no_run
/// use rust_launch_core::file_handling::get_preferences;
///
/// let preferences = get_preferences("/home/user/.rust-launch/config.yml")?;
/// println!("Loaded {} custom entries", preferences.entries.len());
/// # Ok::<(), rust_launch_core::error::Error>(())
/// ```
pub fn get_preferences(config_path: &str) -> Result<Preferences> {
    let Some(config_reader) = get_optional_reader("config", config_path)? else {
        return Ok(Preferences::default());
    };

    let parsed: serde_yaml::Result<Option<Preferences>> = serde_yaml::from_reader(config_reader);

    let preferences = parsed
        .map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "config".to_string(),
                config_path.to_string(),
                e,
            )
        })?
        // An empty document deserializes to `None`
        .unwrap_or_default();

    validate_entries(&preferences.entries)?;

    Ok(preferences)
}
