//! The external menu that the user picks an item from.

use std::io::{ErrorKind, Write};
use std::process::Stdio;

use log::debug;

use crate::error::{Error, Result};
use crate::execution::build_command;

/// Presents a list of items and returns the one chosen, if any.
pub trait Selector {
    /// # Errors
    ///
    /// Returns an error if the menu cannot be shown at all.
    fn select(&self, items: &[String]) -> Result<Option<String>>;
}

/// A dmenu-compatible program: items on stdin, the choice on stdout.
///
/// The choice may also be text the user typed that is not in the list.
#[derive(Debug, Clone)]
pub struct MenuCommand {
    argv: Vec<String>,
}

impl MenuCommand {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

impl Selector for MenuCommand {
    fn select(&self, items: &[String]) -> Result<Option<String>> {
        let program = self.argv.first().cloned().unwrap_or_default();
        let mut command = build_command(&self.argv)?;

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::selector_unavailable(program.clone(), e))?;

        if let Some(mut stdin) = child.stdin.take() {
            let mut input = items.join("\n");
            input.push('\n');
            // The menu may exit before reading everything
            match stdin.write_all(input.as_bytes()) {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                result => result?,
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            debug!("Menu `{program}` exited with {}, nothing chosen", output.status);
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let choice = stdout.lines().next().unwrap_or_default().trim();

        if choice.is_empty() {
            Ok(None)
        } else {
            Ok(Some(choice.to_string()))
        }
    }
}
