use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::tokenizer::RawCommand;

/// Default menu program, reading items on stdin and printing the choice.
pub const DEFAULT_MENU: &str = "dmenu -i";
/// Default program used to open items that are plain files.
pub const DEFAULT_FILE_OPENER: &str = "xdg-open";
/// Default terminal emulator for entries that run in a terminal.
pub const DEFAULT_TERMINAL: &str = "xterm";

/// A user-defined item shown in the menu under its own name.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomEntry {
    pub name: String,
    pub command: RawCommand,
    #[serde(default)]
    pub terminal: bool,
}

impl Display for CustomEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.name, self.command)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    pub menu: RawCommand,
    pub file_opener: RawCommand,
    pub terminal: RawCommand,
    pub include_binaries: bool,
    pub extra_paths: Vec<String>,
    pub entries: Vec<CustomEntry>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            menu: RawCommand::from(DEFAULT_MENU),
            file_opener: RawCommand::from(DEFAULT_FILE_OPENER),
            terminal: RawCommand::from(DEFAULT_TERMINAL),
            include_binaries: true,
            extra_paths: Vec::new(),
            entries: Vec::new(),
        }
    }
}

impl Preferences {
    pub fn find_entry(&self, name: &str) -> Option<&CustomEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Argument vector prefix that runs the following arguments in a terminal.
    pub fn terminal_prefix(&self) -> Vec<String> {
        let mut prefix = self.terminal.to_argv();
        prefix.push("-e".to_string());
        prefix
    }
}
