//! Type definitions for a resolved menu choice.

use std::fmt::{Display, Formatter};

/// How a chosen menu line was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    /// A custom entry from the preferences, matched by name.
    Entry,
    /// A command with a trailing `;`, run inside the terminal.
    Terminal,
    /// A path to a file or directory, handed to the file opener.
    File,
    /// A binary name or free text, run as typed.
    Command,
}

/// The argument vector to launch for a menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChoice {
    /// Identifier counted in the usage history.
    pub item: String,
    pub kind: ChoiceKind,
    pub argv: Vec<String>,
}

impl Display for ChoiceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChoiceKind::Entry => "entry",
            ChoiceKind::Terminal => "terminal command",
            ChoiceKind::File => "file",
            ChoiceKind::Command => "command",
        };
        f.write_str(name)
    }
}

impl Display for ResolvedChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.argv)
    }
}
