use std::path::Path;

use log::debug;
use rust_launch_core::catalog::is_executable_path;
use rust_launch_core::config::expand_path;
use rust_launch_core::entries::Preferences;
use rust_launch_core::tokenizer::tokenize_line;

use super::types::{ChoiceKind, ResolvedChoice};

/// Appended to a command in the menu to run it inside the terminal.
pub const TERMINAL_SUFFIX: char = ';';

fn looks_like_path(choice: &str) -> bool {
    choice.starts_with('/') || choice.starts_with('~')
}

/// Turns the line chosen in the menu into an argument vector.
///
/// Custom entry names win over everything else. A trailing `;` runs the rest
/// in the terminal. Existing paths that are not executables are opened with
/// the file opener. Anything else is tokenized and run as typed.
pub fn resolve_choice(choice: &str, preferences: &Preferences) -> ResolvedChoice {
    let choice = choice.trim();

    if let Some(entry) = preferences.find_entry(choice) {
        debug!("Resolved custom entry {entry}");
        let mut argv = if entry.terminal {
            preferences.terminal_prefix()
        } else {
            Vec::new()
        };
        argv.extend(entry.command.to_argv());

        return ResolvedChoice {
            item: entry.name.clone(),
            kind: ChoiceKind::Entry,
            argv,
        };
    }

    if let Some(command) = choice.strip_suffix(TERMINAL_SUFFIX) {
        let command = command.trim_end();
        // A lone `;` just opens a terminal
        let argv = if command.is_empty() {
            preferences.terminal.to_argv()
        } else {
            let mut argv = preferences.terminal_prefix();
            argv.extend(tokenize_line(command));
            argv
        };

        return ResolvedChoice {
            item: command.to_string(),
            kind: ChoiceKind::Terminal,
            argv,
        };
    }

    if looks_like_path(choice) {
        let expanded = expand_path(choice);
        let path = Path::new(&expanded);

        if path.exists() && !is_executable_path(path) {
            let mut argv = preferences.file_opener.to_argv();
            argv.push(expanded.clone());

            return ResolvedChoice {
                item: expanded,
                kind: ChoiceKind::File,
                argv,
            };
        }
    }

    ResolvedChoice {
        item: choice.to_string(),
        kind: ChoiceKind::Command,
        argv: tokenize_line(choice),
    }
}
