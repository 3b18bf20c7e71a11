//! Shell-style splitting of command lines into argument vectors.
//!
//! Only double quotes are understood. A quoted region keeps its whitespace,
//! the quote characters are dropped, and quoted and unquoted fragments that
//! touch are joined into one argument. There is no variable expansion,
//! globbing, escaping or redirection.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

const QUOTE: char = '"';

/// A command as it is written in the preferences or typed into the menu.
///
/// Deserializes from either a YAML string or a YAML list of strings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawCommand {
    Line(String),
    Split(Vec<String>),
}

impl RawCommand {
    /// Converts the command into an argument vector. See [`tokenize`].
    pub fn to_argv(&self) -> Vec<String> {
        tokenize(self)
    }
}

impl Display for RawCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RawCommand::Line(line) => formatter.write_str(line),
            RawCommand::Split(parts) => formatter.write_str(&parts.join(" ")),
        }
    }
}

impl From<&str> for RawCommand {
    fn from(value: &str) -> Self {
        RawCommand::Line(value.to_string())
    }
}

impl From<String> for RawCommand {
    fn from(value: String) -> Self {
        RawCommand::Line(value)
    }
}

impl From<Vec<String>> for RawCommand {
    fn from(value: Vec<String>) -> Self {
        RawCommand::Split(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Between arguments, skipping whitespace.
    OutsideToken,
    /// Inside an argument, whitespace ends it.
    Unquoted,
    /// Inside a double-quoted region of an argument.
    Quoted,
}

/// Converts a raw command into an argument vector.
///
/// A [`RawCommand::Line`] is parsed with [`tokenize_line`]. Every element of a
/// [`RawCommand::Split`] is split again on whitespace, so `["a", "b c"]`
/// becomes `["a", "b", "c"]`.
///
/// # Examples
///
/// ```
/// use rust_launch_core::tokenizer::{tokenize, RawCommand};
///
/// let argv = tokenize(&RawCommand::from(r#"xdg-open "/home/user/aö/file name""#));
/// assert_eq!(argv, vec!["xdg-open", "/home/user/aö/file name"]);
/// ```
pub fn tokenize(input: &RawCommand) -> Vec<String> {
    match input {
        RawCommand::Line(line) => tokenize_line(line),
        RawCommand::Split(parts) => tokenize_split(parts),
    }
}

/// Splits every element on whitespace and concatenates the results in order.
pub fn tokenize_split<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts
        .iter()
        .flat_map(|part| part.as_ref().split_whitespace())
        .map(ToString::to_string)
        .collect()
}

/// Parses a single command line, character by character.
///
/// Never fails: an unterminated quote runs to the end of the input.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = State::OutsideToken;

    for character in line.chars() {
        state = match (state, character) {
            (State::OutsideToken, c) if c.is_whitespace() => State::OutsideToken,
            (State::OutsideToken | State::Unquoted, QUOTE) => State::Quoted,
            (State::OutsideToken | State::Unquoted, c) if !c.is_whitespace() => {
                current.push(c);
                State::Unquoted
            }
            (State::Unquoted, _) => {
                tokens.push(std::mem::take(&mut current));
                State::OutsideToken
            }
            (State::Quoted, QUOTE) => State::Unquoted,
            (State::Quoted, c) => {
                current.push(c);
                State::Quoted
            }
            // Whitespace outside a token is matched by the first arm.
            (State::OutsideToken, _) => State::OutsideToken,
        };
    }

    if state != State::OutsideToken {
        tokens.push(current);
    }

    tokens
}
