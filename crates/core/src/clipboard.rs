//! Copying text to the system clipboard through whichever tool is installed.

use std::io::{ErrorKind, Write};
use std::process::Stdio;

use log::debug;

use crate::execution::build_command;

/// Tried in order. Wayland first, then the two common X11 tools.
pub const CLIPBOARD_TOOLS: [&[&str]; 3] = [
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Runs one clipboard tool with `input` on its stdin.
pub trait ToolRunner {
    /// `Ok(success)` when the tool ran, `Err` when it could not be started.
    fn run(&self, argv: &[&str], input: &str) -> std::io::Result<bool>;
}

/// Runs the real programs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, argv: &[&str], input: &str) -> std::io::Result<bool> {
        let mut command = build_command(argv)
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let written = match child.stdin.take() {
            Some(mut stdin) => match stdin.write_all(input.as_bytes()) {
                // The tool may exit before reading everything
                Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                result => result,
            },
            None => Ok(()),
        };

        // Reap the child even when writing failed
        let status = child.wait()?;
        written?;

        Ok(status.success())
    }
}

/// Copies `text` with the first clipboard tool that can be started.
///
/// Returns whether that tool succeeded. Tools that are not installed are
/// skipped; `false` when none could be started.
pub fn copy_with<R: ToolRunner>(runner: &R, text: &str) -> bool {
    for argv in CLIPBOARD_TOOLS {
        match runner.run(argv, text) {
            Ok(success) => return success,
            Err(e) => debug!("Clipboard tool `{}` unavailable: {}", argv[0], e),
        }
    }

    false
}

/// Copies `text` using the installed clipboard tools. See [`copy_with`].
pub fn copy_to_clipboard(text: &str) -> bool {
    copy_with(&SystemRunner, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::{Error, ErrorKind};

    /// Pretends only the tools in `installed` exist, recording every call.
    struct FakeRunner {
        installed: Vec<&'static str>,
        succeeds: bool,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl FakeRunner {
        fn new(installed: &[&'static str], succeeds: bool) -> Self {
            Self {
                installed: installed.to_vec(),
                succeeds,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.borrow().clone()
        }
    }

    impl ToolRunner for FakeRunner {
        fn run(&self, argv: &[&str], input: &str) -> std::io::Result<bool> {
            assert_eq!(input, "test text");
            self.calls
                .borrow_mut()
                .push(argv.iter().map(ToString::to_string).collect());

            if self.installed.iter().any(|tool| *tool == argv[0]) {
                Ok(self.succeeds)
            } else {
                Err(Error::from(ErrorKind::NotFound))
            }
        }
    }

    #[test]
    fn test_wl_copy_first() {
        let runner = FakeRunner::new(&["wl-copy", "xclip", "xsel"], true);
        assert!(copy_with(&runner, "test text"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][0], "wl-copy");
    }

    #[test]
    fn test_falls_back_to_xclip() {
        let runner = FakeRunner::new(&["xclip", "xsel"], true);
        assert!(copy_with(&runner, "test text"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], vec!["xclip", "-selection", "clipboard"]);
    }

    #[test]
    fn test_falls_back_to_xsel() {
        let runner = FakeRunner::new(&["xsel"], true);
        assert!(copy_with(&runner, "test text"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2][0], "xsel");
        assert!(calls[2].contains(&"--clipboard".to_string()));
        assert!(calls[2].contains(&"--input".to_string()));
    }

    #[test]
    fn test_no_tool_available() {
        let runner = FakeRunner::new(&[], true);
        assert!(!copy_with(&runner, "test text"));
        assert_eq!(runner.calls().len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_tool_exiting_before_reading() {
        let input = "x".repeat(1 << 20);
        assert!(SystemRunner.run(&["true"], &input).unwrap());
        assert!(!SystemRunner.run(&["false"], &input).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reads_input() {
        assert!(SystemRunner.run(&["grep", "-q", "test text"], "test text").unwrap());
        assert!(!SystemRunner.run(&["grep", "-q", "other"], "test text").unwrap());
    }

    #[test]
    fn test_system_runner_missing_tool() {
        let result = SystemRunner.run(&["this-clipboard-tool-does-not-exist"], "test text");
        assert!(result.is_err());
    }

    #[test]
    fn test_failing_tool_does_not_fall_through() {
        let runner = FakeRunner::new(&["wl-copy", "xclip"], false);
        assert!(!copy_with(&runner, "test text"));
        assert_eq!(runner.calls().len(), 1);
    }
}
