use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Builds a process from an argument vector: the first element is the program.
///
/// # Errors
///
/// Returns [`Error::EmptyCommand`] if `argv` is empty.
pub fn build_command<S: AsRef<str>>(argv: &[S]) -> Result<Command> {
    let Some((program, arguments)) = argv.split_first() else {
        return Err(Error::EmptyCommand);
    };

    let mut command = Command::new(program.as_ref());
    command.args(arguments.iter().map(AsRef::as_ref));
    Ok(command)
}

/// Starts the launched program without waiting for it.
///
/// The program does not share the launcher's stdin.
///
/// # Errors
///
/// Returns an error if the program cannot be started.
pub fn spawn_detached(mut command: Command) -> Result<()> {
    let child = command
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?;

    info!("Launched {:?} with pid {}", command.get_program(), child.id());
    Ok(())
}

/// Runs the program to completion with inherited stdio.
///
/// # Errors
///
/// Returns an error if command execution fails or exits with non-zero status.
pub fn execute_command(mut command: Command) -> Result<()> {
    let command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let subprocess_exit_success = command.spawn()?.wait()?.success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}
