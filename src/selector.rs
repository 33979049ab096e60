//! Boilerplate selection through an external interactive picker.
//!
//! The picker (peco, fzf, ...) is a user configured shell command. It receives
//! the catalog on stdin, one name per line, draws its UI on the inherited
//! stderr and prints the chosen name on stdout.

use crate::catalog::list_templates;
use crate::error::{Error, Result};
use log::debug;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Runs a command line with the given input and returns what it wrote to stdout.
pub trait CommandRunner {
    /// Runs `command`, feeding `input` to its stdin and passing its stderr through.
    ///
    /// # Errors
    /// * `Error::SelectorCommandFailed` if the command cannot be started or exits non-zero
    fn run(&self, command: &str, input: &[u8]) -> Result<Vec<u8>>;
}

/// Runs commands through the platform shell (`sh -c`, or `cmd /c` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_command(command: &str) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/c");
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c");
            cmd
        };
        cmd.arg(command);
        cmd
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, input: &[u8]) -> Result<Vec<u8>> {
        let failed = |reason: String| Error::SelectorCommandFailed {
            command: command.to_string(),
            reason,
        };

        let executable = command.split_whitespace().next().unwrap_or_default();
        if which::which(executable).is_err() {
            return Err(failed(format!("Not exists '{executable}' command")));
        }

        debug!("Running selector '{}'.", command);

        let mut child = Self::shell_command(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| failed(e.to_string()))?;

        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            // stdin is fed while stdout is drained.
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => match stdin.write_all(input) {
                    // The picker may exit without consuming its input.
                    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                        debug!("Selector closed its input early.");
                        Ok(())
                    }
                    result => result,
                },
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output.map_err(|e| failed(e.to_string()))?;
        written.map_err(|e| failed(e.to_string()))?;
        if !output.status.success() {
            return Err(failed(format!("exited with {}", output.status)));
        }

        Ok(output.stdout)
    }
}

/// Resolves the boilerplate name to use.
///
/// A non-empty `name` is returned as is, without touching the catalog or the
/// selector. Otherwise the catalog of `root` is piped through `select_cmd`.
///
/// # Errors
/// * `Error::SelectorNotConfigured` if selection is needed and `select_cmd` is `None`
/// * Catalog errors from [`list_templates`]
/// * `Error::SelectorCommandFailed` if the picker fails or prints invalid UTF-8
/// * `Error::NoSelectionMade` if the picker prints nothing
pub fn select_template<P: AsRef<Path>>(
    runner: &dyn CommandRunner,
    root: P,
    name: Option<&str>,
    select_cmd: Option<&str>,
) -> Result<String> {
    if let Some(name) = name.filter(|name| !name.is_empty()) {
        return Ok(name.to_string());
    }

    let select_cmd = select_cmd
        .filter(|cmd| !cmd.trim().is_empty())
        .ok_or(Error::SelectorNotConfigured)?;
    let names = list_templates(root)?;

    let output = runner.run(select_cmd, names.join("\n").as_bytes())?;
    if output.is_empty() {
        return Err(Error::NoSelectionMade);
    }

    let selected = String::from_utf8(output).map_err(|e| Error::SelectorCommandFailed {
        command: select_cmd.to_string(),
        reason: format!("output is not valid UTF-8: {e}"),
    })?;
    let selected = match selected.strip_suffix('\n') {
        Some(stripped) => stripped.to_string(),
        None => selected,
    };

    debug!("Selected boilerplate '{}'.", selected);
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command_wraps_command_line() {
        let cmd = ShellRunner::shell_command("peco --layout=bottom-up");
        let args: Vec<_> = cmd.get_args().collect();

        if cfg!(windows) {
            assert_eq!(cmd.get_program(), "cmd");
            assert_eq!(args, ["/c", "peco --layout=bottom-up"]);
        } else {
            assert_eq!(cmd.get_program(), "sh");
            assert_eq!(args, ["-c", "peco --layout=bottom-up"]);
        }
    }
}
