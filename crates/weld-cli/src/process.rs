//! Running external programs with captured output.

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;

/// Captured result of a finished process.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, `-1` when the process was terminated by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

/// Run `command` followed by `args` in `cwd` and wait for it to exit.
///
/// `command` holds the program and its leading arguments, as configured.
/// Stdin is closed; stdout and stderr are captured.
///
/// # Errors
///
/// Returns the spawn error when the program cannot be started.
pub async fn run_command(
    command: &[String],
    args: &[String],
    cwd: &Path,
) -> std::io::Result<CommandOutput> {
    let Some((program, leading)) = command.split_first() else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "empty command",
        ));
    };

    tracing::debug!(
        program = %program,
        args = ?leading.iter().chain(args).collect::<Vec<_>>(),
        cwd = %cwd.display(),
        "running command"
    );

    let start = Instant::now();
    let output = Command::new(program)
        .args(leading)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await?;
    let elapsed = start.elapsed();

    Ok(CommandOutput {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        elapsed,
    })
}

/// Program name of a configured command, for messages.
pub fn program_name(command: &[String]) -> &str {
    command.first().map(String::as_str).unwrap_or("")
}
