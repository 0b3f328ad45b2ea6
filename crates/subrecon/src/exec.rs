use crate::{Error, Result, SUBPROCESS_TIMEOUT_MS};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, error};

/// Run a tool to completion and return its trimmed stdout.
pub async fn run_command(program: &str, args: &[&str]) -> Result<String> {
    debug!("{:12} - {} {}", "SPAWN", program, args.join(" "));

    let output = timeout(
        Duration::from_millis(SUBPROCESS_TIMEOUT_MS),
        Command::new(program).args(args).kill_on_drop(true).output(),
    )
    .await??;

    if !output.status.success() {
        return Err(command_failed(program, args, &output.stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Feed `input` to a tool over stdin and return its stdout lines,
/// trimmed, with empty lines removed.
///
/// Ordering matters here: write all input, close the pipe, then drain
/// stdout. The child only gets EOF once its stdin handle is shut down,
/// and reading before that can deadlock both sides on a full pipe.
pub async fn run_with_stdin(program: &str, args: &[&str], input: &str) -> Result<Vec<String>> {
    debug!("{:12} - {} {}", "SPAWN", program, args.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let output = timeout(Duration::from_millis(SUBPROCESS_TIMEOUT_MS), async {
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).await?;
            stdin.shutdown().await?;
        }
        child.wait_with_output().await.map_err(Error::from)
    })
    .await??;

    if !output.status.success() {
        return Err(command_failed(program, args, &output.stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

fn command_failed(program: &str, args: &[&str], stderr: &[u8]) -> Error {
    let command = format!("{} {}", program, args.join(" "));
    let stderr = String::from_utf8_lossy(stderr).into_owned();
    error!("{:12} - {}\n{}", "TOOL FAILED", command, stderr);
    Error::CommandFailed { command, stderr }
}

#[cfg(test)]
mod tests {
    use super::{run_command, run_with_stdin};
    use crate::Error;

    #[tokio::test]
    async fn captures_stdout() {
        let stdout = run_command("echo", &["sub.example.com"]).await.unwrap();
        assert_eq!(stdout, "sub.example.com");
    }

    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let res = run_command("false", &[]).await;
        assert!(matches!(res, Err(Error::CommandFailed { .. })));
    }

    #[tokio::test]
    async fn pipes_stdin_and_drains_stdout() {
        let lines = run_with_stdin("cat", &[], "a.example.com\n\nb.example.com\n")
            .await
            .unwrap();
        assert_eq!(lines, vec!["a.example.com", "b.example.com"]);
    }
}
