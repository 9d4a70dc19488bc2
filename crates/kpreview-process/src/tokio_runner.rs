use std::process::Stdio;

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    process::Command,
};
use tracing::{info, warn};

use crate::{CommandOutcome, ProcessError, ProcessRunner, Result};

const SECRET_FLAGS: &[&str] = &["--password", "--username", "-p", "-u"];
const REDACTED: &str = "***";

/// Process runner backed by the tokio runtime.
///
/// Output lines are logged as they arrive: stdout at info level,
/// stderr at warn level.
#[derive(Debug, Clone, Default)]
pub struct TokioProcessRunner {
    _private: (),
}

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

/// Hide values following credential flags.
pub fn redact_args(args: &[String]) -> Vec<String> {
    let mut redacted = Vec::with_capacity(args.len());
    let mut hide_next = false;

    for arg in args {
        if hide_next {
            redacted.push(REDACTED.to_string());
            hide_next = false;
        } else if let Some((flag, _)) = arg
            .split_once('=')
            .filter(|(flag, _)| SECRET_FLAGS.contains(flag))
        {
            redacted.push(format!("{flag}={REDACTED}"));
        } else {
            hide_next = SECRET_FLAGS.contains(&arg.as_str());
            redacted.push(arg.clone());
        }
    }

    redacted
}

async fn collect_lines<R: AsyncRead + Unpin>(
    program: &str,
    reader: Option<R>,
    is_stderr: bool,
) -> String {
    let mut output = String::new();
    let Some(reader) = reader else {
        return output;
    };

    let mut reader = BufReader::new(reader);
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buffer);
                let line = line.trim_end_matches(['\n', '\r']);
                if is_stderr {
                    warn!(program = program, "{}", line);
                } else {
                    info!(program = program, "{}", line);
                }

                output.push_str(line);
                output.push('\n');
            }
            Err(e) => {
                // Keep the pipe open until the child exits.
                warn!(
                    program = program,
                    error = %e,
                    message = "Could not read process output"
                );
                let _ = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await;
                break;
            }
        }
    }

    output
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    #[tracing::instrument(skip(self, args), fields(args = ?redact_args(args)))]
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutcome> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ProcessError::SpawnError {
                program: program.into(),
                source: e,
            })?;

        let (stdout, stderr) = tokio::join!(
            collect_lines(program, child.stdout.take(), false),
            collect_lines(program, child.stderr.take(), true)
        );

        let status = child.wait().await.map_err(|e| ProcessError::WaitError {
            program: program.into(),
            source: e,
        })?;
        let exit_code = status.code().unwrap_or(-1);

        info!(
            program = program,
            exit_code = exit_code,
            message = "Process exited"
        );

        Ok(CommandOutcome {
            exit_code,
            stdout,
            stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn redaction() {
        assert_eq!(
            redact_args(&args(&[
                "login",
                "--username",
                "me",
                "--password",
                "secret",
                "registry.example.com"
            ])),
            args(&[
                "login",
                "--username",
                "***",
                "--password",
                "***",
                "registry.example.com"
            ])
        );
        assert_eq!(
            redact_args(&args(&["--password=secret", "--set", "a=b"])),
            args(&["--password=***", "--set", "a=b"])
        );
    }

    #[tokio::test]
    async fn non_zero_exit_is_a_value() {
        let runner = TokioProcessRunner::new();
        let outcome = runner
            .run("sh", &args(&["-c", "echo out; echo err >&2; exit 3"]))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            CommandOutcome {
                exit_code: 3,
                stdout: "out\n".into(),
                stderr: "err\n".into(),
            }
        );
        assert!(!outcome.success());
    }

    #[tokio::test]
    async fn missing_program() {
        let runner = TokioProcessRunner::new();
        let result = runner
            .run("kpreview-this-program-does-not-exist", &[])
            .await;

        assert!(matches!(result, Err(ProcessError::SpawnError { .. })));
    }

    #[tokio::test]
    async fn invalid_utf8_output_is_kept() {
        let runner = TokioProcessRunner::new();
        let outcome = runner
            .run(
                "sh",
                &args(&[
                    "-c",
                    "printf 'before\\n\\377\\nafter\\n'; head -c 300000 /dev/zero | tr '\\0' a; echo; echo done",
                ]),
            )
            .await
            .unwrap();

        assert_eq!(outcome.exit_code, 0);
        let lines: Vec<&str> = outcome.stdout.lines().collect();
        assert_eq!(lines[0], "before");
        assert_eq!(lines[1], "\u{FFFD}");
        assert_eq!(lines[2], "after");
        assert_eq!(lines[3].len(), 300_000);
        assert_eq!(lines[4], "done");
    }
}
