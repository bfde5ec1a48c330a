//! Synchronous invocation of one solver process.
//!
//! The harness runs solvers one at a time: spawn, wait for exit, capture
//! both streams. There is no timeout and no retry — a failed invocation is
//! treated as a structural problem (broken executable, bad arguments,
//! corrupt instance file) and aborts the comparison.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Runs `program` with `args` and returns its captured stdout on success.
///
/// Arguments are passed verbatim to the process — no shell, no globbing.
/// The call blocks until the child exits. Stdout and stderr are captured in
/// full and decoded lossily as UTF-8.
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the process cannot be started at all, and
/// [`Error::NonZeroExit`] (carrying the argument list, exit status, and both
/// captured streams) if it exits with a non-zero status. In the non-zero
/// case stdout is not parsed by callers; it is retained only for diagnosis.
pub fn invoke(program: &Path, args: &[String]) -> Result<String> {
    tracing::debug!(program = %program.display(), ?args, "spawning solver");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| Error::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(Error::NonZeroExit {
            program: program.to_path_buf(),
            args: args.to_vec(),
            status: output.status,
            stderr,
            stdout,
        });
    }

    if !stderr.is_empty() {
        // Stderr is the solvers' diagnostic channel; pass it through.
        tracing::debug!(program = %program.display(), %stderr, "solver diagnostics");
    }

    tracing::debug!(program = %program.display(), "solver exited cleanly");
    Ok(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let program = PathBuf::from("/nonexistent/subset_sum_full_search");
        let err = invoke(&program, &[]).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }), "got {err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_carries_stderr_and_args() {
        // `false` takes any arguments and exits 1 without output.
        let program = PathBuf::from("/bin/false");
        let args = vec!["sets/s".to_string(), "2500".to_string()];
        let err = invoke(&program, &args).unwrap_err();
        let Error::NonZeroExit {
            args: reported,
            status,
            ..
        } = &err
        else {
            panic!("expected NonZeroExit, got {err:?}");
        };
        assert_eq!(*reported, args);
        assert_eq!(status.code(), Some(1));
    }

    #[cfg(unix)]
    #[test]
    fn successful_invocation_returns_stdout() {
        let program = PathBuf::from("/bin/echo");
        let out = invoke(&program, &["hello".to_string()]).unwrap();
        assert_eq!(out.trim(), "hello");
    }
}
