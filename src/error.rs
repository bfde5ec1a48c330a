use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a solver executable cannot be spawned at all
    /// (missing file, permission denied, not executable).
    #[error("failed to spawn '{program}': {source}", program = .program.display())]
    Spawn {
        /// The resolved executable path that failed to start.
        program: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a solver process exits with a non-zero status.
    ///
    /// Carries everything needed to diagnose the failure: the program,
    /// the full argument list, the exit status, and both captured streams.
    #[error("'{program}' exited with {status}: {stderr}", program = .program.display())]
    NonZeroExit {
        /// The resolved executable path.
        program: PathBuf,
        /// The positional arguments the process was started with.
        args: Vec<String>,
        /// The exit status reported by the OS.
        status: ExitStatus,
        /// Captured standard error, lossily decoded as UTF-8.
        stderr: String,
        /// Captured standard output, lossily decoded as UTF-8.
        stdout: String,
    },

    /// Returned when a solver's stdout is not a well-formed result payload.
    #[error("invalid result payload from '{algorithm}': {source}")]
    Decode {
        /// The algorithm whose output failed to decode.
        algorithm: String,
        /// The JSON error describing what was malformed or missing.
        #[source]
        source: serde_json::Error,
    },

    /// Returned when a decoded payload has a structurally invalid field,
    /// e.g. a negative execution time.
    #[error("invalid field '{field}' in result payload: {reason}")]
    InvalidField {
        /// The offending payload key.
        field: &'static str,
        /// Why the value is unusable.
        reason: String,
    },

    /// Returned when the report file cannot be written.
    #[error("failed to write report to '{path}': {source}", path = .path.display())]
    Report {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
