//! Errors raised while talking to the git binary

use std::path::PathBuf;
use std::process::ExitStatus;

/// Failure of one of the git subprocesses or of parsing its output
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed ({status}): {stderr}")]
    ExternalCommand {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected output from `{command}` at line {line_no}: {reason}: {line:?}")]
    Parse {
        command: String,
        line_no: usize,
        line: String,
        reason: String,
    },
}

impl Error {
    pub fn external(command: &str, status: ExitStatus, stderr: &[u8]) -> Self {
        Error::ExternalCommand {
            command: command.to_string(),
            status: status.to_string(),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }

    pub fn parse(command: &str, line_no: usize, line: &str, reason: impl Into<String>) -> Self {
        Error::Parse {
            command: command.to_string(),
            line_no,
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// True for failures caused by the git process itself rather than its output
    pub fn is_external(&self) -> bool {
        matches!(self, Error::Spawn { .. } | Error::ExternalCommand { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
