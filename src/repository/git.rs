//! Runs the git binary
//!
//! Everything the tool knows about a repository comes from git's own
//! plumbing commands; this module is the only place that spawns them.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Something that can answer `git <args>` queries for one repository
///
/// The pipeline only depends on this trait, so tests can script git's
/// output without a real repository.
#[allow(async_fn_in_trait)]
pub trait GitRunner {
    /// Run git with `args` and return its standard output
    async fn run(&self, args: &[OsString]) -> Result<String>;
}

/// Runs the `git` executable found on `PATH` against a repository
#[derive(Debug, Clone)]
pub struct SystemGit {
    repo_path: PathBuf,
    program: OsString,
}

impl SystemGit {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            program: OsString::from("git"),
        }
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }
}

impl GitRunner for SystemGit {
    async fn run(&self, args: &[OsString]) -> Result<String> {
        let command = command_line(args);
        debug!(%command, repo = %self.repo_path.display(), "running git");

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.repo_path)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::external(&command, output.status, &output.stderr));
        }

        debug!(%command, bytes = output.stdout.len(), "git finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Human-readable form of a git invocation, used in diagnostics
pub fn command_line(args: &[OsString]) -> String {
    let mut line = String::from("git");
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Build an argument list from string literals
pub fn git_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(|arg| OsString::from(*arg)).collect()
}
