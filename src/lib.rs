//! h - jump to a project directory by name, shorthand, URL or SSH remote
//!
//! The library backs four small binaries:
//! - `h`: resolve a search term to a directory under a code root, cloning
//!   the repository when no local copy exists
//! - `h-shell-init`: print the shell function that wires `h` into `cd`
//! - `up`: print the nearest enclosing project root
//! - `up-shell-init`: print the matching shell function for `up`
//!
//! Every binary prints at most one line on stdout so the generated shell
//! functions can capture it and navigate (or not) based on it.

use std::path::PathBuf;

use thiserror::Error;

pub mod ascend;
pub mod clone;
pub mod fsutil;
pub mod github;
pub mod remote;
pub mod resolve;
pub mod search;
pub mod shell;
pub mod term;

/// Failure modes of a resolution, mapped onto exit codes by the `h` binary.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The term fits none of the recognized shapes.
    #[error("Unknown pattern for {0}")]
    InvalidTerm(String),

    /// No local match and no clone URL to fall back to.
    #[error("{0} not found")]
    NotFound(String),

    /// `git clone` exited non-zero, was killed, or could not be started.
    #[error("git clone failed with exit code {code}")]
    CloneFailed { code: i32 },

    /// The destination's parent directories could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// Exit code to report for this failure. Clone exit codes propagate
    /// verbatim; everything else is a plain usage-style failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ResolveError::CloneFailed { code } => u8::try_from(*code).unwrap_or(1),
            _ => 1,
        }
    }
}
