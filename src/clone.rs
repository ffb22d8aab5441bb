//! `git clone` orchestration
//!
//! Spawns git with the child's stdout rerouted onto our stderr so the
//! resolver's stdout keeps its single-line contract, and removes the
//! directories it created when the clone fails.

use std::fs;
use std::os::fd::AsFd;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::ResolveError;

/// Clone `url` into `dest`, blocking until git exits.
///
/// `--recursive` is passed only when the caller supplied no extra
/// arguments; callers that pass their own flags encode their own
/// submodule preference.
pub fn clone(url: &str, dest: &Path, extra_args: &[String]) -> Result<(), ResolveError> {
    let created = create_parents(dest)?;

    let mut cmd = Command::new("git");
    cmd.arg("clone");
    if extra_args.is_empty() {
        cmd.arg("--recursive");
    } else {
        cmd.args(extra_args);
    }
    cmd.arg("--").arg(url).arg(dest);

    // Only the resolved path may appear on our stdout; the child's
    // stdout goes to a duplicate of our stderr. If the fd cannot be
    // duplicated the clone's own stderr still reaches the terminal.
    let child_stdout = std::io::stderr()
        .as_fd()
        .try_clone_to_owned()
        .map(Stdio::from)
        .unwrap_or_else(|_| Stdio::null());
    cmd.stdout(child_stdout);

    log::debug!("running {cmd:?}");

    let status = match cmd.status() {
        Ok(status) => status,
        Err(err) => {
            log::debug!("failed to start git: {err}");
            remove_created(&created);
            return Err(ResolveError::CloneFailed { code: 127 });
        }
    };

    if !status.success() {
        remove_created(&created);
        return Err(ResolveError::CloneFailed {
            code: status.code().unwrap_or(1),
        });
    }

    Ok(())
}

/// Create the destination's missing parent directories, returning the
/// newly created ones innermost-first so a failed clone can remove them
/// again.
fn create_parents(dest: &Path) -> Result<Vec<PathBuf>, ResolveError> {
    let Some(parent) = dest.parent() else {
        return Ok(Vec::new());
    };

    let mut created = Vec::new();
    let mut dir = parent;
    while !dir.as_os_str().is_empty() && !dir.exists() {
        created.push(dir.to_path_buf());
        match dir.parent() {
            Some(up) => dir = up,
            None => break,
        }
    }

    fs::create_dir_all(parent).map_err(|source| ResolveError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    Ok(created)
}

/// Remove directories created for a clone that never happened.
/// `remove_dir` refuses non-empty directories, so anything the clone
/// left behind survives.
fn remove_created(created: &[PathBuf]) {
    for dir in created {
        if let Err(err) = fs::remove_dir(dir) {
            log::debug!("leaving {}: {err}", dir.display());
            break;
        }
    }
}
