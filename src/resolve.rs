//! Resolution orchestration
//!
//! Sequences classification, the GitHub casing lookup, the bounded
//! search and the clone into one final printable path.

use std::path::{Path, PathBuf};

use crate::clone;
use crate::fsutil;
use crate::github;
use crate::remote::{self, CloneTarget};
use crate::search;
use crate::term::{self, ClassifiedTerm};
use crate::ResolveError;

/// Resolve `term` under `code_root`, cloning with `git_args` when the
/// target does not exist locally. Returns the directory to print.
pub fn resolve(code_root: &Path, term: &str, git_args: &[String]) -> Result<PathBuf, ResolveError> {
    let classified = term::classify(term);
    log::debug!("{term:?} classified as {classified:?}");

    let target = match classified {
        ClassifiedTerm::Invalid => return Err(ResolveError::InvalidTerm(term.to_string())),

        ClassifiedTerm::SimpleName(name) => {
            let case_sensitive = search::needs_case_sensitive(&name);
            let result = search::search(code_root, &name, case_sensitive, search::MAX_DEPTH);
            match result.path {
                Some(path) => {
                    log::debug!("search hit at depth {}: {}", result.depth, path.display());
                    CloneTarget::local(path)
                }
                None => return Err(ResolveError::NotFound(term.to_string())),
            }
        }

        ClassifiedTerm::GithubShorthand { owner, repo } => {
            let info = github::correct_casing(&owner, &repo);
            remote::github_target(code_root, &info)
        }

        ClassifiedTerm::UrlRemote { host, path } => {
            remote::remote_target(code_root, term, &host, &path)
        }

        ClassifiedTerm::SshRemote { host, path } => {
            if path.is_empty() {
                // `git@host` with no path: nothing to clone, nowhere to look.
                return Err(ResolveError::NotFound(term.to_string()));
            }
            remote::remote_target(code_root, term, &host, &path)
        }
    };

    // The `.git` suffix never reaches the printed path, and existing
    // checkouts win over cloning.
    let path = strip_git_suffix(&target.path);

    if fsutil::is_dir(&path) {
        return Ok(path);
    }

    let Some(url) = target.url else {
        return Err(ResolveError::NotFound(term.to_string()));
    };

    clone::clone(&url, &path, git_args)?;
    Ok(path)
}

/// Drop a trailing `.git` from the final path component.
fn strip_git_suffix(path: &Path) -> PathBuf {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) if name.len() > 4 && name.ends_with(".git") => {
            path.with_file_name(&name[..name.len() - 4])
        }
        _ => path.to_path_buf(),
    }
}
