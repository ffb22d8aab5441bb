//! Clone target construction
//!
//! Computes the clone URL and the on-disk destination for a classified
//! remote. Destinations mirror `host/owner/repo` under the code root.

use std::path::{Path, PathBuf};

use crate::github::RepoInfo;

/// Where a term resolves to on disk, plus the URL to clone from when the
/// directory does not exist yet. Without a URL the path must already
/// exist or the resolution fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneTarget {
    pub path: PathBuf,
    pub url: Option<String>,
}

impl CloneTarget {
    /// A target that can only be satisfied by an existing directory.
    pub fn local(path: PathBuf) -> Self {
        Self { path, url: None }
    }
}

/// Target for a GitHub repository with (possibly corrected) casing.
pub fn github_target(code_root: &Path, info: &RepoInfo) -> CloneTarget {
    CloneTarget {
        path: code_root
            .join("github.com")
            .join(&info.owner)
            .join(&info.name),
        url: Some(format!(
            "https://github.com/{}/{}.git",
            info.owner, info.name
        )),
    }
}

/// Target for a generic URL or SSH remote. The term is cloned verbatim;
/// the destination mirrors the lower-cased host and the remote path.
pub fn remote_target(code_root: &Path, term: &str, host: &str, uri_path: &str) -> CloneTarget {
    // A leading slash would make `join` discard the code root.
    let uri_path = uri_path.trim_start_matches('/');
    CloneTarget {
        path: code_root.join(host).join(uri_path),
        url: Some(term.to_string()),
    }
}
