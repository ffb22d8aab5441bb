//! Project-root ascent for `up`
//!
//! Walks from the current directory toward `/`, stopping at the first
//! ancestor that looks like a project root. `/` and `$HOME` bound the
//! walk and are never reported themselves.

use std::env;
use std::path::{Path, PathBuf};

use crate::fsutil::{is_dir, is_file};

/// Whether `dir` looks like the top of a project checkout.
pub fn is_project_root(dir: &Path) -> bool {
    if is_dir(&dir.join(".git")) || is_dir(&dir.join(".hg")) {
        return true;
    }
    if is_file(&dir.join(".envrc")) || is_file(&dir.join("Gemfile")) {
        return true;
    }
    // direnv exports the active directory prefixed with `-`.
    if let Ok(direnv) = env::var("DIRENV_DIR") {
        if let Some(active) = direnv.strip_prefix('-') {
            if dir == Path::new(active) {
                return true;
            }
        }
    }
    false
}

/// Find the nearest enclosing project root above `cwd`.
///
/// When `cwd` is itself a project root the walk starts at its parent, so
/// repeated invocations keep climbing. Returns `None` when the walk
/// reaches `/` or `$HOME` without a hit.
pub fn ascend(cwd: &Path) -> Option<PathBuf> {
    let home = env::var("HOME").map(PathBuf::from).ok();

    let mut dir = if is_project_root(cwd) {
        cwd.parent()?.to_path_buf()
    } else {
        cwd.to_path_buf()
    };

    loop {
        if dir == Path::new("/") || Some(&dir) == home.as_ref() {
            return None;
        }
        if is_project_root(&dir) {
            return Some(dir);
        }
        dir = dir.parent()?.to_path_buf();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn git_directory_marks_a_project_root() {
        let temp = tempdir().unwrap();
        assert!(!is_project_root(temp.path()));

        fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(is_project_root(temp.path()));
    }

    #[test]
    fn gemfile_and_envrc_mark_a_project_root() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("Gemfile"), "").unwrap();
        assert!(is_project_root(temp.path()));

        let other = tempdir().unwrap();
        fs::write(other.path().join(".envrc"), "").unwrap();
        assert!(is_project_root(other.path()));
    }

    #[test]
    fn a_git_file_is_not_a_marker() {
        // Worktrees store `.git` as a file; the original tool only
        // recognizes the directory form.
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".git"), "gitdir: elsewhere").unwrap();
        assert!(!is_project_root(temp.path()));
    }

    #[test]
    fn ascends_to_nearest_marked_ancestor() {
        let temp = tempdir().unwrap();
        let project = temp.path().join("proj");
        fs::create_dir_all(project.join(".git")).unwrap();
        let nested = project.join("src/deep");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(ascend(&nested), Some(project));
    }

    #[test]
    fn climbs_out_of_a_project_root_to_the_enclosing_one() {
        let temp = tempdir().unwrap();
        let outer = temp.path().join("outer");
        fs::create_dir_all(outer.join(".git")).unwrap();
        let inner = outer.join("vendor/inner");
        fs::create_dir_all(inner.join(".git")).unwrap();

        assert_eq!(ascend(&inner), Some(outer));
    }

    #[test]
    fn unmarked_tree_yields_nothing() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(ascend(&nested), None);
    }
}
