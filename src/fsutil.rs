//! Small OS collaborators
//!
//! Tilde expansion, filesystem predicates, and the current-directory
//! lookup backing the one-line stdout contract.

use std::env;
use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` using `$HOME`. Anything else, including
/// `~user/...`, passes through unchanged; so does everything when
/// `$HOME` is unset.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Ok(home) = env::var("HOME") {
            return PathBuf::from(home);
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = env::var("HOME") {
            return Path::new(&home).join(rest);
        }
    }
    PathBuf::from(path)
}

/// Whether `path` names an existing directory (symlinks followed).
pub fn is_dir(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Whether `path` names an existing regular file (symlinks followed).
pub fn is_file(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// The directory to echo when no navigation should happen: `$PWD` when
/// the shell exported it, the syscall cwd otherwise, `.` as a last
/// resort.
pub fn current_dir_lossy() -> String {
    match env::var("PWD") {
        Ok(pwd) if !pwd.is_empty() => pwd,
        _ => env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_else(|_| ".".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn tilde_expansion() {
        // One test mutates HOME so the cases cannot race each other.
        let original = env::var("HOME");
        env::set_var("HOME", "/home/someone");

        assert_eq!(expand_tilde("~"), PathBuf::from("/home/someone"));
        assert_eq!(expand_tilde("~/src"), PathBuf::from("/home/someone/src"));
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
        assert_eq!(expand_tilde("~other/src"), PathBuf::from("~other/src"));

        match original {
            Ok(home) => env::set_var("HOME", home),
            Err(_) => env::remove_var("HOME"),
        }
    }

    #[test]
    fn predicates_distinguish_files_and_dirs() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert!(is_dir(temp.path()));
        assert!(!is_dir(&file));
        assert!(is_file(&file));
        assert!(!is_file(temp.path()));
        assert!(!is_dir(&temp.path().join("missing")));
        assert!(!is_file(&temp.path().join("missing")));
    }
}
