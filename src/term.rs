//! Search term classification
//!
//! Maps the raw user input onto a typed intent. Classification is total:
//! every input string lands in exactly one variant, `Invalid` included.

use once_cell::sync::Lazy;
use regex::Regex;

/// `owner/repo`: two non-empty name segments and exactly one slash.
static SHORTHAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9._-]+)/([A-Za-z0-9._-]+)$").expect("Invalid SHORTHAND_RE regex")
});

/// Bare project name: alphanumerics plus `.`, `-`, `_`.
static SIMPLE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("Invalid SIMPLE_NAME_RE regex"));

/// What the user meant by the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedTerm {
    /// `owner/repo`, or a GitHub URL/SSH remote reduced to it.
    GithubShorthand { owner: String, repo: String },

    /// Any other `scheme://host/path` remote; cloned from the term verbatim.
    /// `host` is lower-cased for destination-path construction.
    UrlRemote { host: String, path: String },

    /// SCP-like `git@host:path` remote. An empty `path` means the term had
    /// no `:` separator and no clone URL can be derived from it.
    SshRemote { host: String, path: String },

    /// Bare name to search for under the code root.
    SimpleName(String),

    /// None of the above.
    Invalid,
}

/// Classify a raw search term.
pub fn classify(term: &str) -> ClassifiedTerm {
    if let Some(caps) = SHORTHAND_RE.captures(term) {
        return ClassifiedTerm::GithubShorthand {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        };
    }

    if let Some(idx) = term.find("://") {
        let rest = &term[idx + 3..];
        let (host, path) = match rest.split_once('/') {
            Some((host, path)) => (host, path),
            None => (rest, ""),
        };
        let host = host.to_lowercase();
        if let Some((owner, repo)) = github_shorthand(&host, path) {
            return ClassifiedTerm::GithubShorthand { owner, repo };
        }
        return ClassifiedTerm::UrlRemote {
            host,
            path: path.to_string(),
        };
    }

    if term.starts_with("git@") || term.starts_with("gitea@") {
        if let Some((_, rest)) = term.split_once('@') {
            return match rest.split_once(':') {
                Some((host, path)) => {
                    let host = host.to_lowercase();
                    if let Some((owner, repo)) = github_shorthand(&host, path) {
                        ClassifiedTerm::GithubShorthand { owner, repo }
                    } else {
                        ClassifiedTerm::SshRemote {
                            host,
                            path: path.to_string(),
                        }
                    }
                }
                None => ClassifiedTerm::SshRemote {
                    host: rest.to_lowercase(),
                    path: String::new(),
                },
            };
        }
    }

    if SIMPLE_NAME_RE.is_match(term) {
        return ClassifiedTerm::SimpleName(term.to_string());
    }

    ClassifiedTerm::Invalid
}

/// Reduce a host/path pair to GitHub shorthand when it is one.
///
/// The path must be exactly `owner/repo`; deeper GitHub paths (trees,
/// blobs, gists) fall through to the generic remote handling.
fn github_shorthand(host: &str, path: &str) -> Option<(String, String)> {
    if host != "github.com" {
        return None;
    }
    let caps = SHORTHAND_RE.captures(path)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shorthand(owner: &str, repo: &str) -> ClassifiedTerm {
        ClassifiedTerm::GithubShorthand {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    #[test]
    fn owner_repo_is_shorthand() {
        assert_eq!(classify("octocat/Hello-World"), shorthand("octocat", "Hello-World"));
        assert_eq!(classify("a.b/c_d-e"), shorthand("a.b", "c_d-e"));
    }

    #[test]
    fn extra_slash_is_not_shorthand() {
        assert_eq!(classify("a/b/c"), ClassifiedTerm::Invalid);
    }

    #[test]
    fn empty_segment_is_not_shorthand() {
        assert_eq!(classify("/repo"), ClassifiedTerm::Invalid);
        assert_eq!(classify("owner/"), ClassifiedTerm::Invalid);
    }

    #[test]
    fn github_url_reduces_to_shorthand() {
        assert_eq!(
            classify("https://github.com/octocat/Hello-World"),
            shorthand("octocat", "Hello-World")
        );
        assert_eq!(
            classify("https://GitHub.COM/octocat/Hello-World"),
            shorthand("octocat", "Hello-World")
        );
    }

    #[test]
    fn deep_github_url_stays_generic() {
        assert_eq!(
            classify("https://github.com/octocat/Hello-World/tree/main"),
            ClassifiedTerm::UrlRemote {
                host: "github.com".to_string(),
                path: "octocat/Hello-World/tree/main".to_string(),
            }
        );
    }

    #[test]
    fn generic_url_keeps_host_and_path() {
        assert_eq!(
            classify("https://Git.Example.ORG/team/app"),
            ClassifiedTerm::UrlRemote {
                host: "git.example.org".to_string(),
                path: "team/app".to_string(),
            }
        );
    }

    #[test]
    fn url_without_path_has_empty_path() {
        assert_eq!(
            classify("https://example.com"),
            ClassifiedTerm::UrlRemote {
                host: "example.com".to_string(),
                path: String::new(),
            }
        );
    }

    #[test]
    fn ssh_remote_splits_host_and_path() {
        assert_eq!(
            classify("git@example.com:team/app.git"),
            ClassifiedTerm::SshRemote {
                host: "example.com".to_string(),
                path: "team/app.git".to_string(),
            }
        );
    }

    #[test]
    fn gitea_prefix_is_accepted() {
        assert_eq!(
            classify("gitea@forge.example.com:team/app"),
            ClassifiedTerm::SshRemote {
                host: "forge.example.com".to_string(),
                path: "team/app".to_string(),
            }
        );
    }

    #[test]
    fn ssh_github_reduces_to_shorthand() {
        assert_eq!(
            classify("git@github.com:octocat/Hello-World"),
            shorthand("octocat", "Hello-World")
        );
    }

    #[test]
    fn ssh_without_colon_has_empty_path() {
        assert_eq!(
            classify("git@example.com"),
            ClassifiedTerm::SshRemote {
                host: "example.com".to_string(),
                path: String::new(),
            }
        );
    }

    #[test]
    fn bare_name_is_simple() {
        assert_eq!(classify("myproj"), ClassifiedTerm::SimpleName("myproj".to_string()));
        assert_eq!(classify("My.Proj_2-x"), ClassifiedTerm::SimpleName("My.Proj_2-x".to_string()));
    }

    #[test]
    fn junk_is_invalid() {
        assert_eq!(classify("bogus name!"), ClassifiedTerm::Invalid);
        assert_eq!(classify(""), ClassifiedTerm::Invalid);
        assert_eq!(classify("foo bar"), ClassifiedTerm::Invalid);
    }
}
