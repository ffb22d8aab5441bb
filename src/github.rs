//! GitHub casing correction
//!
//! Best-effort lookup of the canonical `owner`/`name` casing through the
//! repository metadata endpoint. Any failure falls back to the parsed
//! values; this step never fails the overall resolution.

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

const API_ROOT: &str = "https://api.github.com/repos";
const USER_AGENT: &str = "h-cli";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Owner/name pair for a GitHub repository, either as parsed from the
/// term or as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    owner: RepoOwner,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RepoOwner {
    login: String,
}

/// Replace `owner`/`repo` with the canonical casing reported by GitHub.
///
/// Both fields are replaced together or not at all: on any network,
/// status, or decode failure the parsed pair is returned unchanged.
pub fn correct_casing(owner: &str, repo: &str) -> RepoInfo {
    match fetch_repo_info(owner, repo) {
        Ok(info) => {
            log::debug!("github casing: {owner}/{repo} -> {}/{}", info.owner, info.name);
            info
        }
        Err(err) => {
            log::warn!("github lookup for {owner}/{repo} failed, keeping parsed casing: {err}");
            RepoInfo {
                owner: owner.to_string(),
                name: repo.to_string(),
            }
        }
    }
}

fn fetch_repo_info(owner: &str, repo: &str) -> Result<RepoInfo> {
    // The agent lives for this one call; only one request is ever made
    // per invocation.
    let agent = ureq::Agent::new_with_config(
        ureq::config::Config::builder()
            .timeout_global(Some(LOOKUP_TIMEOUT))
            .build(),
    );

    let url = format!("{API_ROOT}/{owner}/{repo}");
    let body = agent
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/vnd.github.v3+json")
        .call()?
        .body_mut()
        .read_to_string()?;

    let parsed: RepoResponse = serde_json::from_str(&body)?;
    Ok(RepoInfo {
        owner: parsed.owner.login,
        name: parsed.name,
    })
}
