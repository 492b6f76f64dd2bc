use std::fmt;

use url::Url;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
}

impl RepositoryReference {
    pub fn parse(repo_url: &str) -> Result<Self> {
        let url = Url::parse(repo_url.trim()).map_err(|e| {
            log::error!("Error parsing GitHub URL {repo_url}: {e}");
            Error::invalid_input(format!("cannot parse repository URL {repo_url}: {e}"))
        })?;

        let mut segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());

        let (Some(owner), Some(repo_raw)) = (segments.next(), segments.next()) else {
            log::error!("Invalid GitHub repository URL: {repo_url}");
            return Err(Error::invalid_input(format!(
                "repository URL {repo_url} must contain an owner and a repository name"
            )));
        };

        let owner = decode_segment(owner)?;
        let repo = decode_segment(repo_raw)?;
        let repo = repo.strip_suffix(".git").unwrap_or(repo.as_str());
        if repo.is_empty() {
            return Err(Error::invalid_input(format!(
                "repository URL {repo_url} has an empty repository name"
            )));
        }

        log::debug!("Parsed repository {owner}/{repo} from {repo_url}");
        Ok(Self {
            owner,
            name: repo.to_string(),
        })
    }
}

fn decode_segment(segment: &str) -> Result<String> {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .map_err(|e| Error::invalid_input(format!("invalid path segment {segment}: {e}")))
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
