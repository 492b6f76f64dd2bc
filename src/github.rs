use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::repository_url::RepositoryReference;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Missing, null or non-string fields become `None` and are rejected per record by the filter.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Release {
    #[serde(default, deserialize_with = "lenient_string")]
    pub tag_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub published_at: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(s) => Some(s),
        Field::Other(_) => None,
    })
}

#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn fetch_releases(&self, repository: &RepositoryReference) -> Result<Vec<Release>>;
}

pub struct GithubReleasesClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    max_pages: u32,
}

impl GithubReleasesClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>, max_pages: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            max_pages,
        }
    }

    fn page_url(&self, repository: &RepositoryReference, page: u32) -> String {
        format!(
            "{}/repos/{}/{}/releases?page={}&per_page={}",
            self.base_url,
            urlencoding::encode(&repository.owner),
            urlencoding::encode(&repository.name),
            page,
            PER_PAGE,
        )
    }

    async fn fetch_page(&self, url: &str) -> Result<Vec<Release>> {
        let mut req = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(t) = self.token.as_deref() {
            req = req.header("Authorization", format!("token {t}"));
        }
        let resp = req.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            log::warn!("GitHub releases request failed: status={status} body={body}");
            return Err(Error::HttpStatus {
                status,
                url: url.to_string(),
                body,
            });
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl ReleaseSource for GithubReleasesClient {
    async fn fetch_releases(&self, repository: &RepositoryReference) -> Result<Vec<Release>> {
        let mut releases = Vec::new();
        let mut page = 1;

        loop {
            let url = self.page_url(repository, page);
            log::info!("Fetching releases from {url}");
            let page_releases = self.fetch_page(&url).await.inspect_err(|e| {
                log::error!("Error fetching releases: {e}");
            })?;

            if page_releases.is_empty() {
                break;
            }
            // One request past the cap is allowed so an exactly full history still ends cleanly.
            if page > self.max_pages {
                log::error!("Stopping after {} pages for {repository}", self.max_pages);
                return Err(Error::PageLimitExceeded {
                    max_pages: self.max_pages,
                });
            }
            log::debug!("Page {page} returned {} releases", page_releases.len());
            releases.extend(page_releases);
            page += 1;
        }

        log::info!("Fetched {} releases for {repository}", releases.len());
        Ok(releases)
    }
}
