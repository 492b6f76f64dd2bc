use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request to GitHub failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for {url}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("Gave up after fetching {max_pages} pages of releases")]
    PageLimitExceeded { max_pages: u32 },

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not process release: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::Request(_) | Error::HttpStatus { .. } | Error::PageLimitExceeded { .. }
        )
    }
}
