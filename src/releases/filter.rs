use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};
use crate::github::Release;
use crate::releases::FilteredRelease;
use crate::releases::version::{extract_version, is_prerelease};

const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone)]
pub struct ReleaseFilter {
    pub start_date: NaiveDate,
    pub package_name: Option<String>,
    pub include_prereleases: bool,
}

impl ReleaseFilter {
    pub fn apply(&self, releases: &[Release]) -> Vec<FilteredRelease> {
        let mut filtered = Vec::new();
        for release in releases {
            match self.check(release) {
                Ok(Some(entry)) => filtered.push(entry),
                Ok(None) => {}
                Err(e) => log::error!("Error processing release {release:?}: {e}"),
            }
        }
        log::info!("{} of {} releases kept", filtered.len(), releases.len());
        filtered
    }

    fn check(&self, release: &Release) -> Result<Option<FilteredRelease>> {
        let published_at = release
            .published_at
            .as_deref()
            .ok_or_else(|| Error::parse("missing or non-string published_at"))?;
        let date = parse_published_date(published_at)?;
        let tag_name = release
            .tag_name
            .as_deref()
            .ok_or_else(|| Error::parse("missing or non-string tag_name"))?;

        if date < self.start_date {
            log::debug!("Skipping release '{tag_name}' before start date");
            return Ok(None);
        }

        let Some(version) = extract_version(tag_name, self.package_name.as_deref()) else {
            return Ok(None);
        };

        if !self.include_prereleases && is_prerelease(&version) {
            log::debug!("Skipping pre-release '{tag_name}'");
            return Ok(None);
        }

        Ok(Some(FilteredRelease {
            tag: tag_name.to_string(),
            date,
        }))
    }
}

fn parse_published_date(published_at: &str) -> Result<NaiveDate> {
    NaiveDateTime::parse_from_str(published_at, PUBLISHED_AT_FORMAT)
        .map(|dt| dt.date())
        .map_err(|e| Error::parse(format!("invalid published_at '{published_at}': {e}")))
}
