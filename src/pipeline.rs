use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::github::ReleaseSource;
use crate::releases::filter::ReleaseFilter;
use crate::repository_url::RepositoryReference;
use crate::writer;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub repo_url: String,
    pub start_date: String,
    pub output: Option<PathBuf>,
    pub package_name: Option<String>,
    pub include_prereleases: bool,
}

pub fn parse_start_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| {
        Error::invalid_input(format!("start date '{input}' is not in YYYY-MM-DD format: {e}"))
    })
}

pub fn default_output_file(repository: &RepositoryReference, package_name: Option<&str>) -> PathBuf {
    let name = match package_name.filter(|p| !p.is_empty()) {
        Some(package) => format!("{}_{}_{package}_releases.txt", repository.owner, repository.name),
        None => format!("{}_{}_releases.txt", repository.owner, repository.name),
    };
    PathBuf::from(name)
}

pub async fn run(options: &RunOptions, source: &dyn ReleaseSource, out: &mut dyn Write) -> Result<PathBuf> {
    let start_date = parse_start_date(&options.start_date)?;
    let repository = RepositoryReference::parse(&options.repo_url)?;

    let releases = source.fetch_releases(&repository).await?;

    let package_name = options.package_name.clone().filter(|p| !p.is_empty());
    let filter = ReleaseFilter {
        start_date,
        package_name: package_name.clone(),
        include_prereleases: options.include_prereleases,
    };
    let filtered = filter.apply(&releases);

    writer::write_releases(out, &filtered).map_err(|source| Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })?;

    let output_file = match &options.output {
        Some(path) => path.clone(),
        None => {
            let path = default_output_file(&repository, package_name.as_deref());
            log::info!("No output file provided. Using default: {}", path.display());
            path
        }
    };

    writer::save_to_file(&filtered, &output_file)?;
    Ok(output_file)
}
