use semver::Version;

use crate::error::{Error, Result};

pub fn extract_version(tag_name: &str, package_name: Option<&str>) -> Option<Version> {
    let version_str = match package_name.filter(|p| !p.is_empty()) {
        Some(package) => {
            let expected_prefix = format!("{package}==");
            match tag_name.strip_prefix(expected_prefix.as_str()) {
                Some(rest) => rest,
                None => {
                    log::debug!("Tag '{tag_name}' does not match package name '{package}'");
                    return None;
                }
            }
        }
        None => tag_name,
    };

    let version_str = version_str.strip_prefix('v').unwrap_or(version_str);

    match parse_version(version_str) {
        Ok(version) => Some(version),
        Err(e) => {
            log::debug!("Invalid version '{tag_name}': {e}");
            None
        }
    }
}

pub fn is_prerelease(version: &Version) -> bool {
    !version.pre.is_empty()
}

// Short numeric cores (`1.2`, `3`) are padded with zeros.
fn parse_version(input: &str) -> Result<Version> {
    let core_end = input.find(['-', '+']).unwrap_or(input.len());
    let (core, suffix) = input.split_at(core_end);

    let parts: Vec<&str> = core.split('.').collect();
    let padded;
    let candidate = if parts.len() < 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
    {
        padded = format!("{core}{}{suffix}", ".0".repeat(3 - parts.len()));
        padded.as_str()
    } else {
        input
    };

    Version::parse(candidate).map_err(|e| Error::parse(format!("{input}: {e}")))
}
