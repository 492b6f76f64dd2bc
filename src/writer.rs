use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::releases::FilteredRelease;

pub fn save_to_file(releases: &[FilteredRelease], output_file: &Path) -> Result<()> {
    let io_err = |source: std::io::Error| {
        log::error!("Error writing to file {}: {source}", output_file.display());
        Error::Io {
            path: output_file.to_path_buf(),
            source,
        }
    };

    let file = File::create(output_file).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_releases(&mut writer, releases).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    log::info!("Releases saved to {}", output_file.display());
    Ok(())
}

pub fn write_releases<W: Write + ?Sized>(out: &mut W, releases: &[FilteredRelease]) -> std::io::Result<()> {
    for release in releases {
        writeln!(out, "{release}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entries() -> Vec<FilteredRelease> {
        vec![
            FilteredRelease {
                tag: "v1.2.0".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            },
            FilteredRelease {
                tag: "v1.3.0-beta".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            },
        ]
    }

    #[test]
    fn writes_one_line_per_release() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("releases.txt");

        save_to_file(&entries(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "v1.2.0, 2024-02-01\nv1.3.0-beta, 2024-03-01\n");
    }

    #[test]
    fn empty_input_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        save_to_file(&[], &path).unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("releases.txt");
        std::fs::write(&path, "stale line\nanother stale line\nthird\n").unwrap();

        save_to_file(&entries()[..1], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "v1.2.0, 2024-02-01\n");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("releases.txt");

        let err = save_to_file(&entries(), &path).unwrap_err();

        match err {
            Error::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
