use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "github-release-history",
    version,
    about = "Fetch GitHub repository releases published since a date and save them to a file"
)]
pub struct Args {
    #[arg(help = "GitHub repository URL")]
    pub repo_url: String,

    #[arg(help = "Start date in YYYY-MM-DD format")]
    pub start_date: String,

    #[arg(short, long, help = "Output file name")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Package name to filter releases")]
    pub package_name: Option<String>,

    #[arg(short, long, help = "GitHub Personal Access Token")]
    pub token: Option<String>,

    #[arg(long, help = "Include pre-releases in the output")]
    pub include_prereleases: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_only() {
        let args = Args::try_parse_from(["github-release-history", "https://github.com/acme/widget", "2024-01-01"])
            .unwrap();
        assert_eq!(args.repo_url, "https://github.com/acme/widget");
        assert_eq!(args.start_date, "2024-01-01");
        assert_eq!(args.output, None);
        assert_eq!(args.package_name, None);
        assert_eq!(args.token, None);
        assert!(!args.include_prereleases);
    }

    #[test]
    fn parses_all_options() {
        let args = Args::try_parse_from([
            "github-release-history",
            "https://github.com/acme/widget",
            "2024-01-01",
            "-o",
            "out.txt",
            "-p",
            "widget",
            "-t",
            "secret",
            "--include-prereleases",
        ])
        .unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.package_name.as_deref(), Some("widget"));
        assert_eq!(args.token.as_deref(), Some("secret"));
        assert!(args.include_prereleases);
    }

    #[test]
    fn long_option_names() {
        let args = Args::try_parse_from([
            "github-release-history",
            "https://github.com/acme/widget",
            "2024-01-01",
            "--output",
            "out.txt",
            "--package-name",
            "widget",
            "--token",
            "secret",
        ])
        .unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.package_name.as_deref(), Some("widget"));
        assert_eq!(args.token.as_deref(), Some("secret"));
    }

    #[test]
    fn start_date_is_required() {
        assert!(Args::try_parse_from(["github-release-history", "https://github.com/acme/widget"]).is_err());
    }
}
