use clap::Parser;

mod cli;
mod configuration;
mod error;
mod github;
mod logger;
mod pipeline;
mod releases;
mod repository_url;
mod writer;

use crate::github::GithubReleasesClient;
use crate::pipeline::RunOptions;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env file: {e}");
        }
    }
    logger::init_from_environment();

    log::debug!("Loading configuration");
    let config = configuration::Configuration::from_env().with_token(args.token.clone());

    let anonymous = config.github_token.is_none();
    let client = GithubReleasesClient::new(config.api_base_url, config.github_token, config.max_pages);
    let options = RunOptions {
        repo_url: args.repo_url,
        start_date: args.start_date,
        output: args.output,
        package_name: args.package_name.filter(|p| !p.is_empty()),
        include_prereleases: args.include_prereleases,
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = pipeline::run(&options, &client, &mut stdout).await {
        log::error!("An unexpected error occurred: {e}");
        if e.is_network() && anonymous {
            log::info!("Requests were unauthenticated; pass --token or set GITHUB_TOKEN for a higher rate limit");
        }
        std::process::exit(1);
    }
}
