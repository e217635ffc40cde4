use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use podlink_resolver::{
    HostResponse, NoopReporter, ProgressEvent, ProgressReporter, ReqwestClient, ResolveError,
    ResolveOptions, ResolveRequest, SharedProgressReporter, resolve_link,
};

// Emoji with fallback for terminals without Unicode support
static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "x ");

/// Resolve a podcast episode into a pod.link share link
#[derive(Parser, Debug)]
#[command(name = "podlink")]
#[command(about = "Resolve a podcast episode into a pod.link share link")]
#[command(version)]
struct Args {
    /// Name of the show, as listed in the podcast directory
    show: String,

    /// Title of the episode (exact or abbreviated)
    episode: String,

    /// Podcast directory search endpoint
    #[arg(long, default_value = podlink_resolver::directory::DEFAULT_DIRECTORY_URL)]
    directory_url: String,

    /// Directory storefront country code (e.g. "us", "de")
    #[arg(long)]
    country: Option<String>,

    /// Maximum number of directory results to consider
    #[arg(short, long, default_value = "10")]
    limit: u32,

    /// Number of episode titles to suggest when no episode matches
    #[arg(long, default_value = "5")]
    hints: usize,

    /// Print the JSON response payload instead of human-readable output
    #[arg(long)]
    json: bool,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn options(&self) -> ResolveOptions {
        ResolveOptions {
            directory_url: self.directory_url.clone(),
            country: self.country.clone(),
            search_limit: self.limit,
            hint_limit: self.hints,
            ..Default::default()
        }
    }
}

/// Progress reporter using an indicatif spinner for terminal output
struct SpinnerReporter {
    spinner: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { spinner }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::SearchingDirectory { query } => {
                self.spinner
                    .set_message(format!("{SEARCH}Searching directory: {}", query.cyan()));
            }

            ProgressEvent::ShowSelected {
                show_id,
                show_name,
                match_kind,
            } => {
                self.spinner.println(format!(
                    "{HEADPHONES}{} ({}, {} match)",
                    show_name.bold().green(),
                    show_id.to_string().dimmed(),
                    match_kind.as_str().yellow()
                ));
            }

            ProgressEvent::FetchingFeed { url } => {
                self.spinner
                    .set_message(format!("{SEARCH}Fetching feed: {}", url.cyan()));
            }

            ProgressEvent::FeedParsed {
                show_name,
                total_episodes,
            } => {
                self.spinner.set_message(format!(
                    "{HEADPHONES}{} • {} episodes",
                    show_name.bold().green(),
                    total_episodes.to_string().cyan()
                ));
            }

            ProgressEvent::EpisodeMatched {
                episode_title,
                match_kind,
            } => {
                self.spinner.println(format!(
                    "{SUCCESS}{} ({} match)",
                    truncate_title(&episode_title, 60).green(),
                    match_kind.as_str().yellow()
                ));
            }

            ProgressEvent::EpisodeNotMatched { target_title } => {
                self.spinner.println(format!(
                    "{FAILURE}No episode matching {}",
                    target_title.red()
                ));
            }

            ProgressEvent::LinkBuilt { .. } => {
                self.spinner.finish_and_clear();
            }
        }
    }
}

fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() <= max_len {
        title.to_string()
    } else {
        let truncated: String = title.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn print_failure(err: &ResolveError) {
    eprintln!("\n{FAILURE}{}", err.to_string().red().bold());
    eprintln!(
        "{}",
        format!("Failed while {}", err.stage().describe()).dimmed()
    );

    if let ResolveError::EpisodeNotFound { available, .. } = err
        && !available.is_empty()
    {
        eprintln!("\n{}", "Available episodes:".yellow().bold());
        for title in available {
            eprintln!("  {}{}", CROSS, title);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let options = args.options();
    let client = ReqwestClient::new();

    let request = match ResolveRequest::new(args.show.as_str(), args.episode.as_str()) {
        Ok(request) => request,
        Err(err) if args.json => {
            let response = HostResponse::from(err);
            println!("{}", response.to_json().context("Failed to encode response")?);
            std::process::exit(1);
        }
        Err(err) => return Err(err).context("Invalid arguments"),
    };

    let spinner = (!args.quiet && !args.json).then(|| Arc::new(SpinnerReporter::new()));
    let reporter: SharedProgressReporter = match &spinner {
        Some(spinner) => spinner.clone() as SharedProgressReporter,
        None => NoopReporter::shared(),
    };

    let result = resolve_link(&client, &request, &options, reporter).await;

    if let Some(spinner) = &spinner {
        spinner.finish();
    }

    if args.json {
        let response = HostResponse::from(result);
        println!("{}", response.to_json().context("Failed to encode response")?);
        if !response.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match result {
        Ok(link) => {
            if args.quiet {
                println!("{}", link.url);
            } else {
                println!("\n{LINK}{}\n", link.url.bold().cyan());
            }
            Ok(())
        }
        Err(err) => {
            print_failure(&err);
            std::process::exit(1);
        }
    }
}
