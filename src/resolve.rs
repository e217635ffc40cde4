// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::directory::{DEFAULT_DIRECTORY_URL, DEFAULT_SEARCH_LIMIT, SearchQuery, search_show};
use crate::episode::{DEFAULT_HINT_LIMIT, episode_hints, resolve_episode};
use crate::error::{DirectoryError, FeedError, ResolveError};
use crate::feed::fetch_episodes;
use crate::http::HttpClient;
use crate::link::{DEFAULT_LINK_BASE, build_link_with_base, encode_identifier};
use crate::payload::ResolveRequest;
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// Options for link resolution
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Directory search endpoint
    pub directory_url: String,
    /// Directory storefront (two-letter country code)
    pub country: Option<String>,
    /// Maximum number of directory results to consider
    pub search_limit: u32,
    /// Maximum number of episode titles returned as hints
    pub hint_limit: usize,
    /// Base of the generated share links
    pub link_base: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            country: None,
            search_limit: DEFAULT_SEARCH_LIMIT,
            hint_limit: DEFAULT_HINT_LIMIT,
            link_base: DEFAULT_LINK_BASE.to_string(),
        }
    }
}

/// Result of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub url: String,
    pub show_id: u64,
    pub show_name: String,
    pub episode_title: String,
    pub episode_identifier: String,
}

/// Step of the resolution pipeline a failure happened in
///
/// Each stage is named after what the pipeline holds on entering it; a
/// successful run ends with a [`ResolvedLink`] rather than a final stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    ShowResolved,
    FeedRetrieved,
    EpisodeResolved,
}

impl Stage {
    /// What the pipeline is doing while in this stage
    pub fn describe(self) -> &'static str {
        match self {
            Stage::Start => "searching the directory",
            Stage::ShowResolved => "retrieving the feed",
            Stage::FeedRetrieved => "matching the episode",
            Stage::EpisodeResolved => "building the link",
        }
    }
}

fn classify_directory_error(err: DirectoryError) -> ResolveError {
    match err {
        DirectoryError::NotFound { query } => ResolveError::ShowNotFound { query },
        err @ (DirectoryError::Unavailable { .. } | DirectoryError::InvalidResponse(_)) => {
            ResolveError::DirectoryUnavailable { source: err }
        }
        err @ DirectoryError::InvalidUrl(_) => ResolveError::Unexpected {
            stage: Stage::Start,
            message: err.to_string(),
        },
    }
}

fn classify_feed_error(err: FeedError, show_name: &str) -> ResolveError {
    let show_name = show_name.to_string();
    match err {
        err @ (FeedError::FetchFailed { .. } | FeedError::InvalidUrl(_)) => {
            ResolveError::FeedUnavailable {
                show_name,
                source: err,
            }
        }
        err @ (FeedError::ParseFailed(_) | FeedError::MissingIdentifier { .. }) => {
            ResolveError::MalformedFeed {
                show_name,
                source: err,
            }
        }
    }
}

/// Resolve a show name and episode title into a share link
///
/// This is the main entry point for the library. It:
/// 1. Searches the directory and picks the show
/// 2. Fetches and parses the show's feed
/// 3. Matches the episode by title
/// 4. Encodes the episode guid into the share link
///
/// Each step runs once; the first failure ends the resolution.
pub async fn resolve_link<C: HttpClient>(
    client: &C,
    request: &ResolveRequest,
    options: &ResolveOptions,
    reporter: SharedProgressReporter,
) -> Result<ResolvedLink, ResolveError> {
    // Start: find the show
    reporter.report(ProgressEvent::SearchingDirectory {
        query: request.show_name.clone(),
    });

    let query = SearchQuery {
        base_url: &options.directory_url,
        term: &request.show_name,
        limit: options.search_limit,
        country: options.country.as_deref(),
    };

    let outcome = search_show(client, &query)
        .await
        .map_err(classify_directory_error)?;

    let (show, match_kind) = match (outcome.kind(), outcome.into_match()) {
        (Some(kind), Some(show)) => (show, kind),
        _ => {
            return Err(ResolveError::ShowNotFound {
                query: request.show_name.clone(),
            });
        }
    };

    reporter.report(ProgressEvent::ShowSelected {
        show_id: show.id,
        show_name: show.display_name.clone(),
        match_kind,
    });

    // ShowResolved: fetch the feed
    let feed_url = show.feed_url().ok_or_else(|| ResolveError::NoFeedUrl {
        show_name: show.display_name.clone(),
    })?;

    reporter.report(ProgressEvent::FetchingFeed {
        url: feed_url.to_string(),
    });

    let episodes = fetch_episodes(client, feed_url)
        .await
        .map_err(|e| classify_feed_error(e, &show.display_name))?;

    reporter.report(ProgressEvent::FeedParsed {
        show_name: show.display_name.clone(),
        total_episodes: episodes.len(),
    });

    // FeedRetrieved: match the episode
    if episodes.is_empty() {
        return Err(ResolveError::NoEpisodes {
            show_name: show.display_name.clone(),
        });
    }

    let outcome = resolve_episode(&episodes, &request.episode_title);
    let (episode, match_kind) = match (outcome.kind(), outcome.into_match()) {
        (Some(kind), Some(episode)) => (episode, kind),
        _ => {
            reporter.report(ProgressEvent::EpisodeNotMatched {
                target_title: request.episode_title.clone(),
            });
            return Err(ResolveError::EpisodeNotFound {
                title: request.episode_title.clone(),
                show_name: show.display_name.clone(),
                available: episode_hints(&episodes, options.hint_limit),
            });
        }
    };

    reporter.report(ProgressEvent::EpisodeMatched {
        episode_title: episode.title.clone(),
        match_kind,
    });

    // EpisodeResolved: build the link
    let identifier = episode
        .checked_identifier()
        .map_err(|e| classify_feed_error(e, &show.display_name))?;
    let encoded = encode_identifier(identifier);
    let url = build_link_with_base(&options.link_base, show.id, &encoded);

    reporter.report(ProgressEvent::LinkBuilt { url: url.clone() });

    Ok(ResolvedLink {
        url,
        show_id: show.id,
        show_name: show.display_name,
        episode_title: episode.title.clone(),
        episode_identifier: identifier.to_string(),
    })
}
