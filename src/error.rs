use thiserror::Error;

use crate::resolve::Stage;

/// Errors returned by an [`HttpClient`](crate::http::HttpClient)
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}")]
    Status { status: u16 },
}

/// Errors that can occur when searching the podcast directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("No podcast found for '{query}'")]
    NotFound { query: String },

    #[error("Podcast directory unavailable: {source}")]
    Unavailable {
        #[source]
        source: HttpError,
    },

    #[error("Invalid directory URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode directory response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Errors that can occur when fetching or parsing RSS feeds
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to fetch feed from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: HttpError,
    },

    #[error("Failed to parse RSS feed: {0}")]
    ParseFailed(#[from] rss::Error),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Episode '{title}' has no identifier (guid)")]
    MissingIdentifier { title: String },
}

/// Errors for a malformed or incomplete resolve request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing or empty field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Classified outcome of a failed resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No podcast found for '{query}'")]
    ShowNotFound { query: String },

    #[error("Podcast '{show_name}' has no feed URL")]
    NoFeedUrl { show_name: String },

    #[error("Could not retrieve feed for '{show_name}': {source}")]
    FeedUnavailable {
        show_name: String,
        #[source]
        source: FeedError,
    },

    #[error("Could not read feed for '{show_name}': {source}")]
    MalformedFeed {
        show_name: String,
        #[source]
        source: FeedError,
    },

    #[error("Podcast '{show_name}' has no episodes")]
    NoEpisodes { show_name: String },

    #[error("No episode matching '{title}' in '{show_name}'")]
    EpisodeNotFound {
        title: String,
        show_name: String,
        /// Up to the configured number of feed titles, in feed order
        available: Vec<String>,
    },

    #[error("Podcast directory unavailable: {source}")]
    DirectoryUnavailable {
        #[source]
        source: DirectoryError,
    },

    #[error("Unexpected failure while {}: {message}", .stage.describe())]
    Unexpected { stage: Stage, message: String },
}

/// Flat error taxonomy surfaced to callers of the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    ShowNotFound,
    NoFeedUrl,
    FeedUnavailable,
    MalformedFeed,
    NoEpisodes,
    EpisodeNotFound,
    DirectoryUnavailable,
    Unexpected,
}

impl ErrorKind {
    /// Short machine-readable error code
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::ShowNotFound => "show_not_found",
            ErrorKind::NoFeedUrl => "no_feed_url",
            ErrorKind::FeedUnavailable => "feed_unavailable",
            ErrorKind::MalformedFeed => "malformed_feed",
            ErrorKind::NoEpisodes => "no_episodes",
            ErrorKind::EpisodeNotFound => "episode_not_found",
            ErrorKind::DirectoryUnavailable => "directory_unavailable",
            ErrorKind::Unexpected => "unexpected_error",
        }
    }

    /// HTTP-style status code for this kind of failure
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::ShowNotFound
            | ErrorKind::NoFeedUrl
            | ErrorKind::FeedUnavailable
            | ErrorKind::MalformedFeed
            | ErrorKind::NoEpisodes
            | ErrorKind::EpisodeNotFound => 404,
            ErrorKind::DirectoryUnavailable | ErrorKind::Unexpected => 500,
        }
    }
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::ShowNotFound { .. } => ErrorKind::ShowNotFound,
            ResolveError::NoFeedUrl { .. } => ErrorKind::NoFeedUrl,
            ResolveError::FeedUnavailable { .. } => ErrorKind::FeedUnavailable,
            ResolveError::MalformedFeed { .. } => ErrorKind::MalformedFeed,
            ResolveError::NoEpisodes { .. } => ErrorKind::NoEpisodes,
            ResolveError::EpisodeNotFound { .. } => ErrorKind::EpisodeNotFound,
            ResolveError::DirectoryUnavailable { .. } => ErrorKind::DirectoryUnavailable,
            ResolveError::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }
}

impl ResolveError {
    /// The pipeline stage the failure happened in
    pub fn stage(&self) -> Stage {
        match self {
            ResolveError::ShowNotFound { .. } | ResolveError::DirectoryUnavailable { .. } => {
                Stage::Start
            }
            ResolveError::MalformedFeed {
                source: FeedError::MissingIdentifier { .. },
                ..
            } => Stage::EpisodeResolved,
            ResolveError::NoFeedUrl { .. }
            | ResolveError::FeedUnavailable { .. }
            | ResolveError::MalformedFeed { .. } => Stage::ShowResolved,
            ResolveError::NoEpisodes { .. } | ResolveError::EpisodeNotFound { .. } => {
                Stage::FeedRetrieved
            }
            ResolveError::Unexpected { stage, .. } => *stage,
        }
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kinds_map_to_404() {
        for kind in [
            ErrorKind::ShowNotFound,
            ErrorKind::NoFeedUrl,
            ErrorKind::FeedUnavailable,
            ErrorKind::MalformedFeed,
            ErrorKind::NoEpisodes,
            ErrorKind::EpisodeNotFound,
        ] {
            assert_eq!(kind.status(), 404, "{:?}", kind);
        }
    }

    #[test]
    fn collaborator_failures_map_to_500() {
        assert_eq!(ErrorKind::DirectoryUnavailable.status(), 500);
        assert_eq!(ErrorKind::Unexpected.status(), 500);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ValidationError::MissingField("showName");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.kind().status(), 400);
    }

    #[test]
    fn episode_not_found_message_names_title_and_show() {
        let err = ResolveError::EpisodeNotFound {
            title: "Ep3".to_string(),
            show_name: "The Daily".to_string(),
            available: vec!["Ep1".to_string()],
        };
        assert_eq!(err.to_string(), "No episode matching 'Ep3' in 'The Daily'");
        assert_eq!(err.kind().code(), "episode_not_found");
    }

    #[test]
    fn unexpected_message_names_stage() {
        let err = ResolveError::Unexpected {
            stage: Stage::Start,
            message: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected failure while searching the directory: boom"
        );
        assert_eq!(err.stage(), Stage::Start);
    }

    #[test]
    fn missing_guid_fails_while_building_the_link() {
        let err = ResolveError::MalformedFeed {
            show_name: "The Daily".to_string(),
            source: FeedError::MissingIdentifier {
                title: "Old Episode".to_string(),
            },
        };
        assert_eq!(err.stage(), Stage::EpisodeResolved);

        let err = ResolveError::NoFeedUrl {
            show_name: "The Daily".to_string(),
        };
        assert_eq!(err.stage(), Stage::ShowResolved);
    }
}
