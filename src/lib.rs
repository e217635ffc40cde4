pub mod directory;
pub mod episode;
pub mod error;
pub mod feed;
pub mod http;
pub mod link;
pub mod matching;
pub mod payload;
pub mod progress;
mod resolve;

// Re-export main types for convenience
pub use directory::{DirectoryCandidate, SearchQuery, search_show, select_candidate};
pub use episode::{episode_hints, resolve_episode};
pub use error::{
    DirectoryError, ErrorKind, FeedError, HttpError, ResolveError, ValidationError,
};
pub use feed::{EpisodeRecord, Guid, fetch_episodes, parse_feed};
pub use http::{HttpClient, ReqwestClient};
pub use link::{build_link, encode_identifier};
pub use matching::{MatchKind, MatchOutcome, matches, normalize};
pub use payload::{FailurePayload, HostResponse, ResolveRequest, SuccessPayload, handle_request};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use resolve::{ResolveOptions, ResolvedLink, Stage, resolve_link};
