mod fetch;
mod parse;

pub use fetch::{fetch_episodes, fetch_feed_bytes};
pub use parse::{EpisodeRecord, Guid, parse_feed};
