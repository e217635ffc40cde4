use crate::feed::EpisodeRecord;
use crate::matching::{MatchOutcome, find_match};

/// Number of feed titles offered as hints when no episode matches
pub const DEFAULT_HINT_LIMIT: usize = 5;

/// Select the episode whose title best matches `target_title`.
///
/// Exact normalized match first, then the first fuzzy match. There is no
/// first-of-list fallback: guessing an episode would produce a wrong link.
pub fn resolve_episode<'a>(
    episodes: &'a [EpisodeRecord],
    target_title: &str,
) -> MatchOutcome<&'a EpisodeRecord> {
    find_match(episodes, target_title, |e| e.title.as_str())
}

/// The first `limit` episode titles, verbatim and in feed order
pub fn episode_hints(episodes: &[EpisodeRecord], limit: usize) -> Vec<String> {
    episodes
        .iter()
        .take(limit)
        .map(|e| e.title.clone())
        .collect()
}
