// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;
use url::Url;

use crate::error::DirectoryError;
use crate::http::HttpClient;
use crate::matching::{MatchOutcome, find_match};

/// iTunes Search API endpoint
pub const DEFAULT_DIRECTORY_URL: &str = "https://itunes.apple.com/search";

/// Number of directory results considered when picking a show
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// A show returned by a directory search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryCandidate {
    pub id: u64,
    pub display_name: String,
    pub feed_url: Option<String>,
}

impl DirectoryCandidate {
    /// The feed URL, if present and non-empty
    pub fn feed_url(&self) -> Option<&str> {
        self.feed_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Parameters of a single directory search
#[derive(Debug, Clone)]
pub struct SearchQuery<'a> {
    pub base_url: &'a str,
    pub term: &'a str,
    pub limit: u32,
    /// Two-letter storefront code; the directory default is used when absent
    pub country: Option<&'a str>,
}

impl<'a> SearchQuery<'a> {
    pub fn new(term: &'a str) -> Self {
        Self {
            base_url: DEFAULT_DIRECTORY_URL,
            term,
            limit: DEFAULT_SEARCH_LIMIT,
            country: None,
        }
    }

    /// Full request URL with the query string applied
    pub fn to_url(&self) -> Result<Url, DirectoryError> {
        let limit = self.limit.to_string();
        let mut params = vec![
            ("term", self.term),
            ("media", "podcast"),
            ("entity", "podcast"),
            ("limit", limit.as_str()),
        ];
        if let Some(country) = self.country {
            params.push(("country", country));
        }

        Ok(Url::parse_with_params(self.base_url, &params)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    collection_id: Option<u64>,
    collection_name: Option<String>,
    track_name: Option<String>,
    feed_url: Option<String>,
}

impl SearchResult {
    fn into_candidate(self) -> Option<DirectoryCandidate> {
        let display_name = self.collection_name.or(self.track_name)?;
        Some(DirectoryCandidate {
            id: self.collection_id?,
            display_name,
            feed_url: self.feed_url,
        })
    }
}

/// Decode a directory search response into candidates, in directory order.
///
/// Results lacking an id or a name cannot be linked and are dropped.
pub fn decode_search_response(body: &[u8]) -> Result<Vec<DirectoryCandidate>, DirectoryError> {
    let response: SearchResponse = serde_json::from_slice(body)?;

    Ok(response
        .results
        .into_iter()
        .filter_map(SearchResult::into_candidate)
        .collect())
}

/// Pick the show for `show_name` from directory results.
///
/// Exact normalized match first, then the first fuzzy match, and finally the
/// first result in the directory's own relevance order.
pub fn select_candidate<'a>(
    candidates: &'a [DirectoryCandidate],
    show_name: &str,
) -> MatchOutcome<&'a DirectoryCandidate> {
    find_match(candidates, show_name, |c| c.display_name.as_str()).or_first(candidates.first())
}

/// Search the directory and select the best matching show
pub async fn search_show<C: HttpClient>(
    client: &C,
    query: &SearchQuery<'_>,
) -> Result<MatchOutcome<DirectoryCandidate>, DirectoryError> {
    let url = query.to_url()?;

    let body = client
        .get_bytes(url.as_str())
        .await
        .map_err(|e| DirectoryError::Unavailable { source: e })?;

    let candidates = decode_search_response(&body)?;

    match select_candidate(&candidates, query.term) {
        MatchOutcome::NoMatch => Err(DirectoryError::NotFound {
            query: query.term.to_string(),
        }),
        outcome => Ok(outcome.map(DirectoryCandidate::clone)),
    }
}
