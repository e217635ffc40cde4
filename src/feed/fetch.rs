// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bytes::Bytes;
use url::Url;

use crate::error::FeedError;
use crate::http::HttpClient;

use super::parse::{EpisodeRecord, parse_feed};

/// Fetch raw feed bytes from a URL (without parsing)
pub async fn fetch_feed_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Bytes, FeedError> {
    let feed_url = Url::parse(url)?;

    client
        .get_bytes(feed_url.as_str())
        .await
        .map_err(|e| FeedError::FetchFailed {
            url: url.to_string(),
            source: e,
        })
}

/// Fetch a feed and parse it into episode records
pub async fn fetch_episodes<C: HttpClient>(
    client: &C,
    url: &str,
) -> Result<Vec<EpisodeRecord>, FeedError> {
    let bytes = fetch_feed_bytes(client, url).await?;
    parse_feed(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::http::mock::MockHttpClient;

    const FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Test</title>
    <item>
      <title>Latest Episode</title>
      <guid>guid-1</guid>
    </item>
  </channel>
</rss>"#;

    #[tokio::test]
    async fn fetch_episodes_parses_fetched_feed() {
        let client = MockHttpClient::new().with_body("https://example.test/feed", FEED);

        let episodes = fetch_episodes(&client, "https://example.test/feed")
            .await
            .unwrap();

        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].identifier, "guid-1");
    }

    #[tokio::test]
    async fn fetch_reports_http_status_failures() {
        let client = MockHttpClient::new().with_status("https://example.test/feed", 410);

        let result = fetch_episodes(&client, "https://example.test/feed").await;
        assert!(matches!(
            result,
            Err(FeedError::FetchFailed { url, .. }) if url == "https://example.test/feed"
        ));
    }

    #[tokio::test]
    async fn fetch_rejects_invalid_url() {
        let client = MockHttpClient::new();

        let result = fetch_episodes(&client, "not a url").await;
        assert!(matches!(result, Err(FeedError::InvalidUrl(_))));
    }
}
