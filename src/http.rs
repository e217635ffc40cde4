// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::HttpError;

/// HTTP client abstraction for testability
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch the entire response body as bytes.
    ///
    /// Non-success statuses are reported as [`HttpError::Status`].
    async fn get_bytes(&self, url: &str) -> Result<Bytes, HttpError>;
}

/// Default HTTP client implementation using reqwest
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new ReqwestClient with default settings
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestClient with a custom reqwest::Client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_bytes(&self, url: &str) -> Result<Bytes, HttpError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::HashMap;

    use super::*;

    /// Canned response for a single URL
    #[derive(Clone)]
    pub enum MockResponse {
        Body(String),
        Status(u16),
    }

    /// HTTP client serving canned responses keyed by URL prefix
    #[derive(Clone, Default)]
    pub struct MockHttpClient {
        responses: HashMap<String, MockResponse>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_body(mut self, url_prefix: &str, body: &str) -> Self {
            self.responses
                .insert(url_prefix.to_string(), MockResponse::Body(body.to_string()));
            self
        }

        pub fn with_status(mut self, url_prefix: &str, status: u16) -> Self {
            self.responses
                .insert(url_prefix.to_string(), MockResponse::Status(status));
            self
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get_bytes(&self, url: &str) -> Result<Bytes, HttpError> {
            let response = self
                .responses
                .iter()
                .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
                .max_by_key(|(prefix, _)| prefix.len())
                .map(|(_, response)| response.clone())
                .unwrap_or(MockResponse::Status(404));

            match response {
                MockResponse::Body(body) => Ok(Bytes::from(body)),
                MockResponse::Status(status) => Err(HttpError::Status { status }),
            }
        }
    }
}
