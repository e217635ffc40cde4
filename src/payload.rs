// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, ResolveError, ValidationError};
use crate::http::HttpClient;
use crate::progress::SharedProgressReporter;
use crate::resolve::{ResolveOptions, ResolvedLink, resolve_link};

/// A validated resolve request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    pub show_name: String,
    pub episode_title: String,
}

/// Request body as received, before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequest {
    show_name: Option<serde_json::Value>,
    episode_title: Option<serde_json::Value>,
}

fn required_text(
    value: Option<serde_json::Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(serde_json::Value::String(text)) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::MissingField(field)),
    }
}

impl ResolveRequest {
    /// Build a request, rejecting blank fields
    pub fn new(
        show_name: impl Into<String>,
        episode_title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let show_name = show_name.into();
        let episode_title = episode_title.into();

        if show_name.trim().is_empty() {
            return Err(ValidationError::MissingField("showName"));
        }
        if episode_title.trim().is_empty() {
            return Err(ValidationError::MissingField("episodeTitle"));
        }

        Ok(Self {
            show_name,
            episode_title,
        })
    }

    /// Parse and validate a JSON request body
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let raw: RawRequest = serde_json::from_slice(body)
            .map_err(|e| ValidationError::InvalidBody(e.to_string()))?;

        Ok(Self {
            show_name: required_text(raw.show_name, "showName")?,
            episode_title: required_text(raw.episode_title, "episodeTitle")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastSummary {
    pub name: String,
    pub apple_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeSummary {
    pub title: String,
    pub guid: String,
}

/// Body returned for a resolved link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPayload {
    pub podlink_url: String,
    pub podcast: PodcastSummary,
    pub episode: EpisodeSummary,
}

impl From<ResolvedLink> for SuccessPayload {
    fn from(link: ResolvedLink) -> Self {
        Self {
            podlink_url: link.url,
            podcast: PodcastSummary {
                name: link.show_name,
                apple_id: link.show_id,
            },
            episode: EpisodeSummary {
                title: link.episode_title,
                guid: link.episode_identifier,
            },
        }
    }
}

/// Body returned for a classified failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailurePayload {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_episodes: Option<Vec<String>>,
}

impl FailurePayload {
    fn new(kind: ErrorKind, message: String) -> Self {
        Self {
            error: kind.code().to_string(),
            message,
            available_episodes: None,
        }
    }
}

impl From<&ResolveError> for FailurePayload {
    fn from(err: &ResolveError) -> Self {
        let mut payload = Self::new(err.kind(), err.to_string());
        if let ResolveError::EpisodeNotFound { available, .. } = err {
            payload.available_episodes = Some(available.clone());
        }
        payload
    }
}

impl From<&ValidationError> for FailurePayload {
    fn from(err: &ValidationError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Success(SuccessPayload),
    Failure(FailurePayload),
}

/// Status code and body handed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl HostResponse {
    pub fn is_success(&self) -> bool {
        matches!(self.body, ResponseBody::Success(_))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.body)
    }
}

impl From<Result<ResolvedLink, ResolveError>> for HostResponse {
    fn from(result: Result<ResolvedLink, ResolveError>) -> Self {
        match result {
            Ok(link) => Self {
                status: 200,
                body: ResponseBody::Success(link.into()),
            },
            Err(err) => Self {
                status: err.kind().status(),
                body: ResponseBody::Failure((&err).into()),
            },
        }
    }
}

impl From<ValidationError> for HostResponse {
    fn from(err: ValidationError) -> Self {
        Self {
            status: err.kind().status(),
            body: ResponseBody::Failure((&err).into()),
        }
    }
}

/// Validate a raw JSON request body and resolve it.
///
/// Always yields a classified response; failures never escape as errors.
pub async fn handle_request<C: HttpClient>(
    client: &C,
    body: &[u8],
    options: &ResolveOptions,
    reporter: SharedProgressReporter,
) -> HostResponse {
    match ResolveRequest::from_json(body) {
        Ok(request) => resolve_link(client, &request, options, reporter).await.into(),
        Err(err) => err.into(),
    }
}
