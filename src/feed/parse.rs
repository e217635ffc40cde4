// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::FeedError;

/// An episode's `<guid>` as found in the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guid {
    /// A guid that may be read as a permalink, the RSS default.
    ///
    /// Covers `<guid>abc</guid>` and `<guid isPermaLink="true">abc</guid>`
    /// alike; the parser does not report whether the attribute was written.
    Plain(String),
    /// A guid declared opaque with `isPermaLink="false"`
    Tagged { text: String },
}

impl Guid {
    pub(crate) fn from_rss(guid: &rss::Guid) -> Self {
        let text = guid.value().to_string();
        if guid.is_permalink() {
            Guid::Plain(text)
        } else {
            Guid::Tagged { text }
        }
    }

    /// The identifier text, discarding any wrapping structure
    pub fn as_text(&self) -> &str {
        match self {
            Guid::Plain(text) | Guid::Tagged { text } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Guid::Plain(text) | Guid::Tagged { text } => text,
        }
    }
}

/// A single episode entry of a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRecord {
    pub title: String,
    /// Unique-per-episode token; empty when the item carries no usable guid
    pub identifier: String,
}

impl EpisodeRecord {
    pub fn new(title: impl Into<String>, guid: Option<Guid>) -> Self {
        Self {
            title: title.into(),
            identifier: guid.map(Guid::into_text).unwrap_or_default(),
        }
    }

    /// The identifier, or `MissingIdentifier` when it is missing or blank.
    ///
    /// Checked only for the episode a link is built for, so one item without
    /// a guid does not make the rest of the feed unresolvable.
    pub fn checked_identifier(&self) -> Result<&str, FeedError> {
        if self.identifier.trim().is_empty() {
            return Err(FeedError::MissingIdentifier {
                title: self.title.clone(),
            });
        }
        Ok(&self.identifier)
    }
}

/// Parse RSS feed XML bytes into a flat list of episode records, in feed order
pub fn parse_feed(xml_bytes: &[u8]) -> Result<Vec<EpisodeRecord>, FeedError> {
    let channel = rss::Channel::read_from(xml_bytes)?;

    Ok(channel.items().iter().map(parse_episode).collect())
}

fn parse_episode(item: &rss::Item) -> EpisodeRecord {
    let title = item.title().unwrap_or_default();
    EpisodeRecord::new(title, item.guid().map(Guid::from_rss))
}
