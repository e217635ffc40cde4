use std::sync::Arc;

use crate::matching::MatchKind;

/// Events emitted while resolving an episode link
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The podcast directory is being queried
    SearchingDirectory { query: String },

    /// A show was picked from the directory results
    ShowSelected {
        show_id: u64,
        show_name: String,
        match_kind: MatchKind,
    },

    /// Feed is being fetched from URL
    FetchingFeed { url: String },

    /// Feed has been parsed successfully
    FeedParsed {
        show_name: String,
        total_episodes: usize,
    },

    /// An episode matched the requested title
    EpisodeMatched {
        episode_title: String,
        match_kind: MatchKind,
    },

    /// No episode matched the requested title
    EpisodeNotMatched { target_title: String },

    /// The share link has been built
    LinkBuilt { url: String },
}

/// Trait for reporting progress events during resolution.
///
/// Implementations can use this to display spinners, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::Mutex;

    use super::*;

    /// Reporter that keeps every event for later inspection
    #[derive(Default)]
    pub struct RecordingReporter {
        events: Mutex<Vec<ProgressEvent>>,
    }

    impl RecordingReporter {
        pub fn events(&self) -> Vec<ProgressEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, event: ProgressEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingReporter;
    use super::*;

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter;

        reporter.report(ProgressEvent::SearchingDirectory {
            query: "The Daily".to_string(),
        });

        reporter.report(ProgressEvent::ShowSelected {
            show_id: 1200361736,
            show_name: "The Daily".to_string(),
            match_kind: MatchKind::Exact,
        });

        reporter.report(ProgressEvent::FetchingFeed {
            url: "https://example.com/feed.xml".to_string(),
        });

        reporter.report(ProgressEvent::FeedParsed {
            show_name: "The Daily".to_string(),
            total_episodes: 10,
        });

        reporter.report(ProgressEvent::EpisodeMatched {
            episode_title: "Episode 1".to_string(),
            match_kind: MatchKind::Fuzzy,
        });

        reporter.report(ProgressEvent::EpisodeNotMatched {
            target_title: "Episode 2".to_string(),
        });

        reporter.report(ProgressEvent::LinkBuilt {
            url: "https://pod.link/1/episode/YQ".to_string(),
        });
    }

    #[test]
    fn recording_reporter_keeps_events_in_order() {
        let reporter = RecordingReporter::default();

        reporter.report(ProgressEvent::SearchingDirectory {
            query: "a".to_string(),
        });
        reporter.report(ProgressEvent::FetchingFeed {
            url: "b".to_string(),
        });

        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ProgressEvent::SearchingDirectory { .. }));
        assert!(matches!(events[1], ProgressEvent::FetchingFeed { .. }));
    }
}
