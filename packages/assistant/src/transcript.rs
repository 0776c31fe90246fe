//! In-memory chat transcript with a monotonic sequence guard.
//!
//! The transcript is the only state that outlives a single query-response
//! cycle, and it lives only as long as the session — nothing is persisted.
//!
//! Queries run independently; two submitted in quick succession can
//! resolve out of order. Each user entry is issued a sequence number, and
//! an assistant reply is appended only if its query is still the latest —
//! a stale in-flight response cannot clobber a newer exchange.

use chrono::Utc;
use urban_pulse_assistant_models::{ChatEntry, Role};

/// An append-only ordered chat transcript.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
    latest_query: u64,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user query and returns its sequence number.
    ///
    /// The returned number must be handed back to [`push_assistant`]
    /// alongside the eventual response.
    ///
    /// [`push_assistant`]: Self::push_assistant
    pub fn push_user(&mut self, text: impl Into<String>) -> u64 {
        self.latest_query += 1;
        self.entries.push(ChatEntry {
            role: Role::User,
            text: text.into(),
            timestamp: Utc::now(),
        });
        self.latest_query
    }

    /// Appends an assistant reply for the query with sequence `seq`.
    ///
    /// Returns `false` (and appends nothing) when a newer query has been
    /// issued since — the response is stale and is dropped.
    pub fn push_assistant(&mut self, seq: u64, text: impl Into<String>) -> bool {
        if seq != self.latest_query {
            log::debug!(
                "Dropping stale assistant response for query {seq} (latest is {})",
                self.latest_query
            );
            return false;
        }
        self.entries.push(ChatEntry {
            role: Role::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        });
        true
    }

    /// The transcript entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
