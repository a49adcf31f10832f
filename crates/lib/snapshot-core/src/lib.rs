//! Core snapshot types and the mailbox change detector.

use std::collections::HashSet;

/// An opaque, stable identifier for a single message.
///
/// Mbox messages derive this from a hash of their unique-id header; maildir
/// entries use their own storage key. Only ever compared for set membership,
/// never displayed in the status line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Wrap an already-stable key, such as a maildir entry key or a
    /// precomputed header digest.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw identifier value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The set of messages present and unread at one poll instant.
///
/// Replaced wholesale after every poll; never merged, never persisted.
pub type MailSnapshot = HashSet<MessageId>;

/// Counts derived from one poll.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PollResult {
    /// Messages currently present and unread.
    pub total: usize,

    /// Messages present now that were absent from the previous snapshot.
    pub new: usize,
}

/// Diff the current snapshot against the previous one.
///
/// Pure. The caller is responsible for replacing its stored previous
/// snapshot with `curr` after every poll, unconditionally.
pub fn diff(curr: &MailSnapshot, prev: &MailSnapshot) -> PollResult {
    PollResult {
        total: curr.len(),
        new: curr.difference(prev).count(),
    }
}
