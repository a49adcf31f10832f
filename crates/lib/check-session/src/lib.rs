//! Poll session state and the read → diff → store cycle.

use mailbox_locate::MailboxLocator;
use snapshot_core::{MailSnapshot, PollResult, diff};

/// A single mailbox-checking session.
///
/// Owns the previous snapshot. A session is created fresh on every enable
/// and discarded on disable, so the baseline never survives a toggle: the
/// first poll of a new session reports every present message as new.
#[derive(Debug)]
pub struct CheckSession {
    /// Where to read from. Fixed for the session's lifetime.
    locator: MailboxLocator,

    /// Snapshot taken by the previous poll.
    prev: MailSnapshot,
}

impl CheckSession {
    /// Start a session with an empty baseline.
    pub fn new(locator: MailboxLocator) -> Self {
        Self {
            locator,
            prev: MailSnapshot::new(),
        }
    }

    /// The locator this session reads from.
    pub fn locator(&self) -> &MailboxLocator {
        &self.locator
    }

    /// Run one poll cycle: read, diff, store the new baseline.
    ///
    /// This is the poll boundary for read failures: a failed read is logged
    /// here, once, and counts as an empty mailbox for this poll. The session
    /// stays usable and the next tick retries naturally. The baseline is
    /// replaced unconditionally, including when the current snapshot is
    /// empty.
    pub async fn poll(&mut self) -> PollResult {
        let curr = match mailbox_read::read(&self.locator).await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::error!(
                    mailbox_kind = ?self.locator.kind,
                    mailbox_path = %self.locator.path.display(),
                    %error,
                    "mailbox read failed, reporting an empty snapshot for this poll"
                );
                MailSnapshot::new()
            }
        };

        let result = diff(&curr, &self.prev);
        self.prev = curr;
        result
    }
}
