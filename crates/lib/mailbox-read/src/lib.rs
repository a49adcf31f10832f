//! Snapshot reads dispatched by mailbox kind.

use mailbox_locate::{MailboxKind, MailboxLocator};
use snapshot_core::MailSnapshot;

/// Errors returned while reading a mailbox snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Mbox archive scan error.
    #[error("mbox scan error: {0}")]
    Mbox(#[source] mbox_scan::ScanError),

    /// Maildir tree scan error.
    #[error("maildir scan error: {0}")]
    Maildir(#[source] maildir_scan::ScanError),
}

/// Read the current snapshot of present, unread messages.
///
/// The locator's kind selects the matching reader; the synchronous file
/// walk runs on the blocking pool.
pub async fn read(locator: &MailboxLocator) -> Result<MailSnapshot, ReadError> {
    let path = locator.path.clone();

    match locator.kind {
        MailboxKind::Mbox => tokio::task::spawn_blocking(move || mbox_scan::scan(&path))
            .await
            .unwrap()
            .map_err(ReadError::Mbox),
        MailboxKind::Maildir => tokio::task::spawn_blocking(move || maildir_scan::scan(&path))
            .await
            .unwrap()
            .map_err(ReadError::Maildir),
    }
}
