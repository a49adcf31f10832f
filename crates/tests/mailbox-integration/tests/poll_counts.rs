//! End-to-end poll scenarios over fixture mailboxes.

use check_session::CheckSession;
use mailbox_locate::{MailboxKind, MailboxLocator};
use snapshot_core::PollResult;
use status_render::{Announcement, StatusDirective};

fn maildir_locator(root: &std::path::Path) -> MailboxLocator {
    MailboxLocator {
        kind: MailboxKind::Maildir,
        path: root.to_path_buf(),
    }
}

#[tokio::test]
async fn arrivals_update_the_status_line_and_announce() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    mailbox_integration::build_maildir(dir.path(), &["a", "b"], &[]);

    let mut session = CheckSession::new(maildir_locator(dir.path()));

    // Baseline poll sees {a, b}.
    session.poll().await;

    // The mailbox moves to {b, c, d}.
    mailbox_integration::withdraw(dir.path(), "a");
    mailbox_integration::deliver(dir.path(), "c");
    mailbox_integration::deliver(dir.path(), "d");

    let result = session.poll().await;
    assert_eq!(result, PollResult { total: 3, new: 2 });

    let update = status_render::render(result, "(Mail: {cur})");
    assert_eq!(
        update.directive,
        StatusDirective::Set("(Mail: 3)".to_string())
    );

    let announcement = update.announcement.expect("announcement should be raised");
    assert_eq!(announcement, Announcement { new: 2, total: 3 });
    assert_eq!(
        announcement.to_string(),
        "There are 2 new email(s), 3 total"
    );
}

#[tokio::test]
async fn an_mbox_archive_polls_the_same_way() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("inbox.mbox");
    mailbox_integration::write_mbox(&path, &["one@example.com", "two@example.com"]);

    let mut session = CheckSession::new(MailboxLocator {
        kind: MailboxKind::Mbox,
        path: path.clone(),
    });

    let first = session.poll().await;
    assert_eq!(first, PollResult { total: 2, new: 2 });

    mailbox_integration::write_mbox(
        &path,
        &["one@example.com", "two@example.com", "three@example.com"],
    );

    let second = session.poll().await;
    assert_eq!(second, PollResult { total: 3, new: 1 });
}

#[tokio::test]
async fn seen_maildir_entries_never_enter_the_counts() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    mailbox_integration::build_maildir(dir.path(), &["fresh"], &["already-read"]);

    let mut session = CheckSession::new(maildir_locator(dir.path()));

    let result = session.poll().await;

    assert_eq!(result, PollResult { total: 1, new: 1 });
}

#[tokio::test]
async fn an_empty_mailbox_clears_the_status_and_stays_silent() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    mailbox_integration::build_maildir(dir.path(), &[], &[]);

    let mut session = CheckSession::new(maildir_locator(dir.path()));

    let result = session.poll().await;
    assert_eq!(result, PollResult { total: 0, new: 0 });

    let update = status_render::render(result, "(Mail: {cur})");
    assert_eq!(update.directive, StatusDirective::Clear);
    assert_eq!(update.announcement, None);
}
