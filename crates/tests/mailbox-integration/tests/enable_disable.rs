//! Enable/disable state machine scenarios.

use std::time::Duration;

use check_loop::{EnableError, EnableParams, MailChecker};
use mailbox_locate::{DiscoverError, DiscoveryEnv, MailboxKind, MailboxLocator};
use status_render::{Announcement, StatusUpdate};
use tokio::sync::mpsc;

/// A login name that will not have a spool mailbox on any machine running
/// these tests.
const NO_SUCH_LOGNAME: &str = "no-such-user-mail-checker-tests";

fn params(locator: MailboxLocator) -> EnableParams {
    EnableParams {
        mailbox: Some(locator),
        interval: Duration::from_millis(20),
        status_format: "(Mail: {cur})".to_string(),
    }
}

fn channel() -> (
    mpsc::UnboundedSender<StatusUpdate>,
    mpsc::UnboundedReceiver<StatusUpdate>,
) {
    mpsc::unbounded_channel()
}

async fn next_update(rx: &mut mpsc::UnboundedReceiver<StatusUpdate>) -> StatusUpdate {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for a status update")
        .expect("update channel closed")
}

#[tokio::test]
async fn enabling_polls_immediately_and_reports_everything_as_new() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    mailbox_integration::build_maildir(dir.path(), &["a", "b"], &[]);
    let locator = MailboxLocator {
        kind: MailboxKind::Maildir,
        path: dir.path().to_path_buf(),
    };

    let (tx, mut rx) = channel();
    let mut checker = MailChecker::default();
    checker
        .enable(params(locator), move |update| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(update);
            }
        })
        .expect("enable should succeed");

    assert!(checker.is_enabled());

    let update = next_update(&mut rx).await;
    assert_eq!(update.announcement, Some(Announcement { new: 2, total: 2 }));

    checker.disable();
    assert!(!checker.is_enabled());
}

#[tokio::test]
async fn a_disable_enable_cycle_discards_the_baseline() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    mailbox_integration::build_maildir(dir.path(), &["a", "b"], &[]);
    let locator = MailboxLocator {
        kind: MailboxKind::Maildir,
        path: dir.path().to_path_buf(),
    };

    let mut checker = MailChecker::default();

    let (tx, mut rx) = channel();
    checker
        .enable(params(locator.clone()), move |update| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(update);
            }
        })
        .expect("enable should succeed");
    let first = next_update(&mut rx).await;
    assert_eq!(first.announcement, Some(Announcement { new: 2, total: 2 }));

    checker.disable();

    // No stale baseline survives the cycle: the first poll after
    // re-enabling reports every present message as new again.
    let (tx, mut rx) = channel();
    checker
        .enable(params(locator), move |update| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(update);
            }
        })
        .expect("re-enable should succeed");
    let first_again = next_update(&mut rx).await;
    assert_eq!(
        first_again.announcement,
        Some(Announcement { new: 2, total: 2 })
    );

    checker.disable();
}

#[tokio::test]
async fn failed_discovery_leaves_the_checker_disabled() {
    let env = DiscoveryEnv {
        maildir: None,
        mail: None,
        logname: Some(NO_SUCH_LOGNAME.to_string()),
    };

    let mut checker = MailChecker::default();
    let error = checker
        .enable_with_env(
            EnableParams {
                mailbox: None,
                interval: Duration::from_millis(20),
                status_format: "(Mail: {cur})".to_string(),
            },
            &env,
            |_update| async {},
        )
        .expect_err("enable should fail without a mailbox");

    assert!(matches!(
        error,
        EnableError::Discover(DiscoverError::NotFound)
    ));
    assert!(!checker.is_enabled());
}

#[tokio::test]
async fn reenabling_while_enabled_restarts_the_session() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    mailbox_integration::build_maildir(dir.path(), &["a", "b"], &[]);
    let locator = MailboxLocator {
        kind: MailboxKind::Maildir,
        path: dir.path().to_path_buf(),
    };

    let mut checker = MailChecker::default();

    let (tx, mut rx) = channel();
    checker
        .enable(params(locator.clone()), move |update| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(update);
            }
        })
        .expect("enable should succeed");
    next_update(&mut rx).await;

    mailbox_integration::deliver(dir.path(), "c");

    let (tx, mut rx) = channel();
    checker
        .enable(params(locator), move |update| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(update);
            }
        })
        .expect("re-enable should succeed");

    let update = next_update(&mut rx).await;
    assert_eq!(update.announcement, Some(Announcement { new: 3, total: 3 }));

    checker.disable();
}
