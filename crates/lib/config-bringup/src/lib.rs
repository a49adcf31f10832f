//! Lift raw config into runtime checker parameters.

use std::time::Duration;

use mailbox_locate::{MailboxKind, MailboxLocator};

/// Convert config mailbox kind to a locator kind.
fn map_kind(kind: config_core::MailboxKindConfig) -> MailboxKind {
    match kind {
        config_core::MailboxKindConfig::Mbox => MailboxKind::Mbox,
        config_core::MailboxKindConfig::Maildir => MailboxKind::Maildir,
    }
}

/// Map an explicitly configured mailbox into a locator.
pub fn map_mailbox(mailbox: &config_core::MailboxConfig) -> MailboxLocator {
    MailboxLocator {
        kind: map_kind(mailbox.kind),
        path: mailbox.path.clone(),
    }
}

/// Build enable parameters from loaded config.
///
/// The mailbox stays `None` when not explicitly configured; the checker
/// then discovers one from the environment at enable time.
pub fn enable_params(config: &config_core::Config) -> check_loop::EnableParams {
    check_loop::EnableParams {
        mailbox: config.mailbox.as_ref().map(map_mailbox),
        interval: Duration::from_secs(config.interval_secs),
        status_format: config.status_format.clone(),
    }
}
