//! Shared configuration types for mail-checker.

/// Default poll interval in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Default status line template.
pub const DEFAULT_STATUS_FORMAT: &str = "(Mail: {cur})";

/// Root configuration.
///
/// Every field has a default; the checker is fully usable with no
/// configuration file at all.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether mail checking starts enabled.
    #[cfg_attr(feature = "serde", serde(default = "default_enabled"))]
    pub enabled: bool,

    /// Seconds between polls.
    #[cfg_attr(feature = "serde", serde(default = "default_interval_secs"))]
    pub interval_secs: u64,

    /// Status line template; `{new}` and `{cur}` are substituted with the
    /// new and total counts.
    #[cfg_attr(feature = "serde", serde(default = "default_status_format"))]
    pub status_format: String,

    /// Explicit mailbox override; discovered from the environment when
    /// absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mailbox: Option<MailboxConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            interval_secs: default_interval_secs(),
            status_format: default_status_format(),
            mailbox: None,
        }
    }
}

/// An explicitly configured mailbox.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub struct MailboxConfig {
    /// The store format at the path.
    pub kind: MailboxKindConfig,

    /// Path to the archive file or maildir root.
    pub path: std::path::PathBuf,
}

/// Supported mailbox kinds.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MailboxKindConfig {
    /// Single-file mbox archive.
    Mbox,

    /// Maildir directory tree.
    Maildir,
}

fn default_enabled() -> bool {
    true
}

fn default_interval_secs() -> u64 {
    DEFAULT_INTERVAL_SECS
}

fn default_status_format() -> String {
    DEFAULT_STATUS_FORMAT.to_string()
}
