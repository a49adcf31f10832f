//! Mailbox locators and the environment discovery policy.

use std::path::{Path, PathBuf};

/// The kind of local mail store a locator points at.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MailboxKind {
    /// Single-file mbox archive.
    Mbox,

    /// Maildir directory tree.
    Maildir,
}

/// A resolved local mailbox.
///
/// Immutable once a checking session starts.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MailboxLocator {
    /// Which store format the path points at.
    pub kind: MailboxKind,

    /// Path to the archive file or maildir root.
    pub path: PathBuf,
}

/// Subfolders a maildir must contain to be usable.
const MAILDIR_SUBFOLDERS: [&str; 2] = ["new", "cur"];

/// Spool directories searched when no environment variable resolves.
const SPOOL_DIRS: [&str; 4] = [
    "/var/spool/mail",
    "/usr/spool/mail",
    "/var/mail",
    "/usr/mail",
];

/// Environment inputs to the discovery policy.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryEnv {
    /// Value of the maildir path variable (`MAILDIR`).
    pub maildir: Option<PathBuf>,

    /// Value of the archive path variable (`MAIL`).
    pub mail: Option<PathBuf>,

    /// Value of the login name variable (`LOGNAME`).
    pub logname: Option<String>,
}

impl DiscoveryEnv {
    /// Read the discovery variables from the process environment.
    pub fn from_process() -> Result<Self, DiscoverError> {
        Ok(Self {
            maildir: envfury::maybe("MAILDIR").map_err(DiscoverError::Env)?,
            mail: envfury::maybe("MAIL").map_err(DiscoverError::Env)?,
            logname: envfury::maybe("LOGNAME").map_err(DiscoverError::Env)?,
        })
    }
}

/// Errors returned while discovering a mailbox.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    /// Discovery env var reading error.
    #[error("discovery env var read: {0}")]
    Env(#[source] envfury::Error<envfury::ValueError<std::convert::Infallible>>),

    /// The maildir path exists but lacks a required subfolder.
    #[error("maildir {path} is missing its required '{subfolder}' subfolder")]
    MissingSubfolder {
        /// Path to the maildir root.
        path: PathBuf,

        /// The subfolder that was not found.
        subfolder: &'static str,
    },

    /// No usable mailbox was found anywhere.
    #[error("no mailbox found; set the MAIL or MAILDIR environment variable")]
    NotFound,
}

/// Discover a mailbox from pre-read environment inputs.
///
/// Preference order: a valid maildir named by the maildir variable, then an
/// mbox named by the archive variable, then the spool directories joined
/// with the login name. A maildir path that exists but lacks a required
/// subfolder fails discovery outright rather than falling back.
pub fn discover(env: &DiscoveryEnv) -> Result<MailboxLocator, DiscoverError> {
    if let Some(maildir) = env.maildir.as_deref() {
        if maildir.is_dir() {
            validate_maildir(maildir)?;
            return Ok(MailboxLocator {
                kind: MailboxKind::Maildir,
                path: maildir.to_path_buf(),
            });
        }
    }

    if let Some(mail) = env.mail.as_deref() {
        if mail.is_file() {
            return Ok(MailboxLocator {
                kind: MailboxKind::Mbox,
                path: mail.to_path_buf(),
            });
        }
    }

    if let Some(logname) = env.logname.as_deref() {
        for candidate in spool_candidates(logname) {
            if candidate.is_file() {
                return Ok(MailboxLocator {
                    kind: MailboxKind::Mbox,
                    path: candidate,
                });
            }
        }
    }

    Err(DiscoverError::NotFound)
}

/// Discover a mailbox from the process environment.
pub fn discover_from_env() -> Result<MailboxLocator, DiscoverError> {
    discover(&DiscoveryEnv::from_process()?)
}

/// Check that a maildir root contains the required subfolders.
pub fn validate_maildir(path: &Path) -> Result<(), DiscoverError> {
    for subfolder in MAILDIR_SUBFOLDERS {
        if !path.join(subfolder).is_dir() {
            return Err(DiscoverError::MissingSubfolder {
                path: path.to_path_buf(),
                subfolder,
            });
        }
    }

    Ok(())
}

/// Returns an iterator over conventional spool mailbox paths for a login
/// name, in search order.
pub fn spool_candidates(logname: &str) -> impl Iterator<Item = PathBuf> {
    SPOOL_DIRS
        .into_iter()
        .map(move |dir| Path::new(dir).join(logname))
}
