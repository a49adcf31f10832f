//! Maildir tree scanning.
//!
//! Enumerates the `new` and `cur` subfolders of a maildir and yields the
//! storage key of every entry not yet flagged as seen. The directory
//! convention is consumed through the `maildir` crate; the entry key already
//! acts as a unique identifier, so no hashing is involved.

use std::path::{Path, PathBuf};

use snapshot_core::{MailSnapshot, MessageId};

/// Subfolders a maildir must contain to be scannable.
const REQUIRED_SUBFOLDERS: [&str; 2] = ["new", "cur"];

/// Errors returned while scanning a maildir tree.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The maildir root is missing a required subfolder.
    #[error("maildir {path} is missing its required '{subfolder}' subfolder")]
    MissingSubfolder {
        /// Path to the maildir root.
        path: PathBuf,

        /// The subfolder that was not found.
        subfolder: &'static str,
    },

    /// Failed to list a maildir subfolder.
    #[error("failed to list maildir {path}: {source}")]
    List {
        /// Path to the maildir root.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Scan a maildir tree into a snapshot of unread message identifiers.
pub fn scan(path: &Path) -> Result<MailSnapshot, ScanError> {
    for subfolder in REQUIRED_SUBFOLDERS {
        if !path.join(subfolder).is_dir() {
            return Err(ScanError::MissingSubfolder {
                path: path.to_path_buf(),
                subfolder,
            });
        }
    }

    let maildir = maildir::Maildir::from(path.to_path_buf());
    let mut snapshot = MailSnapshot::new();
    collect_unseen(maildir.list_new(), path, &mut snapshot)?;
    collect_unseen(maildir.list_cur(), path, &mut snapshot)?;
    Ok(snapshot)
}

/// Fold unseen entries from one subfolder listing into the snapshot.
fn collect_unseen(
    entries: maildir::MailEntries,
    path: &Path,
    snapshot: &mut MailSnapshot,
) -> Result<(), ScanError> {
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::List {
            path: path.to_path_buf(),
            source,
        })?;

        if entry.is_seen() {
            continue;
        }

        snapshot.insert(MessageId::from_key(entry.id()));
    }

    Ok(())
}
