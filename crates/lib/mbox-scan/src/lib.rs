//! Mbox archive scanning.
//!
//! Enumerates every message in a single-file mbox archive and derives one
//! opaque identifier per message from its unique-id header. The archive
//! format itself is consumed through `mail-parser`, never reimplemented.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use mail_parser::MessageParser;
use mail_parser::mailbox::mbox::MessageIterator;
use sha2::{Digest, Sha256};
use snapshot_core::{MailSnapshot, MessageId};

/// Errors returned while scanning an mbox archive.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Failed to open the archive file.
    #[error("failed to open mbox archive {path}: {source}")]
    Open {
        /// Path to the archive.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed while reading a message out of the archive.
    #[error("failed to read mbox archive {path}: {source}")]
    Read {
        /// Path to the archive.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Scan an mbox archive into a snapshot of message identifiers.
pub fn scan(path: &Path) -> Result<MailSnapshot, ScanError> {
    let file = std::fs::File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    scan_reader(std::io::BufReader::new(file)).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan mbox contents from a buffered reader.
///
/// Messages without a usable unique-id header are skipped with a warning;
/// they cannot be tracked across polls.
pub fn scan_reader<R>(reader: R) -> Result<MailSnapshot, std::io::Error>
where
    R: BufRead,
{
    let parser = MessageParser::default();
    let mut snapshot = MailSnapshot::new();

    for raw_message in MessageIterator::new(reader) {
        let raw_message = raw_message?;

        match parser
            .parse(raw_message.contents())
            .as_ref()
            .and_then(|message| message.message_id())
        {
            Some(unique_id) => {
                snapshot.insert(hash_unique_id(unique_id));
            }
            None => {
                tracing::warn!("skipping mbox message without a usable Message-ID header");
            }
        }
    }

    Ok(snapshot)
}

/// Map a unique-id header value through a deterministic one-way hash.
///
/// Case-sensitive and stable across polls as long as the header value is
/// unchanged.
pub fn hash_unique_id(unique_id: &str) -> MessageId {
    let digest = Sha256::digest(unique_id.as_bytes());
    MessageId::from_key(hex::encode(digest))
}
