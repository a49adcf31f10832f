//! Status line rendering and new-mail announcements.
//!
//! Pure formatting and dispatch decisions; holds no state of its own. The
//! host decides how directives and announcements are actually displayed.

use snapshot_core::PollResult;

/// Instruction for the host's status indicator.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StatusDirective {
    /// Set the status indicator to the rendered text.
    Set(String),

    /// Remove the status indicator entirely.
    Clear,
}

/// A user-visible new-mail announcement.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Announcement {
    /// Newly arrived message count.
    pub new: usize,

    /// Total unread message count.
    pub total: usize,
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "There are {} new email(s), {} total",
            self.new, self.total
        )
    }
}

/// A rendered status update for one poll.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StatusUpdate {
    /// What to do with the status indicator.
    pub directive: StatusDirective,

    /// Announcement to raise when new mail arrived.
    pub announcement: Option<Announcement>,
}

/// Render a poll result into a status update.
///
/// An empty mailbox clears the indicator and never announces. Otherwise the
/// template's `{new}` and `{cur}` keys are substituted with the new and
/// total counts, and an announcement is raised iff anything is new.
pub fn render(result: PollResult, status_format: &str) -> StatusUpdate {
    if result.total == 0 {
        return StatusUpdate {
            directive: StatusDirective::Clear,
            announcement: None,
        };
    }

    let text = status_format
        .replace("{new}", &result.new.to_string())
        .replace("{cur}", &result.total.to_string());

    let announcement = (result.new > 0).then_some(Announcement {
        new: result.new,
        total: result.total,
    });

    StatusUpdate {
        directive: StatusDirective::Set(text),
        announcement,
    }
}
