//! Notifications emitted for the presentation layer.

extern crate alloc;

use alloc::string::String;
use core::time::Duration;

use crate::card::Rank;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Informational.
    Info,
    /// Something good happened.
    Success,
    /// Something the player should notice.
    Warn,
    /// Something went wrong.
    Error,
}

/// An event queued by a round state machine.
///
/// Events are delivered in the order they were produced. A [`Event::Pause`]
/// marks where the presentation should wait before showing what follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A short message for a toast or status line.
    Notice {
        /// How prominent the message is.
        severity: Severity,
        /// Message text.
        text: String,
    },
    /// An owner completed a book.
    BookCompleted {
        /// Owner name.
        owner: String,
        /// Completed rank.
        rank: Rank,
    },
    /// A cosmetic delay.
    Pause(Duration),
}

impl Event {
    /// Builds a notice.
    #[must_use]
    pub fn notice(severity: Severity, text: impl Into<String>) -> Self {
        Self::Notice {
            severity,
            text: text.into(),
        }
    }
}
