//! # Notice State
//!
//! The message-box popup shown after every command.

use chrono::{DateTime, Local};

/// How a notice is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Success or informational outcome.
    Info,
    /// Rejected input or precondition; nothing changed.
    Warning,
    /// Storage failure.
    Error,
}

/// A popup message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
    pub at: DateTime<Local>,
}

impl Notice {
    /// Creates a notice stamped with the current local time.
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            level,
            title: title.into(),
            message: message.into(),
            at: Local::now(),
        }
    }

    /// Creates an info notice.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice::new(NoticeLevel::Info, title, message)
    }

    /// `HH:MM:SS` for the popup footer.
    pub fn timestamp(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}
