//! Operator-facing feedback produced by domain operations.
//!
//! Operations do not fail for expected outcomes such as "nothing found" or
//! "user already exists"; they report a [`Notice`] instead and adapters show
//! it next to the refreshed view.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Feedback message attached to a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    level: NoticeLevel,
    #[schema(example = "Invité ajouté avec succès.")]
    message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// An operation completed and changed stored data.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    /// Nothing to show or do.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    /// The request was understood but had no effect.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    /// A recoverable failure; the operation continued with a fallback.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn level(&self) -> NoticeLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// A value together with the notices raised while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reported<T> {
    pub value: T,
    pub notices: Vec<Notice>,
}

impl<T> Reported<T> {
    /// Wrap a value with no notices.
    pub fn quiet(value: T) -> Self {
        Self {
            value,
            notices: Vec::new(),
        }
    }

    /// Wrap a value with a single notice.
    pub fn with_notice(value: T, notice: Notice) -> Self {
        Self {
            value,
            notices: vec![notice],
        }
    }

    /// Append a notice.
    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Transform the value, keeping the notices.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reported<U> {
        Reported {
            value: f(self.value),
            notices: self.notices,
        }
    }
}
