//! Fields shared by every image-set construction error.

use std::fmt;

use serde::Serialize;

use super::key::GroupingKey;

/// The channel, message and key every image-set construction error carries.
///
/// Each variant of [`super::ImageSetError`] embeds one of these. All fields
/// are set at construction and only exposed through getters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorContext {
    channel_name: String,
    message: String,
    key: GroupingKey,
}

impl ErrorContext {
    pub fn new(
        channel_name: impl Into<String>,
        message: impl Into<String>,
        key: impl Into<GroupingKey>,
    ) -> Self {
        Self {
            channel_name: channel_name.into(),
            message: message.into(),
            key: key.into(),
        }
    }

    /// The name of the channel in which the error occurred, e.g. `"DNA"`.
    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The grouping key the error is about.
    pub fn key(&self) -> &GroupingKey {
        &self.key
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "channel {}: {} (key {})",
            self.channel_name, self.message, self.key
        )
    }
}
