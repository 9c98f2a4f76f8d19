//! The family of image-set construction errors.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::context::ErrorContext;
use super::duplicate::DuplicateKeyError;
use super::key::GroupingKey;

/// The kind of an [`ImageSetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSetErrorKind {
    /// More than one descriptor of a channel has the same key.
    DuplicateKey,
    /// A channel has no descriptor for a key that other channels have.
    Missing,
}

impl fmt::Display for ImageSetErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey => write!(f, "duplicate key"),
            Self::Missing => write!(f, "missing image"),
        }
    }
}

/// An error that prevented an image set from being built for one key.
#[derive(Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageSetError<D> {
    /// Two or more descriptors share the grouping key.
    #[error(transparent)]
    DuplicateKey(DuplicateKeyError<D>),
    /// No descriptor has the grouping key.
    #[error("{0}")]
    Missing(ErrorContext),
}

impl<D> ImageSetError<D> {
    pub fn duplicate(
        channel_name: impl Into<String>,
        message: impl Into<String>,
        key: impl Into<GroupingKey>,
        conflicting_descriptors: impl IntoIterator<Item = Arc<D>>,
    ) -> Self {
        Self::DuplicateKey(DuplicateKeyError::new(
            channel_name,
            message,
            key,
            conflicting_descriptors,
        ))
    }

    pub fn missing(
        channel_name: impl Into<String>,
        message: impl Into<String>,
        key: impl Into<GroupingKey>,
    ) -> Self {
        Self::Missing(ErrorContext::new(channel_name, message, key))
    }

    pub fn kind(&self) -> ImageSetErrorKind {
        match self {
            Self::DuplicateKey(_) => ImageSetErrorKind::DuplicateKey,
            Self::Missing(_) => ImageSetErrorKind::Missing,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::DuplicateKey(error) => error.context(),
            Self::Missing(context) => context,
        }
    }

    pub fn channel_name(&self) -> &str {
        self.context().channel_name()
    }

    pub fn message(&self) -> &str {
        self.context().message()
    }

    pub fn key(&self) -> &GroupingKey {
        self.context().key()
    }

    pub fn as_duplicate(&self) -> Option<&DuplicateKeyError<D>> {
        match self {
            Self::DuplicateKey(error) => Some(error),
            Self::Missing(_) => None,
        }
    }

    pub fn into_duplicate(self) -> Option<DuplicateKeyError<D>> {
        match self {
            Self::DuplicateKey(error) => Some(error),
            Self::Missing(_) => None,
        }
    }
}

impl<D> From<DuplicateKeyError<D>> for ImageSetError<D> {
    fn from(error: DuplicateKeyError<D>) -> Self {
        Self::DuplicateKey(error)
    }
}

impl<D> Clone for ImageSetError<D> {
    fn clone(&self) -> Self {
        match self {
            Self::DuplicateKey(error) => Self::DuplicateKey(error.clone()),
            Self::Missing(context) => Self::Missing(context.clone()),
        }
    }
}
