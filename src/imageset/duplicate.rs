//! The duplicate-key construction error.

use std::borrow::Cow;
use std::sync::Arc;

use serde::Serialize;

use super::context::ErrorContext;
use super::descriptor::Descriptor;
use super::key::GroupingKey;
use crate::error::{Error, Result};

/// Minimum number of descriptors that make a real duplicate.
pub const MIN_CONFLICTING_DESCRIPTORS: usize = 2;

/// Reports that more than one descriptor of a channel resolved to the same
/// grouping key when exactly one was expected.
///
/// The error owns the list of conflicting descriptors but shares the
/// descriptors themselves with whoever built it. It never mutates them.
#[derive(Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{context}, {} conflicting descriptors", .conflicting_descriptors.len())]
pub struct DuplicateKeyError<D> {
    #[serde(flatten)]
    context: ErrorContext,
    conflicting_descriptors: Vec<Arc<D>>,
}

impl<D> DuplicateKeyError<D> {
    /// Creates the error from whatever the caller supplies.
    ///
    /// No validation is performed: empty or single-element descriptor lists
    /// are kept as given. Use [`DuplicateKeyError::checked`] to reject them.
    pub fn new(
        channel_name: impl Into<String>,
        message: impl Into<String>,
        key: impl Into<GroupingKey>,
        conflicting_descriptors: impl IntoIterator<Item = Arc<D>>,
    ) -> Self {
        Self {
            context: ErrorContext::new(channel_name, message, key),
            conflicting_descriptors: conflicting_descriptors.into_iter().collect(),
        }
    }

    /// Creates the error, requiring a channel name and at least
    /// [`MIN_CONFLICTING_DESCRIPTORS`] descriptors.
    pub fn checked(
        channel_name: impl Into<String>,
        message: impl Into<String>,
        key: impl Into<GroupingKey>,
        conflicting_descriptors: impl IntoIterator<Item = Arc<D>>,
    ) -> Result<Self> {
        let error = Self::new(channel_name, message, key, conflicting_descriptors);

        if error.channel_name().is_empty() {
            log::warn!(
                "Rejected duplicate key {} without a channel name",
                error.key()
            );
            return Err(Error::EmptyChannelName);
        }

        let found = error.conflict_count();
        if found < MIN_CONFLICTING_DESCRIPTORS {
            log::warn!(
                "Rejected duplicate key {} in channel {}: only {} descriptor(s)",
                error.key(),
                error.channel_name(),
                found
            );
            return Err(Error::TooFewDescriptors {
                channel: error.context.channel_name().to_owned(),
                found,
                required: MIN_CONFLICTING_DESCRIPTORS,
            });
        }

        log::debug!(
            "Duplicate key {} in channel {}: {} descriptors",
            error.key(),
            error.channel_name(),
            found
        );
        Ok(error)
    }

    /// Returns the descriptors that mapped to the key, in the order given at
    /// construction.
    pub fn conflicting_descriptors(&self) -> &[Arc<D>] {
        &self.conflicting_descriptors
    }

    pub fn conflict_count(&self) -> usize {
        self.conflicting_descriptors.len()
    }

    /// Returns `true` if this exact descriptor instance is one of the
    /// contenders. Equal but distinct descriptors do not count.
    pub fn involves(&self, descriptor: &Arc<D>) -> bool {
        self.conflicting_descriptors
            .iter()
            .any(|d| Arc::ptr_eq(d, descriptor))
    }

    pub fn channel_name(&self) -> &str {
        self.context.channel_name()
    }

    pub fn message(&self) -> &str {
        self.context.message()
    }

    pub fn key(&self) -> &GroupingKey {
        self.context.key()
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    pub fn into_parts(self) -> (ErrorContext, Vec<Arc<D>>) {
        (self.context, self.conflicting_descriptors)
    }
}

impl<D: Descriptor> DuplicateKeyError<D> {
    /// Identities of the conflicting descriptors, e.g. their file paths.
    pub fn conflicting_identities(&self) -> impl Iterator<Item = Cow<'_, str>> + '_ {
        self.conflicting_descriptors.iter().map(|d| d.identity())
    }
}

// Cloning shares the descriptors, so `D` need not be `Clone`.
impl<D> Clone for DuplicateKeyError<D> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
            conflicting_descriptors: self.conflicting_descriptors.clone(),
        }
    }
}
