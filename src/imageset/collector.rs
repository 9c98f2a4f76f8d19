//! Accumulation of construction errors across a matching pass.

use std::sync::Arc;

use serde::Serialize;

use super::duplicate::DuplicateKeyError;
use super::family::ImageSetError;
use super::key::GroupingKey;

/// All construction errors found during one matching pass, in the order
/// they were recorded.
#[derive(Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} image-set construction error(s){}", .errors.len(), error_lines(.errors))]
pub struct ImageSetErrors<D> {
    errors: Vec<ImageSetError<D>>,
}

impl<D> ImageSetErrors<D> {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn push(&mut self, error: impl Into<ImageSetError<D>>) {
        let error = error.into();
        log::debug!(
            "Recorded {} in channel {} for key {}",
            error.kind(),
            error.channel_name(),
            error.key()
        );
        self.errors.push(error);
    }

    /// Records that `conflicting_descriptors` share `key` in a channel.
    pub fn record_duplicate(
        &mut self,
        channel_name: impl Into<String>,
        message: impl Into<String>,
        key: impl Into<GroupingKey>,
        conflicting_descriptors: impl IntoIterator<Item = Arc<D>>,
    ) {
        self.push(DuplicateKeyError::new(
            channel_name,
            message,
            key,
            conflicting_descriptors,
        ));
    }

    /// Records that a channel has no descriptor for `key`.
    pub fn record_missing(
        &mut self,
        channel_name: impl Into<String>,
        message: impl Into<String>,
        key: impl Into<GroupingKey>,
    ) {
        self.push(ImageSetError::missing(channel_name, message, key));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageSetError<D>> {
        self.errors.iter()
    }

    /// Iterates over the duplicate-key errors only.
    pub fn duplicates(&self) -> impl Iterator<Item = &DuplicateKeyError<D>> {
        self.errors.iter().filter_map(ImageSetError::as_duplicate)
    }

    pub fn for_channel<'a>(
        &'a self,
        channel_name: &'a str,
    ) -> impl Iterator<Item = &'a ImageSetError<D>> {
        self.errors
            .iter()
            .filter(move |e| e.channel_name() == channel_name)
    }

    /// Returns `value` if nothing was recorded, otherwise every recorded
    /// error at once.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            log::info!("Image-set construction failed with {} error(s)", self.len());
            Err(self)
        }
    }
}

impl<D> Default for ImageSetErrors<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for ImageSetErrors<D> {
    fn clone(&self) -> Self {
        Self {
            errors: self.errors.clone(),
        }
    }
}

impl<D> Extend<ImageSetError<D>> for ImageSetErrors<D> {
    fn extend<I: IntoIterator<Item = ImageSetError<D>>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl<D> FromIterator<ImageSetError<D>> for ImageSetErrors<D> {
    fn from_iter<I: IntoIterator<Item = ImageSetError<D>>>(iter: I) -> Self {
        let mut errors = Self::new();
        errors.extend(iter);
        errors
    }
}

impl<D> IntoIterator for ImageSetErrors<D> {
    type Item = ImageSetError<D>;
    type IntoIter = std::vec::IntoIter<ImageSetError<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, D> IntoIterator for &'a ImageSetErrors<D> {
    type Item = &'a ImageSetError<D>;
    type IntoIter = std::slice::Iter<'a, ImageSetError<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// One indented line per error, each preceded by a newline.
fn error_lines<D>(errors: &[ImageSetError<D>]) -> String {
    errors.iter().map(|e| format!("\n  {}", e)).collect()
}
