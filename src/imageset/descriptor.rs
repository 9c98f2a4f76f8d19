//! Identity of image-plane descriptors.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Gives access to a human-meaningful identity of an image-plane descriptor,
/// such as the file it was read from, so conflicts can be traced back to
/// the input data.
pub trait Descriptor {
    /// Returns what a user needs to find the plane in the input data,
    /// usually the path or URL of its file, plus a plane index when the file
    /// holds more than one plane.
    fn identity(&self) -> Cow<'_, str>;
}

impl Descriptor for Path {
    fn identity(&self) -> Cow<'_, str> {
        self.to_string_lossy()
    }
}

impl Descriptor for PathBuf {
    fn identity(&self) -> Cow<'_, str> {
        self.as_path().identity()
    }
}

impl Descriptor for str {
    fn identity(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Descriptor for String {
    fn identity(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}
