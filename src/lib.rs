//! Image-set construction errors.
//!
//! This library provides the error values an image-set matcher reports when
//! image-plane descriptors cannot be grouped into image sets, most notably
//! [`DuplicateKeyError`] for descriptors that collide on a grouping key.

pub mod error;
pub mod imageset;

pub use imageset::{
    Descriptor, DuplicateKeyError, ErrorContext, GroupingKey, ImageSetError, ImageSetErrorKind,
    ImageSetErrors, MIN_CONFLICTING_DESCRIPTORS,
};
