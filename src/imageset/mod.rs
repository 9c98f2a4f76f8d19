//! Errors reported while assembling image sets.
//!
//! An image-set matcher groups image-plane descriptors of every channel by a
//! composite [`GroupingKey`]. When a key cannot be resolved to exactly one
//! descriptor per channel it produces an [`ImageSetError`] instead of an
//! image set, and collects those errors in [`ImageSetErrors`] so a single
//! pass reports every conflict.

pub mod collector;
pub mod context;
pub mod descriptor;
pub mod duplicate;
pub mod family;
pub mod key;

pub use collector::ImageSetErrors;
pub use context::ErrorContext;
pub use descriptor::Descriptor;
pub use duplicate::{DuplicateKeyError, MIN_CONFLICTING_DESCRIPTORS};
pub use family::{ImageSetError, ImageSetErrorKind};
pub use key::GroupingKey;
