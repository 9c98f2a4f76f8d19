//! Error types for the imageset-errors library.
//!
//! This module provides a unified error type [`Error`] and a convenient
//! [`Result`] type alias for operations of the crate itself that can fail.
//! Image-set construction problems are not reported through this type: they
//! are values of [`crate::imageset::ImageSetError`].

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A construction error was requested without a channel name.
    #[error("Channel name must not be empty")]
    EmptyChannelName,

    /// A duplicate-key error was requested with fewer than two contenders.
    #[error("Duplicate key in channel {channel} needs {required} descriptors, found {found}")]
    TooFewDescriptors {
        /// The channel the error was meant for.
        channel: String,
        /// The number of descriptors supplied.
        found: usize,
        /// The minimum number of descriptors a duplicate requires.
        required: usize,
    },
}
