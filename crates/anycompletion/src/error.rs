// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// A completion handler was dropped without ever being invoked.
///
/// The built-in strategies report this through their result instead of waiting forever, for
/// example when an asynchronous primitive is torn down with operations still pending. Strategy
/// results require their error type to be constructible from this value.
///
/// # Thread safety
///
/// This type is thread-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the completion handler was dropped without being invoked")]
pub struct Abandoned;

/// Represents an abandoned operation as a standard I/O error, so that operations whose
/// signatures carry `std::io::Result` can use the built-in strategies directly.
impl From<Abandoned> for std::io::Error {
    fn from(value: Abandoned) -> Self {
        Self::other(value)
    }
}
