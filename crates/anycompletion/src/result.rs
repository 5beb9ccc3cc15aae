// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! [`AsyncResult`] for producing the return value of an initiating function.

/// Produces the value an initiating function returns to its caller.
///
/// A result adapter is created once per initiation, immediately after its handler, and consumed
/// once by [`get`](Self::get) before the initiating function returns. The adapter only receives a
/// mutable reference to the handler, so it can coordinate with it (for example by installing the
/// sending side of a shared result cell) but never invoke it.
///
/// Which adapter a handler uses is named by [`CompletionHandler::Result`].
///
/// [`CompletionHandler::Result`]: crate::CompletionHandler::Result
pub trait AsyncResult<H>: Sized {
    /// The type returned by the initiating function.
    type Output;

    /// Creates the adapter for a freshly constructed handler.
    fn new(handler: &mut H) -> Self;

    /// Produces the initiating function's return value.
    ///
    /// Strategies that suspend the caller do so here.
    fn get(self) -> Self::Output;
}

/// The result adapter of plain callbacks: the initiating function returns nothing.
///
/// The caller learns about completion only through its handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detached;

impl<H> AsyncResult<H> for Detached {
    type Output = ();

    fn new(_handler: &mut H) -> Self {
        Self
    }

    fn get(self) -> Self::Output {}
}
