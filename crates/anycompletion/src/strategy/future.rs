// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! [`UseFuture`] for turning an initiating function into one that returns a future.

use std::fmt::Debug;
use std::pin::Pin;
use std::task::{Context, Poll};

use super::cell::{Completer, Pending};
use crate::{Abandoned, AsyncResult, CompletionHandler, CompletionToken};

/// Completion token that makes the initiating function return a [`CompletionFuture`].
///
/// Supported for operations whose signature reports an outcome as a `Result`:
///
/// | Signature | Future output |
/// |---|---|
/// | `fn(Result<T, E>)` | `Result<T, E>` |
/// | `fn(Result<(), E>, T)` | `Result<T, E>`, with `T` only delivered on success |
///
/// If the operation drops its handler without completing it, the future resolves to an error
/// created from [`Abandoned`]. While the handler is alive and not completed, the future stays
/// pending.
///
/// # Examples
///
/// ```rust
/// use std::io;
///
/// use anycompletion::{AsyncCompletion, AsyncResult, CompletionHandler, UseFuture};
///
/// type ReadSignature = fn(io::Result<()>, usize);
///
/// let completion = AsyncCompletion::<UseFuture, ReadSignature>::new(UseFuture);
/// let (handler, result) = completion.into_parts();
///
/// let future = result.get();
/// CompletionHandler::<ReadSignature>::complete(handler, (Ok(()), 42));
///
/// assert_eq!(futures::executor::block_on(future)?, 42);
/// # Ok::<(), io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UseFuture;

/// The handler [`UseFuture`] resolves to.
///
/// Completing it fulfills the future returned by the initiating function.
pub struct FutureHandler<T, E> {
    completer: Completer<T, E>,
}

impl<T, E> FutureHandler<T, E> {
    const fn new() -> Self {
        Self {
            completer: Completer::new("future"),
        }
    }
}

impl<T, E> Debug for FutureHandler<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FutureHandler").field("completer", &self.completer).finish()
    }
}

impl<T, E> CompletionToken<fn(Result<T, E>)> for UseFuture
where
    E: From<Abandoned>,
{
    type Handler = FutureHandler<T, E>;

    fn into_handler(self) -> Self::Handler {
        FutureHandler::new()
    }
}

impl<T, E> CompletionToken<fn(Result<(), E>, T)> for UseFuture
where
    E: From<Abandoned>,
{
    type Handler = FutureHandler<T, E>;

    fn into_handler(self) -> Self::Handler {
        FutureHandler::new()
    }
}

impl<T, E> CompletionHandler<fn(Result<T, E>)> for FutureHandler<T, E>
where
    E: From<Abandoned>,
{
    type Result = FutureResult<T, E>;

    fn complete(mut self, (outcome,): (Result<T, E>,)) {
        self.completer.fulfill(outcome);
    }
}

impl<T, E> CompletionHandler<fn(Result<(), E>, T)> for FutureHandler<T, E>
where
    E: From<Abandoned>,
{
    type Result = FutureResult<T, E>;

    fn complete(mut self, (status, value): (Result<(), E>, T)) {
        self.completer.fulfill(status.map(|()| value));
    }
}

/// The result adapter of [`FutureHandler`].
pub struct FutureResult<T, E> {
    pending: Pending<T, E>,
}

impl<T, E> AsyncResult<FutureHandler<T, E>> for FutureResult<T, E>
where
    E: From<Abandoned>,
{
    type Output = CompletionFuture<T, E>;

    fn new(handler: &mut FutureHandler<T, E>) -> Self {
        Self {
            pending: handler.completer.attach(),
        }
    }

    fn get(self) -> Self::Output {
        CompletionFuture { pending: self.pending }
    }
}

impl<T, E> Debug for FutureResult<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FutureResult").finish_non_exhaustive()
    }
}

/// The future returned by initiating functions called with [`UseFuture`].
///
/// Resolves once the operation completes its handler, with the outcome the handler received.
/// Dropping the future does not cancel the operation; its outcome is then discarded.
pub struct CompletionFuture<T, E> {
    pending: Pending<T, E>,
}

impl<T, E> Future for CompletionFuture<T, E>
where
    E: From<Abandoned>,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().pending).poll(cx)
    }
}

impl<T, E> Debug for CompletionFuture<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionFuture").finish_non_exhaustive()
    }
}
