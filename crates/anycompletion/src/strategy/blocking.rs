// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! [`Blocking`] for initiating functions that return the outcome directly.

use std::fmt::Debug;

use tracing::{Level, event};

use super::cell::{Completer, Pending};
use crate::{Abandoned, AsyncResult, CompletionHandler, CompletionToken};

/// Completion token that suspends the calling thread until the operation completes and makes
/// the initiating function return the outcome itself.
///
/// Invoking the handler and returning the value collapse into one step from the caller's point
/// of view. Supports the same signatures as [`UseFuture`](crate::UseFuture):
/// `fn(Result<T, E>)` and `fn(Result<(), E>, T)`.
///
/// The operation must be completed from another thread (or another execution context that keeps
/// running while the caller is parked). Completing it from the calling thread after the
/// initiating function returned is impossible, because the initiating function does not return
/// until completion. If the handler is dropped without being invoked, the initiating function
/// returns an error created from [`Abandoned`].
///
/// # Examples
///
/// ```rust
/// use std::{io, thread};
///
/// use anycompletion::{AsyncCompletion, Blocking, CompletionHandler, CompletionToken, ReturnOf};
///
/// type WaitSignature = fn(io::Result<u64>);
///
/// fn async_wait<T: CompletionToken<WaitSignature>>(token: T) -> ReturnOf<T, WaitSignature>
/// where
///     T::Handler: Send + 'static,
/// {
///     AsyncCompletion::<T, WaitSignature>::new(token).initiate(|handler| {
///         thread::spawn(move || handler.complete((Ok(5),)));
///     })
/// }
///
/// assert_eq!(async_wait(Blocking)?, 5);
/// # Ok::<(), io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocking;

/// The handler [`Blocking`] resolves to.
///
/// Completing it wakes the thread waiting in the initiating function.
pub struct BlockingHandler<T, E> {
    completer: Completer<T, E>,
}

impl<T, E> BlockingHandler<T, E> {
    const fn new() -> Self {
        Self {
            completer: Completer::new("blocking"),
        }
    }
}

impl<T, E> Debug for BlockingHandler<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingHandler").field("completer", &self.completer).finish()
    }
}

impl<T, E> CompletionToken<fn(Result<T, E>)> for Blocking
where
    E: From<Abandoned>,
{
    type Handler = BlockingHandler<T, E>;

    fn into_handler(self) -> Self::Handler {
        BlockingHandler::new()
    }
}

impl<T, E> CompletionToken<fn(Result<(), E>, T)> for Blocking
where
    E: From<Abandoned>,
{
    type Handler = BlockingHandler<T, E>;

    fn into_handler(self) -> Self::Handler {
        BlockingHandler::new()
    }
}

impl<T, E> CompletionHandler<fn(Result<T, E>)> for BlockingHandler<T, E>
where
    E: From<Abandoned>,
{
    type Result = BlockingResult<T, E>;

    fn complete(mut self, (outcome,): (Result<T, E>,)) {
        self.completer.fulfill(outcome);
    }
}

impl<T, E> CompletionHandler<fn(Result<(), E>, T)> for BlockingHandler<T, E>
where
    E: From<Abandoned>,
{
    type Result = BlockingResult<T, E>;

    fn complete(mut self, (status, value): (Result<(), E>, T)) {
        self.completer.fulfill(status.map(|()| value));
    }
}

/// The result adapter of [`BlockingHandler`].
///
/// Producing its value parks the calling thread until the handler is completed or dropped.
pub struct BlockingResult<T, E> {
    pending: Pending<T, E>,
}

impl<T, E> AsyncResult<BlockingHandler<T, E>> for BlockingResult<T, E>
where
    E: From<Abandoned>,
{
    type Output = Result<T, E>;

    fn new(handler: &mut BlockingHandler<T, E>) -> Self {
        Self {
            pending: handler.completer.attach(),
        }
    }

    fn get(self) -> Self::Output {
        event!(Level::TRACE, message = "blocking until completion", strategy = "blocking");

        futures_executor::block_on(self.pending)
    }
}

impl<T, E> Debug for BlockingResult<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingResult").finish_non_exhaustive()
    }
}
