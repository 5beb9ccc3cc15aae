// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Debug;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_channel::oneshot;
use tracing::{Level, event};

use crate::Abandoned;

/// Sending side of a one-shot result cell, owned by a handler.
///
/// The cell itself is only created when a result adapter attaches to the handler. A handler that
/// completes with no adapter attached drops the outcome.
pub(crate) struct Completer<T, E> {
    sender: Option<oneshot::Sender<Result<T, E>>>,
    strategy: &'static str,
}

impl<T, E> Completer<T, E> {
    pub(crate) const fn new(strategy: &'static str) -> Self {
        Self { sender: None, strategy }
    }

    /// Creates the result cell, keeping the sending side and returning the receiving side.
    ///
    /// Attaching again replaces the cell; the previously returned receiver then reports
    /// [`Abandoned`].
    pub(crate) fn attach(&mut self) -> Pending<T, E> {
        let (sender, receiver) = oneshot::channel();
        self.sender = Some(sender);
        Pending { receiver }
    }

    pub(crate) fn fulfill(&mut self, outcome: Result<T, E>) {
        let Some(sender) = self.sender.take() else {
            event!(Level::DEBUG, message = "completed with no result attached", strategy = self.strategy);
            return;
        };

        if sender.send(outcome).is_err() {
            // The receiving side was dropped, nobody is interested in the outcome anymore.
            event!(Level::DEBUG, message = "result dropped before completion", strategy = self.strategy);
        }
    }
}

impl<T, E> Drop for Completer<T, E> {
    fn drop(&mut self) {
        if self.sender.is_some() {
            event!(Level::DEBUG, message = "handler dropped without completion", strategy = self.strategy);
        }
    }
}

impl<T, E> Debug for Completer<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completer")
            .field("strategy", &self.strategy)
            .field("attached", &self.sender.is_some())
            .finish()
    }
}

/// Receiving side of a one-shot result cell.
pub(crate) struct Pending<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Future for Pending<T, E>
where
    E: From<Abandoned>,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().receiver).poll(cx).map(|received| match received {
            Ok(outcome) => outcome,
            Err(oneshot::Canceled) => Err(Abandoned.into()),
        })
    }
}

impl<T, E> Debug for Pending<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pending").finish_non_exhaustive()
    }
}
