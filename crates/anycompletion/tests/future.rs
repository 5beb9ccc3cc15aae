// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "test code")]
#![cfg(feature = "future")]

//! Tests for the `UseFuture` strategy.

use std::io;
use std::sync::mpsc;
use std::thread;

use anycompletion::{
    Abandoned, AsyncCompletion, AsyncResult, CompletionFuture, CompletionHandler, CompletionToken, FutureHandler, HandlerOf, ReturnOf,
    UseFuture,
};
use futures::FutureExt;
use futures::executor::block_on;
use static_assertions::{assert_impl_all, assert_type_eq_all};

type ReadSignature = fn(io::Result<()>, usize);
type FetchSignature = fn(Result<String, FetchError>);

#[derive(Debug, PartialEq, Eq)]
enum FetchError {
    NotFound,
    Abandoned,
}

impl From<Abandoned> for FetchError {
    fn from(_: Abandoned) -> Self {
        Self::Abandoned
    }
}

assert_type_eq_all!(HandlerOf<UseFuture, ReadSignature>, FutureHandler<usize, io::Error>);
assert_type_eq_all!(ReturnOf<UseFuture, ReadSignature>, CompletionFuture<usize, io::Error>);
assert_type_eq_all!(HandlerOf<UseFuture, FetchSignature>, FutureHandler<String, FetchError>);
assert_impl_all!(FutureHandler<usize, io::Error>: Send);
assert_impl_all!(CompletionFuture<usize, io::Error>: Send, Unpin);

/// An initiating function backed by a primitive that completes on a background thread once it
/// receives a value through the returned channel.
fn async_read<T>(token: T) -> (ReturnOf<T, ReadSignature>, mpsc::Sender<io::Result<usize>>)
where
    T: CompletionToken<ReadSignature>,
    T::Handler: Send + 'static,
{
    let (sender, receiver) = mpsc::channel::<io::Result<usize>>();

    let result = AsyncCompletion::<T, ReadSignature>::new(token).initiate(|handler| {
        thread::spawn(move || match receiver.recv() {
            Ok(Ok(bytes)) => handler.complete((Ok(()), bytes)),
            Ok(Err(error)) => handler.complete((Err(error), 0)),
            Err(_) => drop(handler),
        });
    });

    (result, sender)
}

#[test]
fn future_resolves_with_completion_payload() {
    let (handler, result) = AsyncCompletion::<UseFuture, ReadSignature>::new(UseFuture).into_parts();

    let future = result.get();
    CompletionHandler::<ReadSignature>::complete(handler, (Ok(()), 42));

    assert_eq!(block_on(future).unwrap(), 42);
}

#[test]
fn future_stays_pending_until_completed() {
    let (handler, result) = AsyncCompletion::<UseFuture, ReadSignature>::new(UseFuture).into_parts();
    let mut future = result.get();

    assert!((&mut future).now_or_never().is_none());
    assert!((&mut future).now_or_never().is_none());

    CompletionHandler::<ReadSignature>::complete(handler, (Ok(()), 1));
    assert_eq!(future.now_or_never().unwrap().unwrap(), 1);
}

#[test]
fn failure_code_is_reported_without_payload() {
    let (handler, result) = AsyncCompletion::<UseFuture, ReadSignature>::new(UseFuture).into_parts();

    let future = result.get();
    CompletionHandler::<ReadSignature>::complete(handler, (Err(io::Error::from(io::ErrorKind::ConnectionReset)), 17));

    let error = block_on(future).unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::ConnectionReset);
}

#[test]
fn dropped_handler_abandons_future() {
    let (handler, result) = AsyncCompletion::<UseFuture, FetchSignature>::new(UseFuture).into_parts();
    let future = result.get();

    drop(handler);

    assert_eq!(block_on(future), Err(FetchError::Abandoned));
}

#[test]
fn single_result_signature_passes_outcome_through() {
    let (handler, result) = AsyncCompletion::<UseFuture, FetchSignature>::new(UseFuture).into_parts();
    let future = result.get();

    CompletionHandler::<FetchSignature>::complete(handler, (Err(FetchError::NotFound),));
    assert_eq!(block_on(future), Err(FetchError::NotFound));

    let (handler, result) = AsyncCompletion::<UseFuture, FetchSignature>::new(UseFuture).into_parts();
    let future = result.get();

    CompletionHandler::<FetchSignature>::complete(handler, (Ok("page".to_string()),));
    assert_eq!(block_on(future), Ok("page".to_string()));
}

#[test]
fn dropped_future_does_not_disturb_completion() {
    let (handler, result) = AsyncCompletion::<UseFuture, ReadSignature>::new(UseFuture).into_parts();

    drop(result.get());

    CompletionHandler::<ReadSignature>::complete(handler, (Ok(()), 5));
}

#[test]
fn completion_from_another_thread() {
    let (future, sender) = async_read(UseFuture);

    sender.send(Ok(64)).unwrap();

    assert_eq!(block_on(future).unwrap(), 64);
}

#[test]
fn primitive_torn_down_before_completion() {
    let (future, sender) = async_read(UseFuture);

    drop(sender);

    let error = block_on(future).unwrap_err();
    assert!(error.get_ref().is_some_and(|inner| inner.is::<Abandoned>()));
}

#[test]
fn same_initiating_function_accepts_callbacks() {
    let (done_sender, done_receiver) = mpsc::channel();

    let ((), sender) = async_read(move |result: io::Result<()>, bytes: usize| {
        done_sender.send((result.is_ok(), bytes)).unwrap();
    });

    sender.send(Ok(3)).unwrap();

    assert_eq!(done_receiver.recv().unwrap(), (true, 3));
}

#[test]
fn debug_output() {
    let (handler, result) = AsyncCompletion::<UseFuture, ReadSignature>::new(UseFuture).into_parts();

    assert!(format!("{handler:?}").contains("FutureHandler"));
    assert!(format!("{result:?}").contains("FutureResult"));
    assert!(format!("{:?}", result.get()).contains("CompletionFuture"));
}
