// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "test code")]

//! Tests for resolving completion tokens into handler and return types.

use std::io;

use anycompletion::{
    AsyncCompletion, AsyncResultOf, CompletionHandler, CompletionToken, Detached, Discard, DiscardHandler, HandlerOf, ReturnOf,
};
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

type ReadSignature = fn(io::Result<()>, usize);

/// A token marker with no callable form, registered for a single signature.
struct Tally;

#[derive(Debug, PartialEq, Eq)]
struct TallyHandler;

impl CompletionHandler<fn(u32)> for TallyHandler {
    type Result = Detached;

    fn complete(self, _args: (u32,)) {}
}

impl CompletionToken<fn(u32)> for Tally {
    type Handler = TallyHandler;

    fn into_handler(self) -> TallyHandler {
        TallyHandler
    }
}

fn on_read(_result: io::Result<()>, _bytes: usize) {}

// A callable token is its own handler and initiating functions return nothing.
assert_type_eq_all!(HandlerOf<fn(u32), fn(u32)>, fn(u32));
assert_type_eq_all!(ReturnOf<fn(u32), fn(u32)>, ());
assert_type_eq_all!(AsyncResultOf<fn(u32), fn(u32)>, Detached);
assert_type_eq_all!(HandlerOf<ReadSignature, ReadSignature>, ReadSignature);

// A registered marker resolves to its registered handler, not to itself.
assert_type_eq_all!(HandlerOf<Tally, fn(u32)>, TallyHandler);
assert_type_eq_all!(ReturnOf<Tally, fn(u32)>, ());

// Handlers are tokens too, resolving to themselves.
assert_type_eq_all!(HandlerOf<TallyHandler, fn(u32)>, TallyHandler);

// Discard works for any signature.
assert_type_eq_all!(HandlerOf<Discard, ReadSignature>, DiscardHandler);
assert_type_eq_all!(HandlerOf<Discard, fn()>, DiscardHandler);
assert_type_eq_all!(ReturnOf<Discard, fn(u8, u16, u32)>, ());

// Registration is per signature.
assert_impl_all!(Tally: CompletionToken<fn(u32)>);
assert_not_impl_any!(Tally: CompletionToken<fn(u64)>, CompletionToken<fn()>);
assert_not_impl_any!(u32: CompletionToken<fn(u32)>);

#[test]
fn closure_resolves_to_itself() {
    fn handler_type_of<T: CompletionToken<S>, S: anycompletion::Signature>(_token: &T) -> &'static str {
        std::any::type_name::<HandlerOf<T, S>>()
    }

    let callback = |_: u32| {};

    assert_eq!(
        handler_type_of::<_, fn(u32)>(&callback),
        std::any::type_name_of_val(&callback)
    );
}

#[test]
fn function_item_is_a_token() {
    let completion = AsyncCompletion::<_, ReadSignature>::new(on_read);

    let () = completion.initiate(|handler| handler(Ok(()), 1));
}

#[test]
fn marker_resolves_to_registered_handler() {
    let completion = AsyncCompletion::<Tally, fn(u32)>::new(Tally);

    assert_eq!(*completion.handler(), TallyHandler);

    let () = completion.initiate(|handler| CompletionHandler::<fn(u32)>::complete(handler, (5,)));
}

#[test]
fn discard_accepts_every_signature() {
    let () = AsyncCompletion::<Discard, ReadSignature>::new(Discard).initiate(|handler| {
        CompletionHandler::<ReadSignature>::complete(handler, (Err(io::Error::other("boom")), 0));
    });

    let () = AsyncCompletion::<Discard, fn()>::new(Discard).initiate(|handler| CompletionHandler::<fn()>::complete(handler, ()));
}
