// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! [`CompletionHandler`], the object an operation invokes when it finishes.

use crate::{AsyncResult, Detached, Signature};

/// The concrete object an asynchronous operation invokes, exactly once, when it completes.
///
/// Completing a handler consumes it, so a second invocation does not compile. The asynchronous
/// primitive receives the handler by value, keeps it while the operation is pending and calls
/// [`complete`](Self::complete) with arguments matching the signature `S`, whether the operation
/// succeeded or failed.
///
/// Every closure and function that accepts the arguments of `S` is a completion handler whose
/// result adapter is [`Detached`]. This includes `&mut F` for any `F: FnMut`, which lets the
/// caller keep ownership of the callback while the operation borrows it.
///
/// Strategy authors implement this trait for the handler type their [`CompletionToken`] resolves
/// to, picking the [`AsyncResult`] that produces the initiating function's return value.
///
/// [`CompletionToken`]: crate::CompletionToken
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked as a completion handler for `{S}`",
    label = "not callable with the arguments of `{S}`",
    note = "a completion handler must accept exactly the arguments of its signature, in order"
)]
pub trait CompletionHandler<S: Signature>: Sized {
    /// The result adapter that produces the initiating function's return value.
    type Result: AsyncResult<Self>;

    /// Delivers the outcome of the operation.
    fn complete(self, args: S::Args);
}

macro_rules! impl_callable_handler {
    ($($arg:ident $value:ident),*) => {
        impl<F, $($arg),*> CompletionHandler<fn($($arg),*)> for F
        where
            F: FnOnce($($arg),*),
        {
            type Result = Detached;

            fn complete(self, ($($value,)*): ($($arg,)*)) {
                self($($value),*);
            }
        }
    };
}

impl_callable_handler!();
impl_callable_handler!(A1 a1);
impl_callable_handler!(A1 a1, A2 a2);
impl_callable_handler!(A1 a1, A2 a2, A3 a3);
impl_callable_handler!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_callable_handler!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_callable_handler!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
