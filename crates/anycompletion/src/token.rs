// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! [`CompletionToken`] for resolving caller-supplied tokens into handlers.

use crate::{AsyncResult, CompletionHandler, Signature};

/// A caller-supplied description of how to be notified when an operation with signature `S`
/// completes.
///
/// The associated [`Handler`](Self::Handler) is the concrete [`CompletionHandler`] the operation
/// invokes. Resolution happens entirely at compile time:
///
/// - A token that is already a completion handler for `S` (any closure or function accepting the
///   signature's arguments, or a hand-written handler type) resolves to itself, and
///   [`into_handler`](Self::into_handler) hands back the very same object.
/// - Strategy marker types implement this trait directly and build a different handler from the
///   token.
///
/// # Registering a strategy
///
/// ```rust
/// use anycompletion::{CompletionHandler, CompletionToken, Detached};
///
/// /// Prints the outcome instead of handing it back to the caller.
/// struct Print;
///
/// struct PrintHandler;
///
/// impl CompletionHandler<fn(u32)> for PrintHandler {
///     type Result = Detached;
///
///     fn complete(self, (value,): (u32,)) {
///         println!("completed with {value}");
///     }
/// }
///
/// impl CompletionToken<fn(u32)> for Print {
///     type Handler = PrintHandler;
///
///     fn into_handler(self) -> PrintHandler {
///         PrintHandler
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a completion token for `{S}`",
    label = "neither callable with the arguments of `{S}` nor registered as a completion strategy",
    note = "pass a callback accepting the arguments of `{S}`, or implement `CompletionToken<{S}>` for this type"
)]
pub trait CompletionToken<S: Signature>: Sized {
    /// The handler the operation invokes on completion.
    type Handler: CompletionHandler<S>;

    /// Turns the token into the handler, consuming the token.
    fn into_handler(self) -> Self::Handler;
}

impl<S, H> CompletionToken<S> for H
where
    S: Signature,
    H: CompletionHandler<S>,
{
    type Handler = Self;

    #[inline]
    fn into_handler(self) -> Self {
        self
    }
}

/// The handler type that token `T` resolves to for signature `S`.
pub type HandlerOf<T, S> = <T as CompletionToken<S>>::Handler;

/// The type an initiating function returns when called with token `T` for signature `S`.
///
/// Initiating functions use this in their return type position:
///
/// ```rust
/// use anycompletion::{AsyncCompletion, CompletionToken, ReturnOf};
///
/// fn async_wait<T: CompletionToken<fn()>>(token: T) -> ReturnOf<T, fn()> {
///     AsyncCompletion::<T, fn()>::new(token).initiate(|_handler| {
///         // Hand the handler to the primitive here.
///     })
/// }
/// ```
pub type ReturnOf<T, S> = <<HandlerOf<T, S> as CompletionHandler<S>>::Result as AsyncResult<HandlerOf<T, S>>>::Output;
