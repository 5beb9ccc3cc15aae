// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! [`AsyncCompletion`], the helper every initiating function builds.

use std::any::type_name;
use std::fmt::Debug;

use tracing::{Level, event};

use crate::{AsyncResult, CompletionHandler, CompletionToken, HandlerOf, ReturnOf, Signature};

/// The result adapter type used when token `T` is resolved for signature `S`.
pub type AsyncResultOf<T, S> = <HandlerOf<T, S> as CompletionHandler<S>>::Result;

/// Turns a caller-supplied completion token into a handler and a result adapter.
///
/// Construct one at the start of every initiating function, pass the [`handler`](Self::handler)
/// to the asynchronous primitive and return the value of the result adapter. [`initiate`]
/// packages this sequence:
///
/// ```rust
/// use anycompletion::{AsyncCompletion, CompletionHandler, CompletionToken, ReturnOf};
///
/// fn async_count<T>(token: T) -> ReturnOf<T, fn(usize)>
/// where
///     T: CompletionToken<fn(usize)>,
/// {
///     AsyncCompletion::<T, fn(usize)>::new(token).initiate(|handler| handler.complete((3,)))
/// }
///
/// let mut count = 0;
/// async_count(|n: usize| count = n);
/// assert_eq!(count, 3);
/// ```
///
/// Exactly one handler and one result adapter are built per helper, in that order. When the
/// token is itself the handler, no new object is built: the caller's token becomes the handler
/// as-is. Passing `&mut callback` binds the handler to the caller's callback instead of moving
/// it, and the borrow keeps that callback alive until the operation has finished with it.
///
/// The helper performs no I/O and schedules nothing.
///
/// [`initiate`]: Self::initiate
pub struct AsyncCompletion<T, S>
where
    T: CompletionToken<S>,
    S: Signature,
{
    handler: HandlerOf<T, S>,
    result: AsyncResultOf<T, S>,
}

impl<T, S> AsyncCompletion<T, S>
where
    T: CompletionToken<S>,
    S: Signature,
{
    /// Resolves the token into its handler and builds the result adapter over it.
    #[must_use]
    pub fn new(token: T) -> Self {
        let mut handler = token.into_handler();
        let result = <AsyncResultOf<T, S> as AsyncResult<HandlerOf<T, S>>>::new(&mut handler);

        event!(
            Level::TRACE,
            message = "initiating asynchronous operation",
            token = type_name::<T>(),
            handler = type_name::<HandlerOf<T, S>>(),
            result = type_name::<AsyncResultOf<T, S>>(),
            arity = S::ARITY,
        );

        Self { handler, result }
    }

    /// The handler to pass to the asynchronous primitive.
    #[must_use]
    pub const fn handler(&self) -> &HandlerOf<T, S> {
        &self.handler
    }

    /// Mutable access to the handler, for primitives that configure it before taking it.
    pub fn handler_mut(&mut self) -> &mut HandlerOf<T, S> {
        &mut self.handler
    }

    /// The result adapter whose value the initiating function returns.
    #[must_use]
    pub const fn result(&self) -> &AsyncResultOf<T, S> {
        &self.result
    }

    /// Splits the helper into the handler and the result adapter.
    #[must_use]
    pub fn into_parts(self) -> (HandlerOf<T, S>, AsyncResultOf<T, S>) {
        (self.handler, self.result)
    }

    /// Hands the handler to `start` and returns the initiating function's value.
    ///
    /// `start` stands for the asynchronous primitive: it takes ownership of the handler and
    /// arranges for it to be completed later. The result adapter's value is produced after
    /// `start` returns, so strategies that wait for completion never wait on an operation
    /// that has not been started.
    pub fn initiate<F>(self, start: F) -> ReturnOf<T, S>
    where
        F: FnOnce(HandlerOf<T, S>),
    {
        let (handler, result) = self.into_parts();
        start(handler);
        <AsyncResultOf<T, S> as AsyncResult<HandlerOf<T, S>>>::get(result)
    }
}

impl<T, S> Debug for AsyncCompletion<T, S>
where
    T: CompletionToken<S>,
    S: Signature,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncCompletion")
            .field("handler", &type_name::<HandlerOf<T, S>>())
            .field("result", &type_name::<AsyncResultOf<T, S>>())
            .finish()
    }
}
