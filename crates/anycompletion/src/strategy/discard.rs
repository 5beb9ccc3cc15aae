// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{CompletionHandler, CompletionToken, Detached};

/// Completion token for callers that do not care about the outcome.
///
/// Works with every signature of up to six arguments. The initiating function returns nothing and the outcome is
/// dropped when the operation completes.
///
/// ```rust
/// use anycompletion::{AsyncCompletion, CompletionHandler, CompletionToken, Discard, ReturnOf};
///
/// fn async_flush<T: CompletionToken<fn(std::io::Result<()>)>>(token: T) -> ReturnOf<T, fn(std::io::Result<()>)> {
///     AsyncCompletion::<T, fn(std::io::Result<()>)>::new(token).initiate(|handler| handler.complete((Ok(()),)))
/// }
///
/// async_flush(Discard);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discard;

/// The handler [`Discard`] resolves to. Ignores its arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscardHandler;

// Registered per arity over `fn(..)` types, which downstream crates cannot implement
// `CompletionHandler` for, keeping these impls disjoint from the identity rule.
macro_rules! impl_discard {
    ($($arg:ident),*) => {
        impl<$($arg),*> CompletionToken<fn($($arg),*)> for Discard {
            type Handler = DiscardHandler;

            fn into_handler(self) -> Self::Handler {
                DiscardHandler
            }
        }

        impl<$($arg),*> CompletionHandler<fn($($arg),*)> for DiscardHandler {
            type Result = Detached;

            fn complete(self, _args: ($($arg,)*)) {}
        }
    };
}

impl_discard!();
impl_discard!(A1);
impl_discard!(A1, A2);
impl_discard!(A1, A2, A3);
impl_discard!(A1, A2, A3, A4);
impl_discard!(A1, A2, A3, A4, A5);
impl_discard!(A1, A2, A3, A4, A5, A6);

#[cfg(test)]
mod tests {
    use static_assertions::{assert_impl_all, assert_type_eq_all};

    use super::*;
    use crate::{AsyncCompletion, HandlerOf, ReturnOf};

    assert_impl_all!(Discard: CompletionToken<fn()>, CompletionToken<fn(u8)>, CompletionToken<fn(u8, u8, u8, u8, u8, u8)>);
    assert_type_eq_all!(HandlerOf<Discard, fn(String, Vec<u8>)>, DiscardHandler);
    assert_type_eq_all!(ReturnOf<Discard, fn(u8, u16, u32, u64, i8, i16)>, ());

    #[test]
    fn ignores_arguments_of_every_arity() {
        type Wide = fn(u8, u16, u32, u64, i8, i16);

        AsyncCompletion::<Discard, fn(String)>::new(Discard)
            .initiate(|handler| CompletionHandler::<fn(String)>::complete(handler, (String::from("ignored"),)));
        AsyncCompletion::<Discard, Wide>::new(Discard)
            .initiate(|handler| CompletionHandler::<Wide>::complete(handler, (1, 2, 3, 4, 5, 6)));
    }
}
