// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! Completion tokens for asynchronous initiating functions.
//!
//! An *initiating function* starts an asynchronous operation (a read, a timer, a parse) and
//! returns immediately. This crate lets such a function accept **any** notification strategy
//! chosen by its caller - a plain closure, a token that turns the operation into a future, a
//! token that blocks the calling thread until completion - without the function knowing about
//! any of them. Everything is decided by the type system from two inputs:
//!
//! - the *completion token* the caller passes, and
//! - the *completion signature* of the operation, written as a function pointer type such as
//!   `fn(io::Result<()>, usize)`.
//!
//! From those, the crate derives the concrete [`CompletionHandler`] that the operation invokes
//! once it finishes, and the value that the initiating function returns to its caller.
//!
//! # Building blocks
//!
//! - [`CompletionToken`] maps a token type and a signature to a handler type. Any value that is
//!   already callable with the signature is its own handler; strategy marker types such as
//!   [`UseFuture`] name a different handler.
//! - [`AsyncResult`] is built from a live handler and produces the initiating function's return
//!   value. Plain callbacks use [`Detached`], which returns nothing.
//! - [`AsyncCompletion`] is what every initiating function constructs. It materializes exactly one
//!   handler from the token and one result adapter over it.
//!
//! # Writing an initiating function
//!
//! ```rust
//! use std::io;
//!
//! use anycompletion::{AsyncCompletion, CompletionHandler, CompletionToken, ReturnOf};
//!
//! type ReadSignature = fn(io::Result<()>, usize);
//!
//! fn async_read<T>(token: T) -> ReturnOf<T, ReadSignature>
//! where
//!     T: CompletionToken<ReadSignature>,
//! {
//!     AsyncCompletion::<T, ReadSignature>::new(token).initiate(|handler| {
//!         // A real primitive would store the handler and complete it once the read finishes.
//!         handler.complete((Ok(()), 42));
//!     })
//! }
//!
//! // A plain callback: the initiating function returns `()`.
//! async_read(|result: io::Result<()>, bytes: usize| {
//!     assert!(result.is_ok());
//!     assert_eq!(bytes, 42);
//! });
//!
//! // A future: the initiating function returns something to await.
//! # #[cfg(feature = "future")]
//! # {
//! let bytes = futures::executor::block_on(async_read(anycompletion::UseFuture))?;
//! assert_eq!(bytes, 42);
//! # }
//! # Ok::<(), io::Error>(())
//! ```
//!
//! # Contract violations are compile errors
//!
//! A token that is neither callable with the signature nor registered as a strategy is rejected
//! when the initiating function is instantiated:
//!
//! ```compile_fail,E0277
//! use anycompletion::AsyncCompletion;
//!
//! struct NotAToken;
//!
//! let _completion = AsyncCompletion::<NotAToken, fn(u32)>::new(NotAToken);
//! ```
//!
//! The same applies to a callback whose parameters do not match the signature:
//!
//! ```compile_fail
//! use anycompletion::AsyncCompletion;
//!
//! // The closure takes a `String` where the signature passes a `u32`.
//! let _completion = AsyncCompletion::<_, fn(u32)>::new(|_: String| {});
//! ```
//!
//! Signatures take at most six arguments:
//!
//! ```compile_fail,E0277
//! use anycompletion::{AsyncCompletion, Discard};
//!
//! let _completion = AsyncCompletion::<Discard, fn(u8, u8, u8, u8, u8, u8, u8)>::new(Discard);
//! ```
//!
//! # Features
//!
//! - `future` (default): Enables the [`UseFuture`] strategy.
//! - `blocking`: Enables the [`Blocking`] strategy.
//!
//! The [`Discard`] strategy and the protocol itself are always available.


mod completion;
mod error;
mod handler;
mod result;
mod signature;
mod strategy;
mod token;

pub use completion::{AsyncCompletion, AsyncResultOf};
pub use error::Abandoned;
pub use handler::CompletionHandler;
pub use result::{AsyncResult, Detached};
pub use signature::Signature;
#[cfg(feature = "blocking")]
pub use strategy::{Blocking, BlockingHandler, BlockingResult};
#[cfg(feature = "future")]
pub use strategy::{CompletionFuture, FutureHandler, FutureResult, UseFuture};
pub use strategy::{Discard, DiscardHandler};
pub use token::{CompletionToken, HandlerOf, ReturnOf};
