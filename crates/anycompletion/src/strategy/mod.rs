// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Built-in completion strategies.
//!
//! Each strategy is a marker token plus the handler and result adapter it resolves to. They use
//! only the public customization points, the same way a strategy defined outside this crate
//! would.

#[cfg(feature = "blocking")]
mod blocking;
#[cfg(any(feature = "future", feature = "blocking"))]
mod cell;
mod discard;
#[cfg(feature = "future")]
mod future;

#[cfg(feature = "blocking")]
pub use blocking::{Blocking, BlockingHandler, BlockingResult};
pub use discard::{Discard, DiscardHandler};
#[cfg(feature = "future")]
pub use future::{CompletionFuture, FutureHandler, FutureResult, UseFuture};
