// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! One initiating function, four ways of being told it finished.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anycompletion::{AsyncCompletion, Blocking, CompletionHandler, CompletionToken, Discard, ReturnOf, UseFuture};

type WaitSignature = fn(io::Result<()>, Duration);

/// Waits for `delay` on a background thread and reports how long the wait actually took.
fn async_wait<T>(delay: Duration, token: T) -> ReturnOf<T, WaitSignature>
where
    T: CompletionToken<WaitSignature>,
    T::Handler: Send + 'static,
{
    AsyncCompletion::<T, WaitSignature>::new(token).initiate(move |handler| {
        thread::spawn(move || {
            let started = Instant::now();
            thread::sleep(delay);
            handler.complete((Ok(()), started.elapsed()));
        });
    })
}

fn main() -> io::Result<()> {
    // A callback: nothing is returned, the callback runs on the timer thread.
    let (sender, receiver) = mpsc::channel();
    async_wait(Duration::from_millis(10), move |result: io::Result<()>, elapsed: Duration| {
        sender.send(result.map(|()| elapsed)).expect("main is waiting for the callback");
    });
    println!("callback: waited {:?}", receiver.recv().expect("the timer thread completes the callback")?);

    // A future: the initiating function returns something to await.
    let future = async_wait(Duration::from_millis(10), UseFuture);
    println!("future: waited {:?}", futures::executor::block_on(future)?);

    // Blocking: the initiating function returns the outcome itself.
    println!("blocking: waited {:?}", async_wait(Duration::from_millis(10), Blocking)?);

    // Discard: fire and forget.
    async_wait(Duration::from_millis(10), Discard);

    Ok(())
}
