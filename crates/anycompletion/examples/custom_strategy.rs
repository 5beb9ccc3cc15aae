// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Defining a completion strategy outside of `anycompletion`.
//!
//! The `Collect` token makes initiating functions with signature `fn(u32)` return a handle to a
//! shared list that the handler appends its value to.

use std::cell::RefCell;
use std::rc::Rc;

use anycompletion::{AsyncCompletion, AsyncResult, CompletionHandler, CompletionToken, ReturnOf};

/// Collects completion values into a shared list.
struct Collect;

struct CollectHandler {
    values: Rc<RefCell<Vec<u32>>>,
}

impl CompletionHandler<fn(u32)> for CollectHandler {
    type Result = CollectResult;

    fn complete(self, (value,): (u32,)) {
        self.values.borrow_mut().push(value);
    }
}

impl CompletionToken<fn(u32)> for Collect {
    type Handler = CollectHandler;

    fn into_handler(self) -> CollectHandler {
        CollectHandler {
            values: Rc::default(),
        }
    }
}

/// Hands out the list the handler fills.
struct CollectResult {
    values: Rc<RefCell<Vec<u32>>>,
}

impl AsyncResult<CollectHandler> for CollectResult {
    type Output = Rc<RefCell<Vec<u32>>>;

    fn new(handler: &mut CollectHandler) -> Self {
        Self {
            values: Rc::clone(&handler.values),
        }
    }

    fn get(self) -> Self::Output {
        self.values
    }
}

/// An initiating function that completes later, when the caller runs the returned closure.
fn async_next<T>(token: T, value: u32) -> (ReturnOf<T, fn(u32)>, impl FnOnce())
where
    T: CompletionToken<fn(u32)>,
{
    let mut pending = None;
    let result = AsyncCompletion::<T, fn(u32)>::new(token).initiate(|handler| pending = Some(handler));

    let complete = move || {
        if let Some(handler) = pending {
            handler.complete((value,));
        }
    };

    (result, complete)
}

fn main() {
    let (values, complete) = async_next(Collect, 7);
    println!("before completion: {:?}", values.borrow());

    complete();
    println!("after completion: {:?}", values.borrow());

    // The same initiating function still accepts a plain callback.
    let ((), complete) = async_next(|value: u32| println!("callback received {value}"), 8);
    complete();
}
