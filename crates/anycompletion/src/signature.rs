// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! [`Signature`] for describing what an operation delivers when it completes.

/// The shape of the information delivered when an asynchronous operation completes.
///
/// Signatures are written as function pointer types. `fn(io::Result<()>, usize)` describes an
/// operation that completes with an outcome followed by a byte count. The function pointer is
/// never called; it only names the ordered argument types.
///
/// Implemented for function pointers taking zero to six arguments. Arguments are owned values,
/// so higher-ranked signatures such as `fn(&[u8])` are not signatures.
pub trait Signature {
    /// The arguments of the signature, as a tuple in declaration order.
    type Args;

    /// The number of arguments.
    const ARITY: usize;
}

macro_rules! impl_signature {
    ($arity:literal; $($arg:ident),*) => {
        impl<$($arg),*> Signature for fn($($arg),*) {
            type Args = ($($arg,)*);

            const ARITY: usize = $arity;
        }
    };
}

impl_signature!(0;);
impl_signature!(1; A1);
impl_signature!(2; A1, A2);
impl_signature!(3; A1, A2, A3);
impl_signature!(4; A1, A2, A3, A4);
impl_signature!(5; A1, A2, A3, A4, A5);
impl_signature!(6; A1, A2, A3, A4, A5, A6);
