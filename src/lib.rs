//! A reentrant, allocation-free `printf`-family formatting engine.
//!
//! Built for targets that want C's format-string conventions — flags,
//! width, precision, length modifiers, `d`/`u`/`o`/`x`/`X`/`b`/`f`/`F`/`c`/
//! `s`/`p`/`%` — without a libc, a heap, or C varargs. Arguments are passed
//! as a `&[Arg]` built with [`ToArg`]; output goes to a bounded buffer, a
//! per-byte callback, or a host `putchar`-style function pointer.
//!
//! ```
//! use tiny_printf::{format_bounded, args};
//!
//! let mut buf = [0u8; 32];
//! let n = format_bounded(&mut buf, "%-8s%+05d", args!("id", 7));
//! assert_eq!(&buf[..n], b"id      +0007");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

mod args;
mod entry;
mod flags;
mod float_render;
mod int_render;
mod parser;
mod sink;

pub use args::{Arg, ArgList, IntWidth, ToArg};
pub use entry::{format_bounded, format_to_putchar, format_with};

/// Builds a `&[Arg]` from a comma-separated list of values implementing
/// [`ToArg`], the allocation-free substitute for C varargs at call sites.
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        &[$($crate::ToArg::to_arg($value)),*]
    };
}
