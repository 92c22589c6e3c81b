//! The three public call shapes: a bounded buffer, an opaque-context
//! callback, and an unbounded host-`putchar` sink. All three share the same
//! interpreter in [`crate::parser`]; they differ only in the [`Cursor`]
//! they hand it.

use crate::args::{Arg, ArgList};
use crate::parser;
use crate::sink::Cursor;

/// Renders `fmt` against `args` into `buf`, truncating and NUL-terminating
/// as needed.
///
/// `buf.len()` is the declared capacity, matching `snprintf`'s `size`
/// parameter taken from the destination itself rather than as a separate
/// argument. Returns the number of bytes the *untruncated* output would
/// have occupied (excluding the terminator) — this can exceed `buf.len()`.
///
/// A zero-length `buf` is legal: nothing is written, and the return value
/// still reports the full notional length.
pub fn format_bounded(buf: &mut [u8], fmt: &str, args: &[Arg]) -> usize {
    let mut cur = Cursor::for_buffer(buf);
    let mut list = ArgList::new(args);
    parser::run(&mut cur, fmt, &mut list);
    cur.finish()
}

/// Renders `fmt` against `args`, handing every output byte to `sink` in
/// order. Unbounded: `sink` is called once per output byte regardless of
/// how long the expansion is.
pub fn format_with<F: FnMut(u8)>(mut sink: F, fmt: &str, args: &[Arg]) -> usize {
    let mut cur = Cursor::for_callback(&mut sink);
    let mut list = ArgList::new(args);
    parser::run(&mut cur, fmt, &mut list);
    cur.finish()
}

/// Renders `fmt` against `args`, forwarding each byte to a host `putchar`-style
/// function pointer. This is the façade for targets that expose formatted
/// output only through a single C-ABI character sink (a UART driver, a
/// semihosting call, etc.) and have no buffer to format into at all.
pub fn format_to_putchar(putchar: extern "C" fn(u8), fmt: &str, args: &[Arg]) -> usize {
    let mut call = |b: u8| putchar(b);
    format_with(&mut call, fmt, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ToArg;

    #[test]
    fn bounded_truncates_and_reports_full_length() {
        let mut buf = [0u8; 4];
        let n = format_bounded(&mut buf, "%d", &[ToArg::to_arg(123456i32)]);
        assert_eq!(n, 6);
        assert_eq!(&buf, b"123\0");
    }

    #[test]
    fn bounded_zero_length_buffer_still_reports_length() {
        let mut buf: [u8; 0] = [];
        let n = format_bounded(&mut buf, "%d", &[ToArg::to_arg(42i32)]);
        assert_eq!(n, 2);
    }

    #[test]
    fn callback_receives_every_byte_unbounded() {
        let mut out = std::vec::Vec::new();
        let n = format_with(
            |b| out.push(b),
            "%s=%d",
            &[ToArg::to_arg("x"), ToArg::to_arg(7i32)],
        );
        assert_eq!(n, 3);
        assert_eq!(out, b"x=7");
    }
}
