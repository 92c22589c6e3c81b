//! The format-string interpreter: scans the template byte-by-byte, expands
//! each directive into flags/width/precision/length/specifier, and drives
//! the appropriate renderer.
//!
//! This replaces the upstream `%`-split-with-`itertools` scanning style
//! with a plain index-walk, since the destination is `&[u8]` rather than a
//! `char`-oriented string type.

use crate::args::{ArgList, IntWidth};
use crate::flags::Flags;
use crate::float_render::render_float;
use crate::int_render::render_int;
use crate::sink::Cursor;

#[derive(Clone, Copy)]
enum LengthMod {
    None,
    /// `hh` — promote through an 8-bit truncation.
    Hh,
    /// `h` — promote through a 16-bit truncation.
    H,
    /// `l`/`ll`/`j`/`z`/`t` — no narrowing; the value is already 64-bit.
    Wide,
}

/// Interprets `fmt` against `args`, writing the expansion into `cur`.
pub(crate) fn run(cur: &mut Cursor, fmt: &str, args: &mut ArgList) {
    let bytes = fmt.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b'%' {
            cur.emit(b);
            i += 1;
            continue;
        }
        i += 1;
        if i >= bytes.len() {
            // Trailing lone '%': emit literally.
            cur.emit(b'%');
            break;
        }

        let directive_start = i;
        let mut flags = Flags::empty();
        while i < bytes.len() {
            match bytes[i] {
                b'-' => flags |= Flags::LEFT_JUSTIFY,
                b'+' => flags |= Flags::PLUS,
                b' ' => flags |= Flags::SPACE,
                b'0' => flags |= Flags::ZERO_PAD,
                b'#' => flags |= Flags::ALTERNATE_FORM,
                _ => break,
            }
            i += 1;
        }

        let mut width = 0usize;
        if i < bytes.len() && bytes[i] == b'*' {
            i += 1;
            let w = args.arg_i64();
            if w < 0 {
                flags |= Flags::LEFT_JUSTIFY;
                width = w.unsigned_abs() as usize;
            } else {
                width = w as usize;
            }
        } else {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                width = width * 10 + (bytes[i] - b'0') as usize;
                i += 1;
            }
        }

        let mut precision: Option<usize> = None;
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            if i < bytes.len() && bytes[i] == b'*' {
                i += 1;
                let p = args.arg_i64();
                precision = if p < 0 { None } else { Some(p as usize) };
            } else {
                let mut p = 0usize;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    p = p * 10 + (bytes[i] - b'0') as usize;
                    i += 1;
                }
                precision = Some(p);
            }
        }

        let length = if bytes[i..].starts_with(b"hh") {
            i += 2;
            LengthMod::Hh
        } else if bytes[i..].starts_with(b"ll") {
            i += 2;
            LengthMod::Wide
        } else if i < bytes.len() && bytes[i] == b'h' {
            i += 1;
            LengthMod::H
        } else if i < bytes.len() && matches!(bytes[i], b'l' | b'j' | b'z' | b't' | b'L') {
            i += 1;
            LengthMod::Wide
        } else {
            LengthMod::None
        };

        let Some(&spec) = bytes.get(i) else {
            // Directive ran off the end of the string with no specifier:
            // stop, consuming nothing further and emitting nothing for it.
            break;
        };
        i += 1;

        match spec {
            b'd' | b'i' => {
                let (raw, native) = args.arg_i64_sized();
                let v = cast_signed(raw, length, native);
                render_int(
                    cur,
                    v.unsigned_abs(),
                    v < 0,
                    true,
                    10,
                    flags,
                    width,
                    precision,
                );
            }
            b'u' => {
                let (raw, native) = args.arg_u64_sized();
                let v = cast_unsigned(raw, length, native);
                render_int(cur, v, false, false, 10, flags, width, precision);
            }
            b'o' => {
                let (raw, native) = args.arg_u64_sized();
                let v = cast_unsigned(raw, length, native);
                render_int(cur, v, false, false, 8, flags, width, precision);
            }
            b'x' => {
                let (raw, native) = args.arg_u64_sized();
                let v = cast_unsigned(raw, length, native);
                render_int(cur, v, false, false, 16, flags, width, precision);
            }
            b'X' => {
                let (raw, native) = args.arg_u64_sized();
                let v = cast_unsigned(raw, length, native);
                render_int(cur, v, false, false, 16, flags | Flags::UPPERCASE, width, precision);
            }
            b'b' => {
                let (raw, native) = args.arg_u64_sized();
                let v = cast_unsigned(raw, length, native);
                render_int(cur, v, false, false, 2, flags, width, precision);
            }
            b'f' => {
                render_float(cur, args.arg_f64(), flags, width, precision);
            }
            b'F' => {
                render_float(cur, args.arg_f64(), flags | Flags::UPPERCASE, width, precision);
            }
            b'c' => {
                render_char(cur, args.arg_c(), flags, width);
            }
            b's' => {
                render_str(cur, args.arg_str(), flags, width, precision);
            }
            b'p' => {
                let addr = args.arg_p() as usize as u64;
                let ptr_width = 2 * core::mem::size_of::<*const ()>();
                render_int(
                    cur,
                    addr,
                    false,
                    false,
                    16,
                    flags | Flags::UPPERCASE | Flags::ZERO_PAD,
                    ptr_width,
                    None,
                );
            }
            b'%' => {
                cur.emit(b'%');
            }
            _ => {
                // Unrecognised specifier: emit just the specifier byte,
                // dropping the already-scanned flags/width/'%' and taking
                // no argument.
                cur.emit(spec);
            }
        }
    }
}

/// Resolves the width an unmodified `%d`/`%i` effectively renders at: an
/// explicit length modifier overrides the argument's own width, otherwise
/// the argument narrows to the width it was actually passed with (mirroring
/// how a bare `int`/`unsigned int` argument in C carries no wider promotion).
fn effective_bits(length: LengthMod, native: IntWidth) -> u32 {
    match length {
        LengthMod::Hh => 8,
        LengthMod::H => 16,
        LengthMod::Wide => 64,
        LengthMod::None => match native {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        },
    }
}

fn cast_signed(v: i64, length: LengthMod, native: IntWidth) -> i64 {
    match effective_bits(length, native) {
        8 => v as i8 as i64,
        16 => v as i16 as i64,
        32 => v as i32 as i64,
        _ => v,
    }
}

fn cast_unsigned(v: u64, length: LengthMod, native: IntWidth) -> u64 {
    match effective_bits(length, native) {
        8 => v as u8 as u64,
        16 => v as u16 as u64,
        32 => v as u32 as u64,
        _ => v,
    }
}

fn render_char(cur: &mut Cursor, c: char, flags: Flags, width: usize) {
    let mut encode_buf = [0u8; 4];
    let encoded = c.encode_utf8(&mut encode_buf).as_bytes();
    let pad = width.saturating_sub(encoded.len());
    if flags.contains(Flags::LEFT_JUSTIFY) {
        cur.emit_all(encoded);
        for _ in 0..pad {
            cur.emit(b' ');
        }
    } else {
        for _ in 0..pad {
            cur.emit(b' ');
        }
        cur.emit_all(encoded);
    }
}

fn render_str(cur: &mut Cursor, s: &str, flags: Flags, width: usize, precision: Option<usize>) {
    let bytes = s.as_bytes();
    let shown = match precision {
        Some(p) => &bytes[..p.min(bytes.len())],
        None => bytes,
    };
    let pad = width.saturating_sub(shown.len());
    if flags.contains(Flags::LEFT_JUSTIFY) {
        cur.emit_all(shown);
        for _ in 0..pad {
            cur.emit(b' ');
        }
    } else {
        for _ in 0..pad {
            cur.emit(b' ');
        }
        cur.emit_all(shown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Arg, ToArg};

    fn format(fmt: &str, args: &[Arg]) -> std::string::String {
        let mut buf = [0u8; 256];
        let written = {
            let mut cur = Cursor::for_buffer(&mut buf);
            let mut list = ArgList::new(args);
            run(&mut cur, fmt, &mut list);
            cur.finish()
        };
        std::string::String::from_utf8(buf[..written].to_vec()).unwrap()
    }

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(format("no directives here", &[]), "no directives here");
    }

    #[test]
    fn basic_decimal_and_string() {
        assert_eq!(
            format("%s is %d", &[ToArg::to_arg("answer"), ToArg::to_arg(42i32)]),
            "answer is 42"
        );
    }

    #[test]
    fn width_and_precision_from_args() {
        assert_eq!(format("%*.*f", &[ToArg::to_arg(10i32), ToArg::to_arg(2i32), ToArg::to_arg(3.14159f64)]), "      3.14");
    }

    #[test]
    fn negative_star_width_forces_left_justify() {
        assert_eq!(format("%*d|", &[ToArg::to_arg(-6i32), ToArg::to_arg(7i32)]), "7     |");
    }

    #[test]
    fn unmodified_specifier_narrows_to_argument_native_width() {
        // No length modifier: %u of an i32 -1 narrows to 32 bits, as a bare
        // `unsigned int` argument would in C, rather than rendering the
        // full 64-bit sign-extension.
        assert_eq!(format("%u", &[ToArg::to_arg(-1i32)]), "4294967295");
    }

    #[test]
    fn hh_length_modifier_truncates_before_render() {
        // 300 as i8 wraps to 44.
        assert_eq!(format("%hhd", &[ToArg::to_arg(300i32)]), "44");
        // 0x1FF as u8 truncates to 0xFF = 255.
        assert_eq!(format("%hhu", &[ToArg::to_arg(0x1FFi32)]), "255");
    }

    #[test]
    fn percent_literal_consumes_no_argument() {
        assert_eq!(format("100%% done, %d left", &[ToArg::to_arg(3i32)]), "100% done, 3 left");
    }

    #[test]
    fn unknown_specifier_drops_percent_and_flags() {
        assert_eq!(format("%q", &[]), "q");
        assert_eq!(format("%kX", &[]), "kX");
        assert_eq!(format("%kmarco", &[]), "kmarco");
    }

    #[test]
    fn trailing_percent_is_literal() {
        assert_eq!(format("abc%", &[]), "abc%");
    }

    #[test]
    fn directive_running_off_the_end_emits_nothing() {
        assert_eq!(format("abc%-5", &[]), "abc");
    }

    #[test]
    fn pointer_is_zero_padded_uppercase_hex_without_prefix() {
        // width = 2 * sizeof(pointer); assumes a 64-bit target like the host
        // this test runs on.
        let p: *const () = 0x1234 as *const ();
        assert_eq!(format("%p", &[ToArg::to_arg(p)]), "0000000000001234");
    }

    #[test]
    fn char_specifier_encodes_utf8() {
        assert_eq!(format("[%5c]", &[ToArg::to_arg('x')]), "[    x]");
    }

    #[test]
    fn string_precision_truncates() {
        assert_eq!(format("%.3s", &[ToArg::to_arg("hello")]), "hel");
    }
}
