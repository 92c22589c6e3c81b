//! Integer-to-text rendering: digit generation plus flag/width/precision
//! application, writing straight into a [`Cursor`] with no intermediate
//! allocation.

use crate::flags::Flags;
use crate::sink::Cursor;

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Base-2 rendering of `u64::MAX` needs 64 digit characters; this is the
/// widest case any supported base (2, 8, 10, 16) can produce.
const MAX_DIGITS: usize = 64;

/// Renders an unsigned magnitude plus sign state into `cur`.
///
/// `signed` controls whether `PLUS`/`SPACE`/`negative` may produce a sign
/// character at all — unsigned specifiers (`u`, `o`, `x`, `X`, `b`) always
/// pass `signed = false` regardless of the argument's original C type.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_int(
    cur: &mut Cursor,
    magnitude: u64,
    negative: bool,
    signed: bool,
    base: u32,
    flags: Flags,
    width: usize,
    precision: Option<usize>,
) {
    let alphabet = if flags.contains(Flags::UPPERCASE) {
        DIGITS_UPPER
    } else {
        DIGITS_LOWER
    };

    // Step 1: digits, least-significant first.
    let mut digits = [0u8; MAX_DIGITS];
    let mut ndigits = 0usize;
    let mut m = magnitude;
    loop {
        digits[ndigits] = alphabet[(m % base as u64) as usize];
        ndigits += 1;
        m /= base as u64;
        if m == 0 {
            break;
        }
    }

    let prec_given = precision.is_some();
    let mut prec = precision.unwrap_or(0);

    // Step 3: precision 0 + value 0 means an entirely empty digit field.
    if prec_given && prec == 0 && magnitude == 0 {
        ndigits = 0;
    }

    // Base-8 alternate form: the leading `0` counts as (and is emitted as)
    // a digit, added only if the natural/precision-padded digits don't
    // already start with one.
    if flags.contains(Flags::ALTERNATE_FORM) && base == 8 && ndigits > 0 {
        let already_leads_with_zero = magnitude == 0 || (prec_given && prec > ndigits);
        if !already_leads_with_zero {
            prec = prec.max(ndigits + 1);
        }
    }

    let digit_field = ndigits.max(prec);

    // Step 2: sign and base-16 alternate-form prefix.
    let hex_prefix = flags.contains(Flags::ALTERNATE_FORM) && base == 16 && magnitude != 0;
    let sign_byte: Option<u8> = if !signed {
        None
    } else if negative {
        Some(b'-')
    } else if flags.contains(Flags::PLUS) {
        Some(b'+')
    } else if flags.contains(Flags::SPACE) {
        Some(b' ')
    } else {
        None
    };
    let prefix_len = usize::from(sign_byte.is_some()) + if hex_prefix { 2 } else { 0 };

    // PRECISION_GIVEN and LEFT_JUSTIFY both cancel ZERO_PAD.
    let zero_pad =
        flags.contains(Flags::ZERO_PAD) && !flags.contains(Flags::LEFT_JUSTIFY) && !prec_given;

    let content_len = prefix_len + digit_field;
    let pad = width.saturating_sub(content_len);

    let emit_prefix = |cur: &mut Cursor| {
        if let Some(s) = sign_byte {
            cur.emit(s);
        }
        if hex_prefix {
            cur.emit(b'0');
            cur.emit(if flags.contains(Flags::UPPERCASE) {
                b'X'
            } else {
                b'x'
            });
        }
    };
    let emit_digits = |cur: &mut Cursor| {
        for _ in 0..digit_field.saturating_sub(ndigits) {
            cur.emit(b'0');
        }
        for i in (0..ndigits).rev() {
            cur.emit(digits[i]);
        }
    };

    if zero_pad {
        emit_prefix(cur);
        for _ in 0..pad {
            cur.emit(b'0');
        }
        emit_digits(cur);
    } else if flags.contains(Flags::LEFT_JUSTIFY) {
        emit_prefix(cur);
        emit_digits(cur);
        for _ in 0..pad {
            cur.emit(b' ');
        }
    } else {
        for _ in 0..pad {
            cur.emit(b' ');
        }
        emit_prefix(cur);
        emit_digits(cur);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(
        magnitude: u64,
        negative: bool,
        signed: bool,
        base: u32,
        flags: Flags,
        width: usize,
        precision: Option<usize>,
    ) -> std::string::String {
        let mut buf = [0u8; 128];
        let written = {
            let mut cur = Cursor::for_buffer(&mut buf);
            render_int(
                &mut cur, magnitude, negative, signed, base, flags, width, precision,
            );
            cur.finish()
        };
        std::string::String::from_utf8(buf[..written].to_vec()).unwrap()
    }

    #[test]
    fn plain_decimal() {
        assert_eq!(render(23125, false, true, 10, Flags::empty(), 0, None), "23125");
    }

    #[test]
    fn space_flag_on_nonnegative() {
        assert_eq!(
            render(23125, false, true, 10, Flags::SPACE, 10, None),
            "     23125"
        );
    }

    #[test]
    fn plus_overrides_space() {
        assert_eq!(
            render(23125, false, true, 10, Flags::SPACE | Flags::PLUS, 10, None),
            "    +23125"
        );
    }

    #[test]
    fn zero_pad_excluded_by_left_justify() {
        let out = render(9, false, true, 10, Flags::ZERO_PAD | Flags::LEFT_JUSTIFY, 5, None);
        assert_eq!(out, "9    ");
        assert!(!out.trim_end().contains('0'));
    }

    #[test]
    fn precision_cancels_zero_pad() {
        // %08.3d on 42 => "     042" (space pad, not zero pad)
        assert_eq!(
            render(42, false, true, 10, Flags::ZERO_PAD, 8, Some(3)),
            "     042"
        );
    }

    #[test]
    fn precision_zero_value_zero_is_empty_field() {
        assert_eq!(render(0, false, true, 10, Flags::empty(), 0, Some(0)), "");
    }

    #[test]
    fn hex_alternate_form() {
        assert_eq!(
            render(
                0x1234abcd,
                false,
                false,
                16,
                Flags::ALTERNATE_FORM | Flags::ZERO_PAD,
                20,
                None
            ),
            "0x00000000001234abcd"
        );
    }

    #[test]
    fn octal_alternate_form_adds_single_leading_zero() {
        assert_eq!(render(8, false, false, 8, Flags::ALTERNATE_FORM, 0, None), "010");
        // Value already octal-leading-zero-free only after the forced digit.
        assert_eq!(render(0, false, false, 8, Flags::ALTERNATE_FORM, 0, None), "0");
    }

    #[test]
    fn binary_extension() {
        assert_eq!(render(0b1011, false, false, 2, Flags::empty(), 0, None), "1011");
    }

    #[test]
    fn unsigned_specifier_never_signs() {
        assert_eq!(
            render(5, true /* ignored when signed=false */, false, 10, Flags::PLUS, 0, None),
            "5"
        );
    }
}
