//! Fixed-point float rendering (`%f`/`%F`).
//!
//! No `dtoa`, no exponential form — the whole thing works on the magnitude
//! split into an integer whole part and a fractional part scaled by
//! `10^precision`, rounded half-away-from-zero, with the carry from
//! rounding propagated back into the whole part by hand.

use crate::flags::Flags;
use crate::sink::Cursor;

/// `core::f64` only exposes bit-level queries; `abs`/`trunc`/`fract`/`round`
/// need an actual implementation, which `std` supplies natively and
/// `no_std` targets get from `libm` instead.
mod mathops {
    #[cfg(feature = "std")]
    pub(crate) fn abs(x: f64) -> f64 {
        x.abs()
    }
    #[cfg(feature = "std")]
    pub(crate) fn trunc(x: f64) -> f64 {
        x.trunc()
    }
    #[cfg(feature = "std")]
    pub(crate) fn round(x: f64) -> f64 {
        x.round()
    }

    #[cfg(not(feature = "std"))]
    pub(crate) fn abs(x: f64) -> f64 {
        libm::fabs(x)
    }
    #[cfg(not(feature = "std"))]
    pub(crate) fn trunc(x: f64) -> f64 {
        libm::trunc(x)
    }
    #[cfg(not(feature = "std"))]
    pub(crate) fn round(x: f64) -> f64 {
        libm::round(x)
    }
}

/// Above this magnitude the whole-part arithmetic below would overflow a
/// `u64` scratch accumulator well before reaching it; values at or beyond
/// this threshold render with an empty digit field instead of garbage.
const MAX_RENDERABLE_MAGNITUDE: f64 = 1e17;

/// `%f` never shows more than this many fractional digits, regardless of a
/// larger requested precision — matches the scratch-buffer budget the
/// integer renderer works within.
const MAX_PRECISION: usize = 9;

const DEFAULT_PRECISION: usize = 6;

pub(crate) fn render_float(
    cur: &mut Cursor,
    value: f64,
    flags: Flags,
    width: usize,
    precision: Option<usize>,
) {
    let negative = value.is_sign_negative();
    let magnitude = mathops::abs(value);
    let prec = precision.unwrap_or(DEFAULT_PRECISION).min(MAX_PRECISION);

    if magnitude.is_nan() {
        render_word(cur, negative, flags, width, if flags.contains(Flags::UPPERCASE) { "NAN" } else { "nan" }, false);
        return;
    }
    if magnitude.is_infinite() {
        render_word(cur, negative, flags, width, if flags.contains(Flags::UPPERCASE) { "INF" } else { "inf" }, true);
        return;
    }

    if magnitude >= MAX_RENDERABLE_MAGNITUDE {
        // Field collapses to just the sign/padding; no digits are emitted.
        let sign_byte = sign_byte(negative, flags);
        let prefix_len = usize::from(sign_byte.is_some());
        let pad = width.saturating_sub(prefix_len);
        if flags.contains(Flags::LEFT_JUSTIFY) {
            emit_sign(cur, sign_byte);
            for _ in 0..pad {
                cur.emit(b' ');
            }
        } else {
            for _ in 0..pad {
                cur.emit(b' ');
            }
            emit_sign(cur, sign_byte);
        }
        return;
    }

    let scale = pow10(prec);
    let int_part = mathops::trunc(magnitude);
    let mut whole = int_part as u64;
    let frac_f = mathops::round((magnitude - int_part) * scale as f64);
    let mut frac = frac_f as u64;
    // Rounding the scaled fraction can carry into the whole part.
    if frac >= scale {
        frac -= scale;
        whole += 1;
    }

    let mut whole_digits = [0u8; 24];
    let mut n_whole = 0usize;
    let mut w = whole;
    loop {
        whole_digits[n_whole] = b'0' + (w % 10) as u8;
        n_whole += 1;
        w /= 10;
        if w == 0 {
            break;
        }
    }

    let mut frac_digits = [0u8; MAX_PRECISION];
    let mut f = frac;
    for i in (0..prec).rev() {
        frac_digits[i] = b'0' + (f % 10) as u8;
        f /= 10;
    }

    let show_point = prec > 0 || flags.contains(Flags::ALTERNATE_FORM);
    let sign_byte = sign_byte(negative, flags);
    let prefix_len = usize::from(sign_byte.is_some());
    let content_len = prefix_len + n_whole + usize::from(show_point) + prec;
    let pad = width.saturating_sub(content_len);
    let zero_pad = flags.contains(Flags::ZERO_PAD) && !flags.contains(Flags::LEFT_JUSTIFY);

    let emit_digits = |cur: &mut Cursor| {
        for i in (0..n_whole).rev() {
            cur.emit(whole_digits[i]);
        }
        if show_point {
            cur.emit(b'.');
        }
        for i in 0..prec {
            cur.emit(frac_digits[i]);
        }
    };

    if zero_pad {
        emit_sign(cur, sign_byte);
        for _ in 0..pad {
            cur.emit(b'0');
        }
        emit_digits(cur);
    } else if flags.contains(Flags::LEFT_JUSTIFY) {
        emit_sign(cur, sign_byte);
        emit_digits(cur);
        for _ in 0..pad {
            cur.emit(b' ');
        }
    } else {
        for _ in 0..pad {
            cur.emit(b' ');
        }
        emit_sign(cur, sign_byte);
        emit_digits(cur);
    }
}

fn sign_byte(negative: bool, flags: Flags) -> Option<u8> {
    if negative {
        Some(b'-')
    } else if flags.contains(Flags::PLUS) {
        Some(b'+')
    } else if flags.contains(Flags::SPACE) {
        Some(b' ')
    } else {
        None
    }
}

fn emit_sign(cur: &mut Cursor, sign_byte: Option<u8>) {
    if let Some(s) = sign_byte {
        cur.emit(s);
    }
}

/// `nan`/`inf` ignore zero-padding and precision; width/justification and
/// sign (for `inf` only — `nan` is never negative-signed) still apply.
fn render_word(cur: &mut Cursor, negative: bool, flags: Flags, width: usize, word: &str, signable: bool) {
    let sign_byte = if signable { sign_byte(negative, flags) } else { None };
    let prefix_len = usize::from(sign_byte.is_some());
    let content_len = prefix_len + word.len();
    let pad = width.saturating_sub(content_len);
    if flags.contains(Flags::LEFT_JUSTIFY) {
        emit_sign(cur, sign_byte);
        cur.emit_all(word.as_bytes());
        for _ in 0..pad {
            cur.emit(b' ');
        }
    } else {
        for _ in 0..pad {
            cur.emit(b' ');
        }
        emit_sign(cur, sign_byte);
        cur.emit_all(word.as_bytes());
    }
}

fn pow10(n: usize) -> u64 {
    let mut v = 1u64;
    for _ in 0..n {
        v *= 10;
    }
    v
}
