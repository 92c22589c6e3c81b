//! Flags parsed from the format string.
//!
//! `SIGNED_INTEGER` and `NEGATIVE` from the data model in the design docs are
//! deliberately not bits here — the spec calls them "derived during
//! rendering", so they travel as plain `bool` parameters to the renderers
//! instead of living in this persistent set. `PRECISION_GIVEN` likewise
//! travels as `Option<usize>` rather than a bit plus a separate value.

bitflags::bitflags! {
    pub struct Flags: u8 {
        /// `-`: left-justify within the field width.
        const LEFT_JUSTIFY   = 0b0000_0001;
        /// `+`: always show a sign on signed numeric conversions.
        const PLUS           = 0b0000_0010;
        /// ` `: show a space where `+` would go, for non-negative values.
        const SPACE          = 0b0000_0100;
        /// `0`: pad with zeros instead of spaces.
        const ZERO_PAD       = 0b0000_1000;
        /// `#`: alternate form (`0x`/`0X` prefix, leading octal `0`).
        const ALTERNATE_FORM = 0b0001_0000;
        /// Specifier is uppercase (`X`, `F`, ...).
        const UPPERCASE      = 0b0010_0000;
    }
}
