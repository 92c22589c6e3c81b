//! Typed argument access.
//!
//! Printf has no type-safe varargs in Rust, so callers hand over a slice of
//! [`Arg`] built via [`ToArg`] and the interpreter pulls from it in order.

/// The native width a value arrived with, before any length-modifier cast.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

fn width_of<T>() -> IntWidth {
    match core::mem::size_of::<T>() {
        1 => IntWidth::W8,
        2 => IntWidth::W16,
        4 => IntWidth::W32,
        8 => IntWidth::W64,
        _ => IntWidth::W64,
    }
}

/// A single formatting argument.
#[derive(Debug, Copy, Clone)]
#[non_exhaustive]
pub enum Arg<'a> {
    Int(i64, IntWidth),
    UInt(u64, IntWidth),
    Float(f64),
    Char(char),
    Str(&'a str),
    Pointer(*const ()),
}

/// Converts a native Rust value into an [`Arg`].
pub trait ToArg<'a>: Copy {
    fn to_arg(self) -> Arg<'a>;
}

macro_rules! impl_to_arg_signed {
    ($($t:ty),*) => {
        $(
            impl<'a> ToArg<'a> for $t {
                fn to_arg(self) -> Arg<'a> {
                    Arg::Int(self as i64, width_of::<$t>())
                }
            }
        )*
    };
}
impl_to_arg_signed!(i8, i16, i32, i64, isize);

macro_rules! impl_to_arg_unsigned {
    ($($t:ty),*) => {
        $(
            impl<'a> ToArg<'a> for $t {
                fn to_arg(self) -> Arg<'a> {
                    Arg::UInt(self as u64, width_of::<$t>())
                }
            }
        )*
    };
}
impl_to_arg_unsigned!(u8, u16, u32, u64, usize);

impl<'a> ToArg<'a> for f32 {
    fn to_arg(self) -> Arg<'a> {
        Arg::Float(self as f64)
    }
}

impl<'a> ToArg<'a> for f64 {
    fn to_arg(self) -> Arg<'a> {
        Arg::Float(self)
    }
}

impl<'a> ToArg<'a> for char {
    fn to_arg(self) -> Arg<'a> {
        Arg::Char(self)
    }
}

impl<'a> ToArg<'a> for &'a str {
    fn to_arg(self) -> Arg<'a> {
        Arg::Str(self)
    }
}

impl<'a> ToArg<'a> for *const () {
    fn to_arg(self) -> Arg<'a> {
        Arg::Pointer(self)
    }
}

/// A cursor over a caller-supplied argument slice, consumed in declaration order.
#[derive(Debug, Clone)]
pub struct ArgList<'a> {
    args: &'a [Arg<'a>],
    index: usize,
}

impl<'a> ArgList<'a> {
    pub fn new(args: &'a [Arg<'a>]) -> Self {
        Self { args, index: 0 }
    }

    /// Number of arguments not yet pulled.
    pub fn remaining(&self) -> usize {
        self.args.len() - self.index
    }

    fn next_arg(&mut self) -> &'a Arg<'a> {
        let arg = self
            .args
            .get(self.index)
            .unwrap_or_else(|| panic!("format string expects more arguments than were given"));
        self.index += 1;
        arg
    }

    pub fn arg_i64(&mut self) -> i64 {
        self.arg_i64_sized().0
    }

    pub fn arg_u64(&mut self) -> u64 {
        self.arg_u64_sized().0
    }

    /// Like [`Self::arg_i64`], but also returns the width the argument was
    /// originally passed with (before any length-modifier cast), so a
    /// caller can narrow an unmodified `%d`/`%u` to the same width a bare
    /// C `int`/`unsigned int` argument would have been.
    pub fn arg_i64_sized(&mut self) -> (i64, IntWidth) {
        match self.next_arg() {
            Arg::Int(i, w) => (*i, *w),
            Arg::UInt(u, w) => (*u as i64, *w),
            other => panic!("expected an integer argument, got {:?}", other),
        }
    }

    /// Like [`Self::arg_u64`], but also returns the argument's original width.
    pub fn arg_u64_sized(&mut self) -> (u64, IntWidth) {
        match self.next_arg() {
            Arg::Int(i, w) => (*i as u64, *w),
            Arg::UInt(u, w) => (*u, *w),
            other => panic!("expected an integer argument, got {:?}", other),
        }
    }

    pub fn arg_i32(&mut self) -> i32 {
        self.arg_i64() as i32
    }

    pub fn arg_i16(&mut self) -> i16 {
        self.arg_i64() as i16
    }

    pub fn arg_i8(&mut self) -> i8 {
        self.arg_i64() as i8
    }

    pub fn arg_u32(&mut self) -> u32 {
        self.arg_u64() as u32
    }

    pub fn arg_u16(&mut self) -> u16 {
        self.arg_u64() as u16
    }

    pub fn arg_u8(&mut self) -> u8 {
        self.arg_u64() as u8
    }

    pub fn arg_f64(&mut self) -> f64 {
        match self.next_arg() {
            Arg::Float(f) => *f,
            other => panic!("expected a float argument, got {:?}", other),
        }
    }

    pub fn arg_c(&mut self) -> char {
        match self.next_arg() {
            Arg::Char(c) => *c,
            other => panic!("expected a char argument, got {:?}", other),
        }
    }

    pub fn arg_str(&mut self) -> &'a str {
        match self.next_arg() {
            Arg::Str(s) => s,
            other => panic!("expected a string argument, got {:?}", other),
        }
    }

    /// Pointers are stored as sign/zero-extended integers.
    pub fn arg_p(&mut self) -> *const () {
        match self.next_arg() {
            Arg::Int(i, _) => *i as *const (),
            Arg::UInt(u, _) => *u as *const (),
            Arg::Pointer(p) => *p,
            other => panic!("expected a pointer argument, got {:?}", other),
        }
    }
}
