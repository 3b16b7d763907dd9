//! Tagged formatter arguments.
//!
//! This module provides [`Arg`], the runtime-tagged value the formatter walks.
//! A call site packs its arguments into a slice of `Arg`s, usually through the
//! [`args!`](crate::args) macro, which converts every expression with
//! [`Arg::from`].
//!
//! ## Creating Arguments
//!
//! ```rust
//! use tagprint::{args, Arg, Width};
//!
//! let packed = args!["total:", 42u8, -7i64, 2.5, true, 'x'];
//! assert_eq!(packed[0], Arg::Str(Some(b"total:")));
//! assert_eq!(packed[1], Arg::Unsigned(42, Width::W8));
//! assert_eq!(packed[2], Arg::Signed(-7, Width::W64));
//! assert_eq!(packed[3], Arg::F64(2.5));
//! ```
//!
//! ## Null Strings
//!
//! `Arg::Str(None)` stands for a missing string. It renders as the configured
//! null placeholder instead of failing:
//!
//! ```rust
//! use tagprint::{args, format};
//!
//! let name: Option<&str> = None;
//! assert_eq!(format(&args![name]).unwrap(), "(null)");
//! ```

use crate::num::{self, MAX_U64_DIGITS};
use crate::{FormatOptions, Slice, SliceBuf};

/// Width class of the integer type an argument was converted from.
///
/// # Examples
///
/// ```rust
/// use tagprint::Width;
///
/// assert_eq!(Width::W8.max_digits(), 3);
/// assert_eq!(Width::W64.max_digits(), 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    Size,
}

impl Width {
    /// Most decimal digits a value of this width can need, sign excluded.
    #[inline]
    #[must_use]
    pub const fn max_digits(self) -> usize {
        match self {
            Width::W8 => 3,
            Width::W16 => 5,
            Width::W32 => 10,
            Width::W64 | Width::Size => MAX_U64_DIGITS,
        }
    }
}

/// One formatter argument.
///
/// The variant fully determines how the value renders:
///
/// | Variant | Rendering |
/// |---------|-----------|
/// | `Signed`, `Unsigned` | decimal |
/// | `Bool` | `true` / `false` |
/// | `F32`, `F64`, `Extended` | decimal with trimmed fraction |
/// | `Char` | its UTF-8 bytes |
/// | `Str` | the bytes verbatim, or the null placeholder |
/// | `Ptr` | `0x` followed by lowercase hex |
///
/// `Extended` carries an `f64`; it differs from `F64` only in its default
/// precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg<'a> {
    Signed(i64, Width),
    Unsigned(u64, Width),
    Bool(bool),
    F32(f32),
    F64(f64),
    Extended(f64),
    Char(char),
    Str(Option<&'a [u8]>),
    Ptr(usize),
}

impl<'a> Arg<'a> {
    #[inline]
    #[must_use]
    pub const fn str(value: &'a str) -> Self {
        Arg::Str(Some(value.as_bytes()))
    }

    #[inline]
    #[must_use]
    pub const fn bytes(value: &'a [u8]) -> Self {
        Arg::Str(Some(value))
    }

    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Arg::Str(None)
    }

    #[inline]
    #[must_use]
    pub const fn extended(value: f64) -> Self {
        Arg::Extended(value)
    }

    /// Captures the address of `ptr`; metadata of wide pointers is dropped.
    #[inline]
    #[must_use]
    pub fn ptr<T: ?Sized>(ptr: *const T) -> Self {
        Arg::Ptr(ptr.cast::<()>() as usize)
    }

    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Arg::Str(_))
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Arg::Signed(..) => "signed",
            Arg::Unsigned(..) => "unsigned",
            Arg::Bool(_) => "bool",
            Arg::F32(_) => "f32",
            Arg::F64(_) => "f64",
            Arg::Extended(_) => "extended",
            Arg::Char(_) => "char",
            Arg::Str(_) => "str",
            Arg::Ptr(_) => "ptr",
        }
    }

    /// Worst-case number of bytes the value renders to, separator excluded.
    ///
    /// Returns `None` for strings, which have no fixed bound and may be split
    /// across buffer flushes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::{Arg, FormatOptions};
    ///
    /// let options = FormatOptions::default();
    /// assert_eq!(Arg::from(-1i8).max_rendered_len(&options), Some(4));
    /// assert_eq!(Arg::from(true).max_rendered_len(&options), Some(5));
    /// assert_eq!(Arg::from("text").max_rendered_len(&options), None);
    /// ```
    #[must_use]
    pub fn max_rendered_len(&self, options: &FormatOptions) -> Option<usize> {
        let len = match self {
            Arg::Signed(_, width) => 1 + width.max_digits(),
            Arg::Unsigned(_, width) => width.max_digits(),
            Arg::Bool(_) => "false".len(),
            Arg::F32(_) => num::max_float_len(options.f32_precision),
            Arg::F64(_) => num::max_float_len(options.f64_precision),
            Arg::Extended(_) => num::max_float_len(options.extended_precision),
            Arg::Char(c) => c.len_utf8(),
            Arg::Ptr(_) => num::max_hex_len(),
            Arg::Str(_) => return None,
        };
        Some(len)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $repr:ty, $($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Arg::$variant(value as $repr, Width::$width)
                }
            }
        )*
    };
}

impl_from_int!(Signed, i64, i8 => W8, i16 => W16, i32 => W32, i64 => W64, isize => Size);
impl_from_int!(Unsigned, u64, u8 => W8, u16 => W16, u32 => W32, u64 => W64, usize => Size);

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::F32(value)
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::F64(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::str(value)
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Arg::Str(value.map(str::as_bytes))
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(value: &'a [u8]) -> Self {
        Arg::bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Arg::bytes(value)
    }
}

impl<'a> From<Slice<'a>> for Arg<'a> {
    fn from(value: Slice<'a>) -> Self {
        Arg::bytes(value.as_bytes())
    }
}

impl<'a, 'b: 'a> From<&'a Slice<'b>> for Arg<'a> {
    fn from(value: &'a Slice<'b>) -> Self {
        Arg::bytes(value.as_bytes())
    }
}

impl<'a> From<&'a SliceBuf> for Arg<'a> {
    fn from(value: &'a SliceBuf) -> Self {
        Arg::bytes(value.as_bytes())
    }
}

impl<T: ?Sized> From<*const T> for Arg<'_> {
    fn from(value: *const T) -> Self {
        Arg::ptr(value)
    }
}

impl<T: ?Sized> From<*mut T> for Arg<'_> {
    fn from(value: *mut T) -> Self {
        Arg::ptr(value.cast_const())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths() {
        assert_eq!(Arg::from(-1i8), Arg::Signed(-1, Width::W8));
        assert_eq!(Arg::from(300i16), Arg::Signed(300, Width::W16));
        assert_eq!(Arg::from(5isize), Arg::Signed(5, Width::Size));
        assert_eq!(Arg::from(255u8), Arg::Unsigned(255, Width::W8));
        assert_eq!(Arg::from(u64::MAX), Arg::Unsigned(u64::MAX, Width::W64));
        assert_eq!(Arg::from(7usize), Arg::Unsigned(7, Width::Size));
    }

    #[test]
    fn test_literal_defaults() {
        assert_eq!(Arg::from(42), Arg::Signed(42, Width::W32));
        assert_eq!(Arg::from(1.5), Arg::F64(1.5));
    }

    #[test]
    fn test_strings() {
        let owned = String::from("owned");
        assert_eq!(Arg::from(&owned), Arg::Str(Some(b"owned")));
        assert_eq!(Arg::from(None::<&str>), Arg::null());
        assert_eq!(Arg::from(b"raw"), Arg::bytes(b"raw"));
        assert!(Arg::from(Slice::from("s")).is_str());
        assert!(!Arg::from('c').is_str());
    }

    #[test]
    fn test_pointers() {
        let value = 5u32;
        let ptr: *const u32 = &value;
        assert_eq!(Arg::from(ptr), Arg::Ptr(ptr as usize));

        let bytes = [1u8, 2, 3];
        let wide: *const [u8] = &bytes[..];
        assert_eq!(Arg::from(wide), Arg::Ptr(bytes.as_ptr() as usize));
    }

    #[test]
    fn test_max_rendered_len() {
        let options = FormatOptions::default();
        assert_eq!(Arg::from(0u8).max_rendered_len(&options), Some(3));
        assert_eq!(Arg::from(i64::MIN).max_rendered_len(&options), Some(21));
        assert_eq!(Arg::from(0.0f64).max_rendered_len(&options), Some(39));
        assert_eq!(Arg::extended(0.0).max_rendered_len(&options), Some(43));
        assert_eq!(Arg::from('é').max_rendered_len(&options), Some(2));
        assert_eq!(Arg::null().max_rendered_len(&options), None);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Arg::from(1u16).type_name(), "unsigned");
        assert_eq!(Arg::extended(1.0).type_name(), "extended");
        assert_eq!(Arg::null().type_name(), "str");
    }
}
