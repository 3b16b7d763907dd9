//! Output Rules Reference
//!
//! This module documents how every argument renders and how templates are
//! interpreted. It contains no code.
//!
//! # Plain Rendering
//!
//! Arguments are written in order with no implicit spacing between strings.
//! Values that are not text are followed by the separator byte, a space by
//! default:
//!
//! | Argument | Output | Separator |
//! |----------|--------|-----------|
//! | `42`, `-7i8`, `3u64` | decimal digits, `-` for negatives | yes |
//! | `true` / `false` | `true` / `false` | yes |
//! | `1.5f32`, `2.25`, `Arg::extended(x)` | decimal, trailing zeros trimmed | yes |
//! | raw pointer | `0x` + lowercase hex | yes |
//! | `'c'` | the character's UTF-8 bytes | no |
//! | `"text"`, `b"bytes"` | verbatim | no |
//! | `None::<&str>` | `(null)` | no |
//!
//! ```rust
//! use tagprint::tformat;
//!
//! assert_eq!(tformat!("id:", 7, "ok:", true).unwrap(), "id:7 ok:true ");
//! assert_eq!(tformat!('[', "x", ']').unwrap(), "[x]");
//! ```
//!
//! The separator is configurable through
//! [`FormatOptions`](crate::FormatOptions); `FormatOptions::compact()` turns
//! it off.
//!
//! # Templates
//!
//! The `f` entry points ([`printf`](crate::printf),
//! [`formatf`](crate::formatf), ...) treat string arguments as templates:
//!
//! | Template text | Meaning |
//! |---------------|---------|
//! | `%` | insert the next argument, without separator |
//! | `%%` | a literal `%` |
//! | `%` with no arguments left | a literal `%` |
//! | anything else | copied verbatim |
//!
//! ```rust
//! use tagprint::tformatf;
//!
//! assert_eq!(tformatf!("value = %", 42).unwrap(), "value = 42");
//! assert_eq!(tformatf!("100%% done").unwrap(), "100% done");
//! assert_eq!(tformatf!("%").unwrap(), "%");
//! ```
//!
//! A string inserted through `%` is copied as is; it is never scanned for
//! placeholders of its own.
//!
//! ## Flags
//!
//! printf-style flags, widths and precisions are not yet supported. Only the
//! `%` itself is special, so the characters after it stay in the output:
//!
//! ```rust
//! use tagprint::tformatf;
//!
//! assert_eq!(tformatf!("%d", 5).unwrap(), "5d");
//! ```
//!
//! ## Arguments After a Template
//!
//! Once a template has no text left, formatting continues with the remaining
//! arguments. Another string becomes the next template; anything else
//! renders as in plain mode:
//!
//! ```rust
//! use tagprint::tformatf;
//!
//! let out = tformatf!("a=% ", 1, 2, "b=%", 3).unwrap();
//! assert_eq!(out, "a=1 2 b=3");
//! ```
//!
//! # Floating Point
//!
//! Fractional digits are produced one at a time up to the precision for the
//! argument's width (9 for `f32`, 17 for `f64`, 21 for extended), then
//! trailing zeros and a bare decimal point are removed. The digits are not
//! correctly rounded, so values without an exact binary representation show
//! their approximation error:
//!
//! ```rust
//! use tagprint::tformat;
//!
//! assert_eq!(tformat!(2.0).unwrap(), "2 ");
//! assert_eq!(tformat!(0.75f32).unwrap(), "0.75 ");
//! assert_eq!(tformat!(f64::NAN, f64::NEG_INFINITY).unwrap(), "nan -inf ");
//! ```
//!
//! Integer parts above `u64::MAX` saturate at `18446744073709551615`.
