//! # tagprint
//!
//! Allocation-light formatted printing of runtime-tagged arguments, plus the
//! byte-slice toolkit it is built on.
//!
//! ## What is it?
//!
//! Every argument of a print call is packed into an [`Arg`], an enum whose
//! variant says how the value renders. The formatter walks those arguments and
//! writes them into a fixed window. When the window is full it stops, the
//! caller flushes or grows the buffer, and formatting picks up exactly where it
//! left off. Printing to stdout therefore never allocates, and building a
//! string grows its buffer by doubling.
//!
//! ## Key Features
//!
//! - **Two modes**: plain concatenation with a separator after non-text
//!   values, or templates where `%` takes the next argument
//! - **Resumable**: output is identical for any buffer size that can hold the
//!   largest single value
//! - **Byte slices**: [`Slice`] (borrowed) and [`SliceBuf`] (owned) with search,
//!   trimming and splitting that never copy
//! - **Configurable**: separator, null placeholder and float precision through
//!   [`FormatOptions`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tagprint::{args, format, formatf};
//!
//! let out = format(&args!["items:", 3, "done:", false]).unwrap();
//! assert_eq!(out, "items:3 done:false ");
//!
//! let out = formatf(&args!["% of % (100%%)", 3, 3]).unwrap();
//! assert_eq!(out, "3 of 3 (100%)");
//! ```
//!
//! The macros pack the arguments for you:
//!
//! ```rust
//! use tagprint::{tformatf, tprintln};
//!
//! tprintln!("hello", 42).unwrap();
//! assert_eq!(tformatf!("x = %", 1.5).unwrap(), "x = 1.5");
//! ```
//!
//! ### Working with Slices
//!
//! ```rust
//! use tagprint::Slice;
//!
//! let line = Slice::from("  key=value  ").trim_whitespace();
//! let mut parts = line.split_iter("=");
//! assert_eq!(parts.next().unwrap(), "key");
//! assert_eq!(parts.next().unwrap(), "value");
//! assert!(parts.next().is_none());
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: buffer
//! growth and short writes at `debug`, flushes and direct string writes at
//! `trace`. No logger is installed; hook one up (for example `env_logger`) to
//! see them.
//!
//! ## Output Rules
//!
//! See the [`syntax`] module for the full rendering and template rules.
//!
//! ## Examples
//!
//! The `demos/` directory holds runnable programs:
//!
//! - **`hello.rs`** - Plain and template printing to stdout
//! - **`slices.rs`** - Searching, trimming and splitting byte slices
//! - **`building.rs`** - Building strings and reusing buffers
//! - **`custom_options.rs`** - Separators, placeholders and precision
//!
//! Run any of them with: `cargo run --example <name>`

pub mod buffer;
pub mod error;
pub mod formatter;
pub mod macros;
pub mod num;
pub mod options;
pub mod sink;
pub mod slice;
pub mod syntax;
pub mod value;

pub use buffer::FmtBuf;
pub use error::{Error, Result};
pub use formatter::{Cursor, Formatter, Mode, Progress};
pub use options::FormatOptions;
pub use sink::{build_into, Printer, PRINT_BUF_SIZE};
pub use slice::{Slice, SliceBuf, Split};
pub use value::{Arg, Width};

use std::io;

/// Prints the arguments to stdout.
///
/// # Examples
///
/// ```rust
/// use tagprint::{args, print};
///
/// print(&args!["answer: ", 42]).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print(args: &[Arg<'_>]) -> Result<()> {
    sink::print_stdout(args, Mode::Plain, false)
}

/// Prints the arguments to stdout, scanning strings as templates.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn printf(args: &[Arg<'_>]) -> Result<()> {
    sink::print_stdout(args, Mode::Template, false)
}

/// Prints the arguments to stdout followed by a line feed.
///
/// The line feed is written after the arguments, so a trailing `%` can never
/// consume it.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn println(args: &[Arg<'_>]) -> Result<()> {
    sink::print_stdout(args, Mode::Plain, true)
}

/// Prints the arguments to stdout in template mode followed by a line feed.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn printfln(args: &[Arg<'_>]) -> Result<()> {
    sink::print_stdout(args, Mode::Template, true)
}

/// Prints the arguments to any writer.
///
/// # Examples
///
/// ```rust
/// use tagprint::{args, print_to};
///
/// let mut out = Vec::new();
/// print_to(&mut out, &args!["n=", 5u16]).unwrap();
/// assert_eq!(out, b"n=5 ");
/// ```
///
/// # Errors
///
/// Returns an error if the writer fails or stops accepting bytes.
pub fn print_to<W: io::Write>(writer: W, args: &[Arg<'_>]) -> Result<()> {
    let mut printer: Printer<W> = Printer::new(writer);
    printer.print(args, Mode::Plain)
}

/// Prints the arguments to any writer in template mode.
///
/// # Errors
///
/// Returns an error if the writer fails or stops accepting bytes.
pub fn printf_to<W: io::Write>(writer: W, args: &[Arg<'_>]) -> Result<()> {
    let mut printer: Printer<W> = Printer::new(writer);
    printer.print(args, Mode::Template)
}

/// Appends the arguments to `dest`, growing it as needed.
///
/// # Examples
///
/// ```rust
/// use tagprint::{args, write_string, SliceBuf};
///
/// let mut dest = SliceBuf::new();
/// write_string(&mut dest, &args!["a", 1]).unwrap();
/// write_string(&mut dest, &args!["b", 2]).unwrap();
/// assert_eq!(dest, "a1 b2 ");
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if `dest` cannot grow.
pub fn write_string(dest: &mut SliceBuf, args: &[Arg<'_>]) -> Result<()> {
    build_into(dest, args, Mode::Plain, &FormatOptions::default())
}

/// Appends the arguments to `dest` in template mode.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if `dest` cannot grow.
pub fn writef_string(dest: &mut SliceBuf, args: &[Arg<'_>]) -> Result<()> {
    build_into(dest, args, Mode::Template, &FormatOptions::default())
}

/// Formats the arguments into a new buffer.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the buffer cannot grow.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(args: &[Arg<'_>]) -> Result<SliceBuf> {
    format_with_options(args, &FormatOptions::default())
}

/// Formats the arguments into a new buffer in template mode.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the buffer cannot grow.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn formatf(args: &[Arg<'_>]) -> Result<SliceBuf> {
    formatf_with_options(args, &FormatOptions::default())
}

/// Formats the arguments into a new buffer with custom options.
///
/// # Examples
///
/// ```rust
/// use tagprint::{args, format_with_options, FormatOptions};
///
/// let options = FormatOptions::new().with_null_placeholder("-");
/// let out = format_with_options(&args![None::<&str>, 1], &options).unwrap();
/// assert_eq!(out, "-1 ");
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the buffer cannot grow.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_with_options(args: &[Arg<'_>], options: &FormatOptions) -> Result<SliceBuf> {
    let mut dest = SliceBuf::new();
    build_into(&mut dest, args, Mode::Plain, options)?;
    Ok(dest)
}

/// Formats the arguments into a new buffer in template mode with custom options.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the buffer cannot grow.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn formatf_with_options(args: &[Arg<'_>], options: &FormatOptions) -> Result<SliceBuf> {
    let mut dest = SliceBuf::new();
    build_into(&mut dest, args, Mode::Template, options)?;
    Ok(dest)
}
