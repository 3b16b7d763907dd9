//! Destinations for formatted output.
//!
//! Two sinks drive the [`Formatter`]:
//!
//! - [`Printer`] owns a fixed inline buffer of `N` bytes. Whenever the
//!   formatter reports that the buffer is full, the contents are flushed to an
//!   [`io::Write`] and formatting resumes in the emptied buffer.
//! - [`build_into`] appends to an owned [`SliceBuf`]. Instead of flushing it
//!   doubles the destination's capacity and resumes in the new space.
//!
//! Both take a shortcut when the only argument is a string that needs no
//! template processing: the bytes are handed to the destination directly.
//!
//! ## Examples
//!
//! ```rust
//! use tagprint::{args, Mode, Printer};
//!
//! let mut out = Vec::new();
//! let mut printer: Printer<_> = Printer::new(&mut out);
//! printer.print(&args!["id=", 7], Mode::Plain).unwrap();
//! printer.newline().unwrap();
//! assert_eq!(out, b"id=7 \n");
//! ```

use std::io::{self, Stdout, Write};
use std::sync::OnceLock;

use crate::buffer::FmtBuf;
use crate::formatter::{Formatter, Mode, Progress};
use crate::{Arg, Error, FormatOptions, Result, SliceBuf};

/// Size of the inline buffer used by the stdout entry points.
pub const PRINT_BUF_SIZE: usize = 4096;

static STDOUT: OnceLock<Stdout> = OnceLock::new();

/// Returns the process-wide stdout handle, creating it on first use.
pub(crate) fn stdout() -> &'static Stdout {
    STDOUT.get_or_init(io::stdout)
}

/// Returns the bytes of a lone string argument that renders verbatim.
fn single_literal<'a>(args: &[Arg<'a>], mode: Mode) -> Option<&'a [u8]> {
    match args {
        [Arg::Str(Some(bytes))] if mode == Mode::Plain || !bytes.contains(&b'%') => Some(bytes),
        _ => None,
    }
}

/// Writes all of `bytes`, retrying short writes.
fn drain<W: Write>(writer: &mut W, mut bytes: &[u8]) -> Result<()> {
    while !bytes.is_empty() {
        match writer.write(bytes) {
            Ok(0) => return Err(Error::io("byte sink stopped accepting bytes")),
            Ok(n) => {
                if n < bytes.len() {
                    log::debug!("short write: {} of {} bytes accepted", n, bytes.len());
                }
                bytes = &bytes[n..];
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Formats arguments through a fixed inline buffer into a writer.
///
/// `N` bounds the memory used per call; output of any length passes through
/// it. `N` must be able to hold the largest atomic value (44 bytes with the
/// default options), otherwise printing fails with
/// [`Error::InvalidState`].
///
/// # Examples
///
/// ```rust
/// use tagprint::{args, Mode, Printer};
///
/// let mut out = Vec::new();
/// let mut printer: Printer<_, 64> = Printer::new(&mut out);
/// printer.print(&args!["% of %", 3, 4], Mode::Template).unwrap();
/// assert_eq!(out, b"3 of 4");
/// ```
pub struct Printer<W, const N: usize = PRINT_BUF_SIZE> {
    writer: W,
    options: FormatOptions,
    buf: [u8; N],
}

impl<W: Write, const N: usize> Printer<W, N> {
    /// Creates a printer over `writer` with default options.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, FormatOptions::default())
    }

    /// Creates a printer over `writer` with custom options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::{args, FormatOptions, Mode, Printer};
    ///
    /// let options = FormatOptions::new().with_separator(b';');
    /// let mut printer: Printer<Vec<u8>> = Printer::with_options(Vec::new(), options);
    /// printer.print(&args![1, 2], Mode::Plain).unwrap();
    /// assert_eq!(printer.into_inner(), b"1;2;");
    /// ```
    #[must_use]
    pub fn with_options(writer: W, options: FormatOptions) -> Self {
        Printer {
            writer,
            options,
            buf: [0; N],
        }
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Borrows the underlying writer.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwraps the printer, returning the writer. Nothing is buffered between calls.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Formats `args` and writes the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails or stops accepting bytes, and
    /// [`Error::InvalidState`] if `N` is too small for one of the values.
    /// Output produced before the error has already been written.
    pub fn print(&mut self, args: &[Arg<'_>], mode: Mode) -> Result<()> {
        if let Some(bytes) = single_literal(args, mode) {
            log::trace!("printing {} byte string directly", bytes.len());
            return drain(&mut self.writer, bytes);
        }

        let mut formatter = Formatter::new(args, mode, &self.options);
        loop {
            let mut buf = FmtBuf::new(&mut self.buf);
            let progress = formatter.fill(&mut buf);
            if progress == Progress::More && buf.is_empty() {
                return Err(Error::invalid_state(
                    "print buffer cannot hold the next value",
                ));
            }
            log::trace!("flushing {} bytes", buf.len());
            drain(&mut self.writer, buf.as_bytes())?;
            if progress == Progress::Done {
                return Ok(());
            }
        }
    }

    /// Writes a single line feed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn newline(&mut self) -> Result<()> {
        drain(&mut self.writer, b"\n")
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(Error::from)
    }
}

/// Prints to the shared stdout handle, holding its lock for the whole call.
pub(crate) fn print_stdout(args: &[Arg<'_>], mode: Mode, newline: bool) -> Result<()> {
    let mut printer: Printer<_> = Printer::new(stdout().lock());
    printer.print(args, mode)?;
    if newline {
        printer.newline()?;
    }
    printer.flush()
}

/// Appends the formatted `args` to `dest`, growing it as needed.
///
/// A destination without capacity first grows to
/// [`FormatOptions::initial_capacity`]; every overflow after that doubles
/// the capacity.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the destination cannot grow. Output
/// rendered up to that point stays in `dest`.
///
/// # Examples
///
/// ```rust
/// use tagprint::{args, build_into, FormatOptions, Mode, SliceBuf};
///
/// let options = FormatOptions::default().with_initial_capacity(4);
/// let mut dest = SliceBuf::new();
/// build_into(&mut dest, &args!["n = %", 1_000_000], Mode::Template, &options).unwrap();
/// assert_eq!(dest, "n = 1000000");
/// ```
pub fn build_into(
    dest: &mut SliceBuf,
    args: &[Arg<'_>],
    mode: Mode,
    options: &FormatOptions,
) -> Result<()> {
    if let Some(bytes) = single_literal(args, mode) {
        log::trace!("appending {} byte string directly", bytes.len());
        return dest.write(bytes);
    }

    if dest.capacity() == 0 {
        dest.reserve_to(options.initial_capacity.max(1))?;
    }
    let mut formatter = Formatter::new(args, mode, options);
    loop {
        if dest.window(|buf| formatter.fill(buf)) == Progress::Done {
            return Ok(());
        }
        let grown = dest
            .capacity()
            .checked_mul(2)
            .ok_or_else(|| Error::out_of_memory(usize::MAX))?;
        log::debug!("growing format buffer from {} to {} bytes", dest.capacity(), grown);
        dest.reserve_to(grown)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    /// Accepts at most `limit` bytes per call.
    struct Trickle {
        limit: usize,
        out: Vec<u8>,
        calls: usize,
    }

    impl Write for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls += 1;
            let n = buf.len().min(self.limit);
            self.out.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_short_writes_are_retried() {
        let sink = Trickle {
            limit: 4,
            out: Vec::new(),
            calls: 0,
        };
        let mut printer: Printer<_> = Printer::new(sink);
        printer.print(&args!["foo", 1, true], Mode::Plain).unwrap();
        let sink = printer.into_inner();
        assert_eq!(sink.out, b"foo1 true ");
        assert_eq!(sink.calls, 3);
    }

    #[test]
    fn test_zero_length_write_is_an_error() {
        let mut printer: Printer<_> = Printer::new(Closed);
        let err = printer.print(&args![1, 2], Mode::Plain).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_small_buffer_flushes_many_times() {
        let long = "x".repeat(1000);
        let mut out = Vec::new();
        let mut printer: Printer<_, 48> = Printer::new(&mut out);
        printer
            .print(&args!["[%]", long.as_str(), u64::MAX], Mode::Template)
            .unwrap();
        let expected = format!("[{long}]{} ", u64::MAX);
        assert_eq!(out, expected.as_bytes());
    }

    #[test]
    fn test_buffer_too_small_for_value() {
        let mut out = Vec::new();
        let mut printer: Printer<_, 8> = Printer::new(&mut out);
        let err = printer.print(&args![1.5], Mode::Plain).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_single_string_fast_path() {
        let mut out = Vec::new();
        let mut printer: Printer<_, 4> = Printer::new(&mut out);
        printer.print(&args!["longer than the buffer"], Mode::Plain).unwrap();
        printer.print(&args!["no placeholders"], Mode::Template).unwrap();
        assert_eq!(out, b"longer than the bufferno placeholders");
    }

    #[test]
    fn test_single_template_with_escape_is_formatted() {
        let mut out = Vec::new();
        let mut printer: Printer<_> = Printer::new(&mut out);
        printer.print(&args!["50%%"], Mode::Template).unwrap();
        assert_eq!(out, b"50%");
    }

    #[test]
    fn test_build_into_starts_at_initial_capacity() {
        let options = FormatOptions::default();
        let mut dest = SliceBuf::new();
        build_into(&mut dest, &args!["a", 1], Mode::Plain, &options).unwrap();
        assert_eq!(dest, "a1 ");
        assert_eq!(dest.capacity(), 256);
    }

    #[test]
    fn test_build_into_doubles_on_overflow() {
        let options = FormatOptions::default().with_initial_capacity(16);
        let text = "y".repeat(40);
        let mut dest = SliceBuf::new();
        build_into(&mut dest, &args![text.as_str(), 2], Mode::Plain, &options).unwrap();
        assert_eq!(dest.len(), 42);
        assert_eq!(dest.capacity(), 64);
    }

    #[test]
    fn test_build_into_appends() {
        let options = FormatOptions::default();
        let mut dest = SliceBuf::new();
        dest.write("head:").unwrap();
        build_into(&mut dest, &args!["% items", 3u8], Mode::Template, &options).unwrap();
        assert_eq!(dest, "head:3 items");
    }

    #[test]
    fn test_stdout_handle_is_shared() {
        assert!(std::ptr::eq(stdout(), stdout()));
    }
}
