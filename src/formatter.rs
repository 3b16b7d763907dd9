//! The resumable argument formatter.
//!
//! [`Formatter`] renders a slice of [`Arg`]s into a [`FmtBuf`] and stops as
//! soon as the next piece of output does not fit. The caller then makes room,
//! either by flushing the buffer or by growing it, and calls
//! [`Formatter::fill`] again. Output is identical no matter how often this
//! happens.
//!
//! ## Modes
//!
//! - **Plain** ([`Mode::Plain`]): arguments are rendered in order. Numbers,
//!   booleans and pointers are followed by the separator (a space by
//!   default); strings and chars are copied as they are.
//! - **Template** ([`Mode::Template`]): every string argument is scanned as a
//!   template. Each `%` is replaced by the next unconsumed argument, `%%`
//!   writes a single `%`, and a `%` with no argument left is written
//!   literally. Non-string arguments that no placeholder consumed render as
//!   in plain mode.
//!
//! Only the bare `%` placeholder is recognised. Flags, width and precision
//! (`%5d`, `%.2f`, ...) are not yet supported: the bytes after `%` are
//! ordinary template text.
//!
//! ## Buffer-full policy
//!
//! Numbers, booleans, chars and pointers are atomic. Before rendering one,
//! the formatter checks that its worst-case length (plus separator) fits and
//! otherwise reports [`Progress::More`] without writing anything. Strings and
//! template text are split at any byte; the [`Cursor`] records how far they
//! got.
//!
//! ## Examples
//!
//! ```rust
//! use tagprint::{args, FmtBuf, FormatOptions, Formatter, Mode, Progress};
//!
//! let args = args!["total = %", 1234];
//! let options = FormatOptions::default();
//! let mut formatter = Formatter::new(&args, Mode::Template, &options);
//!
//! let mut out = Vec::new();
//! let mut storage = [0u8; 32];
//! loop {
//!     let mut buf = FmtBuf::new(&mut storage);
//!     let progress = formatter.fill(&mut buf);
//!     out.extend_from_slice(buf.as_bytes());
//!     if progress == Progress::Done {
//!         break;
//!     }
//! }
//! assert_eq!(out, b"total = 1234");
//! ```

use crate::buffer::FmtBuf;
use crate::num;
use crate::{Arg, FormatOptions};

/// How string arguments are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Plain,
    Template,
}

/// Result of one [`Formatter::fill`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Every argument has been rendered.
    Done,
    /// The buffer ran out of room; call again once there is space.
    More,
}

/// Where the formatter is within the argument list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Between arguments; the next unconsumed argument decides what happens.
    #[default]
    Idle,
    /// Copying literal text of the template at `template`, `scan` bytes in.
    Scanning { template: usize, scan: usize },
    /// A placeholder was consumed; the next argument renders in its place.
    Awaiting { template: usize, scan: usize },
    Done,
}

/// A snapshot of formatter progress.
///
/// Passing a cursor to [`Formatter::resume`] continues exactly where the
/// formatter that produced it stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    next: usize,
    offset: usize,
    state: State,
}

impl Cursor {
    /// Index of the next argument that has not been fully consumed.
    #[inline]
    #[must_use]
    pub const fn next_arg(&self) -> usize {
        self.next
    }

    /// Bytes of the current string argument already emitted.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Which part of the argument list the formatter is in.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns `true` once every argument has been rendered.
    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }
}

/// Renders tagged arguments into a buffer, resumably.
#[derive(Debug)]
pub struct Formatter<'f, 'a> {
    args: &'f [Arg<'a>],
    mode: Mode,
    options: &'f FormatOptions,
    cursor: Cursor,
}

impl<'f, 'a> Formatter<'f, 'a> {
    /// Creates a formatter positioned before the first argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::{args, FormatOptions, Formatter, Mode};
    ///
    /// let args = args!["a", 1];
    /// let options = FormatOptions::default();
    /// let formatter = Formatter::new(&args, Mode::Plain, &options);
    /// assert_eq!(formatter.cursor().next_arg(), 0);
    /// assert!(!formatter.is_done());
    /// ```
    #[must_use]
    pub fn new(args: &'f [Arg<'a>], mode: Mode, options: &'f FormatOptions) -> Self {
        Self::resume(args, mode, options, Cursor::default())
    }

    /// Continues from a cursor taken from an earlier formatter over the same arguments.
    ///
    /// `mode` should match the mode of the formatter the cursor came from.
    ///
    /// # Panics
    ///
    /// [`fill`](Formatter::fill) panics if `cursor` was taken from a
    /// formatter over a different argument list, since its indices and
    /// offsets need not be valid for `args`.
    #[must_use]
    pub fn resume(
        args: &'f [Arg<'a>],
        mode: Mode,
        options: &'f FormatOptions,
        cursor: Cursor,
    ) -> Self {
        Formatter {
            args,
            mode,
            options,
            cursor,
        }
    }

    /// Snapshot of the current progress, suitable for [`Formatter::resume`].
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns `true` once [`fill`](Formatter::fill) has reported [`Progress::Done`].
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.cursor.is_done()
    }

    /// Renders as much as fits into `buf`.
    ///
    /// Returns [`Progress::More`] when the buffer filled up before the last
    /// argument was rendered. If that happens on an empty buffer, the buffer
    /// is smaller than the next atomic value and no amount of retrying helps.
    ///
    /// # Panics
    ///
    /// Panics if the formatter was resumed with a cursor from a different
    /// argument list.
    pub fn fill(&mut self, buf: &mut FmtBuf<'_>) -> Progress {
        loop {
            match self.cursor.state {
                State::Done => return Progress::Done,
                State::Idle => {
                    let Some(&arg) = self.args.get(self.cursor.next) else {
                        self.cursor.state = State::Done;
                        continue;
                    };
                    if self.mode == Mode::Template && matches!(arg, Arg::Str(Some(_))) {
                        self.cursor.state = State::Scanning {
                            template: self.cursor.next,
                            scan: 0,
                        };
                        self.cursor.next += 1;
                        continue;
                    }
                    if self.emit(buf, arg, true) == Progress::More {
                        return Progress::More;
                    }
                    self.cursor.next += 1;
                }
                State::Scanning { template, scan } => {
                    let bytes = match self.args[template] {
                        Arg::Str(Some(bytes)) => bytes,
                        _ => unreachable!("template cursor points at a non-string argument"),
                    };
                    let rest = &bytes[scan..];
                    let literal = rest.iter().position(|&b| b == b'%').unwrap_or(rest.len());
                    let written = buf.extend_upto(&rest[..literal]);
                    let scan = scan + written;
                    self.cursor.state = State::Scanning { template, scan };
                    if written < literal {
                        return Progress::More;
                    }
                    if scan == bytes.len() {
                        self.cursor.state = State::Idle;
                        continue;
                    }

                    let escaped = bytes.get(scan + 1) == Some(&b'%');
                    if escaped || self.cursor.next >= self.args.len() {
                        if buf.is_full() {
                            return Progress::More;
                        }
                        buf.push(b'%');
                        let consumed = if escaped { 2 } else { 1 };
                        self.cursor.state = State::Scanning {
                            template,
                            scan: scan + consumed,
                        };
                    } else {
                        self.cursor.state = State::Awaiting {
                            template,
                            scan: scan + 1,
                        };
                    }
                }
                State::Awaiting { template, scan } => {
                    let arg = self.args[self.cursor.next];
                    if self.emit(buf, arg, false) == Progress::More {
                        return Progress::More;
                    }
                    self.cursor.next += 1;
                    self.cursor.state = State::Scanning { template, scan };
                }
            }
        }
    }

    /// Renders one argument, resuming a partially written string.
    fn emit(&mut self, buf: &mut FmtBuf<'_>, arg: Arg<'a>, separated: bool) -> Progress {
        let options = self.options;
        if let Arg::Str(bytes) = arg {
            let bytes = bytes.unwrap_or(options.null_placeholder.as_bytes());
            let rest = &bytes[self.cursor.offset..];
            let written = buf.extend_upto(rest);
            if written < rest.len() {
                self.cursor.offset += written;
                return Progress::More;
            }
            self.cursor.offset = 0;
            return Progress::Done;
        }

        let separator = match arg {
            Arg::Char(_) => None,
            _ if separated => options.separator,
            _ => None,
        };
        let needed = arg.max_rendered_len(options).unwrap_or(0) + usize::from(separator.is_some());
        if buf.remaining() < needed {
            return Progress::More;
        }
        render_atomic(buf, arg, options);
        if let Some(separator) = separator {
            buf.push(separator);
        }
        Progress::Done
    }
}

/// Writes a non-string argument; the caller has checked it fits.
fn render_atomic(buf: &mut FmtBuf<'_>, arg: Arg<'_>, options: &FormatOptions) {
    match arg {
        Arg::Signed(value, _) => num::render_signed(buf, value),
        Arg::Unsigned(value, _) => num::render_unsigned(buf, value),
        Arg::Bool(value) => buf.extend_from_slice(if value { b"true" } else { b"false" }),
        Arg::F32(value) => num::render_float(buf, f64::from(value), options.f32_precision),
        Arg::F64(value) => num::render_float(buf, value, options.f64_precision),
        Arg::Extended(value) => num::render_float(buf, value, options.extended_precision),
        Arg::Char(value) => {
            let mut utf8 = [0u8; 4];
            buf.extend_from_slice(value.encode_utf8(&mut utf8).as_bytes());
        }
        Arg::Ptr(addr) => num::render_hex(buf, addr as u64),
        Arg::Str(_) => unreachable!("strings are rendered by Formatter::emit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    /// Runs the formatter to completion through a window of `capacity` bytes.
    fn render(args: &[Arg<'_>], mode: Mode, capacity: usize) -> String {
        let options = FormatOptions::default();
        let mut formatter = Formatter::new(args, mode, &options);
        let mut storage = vec![0u8; capacity];
        let mut out = Vec::new();
        loop {
            let mut buf = FmtBuf::new(&mut storage);
            let progress = formatter.fill(&mut buf);
            assert!(
                progress == Progress::Done || !buf.is_empty(),
                "no progress with capacity {capacity}"
            );
            out.extend_from_slice(buf.as_bytes());
            if progress == Progress::Done {
                break;
            }
        }
        String::from_utf8(out).unwrap()
    }

    fn plain(args: &[Arg<'_>]) -> String {
        render(args, Mode::Plain, 4096)
    }

    fn template(args: &[Arg<'_>]) -> String {
        render(args, Mode::Template, 4096)
    }

    #[test]
    fn test_plain_spacing_rule() {
        assert_eq!(plain(&args!["foo", 1, true]), "foo1 true ");
        assert_eq!(plain(&args![1, 2, 3]), "1 2 3 ");
        assert_eq!(plain(&args!["a", "b"]), "ab");
        assert_eq!(plain(&args!['a', 'Z', '0']), "aZ0");
        assert_eq!(plain(&args![false, -2, 1.5f32]), "false -2 1.5 ");
    }

    #[test]
    fn test_plain_mode_ignores_percent() {
        assert_eq!(plain(&args!["100% done"]), "100% done");
        assert_eq!(plain(&args!["value: %", 42]), "value: %42 ");
    }

    #[test]
    fn test_plain_null_string() {
        assert_eq!(plain(&args![None::<&str>, 1]), "(null)1 ");
    }

    #[test]
    fn test_plain_pointer() {
        assert_eq!(plain(&[Arg::Ptr(0xbeef)]), "0xbeef ");
    }

    #[test]
    fn test_template_substitution() {
        assert_eq!(template(&args!["value = %", 42]), "value = 42");
        assert_eq!(template(&args!["signed = %", -123]), "signed = -123");
        assert_eq!(template(&args!["% and %", "x", 'y']), "x and y");
        assert_eq!(template(&args!["flag: %", true]), "flag: true");
    }

    #[test]
    fn test_template_percent_escapes() {
        assert_eq!(template(&args!["100%% done"]), "100% done");
        assert_eq!(template(&args!["%"]), "%");
        assert_eq!(template(&args!["%%"]), "%");
        assert_eq!(template(&args!["%d%% complete", 50]), "50d% complete");
        assert_eq!(template(&args!["trailing %"]), "trailing %");
    }

    #[test]
    fn test_template_flags_are_literal_text() {
        assert_eq!(template(&args!["%%%d%%", 5]), "%5d%");
        assert_eq!(template(&args!["%.2", 3.5]), "3.5.2");
    }

    #[test]
    fn test_template_leftover_arguments() {
        assert_eq!(
            template(&args!["result goes -> % <- text", 69, " even with more!"]),
            "result goes -> 69 <- text even with more!"
        );
        assert_eq!(
            template(&args!["foo ", 69, 420, "goes -> % <-", 69]),
            "foo 69 420 goes -> 69 <-"
        );
    }

    #[test]
    fn test_template_substituted_string_is_not_scanned() {
        assert_eq!(template(&args!["[%]", "50%"]), "[50%]");
    }

    #[test]
    fn test_template_null_arguments() {
        assert_eq!(template(&args!["null = %", None::<&str>]), "null = (null)");
        assert_eq!(template(&args![None::<&str>, 7]), "(null)7 ");
    }

    #[test]
    fn test_empty_arguments() {
        assert_eq!(plain(&[]), "");
        assert_eq!(template(&args![""]), "");
    }

    #[test]
    fn test_resumption_matches_unbounded() {
        let long = "abcdefghijklmnopqrstuvwxyz".repeat(20);
        let args = args![
            "head % mid %% % tail ",
            u64::MAX,
            long.as_str(),
            -1.25,
            "second %",
            Arg::extended(0.5),
            'é',
            false
        ];
        let expected = render(&args, Mode::Template, 1 << 16);
        for capacity in 44..=96 {
            assert_eq!(render(&args, Mode::Template, capacity), expected);
            assert_eq!(
                render(&args, Mode::Plain, capacity),
                render(&args, Mode::Plain, 1 << 16)
            );
        }
    }

    #[test]
    fn test_atomic_values_not_split() {
        let options = FormatOptions::default();
        let args = args!["abc", 12345];
        let mut formatter = Formatter::new(&args, Mode::Plain, &options);
        let mut storage = [0u8; 8];

        let mut buf = FmtBuf::new(&mut storage);
        assert_eq!(formatter.fill(&mut buf), Progress::More);
        assert_eq!(buf.as_bytes(), b"abc");
        assert_eq!(formatter.cursor().next_arg(), 1);
    }

    #[test]
    fn test_string_split_records_offset() {
        let options = FormatOptions::default();
        let args = args!["abcdefgh"];
        let mut formatter = Formatter::new(&args, Mode::Plain, &options);
        let mut storage = [0u8; 3];

        let mut buf = FmtBuf::new(&mut storage);
        assert_eq!(formatter.fill(&mut buf), Progress::More);
        assert_eq!(formatter.cursor().offset(), 3);
        assert_eq!(formatter.cursor().state(), State::Idle);
    }

    #[test]
    fn test_resume_from_cursor_snapshot() {
        let options = FormatOptions::default();
        let args = args!["x = %, y = %", 10, 20];
        let mut storage = [0u8; 25];

        let mut first = Formatter::new(&args, Mode::Template, &options);
        let mut buf = FmtBuf::new(&mut storage[..6]);
        assert_eq!(first.fill(&mut buf), Progress::More);
        let head = buf.as_bytes().to_vec();
        let cursor = first.cursor();
        assert!(matches!(cursor.state(), State::Awaiting { .. }));

        let mut second = Formatter::resume(&args, Mode::Template, &options, cursor);
        let mut buf = FmtBuf::new(&mut storage);
        assert_eq!(second.fill(&mut buf), Progress::Done);
        assert!(second.is_done());

        let mut out = head;
        out.extend_from_slice(buf.as_bytes());
        assert_eq!(out, b"x = 10, y = 20");
    }

    #[test]
    #[should_panic]
    fn test_resume_with_foreign_cursor_panics() {
        let options = FormatOptions::default();
        let long_args = args!["x = %, y = %", 10, 20];
        let mut storage = [0u8; 6];

        let mut first = Formatter::new(&long_args, Mode::Template, &options);
        let mut buf = FmtBuf::new(&mut storage);
        assert_eq!(first.fill(&mut buf), Progress::More);

        let short_args = args!["y"];
        let mut second = Formatter::resume(&short_args, Mode::Template, &options, first.cursor());
        let mut storage = [0u8; 64];
        let mut buf = FmtBuf::new(&mut storage);
        let _ = second.fill(&mut buf);
    }

    #[test]
    fn test_compact_options() {
        let options = FormatOptions::compact();
        let args = args![1, 2];
        let mut formatter = Formatter::new(&args, Mode::Plain, &options);
        let mut storage = [0u8; 64];
        let mut buf = FmtBuf::new(&mut storage);
        assert_eq!(formatter.fill(&mut buf), Progress::Done);
        assert_eq!(buf.as_bytes(), b"12");
    }
}
