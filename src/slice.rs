//! Byte string slices and owned string buffers.
//!
//! This module provides the two string types the rest of the crate is built on:
//!
//! - [`Slice`]: a non-owning, `Copy` view over bytes. Every search, trim and
//!   split operation takes a `Slice` by value and returns a new `Slice` that
//!   borrows the same storage, so calls chain naturally.
//! - [`SliceBuf`]: an owning, growable buffer. It is the only type that can be
//!   written to, and the borrow checker guarantees no `Slice` derived from it
//!   outlives it.
//!
//! Bytes are not required to be UTF-8.
//!
//! ## Examples
//!
//! ```rust
//! use tagprint::Slice;
//!
//! let source = Slice::from("  -> value  ");
//! let value = source.trim_whitespace().trim_prefix("->").trim_whitespace();
//! assert_eq!(value, "value");
//! ```
//!
//! Splitting works like an iterator over segments:
//!
//! ```rust
//! use tagprint::Slice;
//!
//! let lines: Vec<_> = Slice::from("one\ntwo\nthree").split_iter("\n").collect();
//! assert_eq!(lines, ["one", "two", "three"]);
//! ```

use crate::buffer::FmtBuf;
use crate::{Error, Result};
use std::ffi::CStr;
use std::fmt;
use std::iter::FusedIterator;

/// Upper bound on how far [`Slice::from_nul_terminated`] scans for a terminator.
pub const MAX_SCAN: usize = isize::MAX as usize;

/// Returns `true` for space, `\t`, `\n`, `\r`, vertical tab and form feed.
///
/// Unlike [`u8::is_ascii_whitespace`], vertical tab (`0x0B`) counts as whitespace.
#[inline]
#[must_use]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Returns `true` for ASCII letters.
#[inline]
#[must_use]
pub const fn is_alpha(b: u8) -> bool {
    // Setting bit 5 folds upper case onto lower case.
    matches!(b | 0x20, b'a'..=b'z')
}

/// Returns `true` for ASCII decimal digits.
#[inline]
#[must_use]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// A non-owning view over a byte string.
///
/// # Examples
///
/// ```rust
/// use tagprint::Slice;
///
/// let s = Slice::from("key=value");
/// assert_eq!(s.index_of("="), Some(3));
/// assert_eq!(s.trim_after("="), "key");
/// assert_eq!(s.trim_before("="), "=value");
/// assert!(!s.is_owner());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Slice<'a> {
    bytes: &'a [u8],
}

impl<'a> Slice<'a> {
    /// Views `bytes` as they are; no terminator is looked for.
    #[inline]
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Slice { bytes }
    }

    /// Creates a slice spanning `bytes` up to, but excluding, the first NUL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if no NUL occurs within the scanned range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::Slice;
    ///
    /// let s = Slice::from_nul_terminated(b"hello\0junk").unwrap();
    /// assert_eq!(s, "hello");
    /// ```
    pub fn from_nul_terminated(bytes: &'a [u8]) -> Result<Self> {
        let limit = bytes.len().min(MAX_SCAN);
        match bytes[..limit].iter().position(|&b| b == 0) {
            Some(end) => Ok(Slice::new(&bytes[..end])),
            None => Err(Error::OutOfRange { limit }),
        }
    }

    #[inline]
    #[must_use]
    pub fn from_c_str(s: &'a CStr) -> Self {
        Slice::new(s.to_bytes())
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A view never owns its storage.
    #[inline]
    #[must_use]
    pub const fn is_owner(&self) -> bool {
        false
    }

    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the bytes as `&str` if they are valid UTF-8.
    #[must_use]
    pub fn to_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.bytes).ok()
    }

    /// Returns `true` if the slice begins with `needle`. An empty needle always matches.
    #[inline]
    #[must_use]
    pub fn starts_with(self, needle: impl AsRef<[u8]>) -> bool {
        self.bytes.starts_with(needle.as_ref())
    }

    #[inline]
    #[must_use]
    pub fn ends_with(self, needle: impl AsRef<[u8]>) -> bool {
        self.bytes.ends_with(needle.as_ref())
    }

    /// Returns the offset of the leftmost occurrence of `needle`.
    ///
    /// A needle longer than the slice is never found; an empty needle is found at `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::Slice;
    ///
    /// let s = Slice::from("abcabc");
    /// assert_eq!(s.index_of("ca"), Some(2));
    /// assert_eq!(s.index_of("bc"), Some(1));
    /// assert_eq!(s.index_of("abcabcd"), None);
    /// ```
    #[must_use]
    pub fn index_of(self, needle: impl AsRef<[u8]>) -> Option<usize> {
        let needle = needle.as_ref();
        let first = match needle.first() {
            Some(&b) => b,
            None => return Some(0),
        };
        if needle.len() > self.bytes.len() {
            return None;
        }
        (0..=self.bytes.len() - needle.len())
            .find(|&i| self.bytes[i] == first && self.bytes[i..].starts_with(needle))
    }

    #[inline]
    #[must_use]
    pub fn contains(self, needle: impl AsRef<[u8]>) -> bool {
        self.index_of(needle).is_some()
    }

    /// Strips leading and trailing whitespace (see [`is_space`]) without copying.
    #[must_use]
    pub fn trim_whitespace(self) -> Slice<'a> {
        let start = self
            .bytes
            .iter()
            .position(|&b| !is_space(b))
            .unwrap_or(self.bytes.len());
        let end = self
            .bytes
            .iter()
            .rposition(|&b| !is_space(b))
            .map_or(start, |i| i + 1);
        Slice::new(&self.bytes[start..end])
    }

    /// Removes `prefix` if present, otherwise returns the slice unchanged.
    #[must_use]
    pub fn trim_prefix(self, prefix: impl AsRef<[u8]>) -> Slice<'a> {
        let prefix = prefix.as_ref();
        if self.starts_with(prefix) {
            Slice::new(&self.bytes[prefix.len()..])
        } else {
            self
        }
    }

    /// Removes `suffix` if present, otherwise returns the slice unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::Slice;
    ///
    /// assert_eq!(Slice::from("report.txt").trim_suffix(".txt"), "report");
    /// assert_eq!(Slice::from("report.txt").trim_suffix(".md"), "report.txt");
    /// ```
    #[must_use]
    pub fn trim_suffix(self, suffix: impl AsRef<[u8]>) -> Slice<'a> {
        let suffix = suffix.as_ref();
        if self.ends_with(suffix) {
            Slice::new(&self.bytes[..self.bytes.len() - suffix.len()])
        } else {
            self
        }
    }

    /// Drops everything before the first occurrence of `target`, keeping `target` itself.
    ///
    /// Returns the slice unchanged when `target` does not occur.
    #[must_use]
    pub fn trim_before(self, target: impl AsRef<[u8]>) -> Slice<'a> {
        match self.index_of(target) {
            Some(index) => Slice::new(&self.bytes[index..]),
            None => self,
        }
    }

    /// Keeps only what precedes the first occurrence of `target`.
    ///
    /// Returns the slice unchanged when `target` does not occur.
    #[must_use]
    pub fn trim_after(self, target: impl AsRef<[u8]>) -> Slice<'a> {
        match self.index_of(target) {
            Some(index) => Slice::new(&self.bytes[..index]),
            None => self,
        }
    }

    /// Returns a lazy iterator over the segments separated by `delim`.
    ///
    /// Empty segments between adjacent delimiters are produced; a trailing
    /// delimiter does not produce a final empty segment.
    ///
    /// # Panics
    ///
    /// Panics if `delim` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::Slice;
    ///
    /// let mut parts = Slice::from("a,b,,c").split_iter(",");
    /// assert_eq!(parts.next().unwrap(), "a");
    /// assert_eq!(parts.next().unwrap(), "b");
    /// assert_eq!(parts.next().unwrap(), "");
    /// assert_eq!(parts.next().unwrap(), "c");
    /// assert!(parts.next().is_none());
    /// ```
    pub fn split_iter<'d, D>(self, delim: &'d D) -> Split<'a, 'd>
    where
        D: AsRef<[u8]> + ?Sized,
    {
        let delim = delim.as_ref();
        assert!(!delim.is_empty(), "split delimiter must not be empty");
        Split {
            rest: self,
            delim,
            finished: false,
        }
    }

    /// Copies the bytes into a new owned buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the allocation fails.
    pub fn to_buf(self) -> Result<SliceBuf> {
        let mut buf = SliceBuf::new();
        buf.write(self)?;
        Ok(buf)
    }
}

impl AsRef<[u8]> for Slice<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a str> for Slice<'a> {
    fn from(value: &'a str) -> Self {
        Slice::new(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Slice<'a> {
    fn from(value: &'a [u8]) -> Self {
        Slice::new(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Slice<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Slice::new(value)
    }
}

impl PartialEq<str> for Slice<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Slice<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Slice<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl fmt::Debug for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slice(\"{}\")", self.bytes.escape_ascii())
    }
}

impl fmt::Display for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.bytes))
    }
}

/// Iterator returned by [`Slice::split_iter`].
///
/// Each call to `next` consumes the segment it yields; the iterator cannot be
/// restarted. [`Split::remainder`] shows what has not been consumed yet.
#[derive(Clone, Debug)]
pub struct Split<'a, 'd> {
    rest: Slice<'a>,
    delim: &'d [u8],
    finished: bool,
}

impl<'a> Split<'a, '_> {
    #[must_use]
    pub fn remainder(&self) -> Slice<'a> {
        if self.finished {
            Slice::default()
        } else {
            self.rest
        }
    }
}

impl<'a> Iterator for Split<'a, '_> {
    type Item = Slice<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.rest.is_empty() {
            self.finished = true;
            return None;
        }
        let bytes = self.rest.as_bytes();
        match self.rest.index_of(self.delim) {
            Some(index) => {
                self.rest = Slice::new(&bytes[index + self.delim.len()..]);
                Some(Slice::new(&bytes[..index]))
            }
            None => {
                self.finished = true;
                Some(self.rest)
            }
        }
    }
}

impl FusedIterator for Split<'_, '_> {}

/// An owning, growable byte string.
///
/// Capacity grows by doubling. Storage always keeps one spare byte past
/// [`capacity`](SliceBuf::capacity) so a NUL terminator can be placed for C
/// interop without reallocating; that byte is never part of the contents.
///
/// # Examples
///
/// ```rust
/// use tagprint::SliceBuf;
///
/// let mut buf = SliceBuf::new();
/// buf.write("hello").unwrap();
/// buf.write(", world").unwrap();
/// assert_eq!(buf, "hello, world");
/// assert!(buf.is_owner());
/// ```
#[derive(Clone, Default)]
pub struct SliceBuf {
    storage: Vec<u8>,
    cap: usize,
}

impl SliceBuf {
    /// Creates an empty buffer without allocating.
    #[must_use]
    pub const fn new() -> Self {
        SliceBuf {
            storage: Vec::new(),
            cap: 0,
        }
    }

    /// Creates an empty buffer able to hold `capacity` bytes without growing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buf = SliceBuf::new();
        buf.reserve_to(capacity)?;
        Ok(buf)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    #[must_use]
    pub const fn is_owner(&self) -> bool {
        true
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> Slice<'_> {
        Slice::new(&self.storage)
    }

    /// Appends `src`, growing the buffer first if it does not fit.
    ///
    /// An empty buffer grows to exactly `src.len()`; afterwards capacity
    /// doubles until the new contents fit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if growing fails. The contents are
    /// unchanged in that case.
    pub fn write(&mut self, src: impl AsRef<[u8]>) -> Result<()> {
        let src = src.as_ref();
        if src.is_empty() {
            return Ok(());
        }
        let needed = self
            .len()
            .checked_add(src.len())
            .ok_or_else(|| Error::out_of_memory(usize::MAX))?;
        if needed > self.cap {
            let mut cap = if self.cap == 0 { src.len() } else { self.cap };
            while cap < needed {
                cap = cap
                    .checked_mul(2)
                    .ok_or_else(|| Error::out_of_memory(needed))?;
            }
            self.reserve_to(cap)?;
        }
        self.storage.extend_from_slice(src);
        Ok(())
    }

    /// Drops the contents but keeps the allocation.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Releases the storage; the buffer becomes empty with zero capacity.
    pub fn free(&mut self) {
        self.storage = Vec::new();
        self.cap = 0;
    }

    /// Calls `f` with the contents followed by a NUL terminator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::SliceBuf;
    ///
    /// let mut buf = SliceBuf::new();
    /// buf.write("abc").unwrap();
    /// let terminated = buf.with_nul(|bytes| bytes.to_vec());
    /// assert_eq!(terminated, b"abc\0");
    /// assert_eq!(buf.len(), 3);
    /// ```
    pub fn with_nul<R>(&mut self, f: impl FnOnce(&[u8]) -> R) -> R {
        self.storage.push(0);
        let result = f(&self.storage);
        self.storage.pop();
        result
    }

    /// Returns the contents as a `Vec`, without the terminator slack.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.storage
    }

    /// Grows capacity to at least `cap`, keeping the terminator slack.
    pub(crate) fn reserve_to(&mut self, cap: usize) -> Result<()> {
        if cap <= self.cap {
            return Ok(());
        }
        let total = cap
            .checked_add(1)
            .ok_or_else(|| Error::out_of_memory(cap))?;
        self.storage
            .try_reserve_exact(total - self.storage.len())
            .map_err(|_| Error::out_of_memory(total))?;
        self.cap = cap;
        Ok(())
    }

    /// Exposes the unused capacity as a render window starting at the current length.
    pub(crate) fn window<R>(&mut self, f: impl FnOnce(&mut FmtBuf<'_>) -> R) -> R {
        let len = self.storage.len();
        self.storage.resize(self.cap, 0);
        let mut buf = FmtBuf::with_len(&mut self.storage, len);
        let result = f(&mut buf);
        let filled = buf.len();
        self.storage.truncate(filled);
        result
    }
}

impl AsRef<[u8]> for SliceBuf {
    fn as_ref(&self) -> &[u8] {
        &self.storage
    }
}

impl PartialEq for SliceBuf {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl Eq for SliceBuf {}

impl PartialEq<str> for SliceBuf {
    fn eq(&self, other: &str) -> bool {
        self.storage == other.as_bytes()
    }
}

impl PartialEq<&str> for SliceBuf {
    fn eq(&self, other: &&str) -> bool {
        self.storage == other.as_bytes()
    }
}

impl PartialEq<Slice<'_>> for SliceBuf {
    fn eq(&self, other: &Slice<'_>) -> bool {
        self.storage == other.as_bytes()
    }
}

impl fmt::Debug for SliceBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceBuf")
            .field("data", &format_args!("\"{}\"", self.storage.escape_ascii()))
            .field("capacity", &self.cap)
            .finish()
    }
}

impl fmt::Display for SliceBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_slice(), f)
    }
}
