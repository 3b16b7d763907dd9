//! The fixed-capacity render window the formatter writes into.
//!
//! A [`FmtBuf`] wraps a caller-provided `&mut [u8]` and tracks how much of it
//! is filled. It never allocates: the print path points it at an inline
//! array, the string-building path at the spare capacity of a
//! [`SliceBuf`](crate::SliceBuf).

use std::fmt;

/// A mutable byte window with a logical length.
///
/// Single-byte and slice writes assume the caller checked
/// [`remaining`](FmtBuf::remaining) first and panic on overflow.
/// [`extend_upto`](FmtBuf::extend_upto) is the only write that may stop short.
///
/// # Examples
///
/// ```rust
/// use tagprint::FmtBuf;
///
/// let mut storage = [0u8; 4];
/// let mut buf = FmtBuf::new(&mut storage);
/// assert_eq!(buf.extend_upto(b"hello"), 4);
/// assert!(buf.is_full());
/// assert_eq!(buf.as_bytes(), b"hell");
/// ```
pub struct FmtBuf<'b> {
    data: &'b mut [u8],
    len: usize,
}

impl<'b> FmtBuf<'b> {
    /// Wraps `data` as an empty window; its whole length is usable capacity.
    #[inline]
    pub fn new(data: &'b mut [u8]) -> Self {
        FmtBuf { data, len: 0 }
    }

    /// Wraps `data` whose first `len` bytes are already filled.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds `data.len()`.
    #[inline]
    pub fn with_len(data: &'b mut [u8], len: usize) -> Self {
        assert!(len <= data.len(), "filled length exceeds window");
        FmtBuf { data, len }
    }

    /// Number of filled bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total size of the window.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes that can still be written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::FmtBuf;
    ///
    /// let mut storage = [0u8; 8];
    /// let mut buf = FmtBuf::new(&mut storage);
    /// buf.extend_from_slice(b"abc");
    /// assert_eq!(buf.remaining(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.len
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// The filled part of the window.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Resets the length to zero; the underlying bytes are left in place.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shortens the filled length to `len`; a larger `len` has no effect.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    /// Appends one byte.
    ///
    /// # Panics
    ///
    /// Panics if the window is full.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.data[self.len] = byte;
        self.len += 1;
    }

    /// Appends all of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than [`remaining`](FmtBuf::remaining).
    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.data[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
    }

    /// Copies as much of `bytes` as fits and returns how many bytes were taken.
    #[inline]
    pub fn extend_upto(&mut self, bytes: &[u8]) -> usize {
        let take = bytes.len().min(self.remaining());
        self.extend_from_slice(&bytes[..take]);
        take
    }
}

impl fmt::Debug for FmtBuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmtBuf")
            .field("data", &format_args!("\"{}\"", self.as_bytes().escape_ascii()))
            .field("capacity", &self.capacity())
            .finish()
    }
}
