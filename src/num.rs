//! Decimal and hexadecimal rendering of numbers into a [`FmtBuf`].
//!
//! All renderers write at the current end of the buffer and assume the caller
//! has already checked that the worst case fits (see the `max_*_len`
//! helpers). The formatter relies on this to keep numeric output atomic: a
//! number is either written whole or not at all.
//!
//! ## Floating point
//!
//! [`render_float`] extracts fractional digits by repeated multiplication and
//! then drops trailing zeros, omitting the decimal point entirely when nothing
//! is left. The result uses the shortest-needed trailing digits; it is not
//! correctly rounded.
//!
//! ```rust
//! use tagprint::{num, FmtBuf};
//!
//! let mut storage = [0u8; 64];
//! let mut buf = FmtBuf::new(&mut storage);
//! num::render_float(&mut buf, -3.25, num::F64_PRECISION);
//! assert_eq!(buf.as_bytes(), b"-3.25");
//! ```

use crate::buffer::FmtBuf;

/// Default fractional digits for 32-bit floats.
pub const F32_PRECISION: usize = 9;
/// Default fractional digits for 64-bit floats.
pub const F64_PRECISION: usize = 17;
/// Default fractional digits for extended-precision floats.
pub const EXTENDED_PRECISION: usize = 21;

/// Most fractional digits any float renders with; larger precisions are clamped.
pub const MAX_PRECISION: usize = 64;

/// Digits in `u64::MAX`.
pub const MAX_U64_DIGITS: usize = 20;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Worst-case length of [`render_float`] output for `precision` fractional digits.
///
/// Precisions above [`MAX_PRECISION`] count as [`MAX_PRECISION`].
#[inline]
#[must_use]
pub const fn max_float_len(precision: usize) -> usize {
    let precision = if precision > MAX_PRECISION { MAX_PRECISION } else { precision };
    // sign, integer digits, decimal point
    1 + MAX_U64_DIGITS + 1 + precision
}

/// Worst-case length of [`render_hex`] output.
#[inline]
#[must_use]
pub const fn max_hex_len() -> usize {
    2 + 16
}

/// Writes `value` in decimal, most significant digit first, without leading zeros.
pub fn render_unsigned(buf: &mut FmtBuf<'_>, mut value: u64) {
    let mut reversed = [0u8; MAX_U64_DIGITS];
    let mut n = 0;
    loop {
        reversed[n] = b'0' + (value % 10) as u8;
        n += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    while n > 0 {
        n -= 1;
        buf.push(reversed[n]);
    }
}

/// Writes `value` in decimal with a leading `-` when negative.
pub fn render_signed(buf: &mut FmtBuf<'_>, value: i64) {
    if value < 0 {
        buf.push(b'-');
    }
    render_unsigned(buf, value.unsigned_abs());
}

/// Writes `value` with at most `precision` fractional digits, trailing zeros removed.
///
/// Non-finite values render as `nan`, `inf` and `-inf`. An integer part
/// larger than `u64::MAX` saturates. `precision` is clamped to
/// [`MAX_PRECISION`].
pub fn render_float(buf: &mut FmtBuf<'_>, value: f64, precision: usize) {
    if value.is_nan() {
        buf.extend_from_slice(b"nan");
        return;
    }
    let mut value = value;
    if value < 0.0 {
        buf.push(b'-');
        value = -value;
    }
    if value.is_infinite() {
        buf.extend_from_slice(b"inf");
        return;
    }

    let int_part = value.trunc();
    let mut frac = value - int_part;
    render_unsigned(buf, int_part as u64);

    let mut last_nonzero = buf.len();
    buf.push(b'.');
    for _ in 0..precision.min(MAX_PRECISION) {
        frac *= 10.0;
        let digit = (frac as u8).min(9);
        buf.push(b'0' + digit);
        frac -= f64::from(digit);
        if digit != 0 {
            last_nonzero = buf.len();
        }
    }
    buf.truncate(last_nonzero);
}

/// Writes `value` as `0x` followed by lowercase hex digits, without leading zeros.
pub fn render_hex(buf: &mut FmtBuf<'_>, value: u64) {
    buf.extend_from_slice(b"0x");
    let digits = (16 - value.leading_zeros() as usize / 4).max(1);
    for i in (0..digits).rev() {
        buf.push(HEX_DIGITS[((value >> (i * 4)) & 0xF) as usize]);
    }
}
