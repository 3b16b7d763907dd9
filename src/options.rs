//! Configuration options for formatting.
//!
//! [`FormatOptions`] controls the small set of choices the formatter makes
//! that are not dictated by the arguments themselves:
//!
//! - the separator written after numbers, booleans and pointers in plain
//!   rendering,
//! - the placeholder written for a null string,
//! - the default fractional precision of each float width,
//! - the starting capacity of buffers built by the string-building entry points.
//!
//! Options derive `serde` traits so they can be loaded from a config file.
//!
//! ## Examples
//!
//! ```rust
//! use tagprint::{args, format_with_options, FormatOptions};
//!
//! let options = FormatOptions::new().with_separator(b',');
//! let out = format_with_options(&args![1, 2, 3], &options).unwrap();
//! assert_eq!(out, "1,2,3,");
//!
//! let options = FormatOptions::compact();
//! let out = format_with_options(&args![1, true], &options).unwrap();
//! assert_eq!(out, "1true");
//! ```

use crate::num::{EXTENDED_PRECISION, F32_PRECISION, F64_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Deserializer, Serialize};

/// Starting capacity for buffers grown by the string-building entry points.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Configuration options for rendering arguments.
///
/// # Examples
///
/// ```rust
/// use tagprint::FormatOptions;
///
/// let options = FormatOptions::new();
/// assert_eq!(options.separator, Some(b' '));
/// assert_eq!(options.f64_precision, 17);
///
/// let options = FormatOptions::new()
///     .with_null_placeholder("<nil>")
///     .with_f64_precision(6);
/// assert_eq!(options.null_placeholder, "<nil>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub separator: Option<u8>,
    pub null_placeholder: String,
    #[serde(deserialize_with = "clamped_precision")]
    pub f32_precision: usize,
    #[serde(deserialize_with = "clamped_precision")]
    pub f64_precision: usize,
    #[serde(deserialize_with = "clamped_precision")]
    pub extended_precision: usize,
    pub initial_capacity: usize,
}

/// Reads a precision, clamping it to [`MAX_PRECISION`].
fn clamped_precision<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let precision = u64::deserialize(deserializer)?;
    Ok(usize::try_from(precision).map_or(MAX_PRECISION, |p| p.min(MAX_PRECISION)))
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            separator: Some(b' '),
            null_placeholder: "(null)".to_string(),
            f32_precision: F32_PRECISION,
            f64_precision: F64_PRECISION,
            extended_precision: EXTENDED_PRECISION,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl FormatOptions {
    /// Creates default options (space separator, `(null)` placeholder).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that write no separator after plain values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::FormatOptions;
    ///
    /// assert_eq!(FormatOptions::compact().separator, None);
    /// ```
    #[must_use]
    pub fn compact() -> Self {
        FormatOptions {
            separator: None,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = Some(separator);
        self
    }

    #[must_use]
    pub fn without_separator(mut self) -> Self {
        self.separator = None;
        self
    }

    #[must_use]
    pub fn with_null_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.null_placeholder = placeholder.into();
        self
    }

    /// Sets the fractional digits for `f32` arguments, at most [`MAX_PRECISION`].
    #[must_use]
    pub fn with_f32_precision(mut self, precision: usize) -> Self {
        self.f32_precision = precision.min(MAX_PRECISION);
        self
    }

    /// Sets the fractional digits for `f64` arguments, at most [`MAX_PRECISION`].
    #[must_use]
    pub fn with_f64_precision(mut self, precision: usize) -> Self {
        self.f64_precision = precision.min(MAX_PRECISION);
        self
    }

    /// Sets the fractional digits for `extended` arguments, at most [`MAX_PRECISION`].
    #[must_use]
    pub fn with_extended_precision(mut self, precision: usize) -> Self {
        self.extended_precision = precision.min(MAX_PRECISION);
        self
    }

    /// Sets the capacity an empty destination buffer starts with.
    ///
    /// A value of zero is treated as one so growth by doubling can proceed.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity.max(1);
        self
    }
}
