/// Packs expressions into an array of [`Arg`](crate::Arg)s.
///
/// Each expression is converted with `Arg::from`, so anything with a
/// `From` impl for `Arg` can be passed: integers, floats, `bool`, `char`,
/// `&str`, `Option<&str>`, byte slices, [`Slice`](crate::Slice)s and raw
/// pointers.
///
/// # Examples
///
/// ```rust
/// use tagprint::{args, Arg};
///
/// let packed = args!["count", 3u8, true];
/// assert_eq!(packed.len(), 3);
/// assert!(packed[0].is_str());
/// assert_eq!(packed[2], Arg::Bool(true));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        [] as [$crate::Arg<'static>; 0]
    };

    ($($arg:expr),+ $(,)?) => {
        [$($crate::Arg::from($arg)),+]
    };
}

/// Prints the arguments to stdout in plain mode.
///
/// Expands to [`print`](crate::print) and returns its `Result`.
#[macro_export]
macro_rules! tprint {
    ($($arg:expr),* $(,)?) => {
        $crate::print(&$crate::args![$($arg),*])
    };
}

/// Prints the arguments to stdout in template mode.
#[macro_export]
macro_rules! tprintf {
    ($($arg:expr),* $(,)?) => {
        $crate::printf(&$crate::args![$($arg),*])
    };
}

/// Like [`tprint!`], followed by a line feed.
#[macro_export]
macro_rules! tprintln {
    ($($arg:expr),* $(,)?) => {
        $crate::println(&$crate::args![$($arg),*])
    };
}

/// Like [`tprintf!`], followed by a line feed.
#[macro_export]
macro_rules! tprintfln {
    ($($arg:expr),* $(,)?) => {
        $crate::printfln(&$crate::args![$($arg),*])
    };
}

/// Formats the arguments in plain mode into a new [`SliceBuf`](crate::SliceBuf).
///
/// # Examples
///
/// ```rust
/// use tagprint::tformat;
///
/// let out = tformat!("x", 1, 'y').unwrap();
/// assert_eq!(out, "x1 y");
/// ```
#[macro_export]
macro_rules! tformat {
    ($($arg:expr),* $(,)?) => {
        $crate::format(&$crate::args![$($arg),*])
    };
}

/// Formats the arguments in template mode into a new [`SliceBuf`](crate::SliceBuf).
///
/// # Examples
///
/// ```rust
/// use tagprint::tformatf;
///
/// let out = tformatf!("% + % = %", 1, 2, 3).unwrap();
/// assert_eq!(out, "1 + 2 = 3");
/// ```
#[macro_export]
macro_rules! tformatf {
    ($($arg:expr),* $(,)?) => {
        $crate::formatf(&$crate::args![$($arg),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Arg, Width};

    #[test]
    fn test_args_macro_empty() {
        let packed = args![];
        assert!(packed.is_empty());
    }

    #[test]
    fn test_args_macro_conversions() {
        let name = String::from("n");
        let packed = args![&name, -1i16, 2.0f32, None::<&str>, 'c',];
        assert_eq!(packed[0], Arg::str("n"));
        assert_eq!(packed[1], Arg::Signed(-1, Width::W16));
        assert_eq!(packed[2], Arg::F32(2.0));
        assert_eq!(packed[3], Arg::null());
        assert_eq!(packed[4], Arg::Char('c'));
    }

    #[test]
    fn test_format_macros() {
        assert_eq!(tformat!("a", 1).unwrap(), "a1 ");
        assert_eq!(tformat!().unwrap(), "");
        assert_eq!(tformatf!("[%]", "in").unwrap(), "[in]");
        assert_eq!(tformatf!("%%").unwrap(), "%");
    }
}
