//! Argument-list macros.
//!
//! Each macro borrows its arguments as `&dyn FormatArg` and forwards to the
//! matching function, so any mix of supported types can be passed inline.

/// Format into a `String`: `sprintf!("%5d|%s", 42, "x")`.
#[macro_export]
macro_rules! sprintf {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($fmt, &[$(&$arg as &dyn $crate::FormatArg),*])
    };
}

/// Format to stdout.
#[macro_export]
macro_rules! printf {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printf($fmt, &[$(&$arg as &dyn $crate::FormatArg),*])
    };
}

/// Format to stdout with a trailing newline.
#[macro_export]
macro_rules! printfln {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printfln($fmt, &[$(&$arg as &dyn $crate::FormatArg),*])
    };
}

/// Build a [`FormatList`](crate::FormatList) from inline arguments.
#[macro_export]
macro_rules! format_list {
    ($($arg:expr),* $(,)?) => {{
        let mut list = $crate::FormatList::new();
        $(list.push(&$arg);)*
        list
    }};
}
