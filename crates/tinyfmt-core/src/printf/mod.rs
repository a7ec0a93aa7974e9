//! printf-style formatting.
//!
//! Format mini-language (C99 subset):
//!
//! ```text
//! %[flags][width][.precision][length]type
//! flags:      # 0 - (space) +
//! width:      digits | *
//! precision:  . digits | . * | . (empty = 0)
//! length:     l h L j z t   (parsed, ignored)
//! type:       d i u o x X p e E f F g G c s    (a A n -> error)
//! ```
//!
//! `%%` in literal text emits a single `%`. Data flows strictly left to
//! right: literal scan, directive parse, render, one directive at a time.

pub mod directive;
pub mod dispatch;
pub mod literal;

use std::io::Write;

use crate::error::FormatError;
use crate::render::FormatArg;
use crate::sink::{FormatSink, IoSink, StringSink};

pub use directive::{Directive, parse_directive};
pub use dispatch::format_to;
pub use literal::scan_literal;

/// Format into a new `String`.
pub fn format(fmt: &str, args: &[&dyn FormatArg]) -> Result<String, FormatError> {
    let mut sink = StringSink::new();
    format_to(&mut sink, fmt, args)?;
    Ok(sink.into_string())
}

/// Format to any writer.
pub fn write_to<W: Write>(
    writer: W,
    fmt: &str,
    args: &[&dyn FormatArg],
) -> Result<(), FormatError> {
    let mut sink = IoSink::new(writer);
    format_to(&mut sink, fmt, args)?;
    sink.flush()
}

/// Format to stdout.
pub fn printf(fmt: &str, args: &[&dyn FormatArg]) -> Result<(), FormatError> {
    write_to(std::io::stdout().lock(), fmt, args)
}

/// Format to stdout followed by a newline.
pub fn printfln(fmt: &str, args: &[&dyn FormatArg]) -> Result<(), FormatError> {
    let mut out = std::io::stdout().lock();
    let mut sink = IoSink::new(&mut out);
    format_to(&mut sink, fmt, args)?;
    sink.write_str("\n")?;
    sink.flush()
}

/// An owned, reusable argument list.
#[derive(Default)]
pub struct FormatList<'a> {
    args: Vec<&'a dyn FormatArg>,
}

impl<'a> FormatList<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument.
    pub fn push(&mut self, arg: &'a dyn FormatArg) -> &mut Self {
        self.args.push(arg);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[&'a dyn FormatArg] {
        &self.args
    }
}

impl<'a> FromIterator<&'a dyn FormatArg> for FormatList<'a> {
    fn from_iter<I: IntoIterator<Item = &'a dyn FormatArg>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().collect(),
        }
    }
}

/// Format against a prebuilt [`FormatList`].
pub fn vformat(fmt: &str, list: &FormatList<'_>) -> Result<String, FormatError> {
    format(fmt, list.as_slice())
}
