//! # tinyfmt-core
//!
//! A printf-style format string interpreter over type-erased arguments.
//!
//! The engine scans literal text, parses each `%` directive into a
//! [`RenderConfig`], renders the matching [`FormatArg`] under it, and puts
//! the sink's ambient configuration back afterwards. No `unsafe` code is
//! permitted at the crate level.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
mod macros;
pub mod printf;
pub mod render;
pub mod sink;

pub use config::{Alignment, AmbientGuard, FloatStyle, NumericBase, RenderConfig};
pub use error::{
    ErrorHook, ErrorPolicy, FormatError, clear_error_hook, error_policy, report, set_error_hook,
    set_error_policy,
};
pub use printf::{
    Directive, FormatList, format, format_to, parse_directive, printf, printfln, scan_literal,
    vformat, write_to,
};
pub use render::{Displayed, FormatArg};
pub use sink::{FormatSink, IoSink, StringSink};
