//! Literal text between directives.

use crate::error::FormatError;
use crate::sink::FormatSink;

/// Copy literal text from `pos` up to the next directive.
///
/// `%%` is written as a single `%` and scanning carries on past it. Returns
/// the position of the `%` that starts the next directive, or `fmt.len()`.
pub fn scan_literal(
    sink: &mut dyn FormatSink,
    fmt: &str,
    mut pos: usize,
) -> Result<usize, FormatError> {
    let bytes = fmt.as_bytes();
    let mut start = pos;
    while pos < bytes.len() {
        if bytes[pos] != b'%' {
            pos += 1;
            continue;
        }
        write_run(sink, &fmt[start..pos])?;
        if bytes.get(pos + 1) != Some(&b'%') {
            return Ok(pos);
        }
        // The second '%' opens the next literal run.
        start = pos + 1;
        pos += 2;
    }
    write_run(sink, &fmt[start..])?;
    Ok(bytes.len())
}

fn write_run(sink: &mut dyn FormatSink, run: &str) -> Result<(), FormatError> {
    if run.is_empty() {
        return Ok(());
    }
    sink.write_str(run)
}
