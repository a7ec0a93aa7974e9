//! The per-directive dispatch loop.

use crate::config::{AmbientGuard, RenderConfig};
use crate::error::{FormatError, report};
use crate::render::FormatArg;
use crate::sink::{FormatSink, StringSink};

use super::directive::{Directive, parse_directive};
use super::literal::scan_literal;

/// Interpret `fmt` against `args`, writing to `sink`.
///
/// The sink's configuration is restored to what it was on entry before this
/// returns, whether formatting succeeded or not. Errors are routed through
/// [`report`]; text written before the failing directive stays written.
/// Arguments beyond the last directive are ignored.
pub fn format_to(
    sink: &mut dyn FormatSink,
    fmt: &str,
    args: &[&dyn FormatArg],
) -> Result<(), FormatError> {
    let mut guard = AmbientGuard::capture(sink);
    dispatch(&mut *guard, fmt, args).map_err(report)
}

fn dispatch(
    sink: &mut dyn FormatSink,
    fmt: &str,
    args: &[&dyn FormatArg],
) -> Result<(), FormatError> {
    let mut pos = 0;
    let mut arg_index = 0;
    while arg_index < args.len() {
        pos = scan_literal(sink, fmt, pos)?;
        let directive = parse_directive(fmt, pos, args, &mut arg_index)?;
        let Some(arg) = args.get(arg_index) else {
            return Err(FormatError::NotEnoughFormatArguments);
        };
        render_directive(sink, &directive, *arg)?;
        pos = directive.end;
        arg_index += 1;
    }

    pos = scan_literal(sink, fmt, pos)?;
    if pos < fmt.len() {
        return Err(FormatError::TooManyConversionSpecifiers);
    }
    Ok(())
}

fn render_directive(
    sink: &mut dyn FormatSink,
    directive: &Directive,
    arg: &dyn FormatArg,
) -> Result<(), FormatError> {
    sink.set_config(directive.config);
    if !directive.space_pad_positive {
        return arg.render(sink, directive.truncate_at, directive.conversion);
    }

    // No native "space for positive" option: render with a forced '+' into
    // a side buffer, then turn every '+' into a space.
    let mut side = StringSink::with_config(RenderConfig {
        show_sign: true,
        ..directive.config
    });
    arg.render(&mut side, directive.truncate_at, directive.conversion)?;
    let text = side.as_str().replace('+', " ");
    sink.write_str(&text)
}
