//! Directive parser.
//!
//! Turns one `%[flags][width][.precision][length]type` directive into a
//! [`RenderConfig`] plus the options the configuration cannot express
//! (space-padded positives, string truncation).
//!
//! Stages run in a fixed order and later stages see what earlier ones set:
//! flags, width, precision, length modifiers, conversion character.

use crate::config::{Alignment, FloatStyle, MAX_PRECISION, MAX_WIDTH, NumericBase, RenderConfig};
use crate::error::FormatError;
use crate::render::FormatArg;

/// A parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub config: RenderConfig,
    /// The ` ` flag survived (no `+` alongside it).
    pub space_pad_positive: bool,
    /// Explicit precision on `%s`.
    pub truncate_at: Option<usize>,
    /// Conversion character.
    pub conversion: u8,
    /// Position just past the conversion character.
    pub end: usize,
}

/// Parse the directive starting at `start`.
///
/// `arg_index` is advanced past any argument consumed by `*` width or
/// precision.
pub fn parse_directive(
    fmt: &str,
    start: usize,
    args: &[&dyn FormatArg],
    arg_index: &mut usize,
) -> Result<Directive, FormatError> {
    let bytes = fmt.as_bytes();
    if bytes.get(start) != Some(&b'%') {
        return Err(FormatError::NotEnoughConversionSpecifiers);
    }

    let mut config = RenderConfig::default();
    let mut space_pad_positive = false;
    let mut truncate_at = None;
    let mut precision_set = false;
    let mut width_set = false;
    let mut width_extra = 0;
    let mut pos = start + 1;

    // --- flags ---
    while let Some(&c) = bytes.get(pos) {
        match c {
            b'#' => {
                config.show_base = true;
                config.show_point = true;
            }
            b'0' => config.zero_pad(),
            b'-' => config.align_left(),
            b' ' => {
                if !config.show_sign {
                    space_pad_positive = true;
                }
            }
            b'+' => {
                config.show_sign = true;
                space_pad_positive = false;
                width_extra = 1;
            }
            _ => break,
        }
        pos += 1;
    }

    // --- width ---
    if bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        width_set = true;
        let (width, next) = parse_decimal(bytes, pos);
        config.width = check_width(width)?;
        pos = next;
    }
    if bytes.get(pos) == Some(&b'*') {
        width_set = true;
        let width = take_int(args, arg_index, FormatError::MissingVariableWidth)?;
        if width < 0 {
            config.align_left();
        }
        config.width = check_width(clamp_usize(width.unsigned_abs()))?;
        pos += 1;
    }

    // --- precision ---
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        precision_set = true;
        config.precision = 0;
        match bytes.get(pos) {
            Some(b'*') => {
                pos += 1;
                let precision = take_int(args, arg_index, FormatError::MissingVariablePrecision)?;
                if precision < 0 {
                    // Negative variable precision means "not given".
                    precision_set = false;
                    config.precision = RenderConfig::default().precision;
                } else {
                    config.precision = check_precision(clamp_usize(precision.unsigned_abs()))?;
                }
            }
            Some(c) if c.is_ascii_digit() => {
                let (precision, next) = parse_decimal(bytes, pos);
                config.precision = check_precision(precision)?;
                pos = next;
            }
            Some(b'-') => {
                // Negative literal precision reads as zero.
                let (_, next) = parse_decimal(bytes, pos + 1);
                pos = next;
            }
            _ => {}
        }
    }

    // --- length modifiers (no effect) ---
    while matches!(
        bytes.get(pos),
        Some(b'l' | b'h' | b'L' | b'j' | b'z' | b't')
    ) {
        pos += 1;
    }

    // --- conversion ---
    let Some(&conversion) = bytes.get(pos) else {
        return Err(FormatError::UnterminatedDirective);
    };
    let mut int_conversion = false;
    match conversion {
        b'd' | b'i' | b'u' => {
            config.base = NumericBase::Decimal;
            int_conversion = true;
        }
        b'o' => {
            config.base = NumericBase::Octal;
            int_conversion = true;
        }
        b'x' | b'X' | b'p' => {
            config.uppercase = conversion == b'X';
            config.base = NumericBase::Hexadecimal;
            int_conversion = true;
        }
        b'e' | b'E' => {
            config.uppercase = conversion == b'E';
            config.float_style = FloatStyle::Scientific;
            config.base = NumericBase::Decimal;
        }
        b'f' | b'F' => {
            config.uppercase = conversion == b'F';
            config.float_style = FloatStyle::Fixed;
        }
        b'g' | b'G' => {
            config.uppercase = conversion == b'G';
            config.float_style = FloatStyle::General;
            config.base = NumericBase::Decimal;
        }
        b'c' => {}
        b's' => {
            if precision_set {
                truncate_at = Some(config.precision);
            }
            config.bool_alpha = true;
        }
        b'a' | b'A' | b'n' => {
            return Err(FormatError::UnsupportedConversion {
                conversion: char::from(conversion),
            });
        }
        _ => {
            let conversion = fmt[pos..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(FormatError::UnknownConversion { conversion });
        }
    }

    if int_conversion && precision_set && !width_set {
        // Integer precision is a minimum digit count; express it as a
        // zero-filled internal width, one wider when a '+' takes a column.
        config.width = config.precision.saturating_add(width_extra);
        config.alignment = Alignment::Internal;
        config.fill = '0';
    }

    Ok(Directive {
        config,
        space_pad_positive,
        truncate_at,
        conversion,
        end: pos + 1,
    })
}

fn take_int(
    args: &[&dyn FormatArg],
    arg_index: &mut usize,
    missing: FormatError,
) -> Result<i64, FormatError> {
    let Some(arg) = args.get(*arg_index) else {
        return Err(missing);
    };
    *arg_index += 1;
    arg.to_int().ok_or(FormatError::NotAnInteger {
        type_name: arg.type_name(),
    })
}

fn parse_decimal(bytes: &[u8], mut pos: usize) -> (usize, usize) {
    let mut result = 0_usize;
    while let Some(&d) = bytes.get(pos) {
        if !d.is_ascii_digit() {
            break;
        }
        result = result
            .saturating_mul(10)
            .saturating_add(usize::from(d - b'0'));
        pos += 1;
    }
    (result, pos)
}

fn clamp_usize(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}

fn check_width(requested: usize) -> Result<usize, FormatError> {
    if requested > MAX_WIDTH {
        return Err(FormatError::WidthTooLarge {
            requested,
            max: MAX_WIDTH,
        });
    }
    Ok(requested)
}

fn check_precision(requested: usize) -> Result<usize, FormatError> {
    if requested > MAX_PRECISION {
        return Err(FormatError::PrecisionTooLarge {
            requested,
            max: MAX_PRECISION,
        });
    }
    Ok(requested)
}
