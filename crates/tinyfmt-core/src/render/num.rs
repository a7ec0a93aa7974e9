//! Numeric renderers.
//!
//! Each renderer returns the unpadded body plus the byte length of its
//! sign/base prefix; padding is applied by the caller. Digit generation for
//! floats goes through `core::fmt`, exponent and trailing-zero rules are
//! applied here.

use crate::config::{FloatStyle, NumericBase, RenderConfig};

/// An integer split into what the renderers need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntValue {
    pub negative: bool,
    /// Absolute value, used for decimal output.
    pub magnitude: u128,
    /// Two's complement bit pattern at the source width, used for octal/hex.
    pub pattern: u128,
    /// Whether the source type is signed (`+` only applies to signed values).
    pub signed: bool,
}

/// Render an integer under `cfg`.
#[must_use]
pub fn render_int(value: IntValue, cfg: &RenderConfig) -> (String, usize) {
    let mut digits = [0u8; 128];
    let mut out = String::new();
    match cfg.base {
        NumericBase::Decimal => {
            if value.negative {
                out.push('-');
            } else if cfg.show_sign && value.signed {
                out.push('+');
            }
            let prefix_len = out.len();
            push_digits(&mut out, value.magnitude, 10, false, &mut digits);
            (out, prefix_len)
        }
        NumericBase::Octal => {
            if cfg.show_base && value.pattern != 0 {
                out.push('0');
            }
            push_digits(&mut out, value.pattern, 8, false, &mut digits);
            (out, 0)
        }
        NumericBase::Hexadecimal => {
            if cfg.show_base && value.pattern != 0 {
                out.push_str(if cfg.uppercase { "0X" } else { "0x" });
            }
            let prefix_len = out.len();
            push_digits(&mut out, value.pattern, 16, cfg.uppercase, &mut digits);
            (out, prefix_len)
        }
    }
}

/// Render an address the way `%p` shows it.
#[must_use]
pub fn render_pointer(addr: usize, cfg: &RenderConfig) -> (String, usize) {
    if addr == 0 {
        return (String::from("(nil)"), 0);
    }
    let mut digits = [0u8; 128];
    let mut out = String::from(if cfg.uppercase { "0X" } else { "0x" });
    push_digits(&mut out, addr as u128, 16, cfg.uppercase, &mut digits);
    (out, 2)
}

/// Render a float under `cfg`.
#[must_use]
pub fn render_float(value: f64, cfg: &RenderConfig) -> (String, usize) {
    let mut out = String::new();
    if value.is_sign_negative() && !value.is_nan() {
        out.push('-');
    } else if cfg.show_sign {
        out.push('+');
    }
    let prefix_len = out.len();

    if !value.is_finite() {
        let word = match (value.is_nan(), cfg.uppercase) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        out.push_str(word);
        return (out, prefix_len);
    }

    let abs = value.abs();
    let precision = cfg.precision;
    let body = match cfg.float_style {
        FloatStyle::Fixed => format_fixed(abs, precision, cfg.show_point),
        FloatStyle::Scientific => format_sci(abs, precision, cfg.uppercase, cfg.show_point),
        FloatStyle::General => format_general(abs, precision, cfg.uppercase, cfg.show_point),
    };
    out.push_str(&body);
    (out, prefix_len)
}

/// Write `value` in `radix` into the tail of `scratch` and append it to `out`.
fn push_digits(
    out: &mut String,
    mut value: u128,
    radix: u128,
    uppercase: bool,
    scratch: &mut [u8; 128],
) {
    if value == 0 {
        out.push('0');
        return;
    }
    let alpha = if uppercase { b'A' } else { b'a' };
    let mut pos = scratch.len();
    while value > 0 && pos > 0 {
        pos -= 1;
        let digit = (value % radix) as u8;
        scratch[pos] = if digit < 10 {
            b'0' + digit
        } else {
            alpha + (digit - 10)
        };
        value /= radix;
    }
    for &b in &scratch[pos..] {
        out.push(char::from(b));
    }
}

/// `%f`: fixed-point.
fn format_fixed(value: f64, precision: usize, show_point: bool) -> String {
    let mut s = format!("{value:.precision$}");
    if precision == 0 && show_point {
        s.push('.');
    }
    s
}

/// `%e`: `d.ddde±XX`.
fn format_sci(value: f64, precision: usize, uppercase: bool, show_point: bool) -> String {
    let (mut mantissa, exp) = split_exp(value, precision);
    if precision == 0 && show_point {
        mantissa.push('.');
    }
    join_exp(mantissa, exp, uppercase)
}

/// `%g`: fixed or scientific depending on the decimal exponent.
fn format_general(value: f64, precision: usize, uppercase: bool, show_point: bool) -> String {
    let p = precision.max(1);
    let exp = if value == 0.0 {
        0
    } else {
        split_exp(value, p - 1).1
    };
    let p_i = i64::try_from(p).unwrap_or(i64::MAX);
    let exp_i = i64::from(exp);

    if exp_i >= -4 && exp_i < p_i {
        let frac = usize::try_from(p_i - 1 - exp_i).unwrap_or(0);
        let mut s = format!("{value:.frac$}");
        if show_point {
            if !s.contains('.') {
                s.push('.');
            }
        } else {
            strip_trailing_zeros(&mut s);
        }
        s
    } else {
        let (mut mantissa, exp) = split_exp(value, p - 1);
        if show_point {
            if !mantissa.contains('.') {
                mantissa.push('.');
            }
        } else {
            strip_trailing_zeros(&mut mantissa);
        }
        join_exp(mantissa, exp, uppercase)
    }
}

/// Round to `precision` fraction digits in scientific form; returns the
/// mantissa text and the decimal exponent after rounding.
fn split_exp(value: f64, precision: usize) -> (String, i32) {
    let s = format!("{value:.precision$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn join_exp(mut mantissa: String, exp: i32, uppercase: bool) -> String {
    mantissa.push(if uppercase { 'E' } else { 'e' });
    mantissa.push(if exp < 0 { '-' } else { '+' });
    mantissa.push_str(&format!("{:02}", exp.unsigned_abs()));
    mantissa
}

/// Remove trailing zeros after the decimal point, and the point itself if bare.
fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}
