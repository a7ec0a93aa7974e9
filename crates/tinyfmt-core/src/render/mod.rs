//! Value rendering.
//!
//! [`FormatArg`] is the capability the directive engine consumes: render
//! this value under the sink's current configuration, optionally truncated,
//! and convert to an integer for `*` width/precision. The engine never looks
//! at concrete argument types; everything type-specific lives here.

pub mod num;
pub mod pad;

use std::borrow::Cow;
use std::fmt::Display;

use crate::error::FormatError;
use crate::sink::FormatSink;

use num::{IntValue, render_float, render_int, render_pointer};
use pad::emit;

/// A type-erased, formattable argument.
pub trait FormatArg {
    /// Write the value to `sink` under `sink.config()`.
    ///
    /// `truncate_at` bounds the emitted chars for `%.Ns`; `conversion` is the
    /// directive's conversion character, consulted for `%c`.
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        conversion: u8,
    ) -> Result<(), FormatError>;

    /// Integer value for `*` width and precision, `None` if not integral.
    fn to_int(&self) -> Option<i64> {
        None
    }

    /// Short type name used in error messages.
    fn type_name(&self) -> &'static str;
}

impl<T: FormatArg + ?Sized> FormatArg for &T {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        conversion: u8,
    ) -> Result<(), FormatError> {
        (**self).render(sink, truncate_at, conversion)
    }

    fn to_int(&self) -> Option<i64> {
        (**self).to_int()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

fn render_char(
    sink: &mut dyn FormatSink,
    c: char,
    truncate_at: Option<usize>,
) -> Result<(), FormatError> {
    let mut buf = [0u8; 4];
    emit(sink, c.encode_utf8(&mut buf), 0, truncate_at)
}

fn render_integer(
    sink: &mut dyn FormatSink,
    value: IntValue,
    truncate_at: Option<usize>,
    conversion: u8,
) -> Result<(), FormatError> {
    if conversion == b'c' {
        let c = u32::try_from(value.pattern)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        return render_char(sink, c, truncate_at);
    }
    let (body, prefix_len) = render_int(value, sink.config());
    emit(sink, &body, prefix_len, truncate_at)
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl FormatArg for $t {
            fn render(
                &self,
                sink: &mut dyn FormatSink,
                truncate_at: Option<usize>,
                conversion: u8,
            ) -> Result<(), FormatError> {
                let value = IntValue {
                    negative: *self < 0,
                    magnitude: self.unsigned_abs() as u128,
                    pattern: *self as $u as u128,
                    signed: true,
                };
                render_integer(sink, value, truncate_at, conversion)
            }

            fn to_int(&self) -> Option<i64> {
                Some(i64::try_from(*self).unwrap_or(if *self < 0 { i64::MIN } else { i64::MAX }))
            }

            fn type_name(&self) -> &'static str {
                stringify!($t)
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl FormatArg for $t {
            fn render(
                &self,
                sink: &mut dyn FormatSink,
                truncate_at: Option<usize>,
                conversion: u8,
            ) -> Result<(), FormatError> {
                let value = IntValue {
                    negative: false,
                    magnitude: *self as u128,
                    pattern: *self as u128,
                    signed: false,
                };
                render_integer(sink, value, truncate_at, conversion)
            }

            fn to_int(&self) -> Option<i64> {
                Some(i64::try_from(*self).unwrap_or(i64::MAX))
            }

            fn type_name(&self) -> &'static str {
                stringify!($t)
            }
        }
    )*};
}

impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl FormatArg for $t {
            fn render(
                &self,
                sink: &mut dyn FormatSink,
                truncate_at: Option<usize>,
                _conversion: u8,
            ) -> Result<(), FormatError> {
                let (body, prefix_len) = render_float(f64::from(*self), sink.config());
                emit(sink, &body, prefix_len, truncate_at)
            }

            fn type_name(&self) -> &'static str {
                stringify!($t)
            }
        }
    )*};
}

impl_float!(f32, f64);

impl FormatArg for bool {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        conversion: u8,
    ) -> Result<(), FormatError> {
        if sink.config().bool_alpha {
            let word = if *self { "true" } else { "false" };
            return emit(sink, word, 0, truncate_at);
        }
        let value = IntValue {
            negative: false,
            magnitude: u128::from(*self),
            pattern: u128::from(*self),
            signed: true,
        };
        render_integer(sink, value, truncate_at, conversion)
    }

    fn to_int(&self) -> Option<i64> {
        Some(i64::from(*self))
    }

    fn type_name(&self) -> &'static str {
        "bool"
    }
}

impl FormatArg for char {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        _conversion: u8,
    ) -> Result<(), FormatError> {
        render_char(sink, *self, truncate_at)
    }

    fn to_int(&self) -> Option<i64> {
        Some(i64::from(u32::from(*self)))
    }

    fn type_name(&self) -> &'static str {
        "char"
    }
}

impl FormatArg for str {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        _conversion: u8,
    ) -> Result<(), FormatError> {
        emit(sink, self, 0, truncate_at)
    }

    fn type_name(&self) -> &'static str {
        "str"
    }
}

impl FormatArg for String {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        conversion: u8,
    ) -> Result<(), FormatError> {
        self.as_str().render(sink, truncate_at, conversion)
    }

    fn type_name(&self) -> &'static str {
        "String"
    }
}

impl FormatArg for Cow<'_, str> {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        conversion: u8,
    ) -> Result<(), FormatError> {
        self.as_ref().render(sink, truncate_at, conversion)
    }

    fn type_name(&self) -> &'static str {
        "Cow<str>"
    }
}

impl<T: ?Sized> FormatArg for *const T {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        _conversion: u8,
    ) -> Result<(), FormatError> {
        let (body, prefix_len) = render_pointer(self.cast::<()>() as usize, sink.config());
        emit(sink, &body, prefix_len, truncate_at)
    }

    fn type_name(&self) -> &'static str {
        "pointer"
    }
}

impl<T: ?Sized> FormatArg for *mut T {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        conversion: u8,
    ) -> Result<(), FormatError> {
        self.cast_const().render(sink, truncate_at, conversion)
    }

    fn type_name(&self) -> &'static str {
        "pointer"
    }
}

/// Formats any [`Display`] value as a string argument.
#[derive(Debug, Clone, Copy)]
pub struct Displayed<T>(pub T);

impl<T: Display> FormatArg for Displayed<T> {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        _conversion: u8,
    ) -> Result<(), FormatError> {
        emit(sink, &self.0.to_string(), 0, truncate_at)
    }

    fn type_name(&self) -> &'static str {
        "Displayed"
    }
}
