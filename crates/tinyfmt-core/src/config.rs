//! Rendering configuration.
//!
//! A [`RenderConfig`] is what a single directive resolves to: it is built
//! fresh from [`RenderConfig::default`] for every directive, applied to the
//! sink once, and discarded. The configuration that was on the sink before a
//! formatting call (the ambient configuration) is captured by
//! [`AmbientGuard`] and put back when the guard drops.

use std::ops::{Deref, DerefMut};

use crate::sink::FormatSink;

/// Default float precision, as in C `printf`.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest width a directive may request.
pub const MAX_WIDTH: usize = 1 << 20;

/// Largest precision a directive may request.
pub const MAX_PRECISION: usize = 1 << 20;

/// Where padding goes relative to the rendered value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    #[default]
    Right,
    /// Pad between the sign/base prefix and the digits (`-00010`).
    Internal,
}

/// Integer radix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericBase {
    #[default]
    Decimal,
    Octal,
    Hexadecimal,
}

impl NumericBase {
    #[must_use]
    pub fn radix(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Octal => 8,
            Self::Hexadecimal => 16,
        }
    }
}

/// Float notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FloatStyle {
    /// `%f`
    Fixed,
    /// `%e`
    Scientific,
    /// `%g`: shortest of fixed and scientific.
    #[default]
    General,
}

/// Output rendering configuration for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub alignment: Alignment,
    pub fill: char,
    /// Minimum width in chars; 0 means none.
    pub width: usize,
    pub precision: usize,
    pub base: NumericBase,
    pub uppercase: bool,
    pub float_style: FloatStyle,
    /// `+` on non-negative decimal numbers.
    pub show_sign: bool,
    /// `0x`/`0` prefixes for hex/octal.
    pub show_base: bool,
    /// Keep the decimal point and trailing zeros on floats.
    pub show_point: bool,
    /// Booleans as `true`/`false` instead of `1`/`0`.
    pub bool_alpha: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::Right,
            fill: ' ',
            width: 0,
            precision: DEFAULT_PRECISION,
            base: NumericBase::Decimal,
            uppercase: false,
            float_style: FloatStyle::General,
            show_sign: false,
            show_base: false,
            show_point: false,
            bool_alpha: false,
        }
    }
}

impl RenderConfig {
    /// Left alignment with space fill (the `-` flag).
    pub fn align_left(&mut self) {
        self.fill = ' ';
        self.alignment = Alignment::Left;
    }

    /// Internal alignment with zero fill (the `0` flag), unless already left aligned.
    pub fn zero_pad(&mut self) {
        if self.alignment != Alignment::Left {
            self.fill = '0';
            self.alignment = Alignment::Internal;
        }
    }
}

/// Restores the ambient configuration of a sink when dropped.
///
/// Dereferences to the wrapped sink so the formatting loop can keep writing
/// through it; whatever configuration the loop leaves behind is replaced on
/// every exit path, error returns and unwinding included.
pub struct AmbientGuard<'a> {
    sink: &'a mut dyn FormatSink,
    ambient: RenderConfig,
}

impl<'a> AmbientGuard<'a> {
    /// Snapshot the sink's current configuration.
    pub fn capture(sink: &'a mut dyn FormatSink) -> Self {
        let ambient = *sink.config();
        Self { sink, ambient }
    }

    /// The configuration that will be restored.
    #[must_use]
    pub fn ambient(&self) -> &RenderConfig {
        &self.ambient
    }
}

impl<'a> Deref for AmbientGuard<'a> {
    type Target = dyn FormatSink + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.sink
    }
}

impl<'a> DerefMut for AmbientGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.sink
    }
}

impl Drop for AmbientGuard<'_> {
    fn drop(&mut self) {
        self.sink.set_config(self.ambient);
    }
}
