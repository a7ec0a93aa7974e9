//! Output sinks.
//!
//! A sink is where rendered text goes. It also carries the configuration
//! currently applied to it, which the value renderers read.

use std::io::Write;

use crate::config::RenderConfig;
use crate::error::FormatError;

/// Text destination with an attached rendering configuration.
pub trait FormatSink {
    /// Configuration currently applied.
    fn config(&self) -> &RenderConfig;

    /// Replace the applied configuration.
    fn set_config(&mut self, config: RenderConfig);

    /// Append text verbatim.
    fn write_str(&mut self, s: &str) -> Result<(), FormatError>;
}

/// In-memory sink.
#[derive(Debug, Clone, Default)]
pub struct StringSink {
    buf: String,
    config: RenderConfig,
}

impl StringSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink starting with a non-default ambient configuration.
    #[must_use]
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            buf: String::new(),
            config,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl FormatSink for StringSink {
    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    fn write_str(&mut self, s: &str) -> Result<(), FormatError> {
        self.buf.push_str(s);
        Ok(())
    }
}

/// Sink over any [`std::io::Write`].
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
    config: RenderConfig,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            config: RenderConfig::default(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn flush(&mut self) -> Result<(), FormatError> {
        self.inner.flush()?;
        Ok(())
    }
}

impl<W: Write> FormatSink for IoSink<W> {
    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    fn write_str(&mut self, s: &str) -> Result<(), FormatError> {
        self.inner.write_all(s.as_bytes())?;
        Ok(())
    }
}
