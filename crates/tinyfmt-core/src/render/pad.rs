//! Width padding and truncation.

use crate::config::{Alignment, RenderConfig};
use crate::error::FormatError;
use crate::sink::FormatSink;

/// Append `body` to `out`, padded to `cfg.width`.
///
/// `prefix_len` is the byte length of the leading sign and base prefix;
/// internal alignment places the fill right after it.
pub fn pad_into(out: &mut String, body: &str, prefix_len: usize, cfg: &RenderConfig) {
    let len = body.chars().count();
    let count = cfg.width.saturating_sub(len);
    if count == 0 {
        out.push_str(body);
        return;
    }
    match cfg.alignment {
        Alignment::Left => {
            out.push_str(body);
            fill(out, cfg.fill, count);
        }
        Alignment::Right => {
            fill(out, cfg.fill, count);
            out.push_str(body);
        }
        Alignment::Internal => {
            let split = prefix_len.min(body.len());
            let (prefix, rest) = body.split_at(split);
            out.push_str(prefix);
            fill(out, cfg.fill, count);
            out.push_str(rest);
        }
    }
}

/// Truncate to at most `max` chars, without splitting a char.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate, pad under the sink's configuration and write.
pub fn emit(
    sink: &mut dyn FormatSink,
    body: &str,
    prefix_len: usize,
    truncate_at: Option<usize>,
) -> Result<(), FormatError> {
    let body = match truncate_at {
        Some(max) => truncate_chars(body, max),
        None => body,
    };
    let prefix_len = prefix_len.min(body.len());
    let cfg = *sink.config();
    if cfg.width == 0 {
        return sink.write_str(body);
    }
    let mut out = String::with_capacity(body.len().max(cfg.width));
    pad_into(&mut out, body, prefix_len, &cfg);
    sink.write_str(&out)
}

fn fill(out: &mut String, c: char, count: usize) {
    out.extend(std::iter::repeat_n(c, count));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(width: usize, alignment: Alignment, fill: char) -> RenderConfig {
        RenderConfig {
            width,
            alignment,
            fill,
            ..RenderConfig::default()
        }
    }

    fn padded(body: &str, prefix_len: usize, cfg: &RenderConfig) -> String {
        let mut out = String::new();
        pad_into(&mut out, body, prefix_len, cfg);
        out
    }

    #[test]
    fn right_alignment_pads_before() {
        assert_eq!(padded("42", 0, &cfg(5, Alignment::Right, ' ')), "   42");
    }

    #[test]
    fn left_alignment_pads_after() {
        assert_eq!(padded("42", 0, &cfg(5, Alignment::Left, ' ')), "42   ");
    }

    #[test]
    fn internal_alignment_keeps_sign_left() {
        assert_eq!(padded("-3", 1, &cfg(5, Alignment::Internal, '0')), "-0003");
        assert_eq!(padded("0xff", 2, &cfg(8, Alignment::Internal, '0')), "0x0000ff");
    }

    #[test]
    fn width_smaller_than_body_is_noop() {
        assert_eq!(padded("hello", 0, &cfg(3, Alignment::Right, ' ')), "hello");
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        assert_eq!(padded("é", 0, &cfg(3, Alignment::Right, '.')), "..é");
    }

    #[test]
    fn large_widths_are_padded_in_full() {
        let out = padded("x", 0, &cfg(5000, Alignment::Right, ' '));
        assert_eq!(out.len(), 5000);
        assert!(out.ends_with(" x"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("hello", 2), "he");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("hi", 10), "hi");
        assert_eq!(truncate_chars("hi", 0), "");
    }
}
