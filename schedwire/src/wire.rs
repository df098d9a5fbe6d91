//! Splitting and joining of individual wire tokens.

use std::fmt::Display;

use crate::catalog::{FIELD_DELIMITER, SERIAL_DELIMITER};
use crate::error::{CodecError, Span};
use crate::text::{Serial, WireText};
use crate::time::TimeOfDay;

/// One entry of a wire array, split on the field delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireToken<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> WireToken<'a> {
    pub fn split(raw: &'a str) -> Self {
        Self {
            raw,
            segments: split_delimited(raw),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// First segment; selects the field.
    pub fn label(&self) -> &'a str {
        self.segments[0]
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Require exactly `expected` segments, label included.
    pub fn expect_segments(&self, expected: usize) -> Result<&[&'a str], CodecError> {
        if self.segments.len() == expected {
            Ok(&self.segments)
        } else {
            Err(CodecError::arity(self.raw, expected, self.segments.len()))
        }
    }

    /// The single value of a `label=value` token.
    pub fn value(&self) -> Result<&'a str, CodecError> {
        Ok(self.expect_segments(2)?[1])
    }

    /// Free text; a two-segment token cannot hold the field delimiter.
    pub fn text_value(&self) -> Result<WireText, CodecError> {
        self.value().map(WireText::trusted)
    }

    /// Legacy boolean: only the literal `true` is true.
    pub fn bool_value(&self) -> Result<bool, CodecError> {
        self.value().map(parse_bool)
    }

    pub fn u32_value(&self) -> Result<u32, CodecError> {
        self.parse_value("unsigned integer")
    }

    pub fn u64_value(&self) -> Result<u64, CodecError> {
        self.parse_value("unsigned integer")
    }

    pub fn time_value(&self) -> Result<TimeOfDay, CodecError> {
        let value = self.value()?;
        value
            .parse::<TimeOfDay>()
            .map_err(|_| self.format_error(value, "time of day"))
    }

    pub fn date_value(&self) -> Result<jiff::civil::Date, CodecError> {
        self.parse_value("date (YYYY-MM-DD)")
    }

    /// Fixed-length positional flags: `label=f1=...=fN`.
    pub fn flags<const N: usize>(&self) -> Result<[bool; N], CodecError> {
        let segments = self.expect_segments(N + 1)?;
        let mut flags = [false; N];
        for (flag, segment) in flags.iter_mut().zip(&segments[1..]) {
            *flag = parse_bool(segment);
        }
        Ok(flags)
    }

    /// Dependency serials nested in the value.
    pub fn serials(&self) -> Result<Vec<Serial>, CodecError> {
        self.value().map(split_serials)
    }

    fn parse_value<T: std::str::FromStr>(&self, expected: &'static str) -> Result<T, CodecError> {
        let value = self.value()?;
        value
            .parse::<T>()
            .map_err(|_| self.format_error(value, expected))
    }

    pub(crate) fn format_error(&self, value: &str, expected: &'static str) -> CodecError {
        // Scalar values always follow the first delimiter.
        let start = self.label().len() + FIELD_DELIMITER.len_utf8();
        CodecError::format(
            self.raw,
            value,
            expected,
            Span::new(start, start + value.len()),
        )
    }
}

/// Liberal legacy boolean: anything but the literal `true` is false.
pub fn parse_bool(text: &str) -> bool {
    text == "true"
}

/// Split on the field delimiter. Always yields at least one segment.
pub fn split_delimited(text: &str) -> Vec<&str> {
    text.split(FIELD_DELIMITER).collect()
}

/// `token=v1=v2=...=vN`.
pub fn join_delimited<I>(token: &str, values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::from(token);
    for value in values {
        out.push(FIELD_DELIMITER);
        out.push_str(&value.to_string());
    }
    out
}

/// `token=value`.
pub fn scalar(token: &str, value: impl Display) -> String {
    join_delimited(token, [value])
}

pub fn join_serials(values: &[Serial]) -> String {
    let mut out = String::new();
    for (i, serial) in values.iter().enumerate() {
        if i > 0 {
            out.push(SERIAL_DELIMITER);
        }
        out.push_str(serial);
    }
    out
}

/// Empty segments carry no serial: `""` is the empty list and `"A;;B"`
/// holds two entries.
pub fn split_serials(text: &str) -> Vec<Serial> {
    text.split(SERIAL_DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(Serial::trusted)
        .collect()
}
