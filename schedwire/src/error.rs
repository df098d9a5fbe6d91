use std::fmt;

/// Byte range within a raw wire token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering all of `text`.
    pub fn whole(text: &str) -> Self {
        Self::new(0, text.len())
    }
}

/// All errors produced while decoding a wire array or validating wire text.
///
/// Encoding is infallible, so every variant describes a malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    /// A scalar value could not be read as the expected primitive.
    #[error("invalid {expected} {value:?} in `{token}`")]
    Format {
        token: String,
        value: String,
        expected: &'static str,
        span: Span,
    },

    /// A recognised token split into the wrong number of segments.
    #[error("`{token}` has {actual} segments, expected {expected}")]
    Arity {
        token: String,
        expected: usize,
        actual: usize,
    },

    /// The schedule type discriminant was missing or unrecognised.
    #[error("{}", unknown_variant_message(.value.as_deref()))]
    UnknownVariant { value: Option<String> },
}

fn unknown_variant_message(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("unknown schedule type {v:?}"),
        None => "missing schedule type".to_string(),
    }
}

impl CodecError {
    pub fn format(
        token: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
        span: Span,
    ) -> Self {
        Self::Format {
            token: token.into(),
            value: value.into(),
            expected,
            span,
        }
    }

    pub fn arity(token: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::Arity {
            token: token.into(),
            expected,
            actual,
        }
    }

    pub fn unknown_variant(value: Option<&str>) -> Self {
        Self::UnknownVariant {
            value: value.map(String::from),
        }
    }

    /// The raw token the error refers to, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Format { token, .. } | Self::Arity { token, .. } => Some(token),
            Self::UnknownVariant { .. } => None,
        }
    }

    /// Format a rich error with the offending token underlined.
    pub fn display_rich(&self) -> String {
        match self {
            Self::Format { token, span, .. } => format_span_error("error", self, token, span),
            Self::Arity { token, .. } => {
                format_span_error("error", self, token, &Span::whole(token))
            }
            Self::UnknownVariant { .. } => format!("error: {self}"),
        }
    }
}

fn format_span_error(prefix: &str, error: &CodecError, token: &str, span: &Span) -> String {
    let mut out = format!("{prefix}: {error}\n");
    out.push_str(&format!("  {token}\n"));
    let padding = " ".repeat(span.start + 2);
    let underline = "^".repeat((span.end - span.start).max(1));
    out.push_str(&padding);
    out.push_str(&underline);
    out
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rich_format_error_underlines_value() {
        let err = CodecError::format("StartTime=7h", "7h", "time of day", Span::new(10, 12));
        assert_eq!(
            err.display_rich(),
            "error: invalid time of day \"7h\" in `StartTime=7h`\n  StartTime=7h\n            ^^"
        );
    }

    #[test]
    fn test_rich_arity_error_underlines_token() {
        let err = CodecError::arity("Days=true", 8, 2);
        let rich = err.display_rich();
        assert!(rich.starts_with("error: `Days=true` has 2 segments, expected 8"));
        assert!(rich.ends_with("  ^^^^^^^^^"));
    }

    #[test]
    fn test_unknown_variant_messages() {
        assert_eq!(
            CodecError::unknown_variant(None).to_string(),
            "missing schedule type"
        );
        assert_eq!(
            CodecError::unknown_variant(Some("Weekly")).display_rich(),
            "error: unknown schedule type \"Weekly\""
        );
    }
}
