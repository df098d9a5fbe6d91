//! Free-text values that are guaranteed to survive the wire.
//!
//! A value containing the field delimiter would split into extra segments on
//! decode, and a serial containing the list delimiter (or an empty serial)
//! would come back as a different list. These newtypes reject such text when
//! they are built, which keeps encoding infallible.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::catalog::{FIELD_DELIMITER, SERIAL_DELIMITER};
use crate::error::{CodecError, Span};

fn reject(text: &str, at: usize, expected: &'static str) -> CodecError {
    let end = text[at..]
        .chars()
        .next()
        .map_or(at, |c| at + c.len_utf8());
    CodecError::format(text, text, expected, Span::new(at, end))
}

macro_rules! text_newtype {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CodecError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = CodecError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = CodecError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

/// A single wire value: any text without the field delimiter `=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct WireText(String);

impl WireText {
    pub fn new(text: impl Into<String>) -> Result<Self, CodecError> {
        let text = text.into();
        match text.find(FIELD_DELIMITER) {
            Some(at) => Err(reject(&text, at, "text without '='")),
            None => Ok(Self(text)),
        }
    }

    /// For values already known to be delimiter-free: the built-in defaults
    /// and the value segment of a two-segment token.
    pub(crate) fn trusted(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.contains(FIELD_DELIMITER), "{text:?}");
        Self(text)
    }
}

text_newtype!(WireText);

/// One dependency serial: non-empty, without `=` or `;`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Serial(String);

impl Serial {
    pub fn new(text: impl Into<String>) -> Result<Self, CodecError> {
        let text = text.into();
        if text.is_empty() {
            return Err(CodecError::format("", "", "non-empty serial", Span::new(0, 0)));
        }
        match text.find([FIELD_DELIMITER, SERIAL_DELIMITER]) {
            Some(at) => Err(reject(&text, at, "serial without '=' or ';'")),
            None => Ok(Self(text)),
        }
    }

    /// For a non-empty segment of an already split serial list.
    pub(crate) fn trusted(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(
            !text.is_empty() && !text.contains([FIELD_DELIMITER, SERIAL_DELIMITER]),
            "{text:?}"
        );
        Self(text)
    }
}

text_newtype!(Serial);
