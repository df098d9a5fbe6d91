use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, Span};

const SECONDS_PER_DAY: u32 = 86_400;

/// Local time of day, stored as seconds since midnight in `[0, 86399]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    seconds: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { seconds: 0 };
    pub const LAST_SECOND: TimeOfDay = TimeOfDay {
        seconds: SECONDS_PER_DAY - 1,
    };

    /// Build from seconds since midnight; `None` when outside the day.
    pub fn from_seconds(seconds: u32) -> Option<Self> {
        (seconds < SECONDS_PER_DAY).then_some(Self { seconds })
    }

    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self::from_hms_const(hour, minute, second))
        } else {
            None
        }
    }

    /// Unchecked constructor for constants. Callers keep the parts in range.
    pub(crate) const fn from_hms_const(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            seconds: hour as u32 * 3600 + minute as u32 * 60 + second as u32,
        }
    }

    pub fn seconds(self) -> u32 {
        self.seconds
    }

    pub fn hour(self) -> u8 {
        (self.seconds / 3600) as u8
    }

    pub fn minute(self) -> u8 {
        (self.seconds / 60 % 60) as u8
    }

    pub fn second(self) -> u8 {
        (self.seconds % 60) as u8
    }

    pub fn to_jiff(self) -> jiff::civil::Time {
        jiff::civil::time(
            self.hour() as i8,
            self.minute() as i8,
            self.second() as i8,
            0,
        )
    }

    /// Drops sub-second precision.
    pub fn from_jiff(time: jiff::civil::Time) -> Self {
        Self::from_hms_const(time.hour() as u8, time.minute() as u8, time.second() as u8)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl FromStr for TimeOfDay {
    type Err = CodecError;

    /// Parses `HH:MM:SS`; single-digit fields are tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecError::format(s, s, "time of day", Span::whole(s));

        let mut parts = s.split(':');
        let (Some(h), Some(m), Some(sec), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let field = |part: &str| -> Option<u8> {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        };

        match (field(h), field(m), field(sec)) {
            (Some(h), Some(m), Some(sec)) => Self::from_hms(h, m, sec).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse `HH:MM:SS` into seconds since midnight.
pub fn parse_local_time(text: &str) -> Result<u32, CodecError> {
    text.parse::<TimeOfDay>().map(TimeOfDay::seconds)
}

/// Format seconds since midnight as `HH:MM:SS`; `None` past the end of the
/// day.
pub fn format_local_time(seconds: u32) -> Option<String> {
    TimeOfDay::from_seconds(seconds).map(|time| time.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        assert_eq!(parse_local_time("07:55:00").unwrap(), 28_500);
        assert_eq!(format_local_time(28_500).as_deref(), Some("07:55:00"));
        assert_eq!(parse_local_time("23:59:59").unwrap(), 86_399);
        assert_eq!(parse_local_time("7:05:09").unwrap(), 25_509);
    }

    #[test]
    fn test_format_rejects_out_of_day() {
        assert_eq!(format_local_time(86_399).as_deref(), Some("23:59:59"));
        assert_eq!(format_local_time(86_400), None);
        assert_eq!(format_local_time(u32::MAX), None);
    }

    #[test]
    fn test_exact_over_whole_day() {
        for seconds in 0..SECONDS_PER_DAY {
            assert_eq!(parse_local_time(&format_local_time(seconds).unwrap()).unwrap(), seconds);
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "", "07:55", "07:55:00:00", "24:00:00", "07:60:00", "07:00:60", "ab:cd:ef",
            "-1:00:00", "007:00:00", "07:55:0x", " 07:55:00",
        ] {
            let err = parse_local_time(bad).unwrap_err();
            assert!(
                matches!(err, CodecError::Format { expected: "time of day", .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_jiff_conversion() {
        let t = TimeOfDay::from_hms(23, 55, 7).unwrap();
        assert_eq!(t.to_jiff(), jiff::civil::time(23, 55, 7, 0));
        assert_eq!(TimeOfDay::from_jiff(jiff::civil::time(23, 55, 7, 500)), t);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(TimeOfDay::from_seconds(86_400), None);
        assert_eq!(TimeOfDay::from_seconds(86_399), Some(TimeOfDay::LAST_SECOND));
        assert_eq!(TimeOfDay::from_hms(24, 0, 0), None);
    }
}
