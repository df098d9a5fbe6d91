//! schedwire: codec for a legacy scheduler's wire format.
//!
//! The server stores a schedule as an unordered array of `label=value`
//! strings. This crate turns that array into a typed
//! [`ScheduleConfiguration`] (one of six schedule kinds sharing a common set
//! of fields) and back, applying the legacy defaulting rules and keeping the
//! derived overnight flag consistent with the time window.
//!
//! # Examples
//!
//! ```
//! use schedwire::{Defaults, ScheduleConfiguration, TimeOfDay};
//!
//! let mut config = ScheduleConfiguration::new_default(&Defaults::default());
//! config.set_stop_time(TimeOfDay::from_hms(6, 0, 0).unwrap());
//! assert!(config.base().overnight());
//!
//! let wire = config.encode();
//! let decoded = ScheduleConfiguration::decode(&wire).unwrap();
//! assert_eq!(decoded, config);
//! ```

pub mod base;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod derived;
pub mod display;
pub mod error;
pub mod text;
pub mod time;
mod variant;
pub mod wire;

pub use catalog::{RestartWhenRunning, ScheduleKind};
pub use config::{
    BaseFields, BaseSettings, ContinuousFields, DailyFields, Defaults, DependentFields,
    MonthlyFields, RangeFields, RestartLimit, ScheduleConfiguration, ScheduleVariant,
    TemporaryFields, VariantMut,
};
pub use error::CodecError;
pub use text::{Serial, WireText};
pub use time::{format_local_time, parse_local_time, TimeOfDay};

// --- ScheduleConfiguration convenience methods ---

impl ScheduleConfiguration {
    /// Decode a wire array with the stock defaults.
    pub fn decode<S: AsRef<str>>(tokens: &[S]) -> Result<Self, CodecError> {
        codec::decode(tokens)
    }

    /// Decode a wire array, filling absent fields from `defaults`.
    pub fn decode_with<S: AsRef<str>>(tokens: &[S], defaults: &Defaults) -> Result<Self, CodecError> {
        codec::decode_with(tokens, defaults)
    }

    /// Encode to a wire array.
    pub fn encode(&self) -> Vec<String> {
        codec::encode(self)
    }

    /// The default daily schedule.
    pub fn new_default(defaults: &Defaults) -> Self {
        codec::create_default(defaults)
    }

    /// Check whether a wire array decodes.
    pub fn validate<S: AsRef<str>>(tokens: &[S]) -> bool {
        codec::decode(tokens).is_ok()
    }
}
