use std::ops::{Deref, DerefMut};

use crate::catalog::{
    self, RestartWhenRunning, ScheduleKind, MONTH_DAYS, UNLIMITED_RESTART_COUNT, WEEK_DAYS,
    YEAR_MONTHS,
};
use crate::error::CodecError;
use crate::text::{Serial, WireText};
use crate::time::TimeOfDay;

/// Values a caller supplies for fields the wire array (or a fresh schedule)
/// leaves unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Defaults {
    pub time_zone: WireText,
    pub business_calendar: WireText,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            time_zone: WireText::trusted(catalog::DEFAULT_TIME_ZONE),
            business_calendar: WireText::trusted(catalog::DEFAULT_BUSINESS_CALENDAR),
        }
    }
}

impl Defaults {
    pub fn new(
        time_zone: impl Into<String>,
        business_calendar: impl Into<String>,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            time_zone: WireText::new(time_zone)?,
            business_calendar: WireText::new(business_calendar)?,
        })
    }

    /// Defaults using the host's IANA time zone, falling back to UTC when the
    /// system zone has no usable name.
    pub fn from_system() -> Self {
        let zone = jiff::tz::TimeZone::system();
        let mut defaults = Self::default();
        if let Some(name) = zone.iana_name().and_then(|name| WireText::new(name).ok()) {
            defaults.time_zone = name;
        }
        defaults
    }
}

/// A decoded (or freshly created) schedule: common fields plus exactly one
/// variant payload.
///
/// Deserialized values pass through the same normalization as decoded
/// ones, so JSON cannot smuggle in a stale `overnight` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ConfigRepr"))]
pub struct ScheduleConfiguration {
    pub(crate) base: BaseFields,
    pub(crate) variant: ScheduleVariant,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ConfigRepr {
    base: BaseFields,
    variant: ScheduleVariant,
}

#[cfg(feature = "serde")]
impl From<ConfigRepr> for ScheduleConfiguration {
    fn from(repr: ConfigRepr) -> Self {
        let mut config = Self::from_parts(repr.base, repr.variant);
        config.normalize();
        config
    }
}

impl ScheduleConfiguration {
    pub(crate) fn from_parts(base: BaseFields, variant: ScheduleVariant) -> Self {
        Self { base, variant }
    }

    pub fn kind(&self) -> ScheduleKind {
        self.variant.kind()
    }

    pub fn base(&self) -> &BaseFields {
        &self.base
    }

    /// Mutable access to the common fields with no derived state attached.
    /// The window and overnight fields stay behind the setters in `derived`.
    pub fn base_mut(&mut self) -> &mut BaseSettings {
        &mut self.base.settings
    }

    pub fn variant(&self) -> &ScheduleVariant {
        &self.variant
    }

    /// Mutable access to the payload of the current kind. Changing the kind
    /// goes through `switch_kind`.
    pub fn variant_mut(&mut self) -> VariantMut<'_> {
        match &mut self.variant {
            ScheduleVariant::Daily(fields) => VariantMut::Daily(fields),
            ScheduleVariant::Monthly(fields) => VariantMut::Monthly(fields),
            ScheduleVariant::Continuous(fields) => VariantMut::Continuous(fields),
            ScheduleVariant::Dependent(fields) => VariantMut::Dependent(fields),
            ScheduleVariant::Temporary(fields) => VariantMut::Temporary(fields),
            ScheduleVariant::Range(fields) => VariantMut::Range(fields),
        }
    }
}

/// Borrowed payload of a configuration's current kind.
///
/// Range bounds are read-only here: they move the base window, so they are
/// set through `ScheduleConfiguration::set_start_date_time` and friends.
#[derive(Debug)]
pub enum VariantMut<'a> {
    Daily(&'a mut DailyFields),
    Monthly(&'a mut MonthlyFields),
    Continuous(&'a mut ContinuousFields),
    Dependent(&'a mut DependentFields),
    Temporary(&'a mut TemporaryFields),
    Range(&'a RangeFields),
}

/// Fields every schedule kind carries.
///
/// The time window and the flags derived from it are read through getters;
/// everything else lives in [`BaseSettings`], reachable through `Deref`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseFields {
    pub(crate) start_time: TimeOfDay,
    /// `None` for legacy schedules that never stored a stop time.
    pub(crate) stop_time: Option<TimeOfDay>,
    pub(crate) overnight: bool,
    pub(crate) stop_time_disabled: bool,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) settings: BaseSettings,
}

/// Common fields that no derived state depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseSettings {
    pub time_zone: WireText,
    pub scheduling_disabled: bool,
    pub repeat_enabled: bool,
    /// Seconds between repeats.
    pub repeat_interval: u32,
    pub skip_if_unsuccessful: bool,
    pub restart_error_count: RestartLimit,
    pub restart_delay_minutes: u32,
    pub restart_when_running: RestartWhenRunning,
}

impl BaseFields {
    pub(crate) fn new(defaults: &Defaults) -> Self {
        Self {
            start_time: catalog::DEFAULT_START_TIME,
            stop_time: Some(catalog::DEFAULT_STOP_TIME),
            overnight: false,
            stop_time_disabled: false,
            settings: BaseSettings {
                time_zone: defaults.time_zone.clone(),
                scheduling_disabled: false,
                repeat_enabled: false,
                repeat_interval: 0,
                skip_if_unsuccessful: false,
                restart_error_count: RestartLimit::default(),
                restart_delay_minutes: 0,
                restart_when_running: RestartWhenRunning::default(),
            },
        }
    }

    pub fn start_time(&self) -> TimeOfDay {
        self.start_time
    }

    pub fn stop_time(&self) -> Option<TimeOfDay> {
        self.stop_time
    }

    pub fn overnight(&self) -> bool {
        self.overnight
    }

    pub fn stop_time_disabled(&self) -> bool {
        self.stop_time_disabled
    }
}

impl Deref for BaseFields {
    type Target = BaseSettings;

    fn deref(&self) -> &BaseSettings {
        &self.settings
    }
}

impl DerefMut for BaseFields {
    fn deref_mut(&mut self) -> &mut BaseSettings {
        &mut self.settings
    }
}

/// How many times a failed run is restarted: `0..=10`, or without limit.
///
/// Holds the wire value, where `11` means unlimited. Only the constructors
/// below build one, so a finite count can never collide with the sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RestartLimitRepr", into = "RestartLimitRepr")
)]
pub struct RestartLimit(u8);

impl RestartLimit {
    pub const UNLIMITED: Self = Self(UNLIMITED_RESTART_COUNT);

    /// A finite limit; `None` above 10.
    pub fn count(restarts: u8) -> Option<Self> {
        (restarts <= catalog::MAX_RESTART_COUNT).then_some(Self(restarts))
    }

    /// `None` for values above the sentinel.
    pub fn from_wire(value: u8) -> Option<Self> {
        (value <= UNLIMITED_RESTART_COUNT).then_some(Self(value))
    }

    pub fn to_wire(self) -> u8 {
        self.0
    }

    pub fn is_unlimited(self) -> bool {
        self.0 == UNLIMITED_RESTART_COUNT
    }

    /// The finite limit, or `None` when unlimited.
    pub fn max_restarts(self) -> Option<u8> {
        (!self.is_unlimited()).then_some(self.0)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum RestartLimitRepr {
    Count(u8),
    Unlimited,
}

#[cfg(feature = "serde")]
impl From<RestartLimit> for RestartLimitRepr {
    fn from(limit: RestartLimit) -> Self {
        match limit.max_restarts() {
            Some(n) => Self::Count(n),
            None => Self::Unlimited,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RestartLimitRepr> for RestartLimit {
    type Error = String;

    fn try_from(repr: RestartLimitRepr) -> Result<Self, Self::Error> {
        match repr {
            RestartLimitRepr::Count(n) => RestartLimit::count(n).ok_or_else(|| {
                format!(
                    "restart count {n} is above the maximum of {}",
                    catalog::MAX_RESTART_COUNT
                )
            }),
            RestartLimitRepr::Unlimited => Ok(RestartLimit::UNLIMITED),
        }
    }
}

/// Variant payload. Exactly one is present per configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ScheduleVariant {
    Daily(DailyFields),
    Monthly(MonthlyFields),
    Continuous(ContinuousFields),
    Dependent(DependentFields),
    Temporary(TemporaryFields),
    Range(RangeFields),
}

impl ScheduleVariant {
    pub fn kind(&self) -> ScheduleKind {
        match self {
            Self::Daily(_) => ScheduleKind::Daily,
            Self::Monthly(_) => ScheduleKind::Monthly,
            Self::Continuous(_) => ScheduleKind::Continuous,
            Self::Dependent(_) => ScheduleKind::Dependent,
            Self::Temporary(_) => ScheduleKind::Temporary,
            Self::Range(_) => ScheduleKind::Range,
        }
    }

    /// Editor-friendly defaults for `kind`: meaningful, not necessarily
    /// something the server would accept as-is.
    pub fn default_for(kind: ScheduleKind, defaults: &Defaults) -> Self {
        match kind {
            ScheduleKind::Daily => Self::Daily(DailyFields::new(defaults)),
            ScheduleKind::Monthly => Self::Monthly(MonthlyFields::new(defaults)),
            ScheduleKind::Continuous => Self::Continuous(ContinuousFields::default()),
            ScheduleKind::Dependent => Self::Dependent(DependentFields::default()),
            ScheduleKind::Temporary => Self::Temporary(TemporaryFields::default()),
            ScheduleKind::Range => Self::Range(RangeFields::default()),
        }
    }
}

/// Runs on selected days of the week. `days` is positional; the codec keeps
/// its order verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyFields {
    pub business_days: bool,
    pub business_calendar: WireText,
    pub days: [bool; WEEK_DAYS],
}

impl DailyFields {
    pub fn new(defaults: &Defaults) -> Self {
        Self {
            business_days: false,
            business_calendar: defaults.business_calendar.clone(),
            days: [true; WEEK_DAYS],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyFields {
    pub business_calendar: WireText,
    pub first_business_day: bool,
    pub last_business_day: bool,
    pub months: [bool; YEAR_MONTHS],
    /// When set, `days` selects days of the month.
    pub specific_days: bool,
    pub days: [bool; MONTH_DAYS],
}

impl MonthlyFields {
    pub fn new(defaults: &Defaults) -> Self {
        Self {
            business_calendar: defaults.business_calendar.clone(),
            first_business_day: true,
            last_business_day: false,
            months: [true; YEAR_MONTHS],
            specific_days: false,
            days: [false; MONTH_DAYS],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousFields {
    pub daily_restart: bool,
}

/// Runs after the jobs named in `dependent_serials`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DependentFields {
    pub run_on_failure: bool,
    pub restart_on_condition: bool,
    pub dependent_serials: Vec<Serial>,
    pub use_min_start_time: bool,
    pub run_on_any: bool,
    pub deadline_start: TimeOfDay,
    pub deadline_end: TimeOfDay,
    pub run_every_time: bool,
}

impl Default for DependentFields {
    fn default() -> Self {
        Self {
            run_on_failure: false,
            restart_on_condition: false,
            dependent_serials: Vec::new(),
            use_min_start_time: false,
            run_on_any: false,
            deadline_start: catalog::DEFAULT_DEADLINE_START,
            deadline_end: catalog::DEFAULT_DEADLINE_END,
            run_every_time: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporaryFields {
    pub queue_name: WireText,
    pub expiration_time_millis: u64,
    pub dependent_serials: Vec<Serial>,
}

impl Default for TemporaryFields {
    fn default() -> Self {
        Self {
            queue_name: WireText::default(),
            expiration_time_millis: catalog::DEFAULT_EXPIRATION_MILLIS,
            dependent_serials: Vec::new(),
        }
    }
}

/// Bounded by full calendar date-times. `None` means no date constraint on
/// that end, and only the base time of day applies.
///
/// The fields are private: setting a date-time also moves the base time of
/// day (see `ScheduleConfiguration::set_start_date_time`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeFields {
    pub(crate) start_date_time: Option<jiff::civil::DateTime>,
    pub(crate) stop_date_time: Option<jiff::civil::DateTime>,
}

impl RangeFields {
    pub fn start_date_time(&self) -> Option<jiff::civil::DateTime> {
        self.start_date_time
    }

    pub fn stop_date_time(&self) -> Option<jiff::civil::DateTime> {
        self.stop_date_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_limit_wire_values() {
        assert_eq!(RestartLimit::from_wire(0), RestartLimit::count(0));
        assert_eq!(RestartLimit::from_wire(10), RestartLimit::count(10));
        assert_eq!(RestartLimit::from_wire(11), Some(RestartLimit::UNLIMITED));
        assert_eq!(RestartLimit::from_wire(12), None);
        assert_eq!(RestartLimit::UNLIMITED.to_wire(), 11);
        assert_eq!(RestartLimit::UNLIMITED.max_restarts(), None);
        assert_eq!(RestartLimit::count(10).unwrap().max_restarts(), Some(10));
    }

    #[test]
    fn test_restart_count_cannot_reach_sentinel() {
        assert_eq!(RestartLimit::count(11), None);
        assert_eq!(RestartLimit::count(255), None);
        assert!(!RestartLimit::count(10).unwrap().is_unlimited());
        assert_eq!(RestartLimit::default().to_wire(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_restart_limit_serde_is_checked() {
        let ten: RestartLimit = serde_json::from_str(r#"{"count":10}"#).unwrap();
        assert_eq!(ten.max_restarts(), Some(10));
        let unlimited: RestartLimit = serde_json::from_str(r#""unlimited""#).unwrap();
        assert_eq!(unlimited, RestartLimit::UNLIMITED);
        assert_eq!(serde_json::to_string(&unlimited).unwrap(), r#""unlimited""#);
        assert!(serde_json::from_str::<RestartLimit>(r#"{"count":11}"#).is_err());
        assert!(serde_json::from_str::<RestartLimit>(r#"{"count":255}"#).is_err());
    }

    #[test]
    fn test_variant_defaults_carry_calendar() {
        let defaults = Defaults::new("Europe/Paris", "TARGET").unwrap();
        match ScheduleVariant::default_for(ScheduleKind::Monthly, &defaults) {
            ScheduleVariant::Monthly(m) => {
                assert_eq!(m.business_calendar, "TARGET");
                assert_eq!(m.months, [true; 12]);
            }
            other => panic!("expected Monthly, got {other:?}"),
        }
        for kind in ScheduleKind::ALL {
            assert_eq!(ScheduleVariant::default_for(kind, &defaults).kind(), kind);
        }
    }

    #[test]
    fn test_temporary_defaults_to_one_day() {
        assert_eq!(
            TemporaryFields::default().expiration_time_millis,
            86_400_000
        );
    }
}
