//! Closed vocabulary of the scheduler wire format.
//!
//! Labels, discriminant ids, array lengths and display metadata. Nothing in
//! here has behavior beyond lookups.

use crate::time::TimeOfDay;

/// Separates a token's label from its value(s).
pub const FIELD_DELIMITER: char = '=';

/// Separates entries of a dependency-serial list inside one value.
pub const SERIAL_DELIMITER: char = ';';

/// Discriminant label.
pub const SCHEDULE_TYPE: &str = "ScheduleType";

// --- Base labels ---

pub const START_TIME: &str = "StartTime";
pub const STOP_TIME: &str = "StopTime";
pub const TIME_ZONE: &str = "TimeZone";
pub const SCHEDULING_DISABLED: &str = "SchedulingDisabled";
pub const OVERNIGHT: &str = "Overnight";
pub const REPEAT_ENABLED: &str = "RepeatEnabled";
pub const REPEAT_INTERVAL: &str = "RepeatInterval";
pub const SKIP_IF_UNSUCCESSFUL: &str = "SkipIfUnsuccessful";
pub const STOP_TIME_DISABLED: &str = "StopTimeDisabled";
pub const RESTART_ERROR_COUNT: &str = "RestartErrorCount";
pub const RESTART_ERROR_DELAY: &str = "RestartErrorDelay";
pub const RESTART_WHEN_RUNNING: &str = "RestartWhenRunning";

// --- Variant labels ---

pub const BUSINESS_DAYS: &str = "BusinessDays";
pub const BUSINESS_CALENDAR: &str = "BusinessCalendar";
pub const DAYS: &str = "Days";
pub const MONTHS: &str = "Months";
pub const FIRST_BUSINESS_DAY: &str = "FirstBusinessDay";
pub const LAST_BUSINESS_DAY: &str = "LastBusinessDay";
pub const SPECIFIC_DAYS: &str = "SpecificDays";
pub const DAILY_RESTART: &str = "DailyRestart";
pub const RUN_ON_FAILURE: &str = "RunOnFailure";
pub const RESTART_ON_CONDITION: &str = "RestartOnCondition";
pub const DEPENDENT_SERIALS: &str = "DependentSerials";
pub const USE_MIN_START_TIME: &str = "UseMinStartTime";
pub const RUN_ON_ANY: &str = "RunOnAny";
pub const DEADLINE_START: &str = "DeadlineStart";
pub const DEADLINE_END: &str = "DeadlineEnd";
pub const RUN_EVERY_TIME: &str = "RunEveryTime";
pub const QUEUE_NAME: &str = "QueueName";
pub const EXPIRATION_TIME: &str = "ExpirationTime";
pub const START_DATE: &str = "StartDate";
pub const STOP_DATE: &str = "StopDate";
pub const USE_START_DATE_TIME: &str = "UseStartDateTime";
pub const USE_STOP_DATE_TIME: &str = "UseStopDateTime";

// --- Array lengths ---

pub const WEEK_DAYS: usize = 7;
pub const YEAR_MONTHS: usize = 12;
pub const MONTH_DAYS: usize = 31;

// --- Restart policy ---

/// Largest finite restart-on-error count.
pub const MAX_RESTART_COUNT: u8 = 10;

/// Wire value meaning "retry without limit".
pub const UNLIMITED_RESTART_COUNT: u8 = MAX_RESTART_COUNT + 1;

// --- Defaults ---

pub const DEFAULT_START_TIME: TimeOfDay = TimeOfDay::from_hms_const(7, 55, 0);
pub const DEFAULT_STOP_TIME: TimeOfDay = TimeOfDay::from_hms_const(23, 55, 0);
pub const DEFAULT_DEADLINE_START: TimeOfDay = TimeOfDay::MIDNIGHT;
pub const DEFAULT_DEADLINE_END: TimeOfDay = TimeOfDay::LAST_SECOND;
pub const DEFAULT_TIME_ZONE: &str = "UTC";
pub const DEFAULT_BUSINESS_CALENDAR: &str = "Default";

/// Temporary schedules expire after a day unless told otherwise.
pub const DEFAULT_EXPIRATION_MILLIS: u64 = 24 * 60 * 60 * 1000;

/// Schedule kind: the discriminant of a wire array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScheduleKind {
    Daily,
    Monthly,
    Continuous,
    Dependent,
    Temporary,
    Range,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 6] = [
        Self::Daily,
        Self::Monthly,
        Self::Continuous,
        Self::Dependent,
        Self::Temporary,
        Self::Range,
    ];

    /// Opaque class-name style id the server stores for this kind.
    pub fn wire_id(self) -> &'static str {
        match self {
            Self::Daily => "com.batchsched.schedule.DailySchedule",
            Self::Monthly => "com.batchsched.schedule.MonthlySchedule",
            Self::Continuous => "com.batchsched.schedule.ContinuousSchedule",
            Self::Dependent => "com.batchsched.schedule.DependentSchedule",
            Self::Temporary => "com.batchsched.schedule.TemporarySchedule",
            Self::Range => "com.batchsched.schedule.RangeSchedule",
        }
    }

    pub fn from_wire_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wire_id() == id)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Continuous => "continuous",
            Self::Dependent => "dependent",
            Self::Temporary => "temporary",
            Self::Range => "range",
        }
    }
}

/// Whether a job that is still running gets restarted at its next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RestartWhenRunning {
    Yes,
    #[default]
    No,
}

impl RestartWhenRunning {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "YES" => Some(Self::Yes),
            "NO" => Some(Self::No),
            _ => None,
        }
    }
}

/// Weekday display metadata for the positional `Days` flags of a daily
/// schedule. The codec itself never interprets positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; WEEK_DAYS] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Self::Monday => "mon",
            Self::Tuesday => "tue",
            Self::Wednesday => "wed",
            Self::Thursday => "thu",
            Self::Friday => "fri",
            Self::Saturday => "sat",
            Self::Sunday => "sun",
        }
    }

    /// Position of this day in a `Days` flag array.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Month display metadata for the positional `Months` flags of a monthly
/// schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthName {
    pub const ALL: [MonthName; YEAR_MONTHS] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::January => "jan",
            Self::February => "feb",
            Self::March => "mar",
            Self::April => "apr",
            Self::May => "may",
            Self::June => "jun",
            Self::July => "jul",
            Self::August => "aug",
            Self::September => "sep",
            Self::October => "oct",
            Self::November => "nov",
            Self::December => "dec",
        }
    }

    pub fn long(self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
            Self::July => "july",
            Self::August => "august",
            Self::September => "september",
            Self::October => "october",
            Self::November => "november",
            Self::December => "december",
        }
    }

    /// Calendar number, January = 1.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
