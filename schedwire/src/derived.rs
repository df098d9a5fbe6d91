//! State transitions that keep `overnight` in step with the time window.
//!
//! Every mutation of the start time, stop time or stop-time-disabled flag goes
//! through one of these setters, so the flag is never stale. On range schedules
//! the setters also keep the time of day of each bound equal to the base
//! window, since the wire carries only the dates of the bounds.

use jiff::civil::DateTime;

use crate::catalog::ScheduleKind;
use crate::config::{Defaults, ScheduleConfiguration, ScheduleVariant};
use crate::time::TimeOfDay;

impl ScheduleConfiguration {
    /// Moves the time of day of a range start along with the window.
    pub fn set_start_time(&mut self, start: TimeOfDay) {
        self.base.start_time = start;
        if let ScheduleVariant::Range(range) = &mut self.variant {
            range.start_date_time = range.start_date_time.map(|dt| at_time(dt, start));
        }
        self.refresh_overnight();
    }

    /// Moves the time of day of a range stop along with the window.
    pub fn set_stop_time(&mut self, stop: TimeOfDay) {
        self.base.stop_time = Some(stop);
        if let ScheduleVariant::Range(range) = &mut self.variant {
            range.stop_date_time = range.stop_date_time.map(|dt| at_time(dt, stop));
        }
        self.refresh_overnight();
    }

    /// Drop the stop time entirely, as legacy schedules do. This also
    /// disables it and clears a range stop.
    pub fn clear_stop_time(&mut self) {
        self.base.stop_time = None;
        self.base.stop_time_disabled = true;
        if let ScheduleVariant::Range(range) = &mut self.variant {
            range.stop_date_time = None;
        }
        self.refresh_overnight();
    }

    /// A missing stop time is always disabled; `false` is ignored then.
    pub fn set_stop_time_disabled(&mut self, disabled: bool) {
        self.base.stop_time_disabled = disabled || self.base.stop_time.is_none();
        self.refresh_overnight();
    }

    /// Declare whether the window crosses midnight.
    ///
    /// When the requested value disagrees with the current endpoints, start
    /// and stop are swapped to match instead of rejecting the request. Has no
    /// effect where overnight cannot apply (range schedules, disabled or
    /// missing stop time).
    pub fn set_overnight(&mut self, overnight: bool) {
        let Some(stop) = self.overnight_stop() else {
            self.base.overnight = false;
            return;
        };
        let start = self.base.start_time;
        if overnight != (stop < start) {
            self.base.start_time = stop;
            self.base.stop_time = Some(start);
        }
        self.base.overnight = overnight;
    }

    /// Replace the variant payload with `kind`'s defaults. Fields of the
    /// previous kind are discarded, not merged.
    pub fn switch_kind(&mut self, kind: ScheduleKind, defaults: &Defaults) {
        if self.kind() == kind {
            return;
        }
        self.variant = ScheduleVariant::default_for(kind, defaults);
        self.refresh_overnight();
    }

    /// Set the range start; its time of day becomes the base start time.
    /// Returns `false` (and changes nothing) on non-range schedules.
    pub fn set_start_date_time(&mut self, value: Option<DateTime>) -> bool {
        let ScheduleVariant::Range(range) = &mut self.variant else {
            return false;
        };
        range.start_date_time = value;
        if let Some(dt) = value {
            self.set_start_time(TimeOfDay::from_jiff(dt.time()));
        }
        true
    }

    /// Set the range stop; its time of day becomes the base stop time.
    /// Returns `false` (and changes nothing) on non-range schedules.
    pub fn set_stop_date_time(&mut self, value: Option<DateTime>) -> bool {
        let ScheduleVariant::Range(range) = &mut self.variant else {
            return false;
        };
        range.stop_date_time = value;
        if let Some(dt) = value {
            self.set_stop_time(TimeOfDay::from_jiff(dt.time()));
        }
        true
    }

    /// Re-derive the coupled fields of a configuration assembled outside the
    /// setters: a decoded array or a deserialized value.
    ///
    /// Range bounds win over the base window. Where the window decides the
    /// flag it is recomputed; equal endpoints keep the stored value.
    pub(crate) fn normalize(&mut self) {
        if let ScheduleVariant::Range(range) = &self.variant {
            if let Some(start) = range.start_date_time {
                self.base.start_time = TimeOfDay::from_jiff(start.time());
            }
            if let Some(stop) = range.stop_date_time {
                self.base.stop_time = Some(TimeOfDay::from_jiff(stop.time()));
            }
        }
        if self.base.stop_time.is_none() {
            self.base.stop_time_disabled = true;
        }
        let Some(stop) = self.overnight_stop() else {
            self.base.overnight = false;
            return;
        };
        let start = self.base.start_time;
        if stop != start {
            self.base.overnight = stop < start;
        }
    }

    /// The stop time, if the overnight flag can apply at all.
    fn overnight_stop(&self) -> Option<TimeOfDay> {
        if self.kind() == ScheduleKind::Range || self.base.stop_time_disabled {
            return None;
        }
        self.base.stop_time
    }

    /// Flip only at the flag's own boundary so equal endpoints do not bounce.
    fn refresh_overnight(&mut self) {
        let Some(stop) = self.overnight_stop() else {
            self.base.overnight = false;
            return;
        };
        let start = self.base.start_time;
        if !self.base.overnight && stop <= start {
            self.base.overnight = true;
        } else if self.base.overnight && start <= stop {
            self.base.overnight = false;
        }
    }
}

fn at_time(date_time: DateTime, time: TimeOfDay) -> DateTime {
    date_time.date().to_datetime(time.to_jiff())
}
