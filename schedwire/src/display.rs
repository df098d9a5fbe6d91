use std::fmt;

use crate::catalog::{MonthName, Weekday};
use crate::config::*;
use crate::text::Serial;

/// One-line human summary, for logs and the CLI. Not a wire format.
impl fmt::Display for ScheduleConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variant)?;

        let base = &self.base;
        match base.stop_time {
            Some(stop) if !base.stop_time_disabled => {
                write!(f, " from {} to {stop}", base.start_time)?;
                if base.overnight {
                    write!(f, " (overnight)")?;
                }
            }
            _ => write!(f, " at {}", base.start_time)?,
        }

        if base.repeat_enabled && base.repeat_interval > 0 {
            write!(f, " repeating every {}s", base.repeat_interval)?;
        }

        write!(f, " in {}", base.time_zone)?;

        if base.scheduling_disabled {
            write!(f, " [disabled]")?;
        }

        Ok(())
    }
}

impl fmt::Display for ScheduleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleVariant::Daily(daily) => {
                write!(f, "daily")?;
                if daily.business_days {
                    write!(f, " on business days ({})", daily.business_calendar)?;
                } else {
                    write!(f, " on ")?;
                    write_flag_list(f, &daily.days, |i| Weekday::from_index(i).map(Weekday::short))?;
                }
            }
            ScheduleVariant::Monthly(monthly) => {
                write!(f, "monthly in ")?;
                write_flag_list(f, &monthly.months, |i| {
                    MonthName::from_index(i).map(MonthName::as_str)
                })?;
                let mut on = Vec::new();
                if monthly.first_business_day {
                    on.push("first business day".to_string());
                }
                if monthly.last_business_day {
                    on.push("last business day".to_string());
                }
                if monthly.specific_days {
                    on.extend(
                        monthly
                            .days
                            .iter()
                            .enumerate()
                            .filter(|(_, set)| **set)
                            .map(|(i, _)| ordinal(i as u8 + 1)),
                    );
                }
                if !on.is_empty() {
                    write!(f, " on the {}", on.join(", "))?;
                }
            }
            ScheduleVariant::Continuous(continuous) => {
                write!(f, "continuous")?;
                if continuous.daily_restart {
                    write!(f, " restarting daily")?;
                }
            }
            ScheduleVariant::Dependent(dep) => {
                write!(f, "after ")?;
                write_serials(f, &dep.dependent_serials)?;
                if dep.run_on_any {
                    write!(f, " (any)")?;
                }
                if dep.run_on_failure {
                    write!(f, " on failure")?;
                }
                write!(f, " by {}-{}", dep.deadline_start, dep.deadline_end)?;
            }
            ScheduleVariant::Temporary(temp) => {
                write!(f, "temporary")?;
                if !temp.queue_name.is_empty() {
                    write!(f, " on queue {}", temp.queue_name)?;
                }
                if !temp.dependent_serials.is_empty() {
                    write!(f, " after ")?;
                    write_serials(f, &temp.dependent_serials)?;
                }
                write!(f, " expiring after {}ms", temp.expiration_time_millis)?;
            }
            ScheduleVariant::Range(range) => {
                write!(f, "range")?;
                if let Some(start) = range.start_date_time {
                    write!(f, " starting {}", start.date())?;
                }
                if let Some(stop) = range.stop_date_time {
                    write!(f, " until {}", stop.date())?;
                }
            }
        }
        Ok(())
    }
}

fn write_flag_list(
    f: &mut fmt::Formatter<'_>,
    flags: &[bool],
    label: impl Fn(usize) -> Option<&'static str>,
) -> fmt::Result {
    let mut any = false;
    for (i, _) in flags.iter().enumerate().filter(|(_, set)| **set) {
        if any {
            write!(f, ", ")?;
        }
        match label(i) {
            Some(name) => write!(f, "{name}")?,
            None => write!(f, "#{}", i + 1)?,
        }
        any = true;
    }
    if !any {
        write!(f, "no days")?;
    }
    Ok(())
}

fn write_serials(f: &mut fmt::Formatter<'_>, serials: &[Serial]) -> fmt::Result {
    if serials.is_empty() {
        return write!(f, "nothing");
    }
    for (i, serial) in serials.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{serial}")?;
    }
    Ok(())
}

fn ordinal(n: u8) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{n}{suffix}")
}
