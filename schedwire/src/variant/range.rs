use jiff::civil::{Date, DateTime};

use super::{ignore_unknown, VariantCodec};
use crate::catalog::{self, ScheduleKind};
use crate::config::{BaseFields, Defaults, RangeFields};
use crate::error::CodecError;
use crate::time::TimeOfDay;
use crate::wire::{scalar, WireToken};

impl VariantCodec for RangeFields {
    const KIND: ScheduleKind = ScheduleKind::Range;

    /// Date tokens only carry the calendar date; the time of day comes from
    /// the already decoded base window. The `Use*DateTime` flags decide
    /// whether the combined value survives.
    fn decode(
        tokens: &[WireToken<'_>],
        base: &BaseFields,
        _defaults: &Defaults,
    ) -> Result<Self, CodecError> {
        let mut start_date: Option<Date> = None;
        let mut stop_date: Option<Date> = None;
        let mut use_start = false;
        let mut use_stop = false;

        for token in tokens {
            match token.label() {
                catalog::START_DATE => start_date = Some(token.date_value()?),
                catalog::STOP_DATE => stop_date = Some(token.date_value()?),
                catalog::USE_START_DATE_TIME => use_start = token.bool_value()?,
                catalog::USE_STOP_DATE_TIME => use_stop = token.bool_value()?,
                _ => ignore_unknown(Self::KIND, token),
            }
        }

        let stop_time = base.stop_time.unwrap_or(catalog::DEFAULT_STOP_TIME);
        Ok(RangeFields {
            start_date_time: start_date
                .filter(|_| use_start)
                .map(|date| date.to_datetime(base.start_time.to_jiff())),
            stop_date_time: stop_date
                .filter(|_| use_stop)
                .map(|date| date.to_datetime(stop_time.to_jiff())),
        })
    }

    /// Splits each date-time back into a date token and the base time of day.
    fn encode(&self, base: &mut BaseFields, out: &mut Vec<String>) {
        if let Some(start) = self.start_date_time {
            out.push(scalar(catalog::START_DATE, start.date()));
            base.start_time = time_of(start);
        }
        if let Some(stop) = self.stop_date_time {
            out.push(scalar(catalog::STOP_DATE, stop.date()));
            base.stop_time = Some(time_of(stop));
        }
        out.push(scalar(
            catalog::USE_START_DATE_TIME,
            self.start_date_time.is_some(),
        ));
        out.push(scalar(
            catalog::USE_STOP_DATE_TIME,
            self.stop_date_time.is_some(),
        ));
    }
}

fn time_of(date_time: DateTime) -> TimeOfDay {
    TimeOfDay::from_jiff(date_time.time())
}
