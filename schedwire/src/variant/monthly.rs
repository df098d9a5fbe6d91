use super::{ignore_unknown, VariantCodec};
use crate::catalog::{self, ScheduleKind};
use crate::config::{BaseFields, Defaults, MonthlyFields};
use crate::error::CodecError;
use crate::wire::{join_delimited, scalar, WireToken};

impl VariantCodec for MonthlyFields {
    const KIND: ScheduleKind = ScheduleKind::Monthly;

    fn decode(
        tokens: &[WireToken<'_>],
        _base: &BaseFields,
        defaults: &Defaults,
    ) -> Result<Self, CodecError> {
        let mut fields = MonthlyFields::new(defaults);
        for token in tokens {
            match token.label() {
                catalog::BUSINESS_CALENDAR => fields.business_calendar = token.text_value()?,
                catalog::FIRST_BUSINESS_DAY => fields.first_business_day = token.bool_value()?,
                catalog::LAST_BUSINESS_DAY => fields.last_business_day = token.bool_value()?,
                catalog::MONTHS => fields.months = token.flags()?,
                catalog::SPECIFIC_DAYS => fields.specific_days = token.bool_value()?,
                catalog::DAYS => fields.days = token.flags()?,
                _ => ignore_unknown(Self::KIND, token),
            }
        }
        Ok(fields)
    }

    fn encode(&self, _base: &mut BaseFields, out: &mut Vec<String>) {
        out.push(scalar(catalog::BUSINESS_CALENDAR, &self.business_calendar));
        out.push(scalar(catalog::FIRST_BUSINESS_DAY, self.first_business_day));
        out.push(scalar(catalog::LAST_BUSINESS_DAY, self.last_business_day));
        out.push(join_delimited(catalog::MONTHS, self.months));
        out.push(scalar(catalog::SPECIFIC_DAYS, self.specific_days));
        out.push(join_delimited(catalog::DAYS, self.days));
    }
}
