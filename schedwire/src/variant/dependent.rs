use super::{ignore_unknown, VariantCodec};
use crate::catalog::{self, ScheduleKind};
use crate::config::{BaseFields, Defaults, DependentFields};
use crate::error::CodecError;
use crate::wire::{join_serials, scalar, WireToken};

impl VariantCodec for DependentFields {
    const KIND: ScheduleKind = ScheduleKind::Dependent;

    fn decode(
        tokens: &[WireToken<'_>],
        _base: &BaseFields,
        _defaults: &Defaults,
    ) -> Result<Self, CodecError> {
        let mut fields = DependentFields::default();
        for token in tokens {
            match token.label() {
                catalog::RUN_ON_FAILURE => fields.run_on_failure = token.bool_value()?,
                catalog::RESTART_ON_CONDITION => fields.restart_on_condition = token.bool_value()?,
                catalog::DEPENDENT_SERIALS => fields.dependent_serials = token.serials()?,
                catalog::USE_MIN_START_TIME => fields.use_min_start_time = token.bool_value()?,
                catalog::RUN_ON_ANY => fields.run_on_any = token.bool_value()?,
                catalog::DEADLINE_START => fields.deadline_start = token.time_value()?,
                catalog::DEADLINE_END => fields.deadline_end = token.time_value()?,
                catalog::RUN_EVERY_TIME => fields.run_every_time = token.bool_value()?,
                _ => ignore_unknown(Self::KIND, token),
            }
        }
        Ok(fields)
    }

    fn encode(&self, _base: &mut BaseFields, out: &mut Vec<String>) {
        out.push(scalar(catalog::RUN_ON_FAILURE, self.run_on_failure));
        out.push(scalar(catalog::RESTART_ON_CONDITION, self.restart_on_condition));
        // Always present, even when there is nothing to depend on.
        out.push(scalar(
            catalog::DEPENDENT_SERIALS,
            join_serials(&self.dependent_serials),
        ));
        out.push(scalar(catalog::USE_MIN_START_TIME, self.use_min_start_time));
        out.push(scalar(catalog::RUN_ON_ANY, self.run_on_any));
        out.push(scalar(catalog::DEADLINE_START, self.deadline_start));
        out.push(scalar(catalog::DEADLINE_END, self.deadline_end));
        out.push(scalar(catalog::RUN_EVERY_TIME, self.run_every_time));
    }
}
