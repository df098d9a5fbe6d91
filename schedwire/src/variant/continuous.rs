use super::{ignore_unknown, VariantCodec};
use crate::catalog::{self, ScheduleKind};
use crate::config::{BaseFields, ContinuousFields, Defaults};
use crate::error::CodecError;
use crate::wire::{scalar, WireToken};

impl VariantCodec for ContinuousFields {
    const KIND: ScheduleKind = ScheduleKind::Continuous;

    fn decode(
        tokens: &[WireToken<'_>],
        _base: &BaseFields,
        _defaults: &Defaults,
    ) -> Result<Self, CodecError> {
        let mut fields = ContinuousFields::default();
        for token in tokens {
            match token.label() {
                catalog::DAILY_RESTART => fields.daily_restart = token.bool_value()?,
                _ => ignore_unknown(Self::KIND, token),
            }
        }
        Ok(fields)
    }

    fn encode(&self, _base: &mut BaseFields, out: &mut Vec<String>) {
        out.push(scalar(catalog::DAILY_RESTART, self.daily_restart));
    }
}
