use super::{ignore_unknown, VariantCodec};
use crate::catalog::{self, ScheduleKind};
use crate::config::{BaseFields, Defaults, TemporaryFields};
use crate::error::CodecError;
use crate::wire::{join_serials, scalar, WireToken};

impl VariantCodec for TemporaryFields {
    const KIND: ScheduleKind = ScheduleKind::Temporary;

    fn decode(
        tokens: &[WireToken<'_>],
        _base: &BaseFields,
        _defaults: &Defaults,
    ) -> Result<Self, CodecError> {
        let mut fields = TemporaryFields::default();
        for token in tokens {
            match token.label() {
                catalog::QUEUE_NAME => fields.queue_name = token.text_value()?,
                catalog::EXPIRATION_TIME => fields.expiration_time_millis = token.u64_value()?,
                catalog::DEPENDENT_SERIALS => fields.dependent_serials = token.serials()?,
                _ => ignore_unknown(Self::KIND, token),
            }
        }
        Ok(fields)
    }

    fn encode(&self, _base: &mut BaseFields, out: &mut Vec<String>) {
        out.push(scalar(catalog::QUEUE_NAME, &self.queue_name));
        out.push(scalar(catalog::EXPIRATION_TIME, self.expiration_time_millis));
        if !self.dependent_serials.is_empty() {
            out.push(scalar(
                catalog::DEPENDENT_SERIALS,
                join_serials(&self.dependent_serials),
            ));
        }
    }
}
