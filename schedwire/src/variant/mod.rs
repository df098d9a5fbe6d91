//! Per-kind codecs for the tokens the base scan leaves behind.

mod continuous;
mod daily;
mod dependent;
mod monthly;
mod range;
mod temporary;

use crate::catalog::ScheduleKind;
use crate::config::{
    BaseFields, ContinuousFields, DailyFields, Defaults, DependentFields, MonthlyFields,
    RangeFields, ScheduleVariant, TemporaryFields,
};
use crate::error::CodecError;
use crate::wire::WireToken;

/// Codec for one schedule kind's own fields.
///
/// Decoders are permissive: a label they do not know is dropped with a debug
/// log. A label they do know must have the right arity.
pub(crate) trait VariantCodec: Sized {
    const KIND: ScheduleKind;

    /// `base` is fully decoded by the time this runs; `defaults` fill fields
    /// the array leaves out.
    fn decode(
        tokens: &[WireToken<'_>],
        base: &BaseFields,
        defaults: &Defaults,
    ) -> Result<Self, CodecError>;

    /// Append this kind's tokens to `out`. May adjust `base` before the base
    /// serializer sees it.
    fn encode(&self, base: &mut BaseFields, out: &mut Vec<String>);
}

pub(crate) fn decode(
    kind: ScheduleKind,
    tokens: &[WireToken<'_>],
    base: &BaseFields,
    defaults: &Defaults,
) -> Result<ScheduleVariant, CodecError> {
    tracing::trace!(kind = kind.as_str(), tokens = tokens.len(), "decoding variant");
    Ok(match kind {
        ScheduleKind::Daily => ScheduleVariant::Daily(DailyFields::decode(tokens, base, defaults)?),
        ScheduleKind::Monthly => {
            ScheduleVariant::Monthly(MonthlyFields::decode(tokens, base, defaults)?)
        }
        ScheduleKind::Continuous => {
            ScheduleVariant::Continuous(ContinuousFields::decode(tokens, base, defaults)?)
        }
        ScheduleKind::Dependent => {
            ScheduleVariant::Dependent(DependentFields::decode(tokens, base, defaults)?)
        }
        ScheduleKind::Temporary => {
            ScheduleVariant::Temporary(TemporaryFields::decode(tokens, base, defaults)?)
        }
        ScheduleKind::Range => ScheduleVariant::Range(RangeFields::decode(tokens, base, defaults)?),
    })
}

pub(crate) fn encode(variant: &ScheduleVariant, base: &mut BaseFields, out: &mut Vec<String>) {
    match variant {
        ScheduleVariant::Daily(fields) => fields.encode(base, out),
        ScheduleVariant::Monthly(fields) => fields.encode(base, out),
        ScheduleVariant::Continuous(fields) => fields.encode(base, out),
        ScheduleVariant::Dependent(fields) => fields.encode(base, out),
        ScheduleVariant::Temporary(fields) => fields.encode(base, out),
        ScheduleVariant::Range(fields) => fields.encode(base, out),
    }
}

fn ignore_unknown(kind: ScheduleKind, token: &WireToken<'_>) {
    tracing::debug!(
        kind = kind.as_str(),
        token = token.raw(),
        "ignoring unrecognized schedule token"
    );
}
