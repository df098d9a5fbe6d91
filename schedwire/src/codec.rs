//! Wire array <-> `ScheduleConfiguration`.

use crate::base::{decode_base, encode_base};
use crate::catalog::{self, ScheduleKind};
use crate::config::{BaseFields, Defaults, ScheduleConfiguration, ScheduleVariant};
use crate::error::CodecError;
use crate::variant;
use crate::wire::scalar;

/// Decode a wire array using the stock [`Defaults`].
pub fn decode<S: AsRef<str>>(tokens: &[S]) -> Result<ScheduleConfiguration, CodecError> {
    decode_with(tokens, &Defaults::default())
}

/// Decode a wire array. Token order does not matter.
///
/// Either the whole array decodes or an error is returned; there is no
/// partial result. The overnight flag is re-derived from the decoded window,
/// so a stale `Overnight` token does not survive.
pub fn decode_with<S: AsRef<str>>(
    tokens: &[S],
    defaults: &Defaults,
) -> Result<ScheduleConfiguration, CodecError> {
    let decoded = decode_base(tokens, defaults)?;
    let kind = decoded
        .schedule_type
        .and_then(ScheduleKind::from_wire_id)
        .ok_or_else(|| CodecError::unknown_variant(decoded.schedule_type))?;
    let variant = variant::decode(kind, &decoded.rest, &decoded.base, defaults)?;
    let mut config = ScheduleConfiguration::from_parts(decoded.base, variant);
    config.normalize();
    Ok(config)
}

/// Encode as a wire array: discriminant, variant tokens, then common tokens.
pub fn encode(config: &ScheduleConfiguration) -> Vec<String> {
    // The variant encoder may move the window (range date-times), so it works
    // on a copy and the configuration itself is left untouched.
    let mut base = config.base.clone();
    let mut out = vec![scalar(catalog::SCHEDULE_TYPE, config.kind().wire_id())];
    variant::encode(&config.variant, &mut base, &mut out);
    out.extend(encode_base(&base));
    out
}

/// A daily schedule from 07:55:00 to 23:55:00 on every day of the week.
pub fn create_default(defaults: &Defaults) -> ScheduleConfiguration {
    ScheduleConfiguration::from_parts(
        BaseFields::new(defaults),
        ScheduleVariant::default_for(ScheduleKind::Daily, defaults),
    )
}
