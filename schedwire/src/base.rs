//! Fields shared by every schedule kind.

use crate::catalog::{self, RestartWhenRunning};
use crate::config::{BaseFields, Defaults, RestartLimit};
use crate::error::CodecError;
use crate::wire::{scalar, WireToken};

/// Result of the base scan.
#[derive(Debug, Clone)]
pub struct BaseDecode<'a> {
    pub base: BaseFields,
    /// Raw discriminant value, if the array carried one.
    pub schedule_type: Option<&'a str>,
    /// Tokens the base scan did not recognise, in input order.
    pub rest: Vec<WireToken<'a>>,
}

/// Consume every common token and hand the rest on.
///
/// Recognised labels are strict about arity; unrecognised ones pass through
/// untouched for the variant decoder.
pub fn decode_base<'a, S: AsRef<str>>(
    tokens: &'a [S],
    defaults: &Defaults,
) -> Result<BaseDecode<'a>, CodecError> {
    let mut base = BaseFields::new(defaults);
    let mut schedule_type = None;
    let mut saw_stop_time = false;
    let mut rest = Vec::new();

    for raw in tokens {
        let token = WireToken::split(raw.as_ref());
        match token.label() {
            catalog::SCHEDULE_TYPE => schedule_type = Some(token.value()?),
            catalog::START_TIME => base.start_time = token.time_value()?,
            catalog::STOP_TIME => {
                base.stop_time = Some(token.time_value()?);
                saw_stop_time = true;
            }
            catalog::TIME_ZONE => base.time_zone = token.text_value()?,
            catalog::SCHEDULING_DISABLED => base.scheduling_disabled = token.bool_value()?,
            catalog::OVERNIGHT => base.overnight = token.bool_value()?,
            catalog::REPEAT_ENABLED => base.repeat_enabled = token.bool_value()?,
            catalog::REPEAT_INTERVAL => base.repeat_interval = token.u32_value()?,
            catalog::SKIP_IF_UNSUCCESSFUL => base.skip_if_unsuccessful = token.bool_value()?,
            catalog::STOP_TIME_DISABLED => base.stop_time_disabled = token.bool_value()?,
            catalog::RESTART_ERROR_COUNT => base.restart_error_count = restart_limit(&token)?,
            catalog::RESTART_ERROR_DELAY => base.restart_delay_minutes = token.u32_value()?,
            catalog::RESTART_WHEN_RUNNING => {
                let value = token.value()?;
                base.restart_when_running = RestartWhenRunning::from_wire(value)
                    .ok_or_else(|| token.format_error(value, "YES or NO"))?;
            }
            _ => rest.push(token),
        }
    }

    // Token order is free, so the legacy rule can only run after the scan.
    if !saw_stop_time {
        base.stop_time = None;
        base.stop_time_disabled = true;
    }

    Ok(BaseDecode {
        base,
        schedule_type,
        rest,
    })
}

fn restart_limit(token: &WireToken<'_>) -> Result<RestartLimit, CodecError> {
    const EXPECTED: &str = "restart count (0-11)";
    let value = token.value()?;
    value
        .parse::<u8>()
        .ok()
        .and_then(RestartLimit::from_wire)
        .ok_or_else(|| token.format_error(value, EXPECTED))
}

/// Emit the common tokens in a fixed order so encoded arrays diff cleanly.
pub fn encode_base(base: &BaseFields) -> Vec<String> {
    let mut out = Vec::with_capacity(12);
    out.push(scalar(catalog::START_TIME, base.start_time));
    if let Some(stop) = base.stop_time {
        out.push(scalar(catalog::STOP_TIME, stop));
    }
    out.push(scalar(catalog::TIME_ZONE, &base.time_zone));
    out.push(scalar(catalog::SCHEDULING_DISABLED, base.scheduling_disabled));
    out.push(scalar(catalog::OVERNIGHT, base.overnight));
    out.push(scalar(catalog::REPEAT_ENABLED, base.repeat_enabled));
    out.push(scalar(catalog::SKIP_IF_UNSUCCESSFUL, base.skip_if_unsuccessful));
    out.push(scalar(catalog::STOP_TIME_DISABLED, base.stop_time_disabled));
    out.push(scalar(
        catalog::RESTART_ERROR_COUNT,
        base.restart_error_count.to_wire(),
    ));
    out.push(scalar(catalog::RESTART_ERROR_DELAY, base.restart_delay_minutes));
    out.push(scalar(
        catalog::RESTART_WHEN_RUNNING,
        base.restart_when_running.as_wire(),
    ));
    if base.repeat_interval > 0 {
        out.push(scalar(catalog::REPEAT_INTERVAL, base.repeat_interval));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeOfDay;

    fn hms(h: u8, m: u8, s: u8) -> TimeOfDay {
        TimeOfDay::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn test_decode_base_fields() {
        let tokens = [
            "StartTime=08:00:00",
            "StopTime=17:30:00",
            "TimeZone=America/New_York",
            "SchedulingDisabled=true",
            "RepeatEnabled=true",
            "RepeatInterval=900",
            "RestartErrorCount=3",
            "RestartErrorDelay=5",
            "RestartWhenRunning=YES",
            "Days=true=true=true=true=true=false=false",
        ];
        let decoded = decode_base(&tokens, &Defaults::default()).unwrap();
        let base = decoded.base;
        assert_eq!(base.start_time, hms(8, 0, 0));
        assert_eq!(base.stop_time, Some(hms(17, 30, 0)));
        assert_eq!(base.time_zone, "America/New_York");
        assert!(base.scheduling_disabled);
        assert!(base.repeat_enabled);
        assert_eq!(base.repeat_interval, 900);
        assert_eq!(base.restart_error_count, RestartLimit::count(3).unwrap());
        assert_eq!(base.restart_delay_minutes, 5);
        assert_eq!(base.restart_when_running, RestartWhenRunning::Yes);
        assert!(!base.stop_time_disabled);
        assert_eq!(decoded.schedule_type, None);
        assert_eq!(decoded.rest.len(), 1);
        assert_eq!(decoded.rest[0].label(), "Days");
    }

    #[test]
    fn test_missing_stop_time_disables_stop() {
        let decoded = decode_base(
            &["StartTime=08:00:00", "StopTimeDisabled=false"],
            &Defaults::default(),
        )
        .unwrap();
        assert_eq!(decoded.base.stop_time, None);
        assert!(decoded.base.stop_time_disabled);
    }

    #[test]
    fn test_stop_time_after_disabled_flag_is_order_free() {
        let decoded = decode_base(
            &["StopTimeDisabled=false", "StopTime=09:00:00"],
            &Defaults::default(),
        )
        .unwrap();
        assert!(!decoded.base.stop_time_disabled);
    }

    #[test]
    fn test_arity_and_format_errors() {
        let err = decode_base(&["StartTime=08:00:00=extra"], &Defaults::default()).unwrap_err();
        assert_eq!(err, CodecError::arity("StartTime=08:00:00=extra", 2, 3));

        let err = decode_base(&["RepeatInterval=ten"], &Defaults::default()).unwrap_err();
        assert!(matches!(err, CodecError::Format { .. }));

        let err = decode_base(&["RestartErrorCount=12"], &Defaults::default()).unwrap_err();
        assert!(matches!(err, CodecError::Format { .. }));

        let err = decode_base(&["RestartWhenRunning=maybe"], &Defaults::default()).unwrap_err();
        assert!(matches!(err, CodecError::Format { .. }));
    }

    #[test]
    fn test_encode_order_and_optional_tokens() {
        let mut base = BaseFields::new(&Defaults::default());
        assert_eq!(
            encode_base(&base),
            vec![
                "StartTime=07:55:00",
                "StopTime=23:55:00",
                "TimeZone=UTC",
                "SchedulingDisabled=false",
                "Overnight=false",
                "RepeatEnabled=false",
                "SkipIfUnsuccessful=false",
                "StopTimeDisabled=false",
                "RestartErrorCount=0",
                "RestartErrorDelay=0",
                "RestartWhenRunning=NO",
            ]
        );

        base.stop_time = None;
        base.repeat_interval = 60;
        base.restart_error_count = RestartLimit::UNLIMITED;
        let encoded = encode_base(&base);
        assert!(!encoded.iter().any(|t| t.starts_with("StopTime=")));
        assert!(encoded.contains(&"RestartErrorCount=11".to_string()));
        assert_eq!(encoded.last().map(String::as_str), Some("RepeatInterval=60"));
    }
}
